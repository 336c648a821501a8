//! Channel carrying host-service completions back to the controller thread.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SendError, Sender, TryRecvError};
use std::time::Duration;

use crate::kernel::effect::{HostOp, RequestId};
use crate::kernel::services::ports::HostServiceError;
use crate::kernel::Action;

#[derive(Debug)]
pub enum KernelMessage {
    Action(Action),
}

#[derive(Clone)]
pub struct KernelBusSender {
    tx: Sender<KernelMessage>,
}

pub struct KernelBusReceiver {
    rx: Receiver<KernelMessage>,
}

pub fn kernel_bus() -> (KernelBusSender, KernelBusReceiver) {
    let (tx, rx) = mpsc::channel();
    (KernelBusSender { tx }, KernelBusReceiver { rx })
}

impl KernelBusSender {
    pub fn send_action(&self, action: Action) -> Result<(), SendError<KernelMessage>> {
        self.tx.send(KernelMessage::Action(action))
    }

    /// Reports the outcome of one host request. A dropped receiver means the
    /// session is over and the outcome is discarded.
    pub fn finished(&self, request: RequestId, op: HostOp, result: Result<(), HostServiceError>) {
        let sent = self.send_action(Action::HostServiceFinished {
            request,
            op,
            result,
        });
        if sent.is_err() {
            tracing::debug!(%request, "session closed before host request finished");
        }
    }
}

impl KernelBusReceiver {
    pub fn try_recv(&mut self) -> Result<KernelMessage, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<KernelMessage, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
