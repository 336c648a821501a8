use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use crate::kernel::effect::{HostOp, RequestId};
use crate::kernel::{Action, Effect};

use super::bus::{kernel_bus, KernelBusReceiver, KernelBusSender, KernelMessage};
use super::ports::{AsyncExecutor, ClipboardPort, DownloadPort, HostFuture, HostServiceError};

/// Executes controller effects against the host services and feeds the
/// completions back as [`Action::HostServiceFinished`].
///
/// Requests are never queued or merged: every effect is spawned as soon as
/// it arrives.
pub struct KernelServiceHost {
    clipboard: Arc<dyn ClipboardPort>,
    download: Arc<dyn DownloadPort>,
    bus: KernelBusSender,
    rx: KernelBusReceiver,
    executor: Arc<dyn AsyncExecutor>,
    in_flight: usize,
}

impl KernelServiceHost {
    pub fn new(
        executor: Arc<dyn AsyncExecutor>,
        clipboard: Arc<dyn ClipboardPort>,
        download: Arc<dyn DownloadPort>,
    ) -> Self {
        let (bus, rx) = kernel_bus();
        Self {
            clipboard,
            download,
            bus,
            rx,
            executor,
            in_flight: 0,
        }
    }

    pub fn run_effect(&mut self, effect: Effect) {
        let request = effect.request();
        let op = effect.op();
        let task: HostFuture = match effect {
            Effect::WriteClipboard { text, .. } => {
                tracing::debug!(%request, service = self.clipboard.name(), "clipboard write");
                self.clipboard.write_text(text)
            }
            Effect::OfferDownload { payload, .. } => {
                tracing::debug!(
                    %request,
                    service = self.download.name(),
                    file = %payload.file_name,
                    "download offer"
                );
                self.download.offer_download(payload)
            }
        };

        self.in_flight += 1;
        let mut report = CompletionGuard {
            bus: self.bus.clone(),
            request,
            op: Some(op),
        };
        self.executor.spawn(Box::pin(async move {
            let result = task.await;
            if let Err(err) = &result {
                tracing::warn!(%request, error = %err, "host service failed");
            }
            report.complete(result);
        }));
    }

    pub fn run_effects(&mut self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.run_effect(effect);
        }
    }

    /// Requests spawned whose completion has not been received yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn try_recv(&mut self) -> Result<KernelMessage, TryRecvError> {
        let msg = self.rx.try_recv()?;
        self.note_received(&msg);
        Ok(msg)
    }

    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<KernelMessage, RecvTimeoutError> {
        let msg = self.rx.recv_timeout(timeout)?;
        self.note_received(&msg);
        Ok(msg)
    }

    fn note_received(&mut self, msg: &KernelMessage) {
        if let KernelMessage::Action(Action::HostServiceFinished { .. }) = msg {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
    }
}

/// Reports exactly one completion per request. A task dropped before it
/// finishes (panic, runtime shutdown) is reported as aborted.
struct CompletionGuard {
    bus: KernelBusSender,
    request: RequestId,
    op: Option<HostOp>,
}

impl CompletionGuard {
    fn complete(&mut self, result: Result<(), HostServiceError>) {
        if let Some(op) = self.op.take() {
            self.bus.finished(self.request, op, result);
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if self.op.is_some() {
            tracing::warn!(request = %self.request, "host service task aborted");
            self.complete(Err(HostServiceError::Aborted));
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/services/host.rs"]
mod tests;
