use std::io;

use crate::kernel::services::ports::{AsyncExecutor, BoxFuture};

/// Tokio-backed executor for host-service requests.
pub struct TokioExecutor {
    runtime: tokio::runtime::Runtime,
}

impl TokioExecutor {
    pub fn new() -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("bidipad-host")
            .build()
            .inspect_err(|e| tracing::error!(error = %e, "Failed to create tokio runtime"))?;
        Ok(Self { runtime })
    }
}

impl AsyncExecutor for TokioExecutor {
    fn spawn(&self, task: BoxFuture) {
        self.runtime.spawn(task);
    }
}
