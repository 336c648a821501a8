use std::future::Future;
use std::pin::Pin;

use crate::core::Service;
use crate::kernel::effect::ExportPayload;

pub type HostFuture = Pin<Box<dyn Future<Output = Result<(), HostServiceError>> + Send + 'static>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostServiceError {
    NotAvailable,
    TooLarge { bytes: usize, limit: usize },
    Rejected(String),
    Io(String),
    /// The request's task ended without producing a result.
    Aborted,
}

impl std::fmt::Display for HostServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostServiceError::NotAvailable => write!(f, "host service not available"),
            HostServiceError::TooLarge { bytes, limit } => write!(
                f,
                "text too large ({} KB, limit {} KB)",
                bytes / 1024,
                limit / 1024
            ),
            HostServiceError::Rejected(msg) => write!(f, "request rejected: {}", msg),
            HostServiceError::Io(msg) => write!(f, "io error: {}", msg),
            HostServiceError::Aborted => write!(f, "host service aborted"),
        }
    }
}

impl std::error::Error for HostServiceError {}

impl From<std::io::Error> for HostServiceError {
    fn from(err: std::io::Error) -> Self {
        HostServiceError::Io(err.to_string())
    }
}

pub trait ClipboardPort: Service {
    fn write_text(&self, text: String) -> HostFuture;
}

pub trait DownloadPort: Service {
    /// Offers `payload.content` to the user under `payload.file_name`.
    fn offer_download(&self, payload: ExportPayload) -> HostFuture;
}
