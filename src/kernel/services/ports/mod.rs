//! Service ports: traits + data contracts.

pub mod config;
pub mod host_service;
pub mod runtime;
pub mod settings;
pub mod surface;

pub use config::EditorConfig;
pub use host_service::{ClipboardPort, DownloadPort, HostFuture, HostServiceError};
pub use runtime::{AsyncExecutor, BoxFuture};
pub use settings::Settings;
pub use surface::EditableSurface;
