//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod download;
pub mod osc52;
pub mod paths;
pub mod runtime;
pub mod settings;

pub use download::DirectoryDownloadService;
pub use osc52::{Osc52Clipboard, Osc52Env};
pub use paths::{ensure_log_dir, get_download_dir, get_log_dir, get_settings_path};
pub use runtime::TokioExecutor;
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, load_settings, load_settings_from,
    SettingsError,
};
