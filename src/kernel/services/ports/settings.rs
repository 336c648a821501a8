use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::config::{EditorConfig, DEFAULT_NOTIFICATION_MS};
use crate::kernel::effect::DEFAULT_EXPORT_FILE_NAME;

pub const DEFAULT_LOG_FILTER: &str = "bidipad=info";

/// On-disk settings (`setting.json`). Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub export_file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
    pub notification_ms: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            download_dir: None,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Blank or path-like file names fall back to the default.
    pub fn editor_config(&self) -> EditorConfig {
        let name = self.export_file_name.trim();
        let export_file_name = if name.is_empty() || name.contains(['/', '\\']) {
            DEFAULT_EXPORT_FILE_NAME.to_string()
        } else {
            name.to_string()
        };
        EditorConfig {
            export_file_name,
            notification_ms: self.notification_ms,
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
