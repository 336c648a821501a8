use std::time::Duration;

use crate::kernel::effect::DEFAULT_EXPORT_FILE_NAME;

pub const DEFAULT_NOTIFICATION_MS: u64 = 5000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    pub export_file_name: String,
    pub notification_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            notification_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

impl EditorConfig {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}
