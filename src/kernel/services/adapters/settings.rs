//! 设置文件读写（setting.json）

use std::path::{Path, PathBuf};

use crate::kernel::services::ports::Settings;

use super::paths::{ensure_dir, get_settings_path};

#[derive(Debug)]
pub enum SettingsError {
    NoSettingsDir,
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::NoSettingsDir => write!(f, "cannot determine settings directory"),
            SettingsError::Io(e) => write!(f, "settings io error: {}", e),
            SettingsError::Parse(e) => write!(f, "malformed settings: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::NoSettingsDir => None,
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Writes default settings at `path` unless a file is already there.
pub fn ensure_settings_file_at(path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&Settings::default())?;
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn ensure_settings_file() -> Result<PathBuf, SettingsError> {
    let path = get_settings_path().ok_or(SettingsError::NoSettingsDir)?;
    ensure_settings_file_at(&path)?;
    Ok(path)
}

/// A missing file yields defaults; a malformed one is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&data)?)
}

pub fn load_settings() -> Result<Settings, SettingsError> {
    let path = get_settings_path().ok_or(SettingsError::NoSettingsDir)?;
    load_settings_from(&path)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
