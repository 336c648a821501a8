//! 下载服务：把导出内容写入下载目录
//!
//! 同名文件存在时按浏览器的方式追加序号：document (1).txt

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::core::Service;
use crate::kernel::effect::{ExportPayload, TEXT_PLAIN};
use crate::kernel::services::ports::{DownloadPort, HostFuture, HostServiceError};

const MAX_DUPLICATES: usize = 1000;

pub struct DirectoryDownloadService {
    dir: PathBuf,
}

impl DirectoryDownloadService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Service for DirectoryDownloadService {
    fn name(&self) -> &'static str {
        "DirectoryDownloadService"
    }
}

impl DownloadPort for DirectoryDownloadService {
    fn offer_download(&self, payload: ExportPayload) -> HostFuture {
        let dir = self.dir.clone();
        Box::pin(async move {
            if payload.mime_type != TEXT_PLAIN {
                return Err(HostServiceError::Rejected(format!(
                    "unsupported mime type {}",
                    payload.mime_type
                )));
            }
            let path = save_unique(&dir, &payload.file_name, payload.content.as_bytes()).await?;
            tracing::info!(path = %path.display(), "export saved");
            Ok(())
        })
    }
}

/// Keeps only the final path component; falls back to `download` when
/// nothing usable is left.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("").trim();
    if base.is_empty() || base == "." || base == ".." {
        return "download".to_string();
    }
    base.to_string()
}

/// `name`, then `stem (1).ext`, `stem (2).ext`, ...
pub fn candidate_name(name: &str, n: usize) -> String {
    if n == 0 {
        return name.to_string();
    }
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{} ({}).{}", stem, n, ext),
        _ => format!("{} ({})", name, n),
    }
}

async fn save_unique(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf, HostServiceError> {
    tokio::fs::create_dir_all(dir).await?;
    let name = sanitize_file_name(name);

    for n in 0..MAX_DUPLICATES {
        let path = dir.join(candidate_name(&name, n));
        let file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;
        match file {
            Ok(mut file) => {
                file.write_all(bytes).await?;
                file.flush().await?;
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(HostServiceError::Rejected(format!(
        "too many copies of {} in {}",
        name,
        dir.display()
    )))
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/download.rs"]
mod tests;
