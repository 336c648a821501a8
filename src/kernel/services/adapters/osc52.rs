//! 剪贴板服务：OSC 52 终端剪贴板
//!
//! 通过终端转义序列写入系统剪贴板，tmux 下使用 passthrough 包装。

use std::io::{self, Write};

use crate::core::Service;
use crate::kernel::services::ports::{ClipboardPort, HostFuture, HostServiceError};

const OSC52_PREFIX: &str = "\x1b]52;c;";
const OSC52_SUFFIX_BEL: &str = "\x07";

const TMUX_PREFIX: &str = "\x1bPtmux;\x1b\x1b]52;c;";
const TMUX_SUFFIX: &str = "\x07\x1b\\";

/// Largest text accepted before encoding.
pub const OSC52_MAX_BYTES: usize = 100 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Osc52Env {
    pub is_tmux: bool,
}

impl Osc52Env {
    pub fn detect() -> Self {
        Self {
            is_tmux: std::env::var_os("TMUX").is_some(),
        }
    }
}

pub fn build_sequence(text: &str, env: Osc52Env) -> Result<String, HostServiceError> {
    let bytes = text.as_bytes();
    if bytes.len() > OSC52_MAX_BYTES {
        return Err(HostServiceError::TooLarge {
            bytes: bytes.len(),
            limit: OSC52_MAX_BYTES,
        });
    }

    let b64 = base64_encode(bytes);
    if env.is_tmux {
        Ok(format!("{TMUX_PREFIX}{b64}{TMUX_SUFFIX}"))
    } else {
        Ok(format!("{OSC52_PREFIX}{b64}{OSC52_SUFFIX_BEL}"))
    }
}

pub fn write_sequence<W: Write>(mut w: W, text: &str, env: Osc52Env) -> Result<(), HostServiceError> {
    let seq = build_sequence(text, env)?;
    w.write_all(seq.as_bytes())?;
    w.flush()?;
    Ok(())
}

/// Writes the clipboard sequence to stdout.
pub struct Osc52Clipboard {
    env: Osc52Env,
}

impl Osc52Clipboard {
    pub fn new(env: Osc52Env) -> Self {
        Self { env }
    }

    pub fn detect() -> Self {
        Self::new(Osc52Env::detect())
    }
}

impl Service for Osc52Clipboard {
    fn name(&self) -> &'static str {
        "Osc52Clipboard"
    }
}

impl ClipboardPort for Osc52Clipboard {
    fn write_text(&self, text: String) -> HostFuture {
        let env = self.env;
        Box::pin(async move {
            tokio::task::spawn_blocking(move || write_sequence(io::stdout().lock(), &text, env))
                .await
                .map_err(|e| HostServiceError::Io(e.to_string()))?
        })
    }
}

fn base64_encode(bytes: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let n = chunk
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, b)| acc | (u32::from(*b) << (16 - 8 * i)));
        for i in 0..4 {
            if i <= chunk.len() {
                out.push(TABLE[((n >> (18 - 6 * i)) & 0x3f) as usize] as char);
            } else {
                out.push('=');
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/osc52.rs"]
mod tests;
