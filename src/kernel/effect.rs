pub const TEXT_PLAIN: &str = "text/plain";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "document.txt";

/// Correlates a host-service request with its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

impl ExportPayload {
    pub fn plain_text(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: TEXT_PLAIN,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOp {
    Clipboard,
    Download { file_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    WriteClipboard {
        request: RequestId,
        text: String,
    },
    OfferDownload {
        request: RequestId,
        payload: ExportPayload,
    },
}

impl Effect {
    pub fn request(&self) -> RequestId {
        match self {
            Effect::WriteClipboard { request, .. } | Effect::OfferDownload { request, .. } => {
                *request
            }
        }
    }

    pub fn op(&self) -> HostOp {
        match self {
            Effect::WriteClipboard { .. } => HostOp::Clipboard,
            Effect::OfferDownload { payload, .. } => HostOp::Download {
                file_name: payload.file_name.clone(),
            },
        }
    }
}
