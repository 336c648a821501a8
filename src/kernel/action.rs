use std::time::Instant;

use super::effect::{HostOp, RequestId};
use super::services::ports::HostServiceError;

/// Events flowing into the controller, from the user, the host surface or
/// the service host.
#[derive(Debug, Clone)]
pub enum Action {
    /// The surface's text changed (input event).
    ContentChanged,
    /// Pointer or key release; the selection may have moved.
    SelectionChanged,
    FocusGained,
    FocusLost,
    ToggleDirection,
    ApplyFormat {
        command: String,
        value: Option<String>,
    },
    CopyToClipboard,
    ExportAsFile,
    HostServiceFinished {
        request: RequestId,
        op: HostOp,
        result: Result<(), HostServiceError>,
    },
    Tick {
        now: Instant,
    },
}
