//! Headless editor core (state/action/effect).

pub mod action;
pub mod controller;
pub mod counts;
pub mod effect;
pub mod locale;
pub mod notification;
pub mod services;
pub mod state;
pub mod status;

pub use action::Action;
pub use controller::{DispatchResult, EditorController};
pub use counts::TextCounts;
pub use effect::{Effect, ExportPayload, HostOp, RequestId};
pub use notification::{Notification, NotificationKind, Notifications};
pub use state::{EditorState, Presentation};
pub use status::StatusBar;
