//! Editor state controller.
//!
//! Owns the [`EditorState`] of one editing session and reconciles it with
//! the host surface. Host services (clipboard, download) are never called
//! directly: the controller returns [`Effect`]s and receives their outcome
//! later as [`Action::HostServiceFinished`].

use crate::core::{Direction, FormatCommand};

use super::action::Action;
use super::counts::{grapheme_floor, is_blank, TextCounts};
use super::effect::{Effect, ExportPayload, HostOp, RequestId};
use super::notification::{NotificationKind, Notifications};
use super::services::ports::{EditableSurface, EditorConfig, HostServiceError};
use super::state::EditorState;
use super::status::StatusBar;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            state_changed: false,
        }
    }
}

pub struct EditorController<S: EditableSurface> {
    state: EditorState,
    surface: S,
    config: EditorConfig,
    notifications: Notifications,
    next_request: u64,
}

impl<S: EditableSurface> EditorController<S> {
    /// Starts a session: LTR, placeholder shown, counts zero.
    pub fn new(surface: S, config: EditorConfig) -> Self {
        let notifications = Notifications::new(config.notification_ttl());
        let mut controller = Self {
            state: EditorState::new(),
            surface,
            config,
            notifications,
            next_request: 1,
        };
        controller.sync_presentation();
        controller
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Host-side access for delivering user input; follow up with the
    /// matching [`Action`].
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn status_bar(&self) -> StatusBar {
        StatusBar::from_state(&self.state)
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::ContentChanged => DispatchResult::changed(self.on_content_changed()),
            Action::SelectionChanged => DispatchResult::changed(self.update_selection()),
            Action::FocusGained => DispatchResult::changed(self.on_focus_gained()),
            Action::FocusLost => DispatchResult::changed(self.on_focus_lost()),
            Action::ToggleDirection => {
                self.toggle_direction();
                DispatchResult::changed(true)
            }
            Action::ApplyFormat { command, value } => {
                let before = self.state.clone();
                self.apply_format(&command, value.as_deref());
                DispatchResult::changed(before != self.state)
            }
            Action::CopyToClipboard => DispatchResult::effect(self.copy_to_clipboard()),
            Action::ExportAsFile => DispatchResult::effect(self.export_as_file()),
            Action::HostServiceFinished {
                request,
                op,
                result,
            } => {
                self.on_host_service_finished(request, op, result);
                DispatchResult::changed(true)
            }
            Action::Tick { now } => DispatchResult::changed(self.notifications.expire(now)),
        }
    }

    /// Flips LTR/RTL and re-presents the surface. Content, counts, selection
    /// snapshot and placeholder status are untouched; a shown placeholder
    /// switches to the new locale. A focused caret keeps its char offset.
    pub fn toggle_direction(&mut self) -> Direction {
        let caret = if self.surface.has_focus() {
            self.surface.caret_offset()
        } else {
            None
        };

        self.state.direction = self.state.direction.toggled();
        self.sync_presentation();

        if let Some(offset) = caret {
            let target = grapheme_floor(&self.surface.content(), offset);
            if self.surface.caret_offset() != Some(target) {
                self.surface.set_caret_offset(target);
            }
        }

        tracing::info!(direction = %self.state.direction, "writing direction toggled");
        self.state.direction
    }

    /// Dispatches a toolbar command by name. Unknown names are ignored and
    /// `false` is returned.
    pub fn apply_format(&mut self, name: &str, value: Option<&str>) -> bool {
        let Some(command) = FormatCommand::from_name(name) else {
            tracing::debug!(command = name, "ignoring unknown format command");
            return false;
        };
        self.apply_command(command, value);
        true
    }

    pub fn apply_command(&mut self, command: FormatCommand, value: Option<&str>) {
        let value = if command.requires_value() { value } else { None };
        let handled = self.surface.dispatch_command(command.host_name(), value);
        tracing::debug!(%command, handled, "format command dispatched");

        self.surface.request_focus();
        if self.surface.has_focus() {
            self.on_focus_gained();
        }
        self.update_selection();
    }

    pub fn update_counts(&mut self) -> bool {
        let counts = if self.state.is_placeholder_shown {
            TextCounts::ZERO
        } else {
            TextCounts::measure(&self.surface.content())
        };
        self.state.set_counts(counts)
    }

    pub fn update_selection(&mut self) -> bool {
        let text = if self.state.is_placeholder_shown {
            String::new()
        } else {
            self.surface.selection_text()
        };
        if self.state.selection_snapshot == text {
            return false;
        }
        self.state.selection_snapshot = text;
        true
    }

    /// Placeholder exit.
    pub fn on_focus_gained(&mut self) -> bool {
        if !self.state.is_placeholder_shown {
            return false;
        }
        self.state.is_placeholder_shown = false;
        self.sync_presentation();
        self.update_counts();
        true
    }

    /// Placeholder entry. Whitespace-only content is cleared so the
    /// placeholder is shown over an empty region.
    pub fn on_focus_lost(&mut self) -> bool {
        if self.state.is_placeholder_shown {
            return false;
        }
        let content = self.surface.content();
        if !is_blank(&content) {
            return false;
        }
        if !content.is_empty() {
            self.surface.set_content("");
        }

        self.state.is_placeholder_shown = true;
        self.state.set_counts(TextCounts::ZERO);
        self.state.selection_snapshot.clear();
        self.sync_presentation();
        true
    }

    pub fn copy_to_clipboard(&mut self) -> Effect {
        let request = self.next_request_id();
        let text = self.real_content();
        tracing::debug!(%request, bytes = text.len(), "clipboard write requested");
        Effect::WriteClipboard { request, text }
    }

    /// Empty content still exports an empty file.
    pub fn export_as_file(&mut self) -> Effect {
        let request = self.next_request_id();
        let payload =
            ExportPayload::plain_text(self.config.export_file_name.clone(), self.real_content());
        tracing::info!(
            %request,
            file = %payload.file_name,
            bytes = payload.content.len(),
            "export requested"
        );
        Effect::OfferDownload { request, payload }
    }

    fn on_content_changed(&mut self) -> bool {
        let mut changed = false;
        if self.state.is_placeholder_shown && !self.surface.content().is_empty() {
            self.state.is_placeholder_shown = false;
            self.sync_presentation();
            changed = true;
        }
        self.update_counts() || changed
    }

    fn on_host_service_finished(
        &mut self,
        request: RequestId,
        op: HostOp,
        result: Result<(), HostServiceError>,
    ) {
        let (kind, title, description) = match (op, result) {
            (HostOp::Clipboard, Ok(())) => (
                NotificationKind::Success,
                "Copied to clipboard",
                "Text has been copied successfully.".to_string(),
            ),
            (HostOp::Clipboard, Err(err)) => {
                (NotificationKind::Failure, "Copy failed", err.to_string())
            }
            (HostOp::Download { file_name }, Ok(())) => (
                NotificationKind::Success,
                "File exported",
                format!("Text has been exported as {}", file_name),
            ),
            (HostOp::Download { .. }, Err(err)) => {
                (NotificationKind::Failure, "Export failed", err.to_string())
            }
        };
        tracing::debug!(%request, ?kind, title, "host service finished");
        self.notifications.push(kind, title, description);
    }

    fn real_content(&self) -> String {
        if self.state.is_placeholder_shown {
            return String::new();
        }
        self.surface.content()
    }

    fn sync_presentation(&mut self) {
        let presentation = self.state.presentation();
        self.surface.set_presentation(&presentation);
    }

    fn next_request_id(&mut self) -> RequestId {
        let id = self.next_request;
        self.next_request = self.next_request.wrapping_add(1);
        RequestId(id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/controller.rs"]
mod tests;
