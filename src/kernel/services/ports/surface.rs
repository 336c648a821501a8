//! Contract with the host editable surface.
//!
//! The host owns rendering, caret movement, keystrokes and the native
//! formatting primitives. Offsets are char offsets into `content()`.

use crate::kernel::state::Presentation;

pub trait EditableSurface {
    /// Runs a native formatting command against the current selection or
    /// caret. Returns whether the host recognised it.
    fn dispatch_command(&mut self, command: &str, value: Option<&str>) -> bool;

    /// Real text content; never includes the placeholder overlay.
    fn content(&self) -> String;

    /// Selected text, empty when nothing is selected.
    fn selection_text(&self) -> String;

    fn set_content(&mut self, text: &str);

    fn set_presentation(&mut self, presentation: &Presentation);

    fn request_focus(&mut self);

    fn has_focus(&self) -> bool;

    fn caret_offset(&self) -> Option<usize>;

    fn set_caret_offset(&mut self, offset: usize);
}
