use crate::core::{Direction, TextAlign};

use super::counts::TextCounts;
use super::locale;

/// Session state owned by the controller.
///
/// While `is_placeholder_shown` holds, both counts are zero and the
/// selection snapshot is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub direction: Direction,
    pub is_placeholder_shown: bool,
    pub word_count: usize,
    pub char_count: usize,
    pub selection_snapshot: String,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            direction: Direction::Ltr,
            is_placeholder_shown: true,
            word_count: 0,
            char_count: 0,
            selection_snapshot: String::new(),
        }
    }

    pub fn counts(&self) -> TextCounts {
        TextCounts {
            words: self.word_count,
            chars: self.char_count,
        }
    }

    pub(crate) fn set_counts(&mut self, counts: TextCounts) -> bool {
        if self.counts() == counts {
            return false;
        }
        self.word_count = counts.words;
        self.char_count = counts.chars;
        true
    }

    /// Placeholder eligible for the active direction, shown or not.
    pub fn eligible_placeholder(&self) -> &'static str {
        locale::placeholder(self.direction)
    }

    pub fn status_caption(&self) -> &'static str {
        locale::status_caption(self.direction)
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::new(self.direction, self.is_placeholder_shown)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the host surface needs to render the region, derived from
/// [`EditorState`]. The placeholder is an overlay; it never enters the
/// surface's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub direction: Direction,
    pub align: TextAlign,
    pub placeholder: Option<&'static str>,
    pub muted: bool,
}

impl Presentation {
    pub fn new(direction: Direction, placeholder_shown: bool) -> Self {
        Self {
            direction,
            align: direction.text_align(),
            placeholder: placeholder_shown.then(|| locale::placeholder(direction)),
            muted: placeholder_shown,
        }
    }
}

impl Default for Presentation {
    fn default() -> Self {
        EditorState::new().presentation()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
