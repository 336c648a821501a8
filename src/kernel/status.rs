use serde::Serialize;

use crate::core::Direction;

use super::counts::char_count;
use super::state::EditorState;

/// Status bar contents below the editable region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBar {
    pub words: String,
    pub characters: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    pub caption: &'static str,
    pub direction: Direction,
    pub badge: &'static str,
}

impl StatusBar {
    pub fn from_state(state: &EditorState) -> Self {
        let selected_len = char_count(&state.selection_snapshot);
        Self {
            words: format!("{} words", state.word_count),
            characters: format!("{} characters", state.char_count),
            selected: (selected_len > 0).then(|| format!("{} selected", selected_len)),
            caption: state.status_caption(),
            direction: state.direction,
            badge: state.direction.badge(),
        }
    }
}

impl std::fmt::Display for StatusBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} | {}", self.badge, self.words, self.characters)?;
        if let Some(selected) = &self.selected {
            write!(f, " | {}", selected)?;
        }
        write!(f, " | {}", self.caption)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/status.rs"]
mod tests;
