//! 内存版可编辑表面
//!
//! 无头宿主：保存纯文本、光标、选区、焦点，以及原生格式化命令留下的
//! 行内样式区间和段落对齐。所有偏移量均为字符偏移。

use std::ops::Range;

use crate::core::TextAlign;
use crate::kernel::services::ports::EditableSurface;
use crate::kernel::state::Presentation;

/// Inline style applied by a native command over a char range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpan {
    pub command: String,
    pub range: Range<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    text: String,
    caret: usize,
    selection: Option<Range<usize>>,
    focused: bool,
    presentation: Presentation,
    spans: Vec<FormatSpan>,
    block_align: Option<TextAlign>,
    dispatched: Vec<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn spans(&self) -> &[FormatSpan] {
        &self.spans
    }

    /// Alignment set by a native justify command, overriding the base
    /// alignment of the presentation.
    pub fn block_align(&self) -> Option<TextAlign> {
        self.block_align
    }

    pub fn effective_align(&self) -> TextAlign {
        self.block_align.unwrap_or(self.presentation.align)
    }

    /// Host command names received, in order.
    pub fn dispatched(&self) -> &[String] {
        &self.dispatched
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// What the user sees: the placeholder overlay when the region is empty
    /// and a placeholder is presented, the content otherwise.
    pub fn rendered(&self) -> &str {
        match self.presentation.placeholder {
            Some(placeholder) if self.text.is_empty() => placeholder,
            _ => &self.text,
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Inserts at the caret, replacing the selection if there is one.
    pub fn type_text(&mut self, input: &str) {
        let range = self.selection.take().unwrap_or(self.caret..self.caret);
        let inserted = input.chars().count();
        self.replace_range(range.clone(), input);
        self.caret = range.start + inserted;
    }

    /// Backspace `count` times, or deletes the selection.
    pub fn erase(&mut self, count: usize) {
        if let Some(range) = self.selection.take() {
            self.replace_range(range.clone(), "");
            self.caret = range.start;
            return;
        }
        let start = self.caret.saturating_sub(count);
        self.replace_range(start..self.caret, "");
        self.caret = start;
    }

    /// Selects `start..end` (char offsets, clamped). An empty range clears
    /// the selection and parks the caret.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.char_len();
        let (start, end) = (start.min(len), end.min(len));
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.caret = end;
        self.selection = (start < end).then_some(start..end);
    }

    pub fn select_all(&mut self) {
        self.select(0, self.char_len());
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }

    fn replace_range(&mut self, range: Range<usize>, input: &str) {
        let start = self.byte_index(range.start);
        let end = self.byte_index(range.end);
        self.text.replace_range(start..end, input);

        let removed = range.end - range.start;
        let inserted = input.chars().count();
        self.spans.retain_mut(|span| {
            shift_span(&mut span.range, &range, removed, inserted);
            span.range.start < span.range.end
        });
    }
}

fn shift_span(span: &mut Range<usize>, edit: &Range<usize>, removed: usize, inserted: usize) {
    let map = |pos: usize| -> usize {
        if pos < edit.start {
            pos
        } else if pos >= edit.end {
            pos - removed + inserted
        } else {
            edit.start
        }
    };
    span.start = map(span.start);
    span.end = map(span.end);
}

impl EditableSurface for MemorySurface {
    fn dispatch_command(&mut self, command: &str, _value: Option<&str>) -> bool {
        let handled = match command {
            "bold" | "italic" | "underline" => {
                if let Some(range) = self.selection.clone() {
                    self.spans.push(FormatSpan {
                        command: command.to_string(),
                        range,
                    });
                }
                true
            }
            "justifyLeft" => {
                self.block_align = Some(TextAlign::Left);
                true
            }
            "justifyCenter" => {
                self.block_align = Some(TextAlign::Center);
                true
            }
            "justifyRight" => {
                self.block_align = Some(TextAlign::Right);
                true
            }
            _ => false,
        };
        if handled {
            self.dispatched.push(command.to_string());
        }
        handled
    }

    fn content(&self) -> String {
        self.text.clone()
    }

    fn selection_text(&self) -> String {
        match &self.selection {
            Some(range) => self
                .text
                .chars()
                .skip(range.start)
                .take(range.end - range.start)
                .collect(),
            None => String::new(),
        }
    }

    fn set_content(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.char_len();
        self.selection = None;
        self.spans.clear();
    }

    fn set_presentation(&mut self, presentation: &Presentation) {
        self.presentation = *presentation;
    }

    fn request_focus(&mut self) {
        self.focused = true;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn caret_offset(&self) -> Option<usize> {
        Some(self.caret)
    }

    fn set_caret_offset(&mut self, offset: usize) {
        self.caret = offset.min(self.char_len());
        self.selection = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/memory.rs"]
mod tests;
