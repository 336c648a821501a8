//! Word/character counting and caret snapping.
//!
//! Lengths are UTF-16 code units, the unit hosts report text length in.
//! Whitespace follows the ECMAScript `\s` class. Caret offsets stay in
//! `char`s so they never split a code point.

use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextCounts {
    pub words: usize,
    pub chars: usize,
}

impl TextCounts {
    pub const ZERO: TextCounts = TextCounts { words: 0, chars: 0 };

    pub fn measure(text: &str) -> Self {
        Self {
            words: word_count(text),
            chars: char_count(text),
        }
    }
}

pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Unicode `White_Space` without U+0085, plus U+FEFF.
pub fn is_blank_char(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        c => c.is_whitespace(),
    }
}

pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank_char)
}

pub fn is_blank(text: &str) -> bool {
    trim_blank(text).is_empty()
}

/// Maximal whitespace-delimited tokens of the trimmed text.
pub fn word_count(text: &str) -> usize {
    trim_blank(text)
        .split(is_blank_char)
        .filter(|word| !word.is_empty())
        .count()
}

/// Largest grapheme boundary (as a char offset) not after `offset`.
///
/// Offsets past the end clamp to the end of `text`.
pub fn grapheme_floor(text: &str, offset: usize) -> usize {
    let mut boundary = 0usize;
    for grapheme in text.graphemes(true) {
        let next = boundary + grapheme.chars().count();
        if next > offset {
            return boundary;
        }
        boundary = next;
    }
    boundary
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/counts.rs"]
mod tests;
