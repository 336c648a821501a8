//! User-visible strings selected by writing direction.

use crate::core::Direction;

pub const LTR_PLACEHOLDER: &str = "Start writing here...";
pub const RTL_PLACEHOLDER: &str = "ابدأ الكتابة هنا...";

pub const LTR_STATUS: &str = "Left-to-Right writing mode";
pub const RTL_STATUS: &str = "وضع الكتابة من اليمين إلى اليسار";

pub fn placeholder(direction: Direction) -> &'static str {
    match direction {
        Direction::Ltr => LTR_PLACEHOLDER,
        Direction::Rtl => RTL_PLACEHOLDER,
    }
}

pub fn status_caption(direction: Direction) -> &'static str {
    match direction {
        Direction::Ltr => LTR_STATUS,
        Direction::Rtl => RTL_STATUS,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/locale.rs"]
mod tests;
