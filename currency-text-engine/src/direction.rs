//! Text direction detection

use serde::{Deserialize, Serialize};

/// RIGHT-TO-LEFT MARK, inserted by formatters for right-to-left locales
pub const RIGHT_TO_LEFT_MARK: char = '\u{200F}';

/// Layout direction of a decorated amount.
///
/// Decides which document edge cursor offsets are measured from, and on which
/// side the currency symbol is expected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Offsets are measured from the end; the symbol may trail the amount
    #[default]
    LeftToRight,
    /// Offsets are measured from the start; the symbol may lead the amount
    RightToLeft,
}

impl Direction {
    /// Right-to-left when `text` carries a right-to-left mark.
    pub fn detect(text: &str) -> Self {
        if text.contains(RIGHT_TO_LEFT_MARK) {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }

    /// Like [`Direction::detect`], but always left-to-right when alignment
    /// checking is turned off.
    pub fn resolve(text: &str, check_language_alignment: bool) -> Self {
        if check_language_alignment {
            Self::detect(text)
        } else {
            Direction::LeftToRight
        }
    }

    pub fn is_right_to_left(self) -> bool {
        self == Direction::RightToLeft
    }
}

impl From<bool> for Direction {
    /// `true` means right-to-left
    fn from(is_right_to_left: bool) -> Self {
        if is_right_to_left {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }
}
