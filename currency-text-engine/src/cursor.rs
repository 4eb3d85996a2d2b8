//! Cursor repositioning after the displayed amount changes
//!
//! Cursor offsets follow the host widget convention: a signed grapheme
//! distance from the *anchor edge* of the document, the end for
//! left-to-right text and the start for right-to-left text. Negative values
//! move toward the start of the document, so a left-to-right cursor always
//! has an offset `<= 0`.
//!
//! The repositioner keeps the cursor from drifting past the amount: it is
//! never placed further toward the anchor edge than the last numeral, and it
//! steps over a currency symbol sitting on that edge.

use tracing::trace;

use crate::direction::Direction;
use crate::locale::NumberLocale;
use crate::numeral::NumeralAnalyzer;
use crate::text::{grapheme_len, strip_all};

/// Signed grapheme offset from the anchor edge
pub type CursorOffset = isize;

/// Computes corrected cursor offsets for one locale
#[derive(Debug, Clone, Copy)]
pub struct CursorRepositioner<'a> {
    analyzer: NumeralAnalyzer<'a>,
}

impl<'a> CursorRepositioner<'a> {
    pub fn new(locale: &'a NumberLocale) -> Self {
        Self {
            analyzer: NumeralAnalyzer::new(locale),
        }
    }

    pub fn analyzer(&self) -> NumeralAnalyzer<'a> {
        self.analyzer
    }

    /// Corrected cursor offset for `text`, given where the cursor was before
    /// the edit.
    ///
    /// Returns 0 when nothing but the currency symbol is left.
    ///
    /// ```
    /// use currency_text_engine::{CursorRepositioner, Direction, NumberLocale};
    ///
    /// let locale = NumberLocale::en_us();
    /// let repositioner = CursorRepositioner::new(&locale);
    /// // the cursor lands right after "4", before the trailing " €"
    /// assert_eq!(repositioner.reposition("12.34 €", 0, "€", Direction::LeftToRight), -2);
    /// ```
    pub fn reposition(
        &self,
        text: &str,
        previous_offset: CursorOffset,
        currency_symbol: &str,
        direction: Direction,
    ) -> CursorOffset {
        let stripped = strip_all(text, currency_symbol);
        if stripped.is_empty() {
            trace!("reposition: no text besides the currency symbol");
            return 0;
        }

        let mut offset = previous_offset;

        let boundary = match direction {
            Direction::LeftToRight => self
                .analyzer
                .last_relevant_offset_from_end(&stripped)
                .map(|n| -(n as CursorOffset)),
            Direction::RightToLeft => self
                .analyzer
                .first_relevant_offset_from_start(&stripped)
                .map(|n| n as CursorOffset),
        };
        if let Some(boundary) = boundary
            && boundary < offset
        {
            trace!("reposition: clamped {} -> {}", offset, boundary);
            offset = boundary;
        }

        if !currency_symbol.is_empty() {
            let symbol_len = grapheme_len(currency_symbol) as CursorOffset;
            match direction {
                Direction::RightToLeft if text.starts_with(currency_symbol) => {
                    offset = offset.saturating_add(symbol_len);
                }
                Direction::LeftToRight if text.ends_with(currency_symbol) => {
                    offset = offset.saturating_sub(symbol_len);
                }
                _ => {}
            }
        }

        trace!(
            "reposition: text={:?} previous={} -> {} ({:?})",
            text, previous_offset, offset, direction
        );
        offset
    }

    /// Same as [`CursorRepositioner::reposition`], with the direction
    /// detected from a right-to-left mark in `text`.
    pub fn reposition_detecting(
        &self,
        text: &str,
        previous_offset: CursorOffset,
        currency_symbol: &str,
        check_language_alignment: bool,
    ) -> CursorOffset {
        let direction = Direction::resolve(text, check_language_alignment);
        self.reposition(text, previous_offset, currency_symbol, direction)
    }

    /// Offset for a field that has just gained focus: right after the last
    /// numeral, or right before the first one for right-to-left text.
    pub fn set_initial_offset(
        &self,
        text: &str,
        currency_symbol: &str,
        direction: Direction,
    ) -> CursorOffset {
        self.reposition(text, 0, currency_symbol, direction)
    }
}

/// Undo the currency-symbol step of [`CursorRepositioner::reposition`].
///
/// Host widgets report the cursor relative to the decorated text, while
/// `reposition` expects the previous offset relative to the amount without a
/// symbol on the anchor edge. Feeding a widget offset straight back in would
/// push the cursor one symbol further on every edit.
pub fn offset_without_symbol(
    text: &str,
    offset: CursorOffset,
    currency_symbol: &str,
    direction: Direction,
) -> CursorOffset {
    if currency_symbol.is_empty() {
        return offset;
    }
    let symbol_len = grapheme_len(currency_symbol) as CursorOffset;
    match direction {
        Direction::RightToLeft if text.starts_with(currency_symbol) => {
            offset.saturating_sub(symbol_len)
        }
        Direction::LeftToRight if text.ends_with(currency_symbol) => {
            offset.saturating_add(symbol_len)
        }
        _ => offset,
    }
}

/// Grapheme index from the start of `text` for a cursor offset, clamped to
/// the document bounds.
pub fn absolute_position(text: &str, offset: CursorOffset, direction: Direction) -> usize {
    let len = grapheme_len(text) as CursorOffset;
    let position = match direction {
        Direction::LeftToRight => len.saturating_add(offset),
        Direction::RightToLeft => offset,
    };
    position.clamp(0, len) as usize
}

/// Cursor offset from the anchor edge for a grapheme index from the start.
pub fn offset_from_position(text: &str, position: usize, direction: Direction) -> CursorOffset {
    let len = grapheme_len(text);
    let position = position.min(len) as CursorOffset;
    let len = len as CursorOffset;
    match direction {
        Direction::LeftToRight => position - len,
        Direction::RightToLeft => position,
    }
}
