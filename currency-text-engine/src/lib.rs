//! currency-text-engine: numeral analysis and cursor repositioning for
//! currency amount entry.
//!
//! While a user types an amount, a formatter upstream rewrites the field text
//! (symbol, grouping, decimal separator, directional marks). This crate works
//! out what in that text counts as a numeral and where the cursor should go
//! afterwards. Amounts are handled as strings and grapheme offsets only.

pub mod cursor;
pub mod direction;
pub mod locale;
pub mod numeral;
pub mod sign;
pub mod text;

pub use cursor::{
    CursorOffset, CursorRepositioner, absolute_position, offset_from_position,
    offset_without_symbol,
};
pub use direction::{Direction, RIGHT_TO_LEFT_MARK};
pub use locale::{DigitGlyphTable, LocaleError, NumberLocale, registry};
pub use numeral::{DECIMAL_POINT, NumeralAnalyzer};
pub use sign::is_negative;
