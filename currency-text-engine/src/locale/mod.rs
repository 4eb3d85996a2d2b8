//! Number locale tables
//!
//! A [`NumberLocale`] carries the decimal separator and digit glyphs of one
//! locale. It is passed explicitly into every analyzer and repositioner call;
//! nothing in this crate reads ambient locale state.

mod error;
mod glyphs;
mod registry;

pub use error::{LocaleError, Result};
pub use glyphs::{DigitGlyphTable, GlyphMatch};
pub use registry::{LocaleConfig, LocaleRegistry, registry};

use unicode_normalization::UnicodeNormalization;

use crate::text::grapheme_len;

/// Decimal separator and digit glyphs of a locale
#[derive(Debug, Clone)]
pub struct NumberLocale {
    id: String,
    decimal_separator: String,
    digits: DigitGlyphTable,
}

impl NumberLocale {
    pub fn new(
        id: impl Into<String>,
        decimal_separator: impl Into<String>,
        digits: DigitGlyphTable,
    ) -> Result<Self> {
        let id = id.into();
        let decimal_separator: String = decimal_separator.into().nfc().collect();
        match grapheme_len(&decimal_separator) {
            0 => return Err(LocaleError::EmptyDecimalSeparator(id)),
            1 => {}
            _ => {
                return Err(LocaleError::MultiCharacterDecimalSeparator {
                    id,
                    separator: decimal_separator,
                });
            }
        }
        Ok(Self {
            id,
            decimal_separator,
            digits,
        })
    }

    /// `en-US`: `.` separator, ASCII digits
    pub fn en_us() -> Self {
        Self {
            id: "en-US".to_string(),
            decimal_separator: ".".to_string(),
            digits: DigitGlyphTable::ascii(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }

    pub fn digits(&self) -> &DigitGlyphTable {
        &self.digits
    }

    /// Replace the decimal separator.
    pub fn with_decimal_separator(self, decimal_separator: impl Into<String>) -> Result<Self> {
        Self::new(self.id, decimal_separator, self.digits)
    }

    /// Replace the digit glyph table.
    pub fn with_digits(mut self, digits: DigitGlyphTable) -> Self {
        self.digits = digits;
        self
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_en_us() {
        let locale = NumberLocale::default();
        assert_eq!(locale.id(), "en-US");
        assert_eq!(locale.decimal_separator(), ".");
        assert_eq!(locale.digits().len(), 10);
    }

    #[test]
    fn test_empty_separator_rejected() {
        let err = NumberLocale::new("x", "", DigitGlyphTable::ascii()).unwrap_err();
        assert!(matches!(err, LocaleError::EmptyDecimalSeparator(id) if id == "x"));
    }

    #[test]
    fn test_multi_character_separator_rejected() {
        let err = NumberLocale::new("x", "pt", DigitGlyphTable::ascii()).unwrap_err();
        assert!(matches!(
            err,
            LocaleError::MultiCharacterDecimalSeparator { ref separator, .. } if separator == "pt"
        ));
        assert!(NumberLocale::en_us().with_decimal_separator(", ").is_err());
        // one grapheme, two code points
        assert!(NumberLocale::new("x", "e\u{301}", DigitGlyphTable::ascii()).is_ok());
    }

    #[test]
    fn test_with_decimal_separator() {
        let locale = NumberLocale::en_us().with_decimal_separator(",").unwrap();
        assert_eq!(locale.decimal_separator(), ",");
        assert_eq!(locale.id(), "en-US");
    }
}
