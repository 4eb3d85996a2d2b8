//! Numeral analysis over decorated amount strings
//!
//! A decorated amount is what the user sees in the field: digits (possibly
//! locale glyphs), a decimal separator, a currency symbol, grouping
//! separators, sign markers and directional marks. The analyzer answers
//! questions about the *relevant* characters in it, the digits and the
//! decimal separator, without ever turning the text into a number.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;
use unicode_segmentation::UnicodeSegmentation;

use crate::locale::NumberLocale;
use crate::text::split_graphemes_from_end;

/// Separator written into canonical digit strings, whatever the locale
pub const DECIMAL_POINT: &str = ".";

/// Classification and offset queries for one locale
#[derive(Debug, Clone, Copy)]
pub struct NumeralAnalyzer<'a> {
    locale: &'a NumberLocale,
}

impl<'a> NumeralAnalyzer<'a> {
    pub fn new(locale: &'a NumberLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &'a NumberLocale {
        self.locale
    }

    /// Whether the digit-only reduction of `text` is empty or all zeros.
    pub fn represents_zero(&self, text: &str) -> bool {
        self.numeral_format(text).chars().all(|c| c == '0')
    }

    /// Whether `text` holds at least one digit.
    pub fn has_numbers(&self, text: &str) -> bool {
        !self.numeral_format(text).is_empty()
    }

    /// The digit-only reduction of `text`.
    ///
    /// Locale digit glyphs are first mapped to ASCII (longest glyph first),
    /// then everything that is not an ASCII digit is dropped.
    ///
    /// ```
    /// use currency_text_engine::{NumberLocale, NumeralAnalyzer};
    ///
    /// let locale = NumberLocale::en_us();
    /// let analyzer = NumeralAnalyzer::new(&locale);
    /// assert_eq!(analyzer.numeral_format("$1,234.50"), "123450");
    /// ```
    pub fn numeral_format(&self, text: &str) -> String {
        self.locale
            .digits()
            .normalize(text)
            .chars()
            .filter(char::is_ascii_digit)
            .collect()
    }

    /// Whether a single grapheme is a digit, ASCII or a locale glyph.
    ///
    /// Trailing combining marks (a keycap, an accent) do not hide the digit
    /// they sit on, matching [`NumeralAnalyzer::numeral_format`].
    pub fn is_digit(&self, grapheme: &str) -> bool {
        let digits = self.locale.digits();
        if digits.digit_for(grapheme).is_some() {
            return true;
        }
        let base = grapheme.trim_end_matches(is_combining_mark);
        let mut chars = base.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_digit() => true,
            (Some(_), _) if base.len() < grapheme.len() => digits.digit_for(base).is_some(),
            _ => false,
        }
    }

    /// Whether a single grapheme is the locale's decimal separator.
    pub fn is_decimal_separator(&self, grapheme: &str) -> bool {
        grapheme
            .nfc()
            .eq(self.locale.decimal_separator().chars())
    }

    /// Whether a single grapheme is a digit or the decimal separator.
    pub fn is_relevant(&self, grapheme: &str) -> bool {
        self.is_digit(grapheme) || self.is_decimal_separator(grapheme)
    }

    /// Number of graphemes that follow the last relevant grapheme.
    ///
    /// `Some(0)` means the last grapheme is itself relevant; `None` means
    /// there is no relevant grapheme at all.
    ///
    /// ```
    /// use currency_text_engine::{NumberLocale, NumeralAnalyzer};
    ///
    /// let locale = NumberLocale::en_us();
    /// let analyzer = NumeralAnalyzer::new(&locale);
    /// assert_eq!(analyzer.last_relevant_offset_from_end("123abc"), Some(3));
    /// ```
    pub fn last_relevant_offset_from_end(&self, text: &str) -> Option<usize> {
        text.graphemes(true).rev().position(|g| self.is_relevant(g))
    }

    /// 0-based grapheme index of the first relevant grapheme.
    ///
    /// Used for right-to-left layouts, where the most recently typed
    /// position sits at the visual start of the document.
    pub fn first_relevant_offset_from_start(&self, text: &str) -> Option<usize> {
        text.graphemes(true).position(|g| self.is_relevant(g))
    }

    /// Number of graphemes that follow the last digit.
    pub fn last_number_offset_from_end(&self, text: &str) -> Option<usize> {
        text.graphemes(true).rev().position(|g| self.is_digit(g))
    }

    /// Number of graphemes that follow the last decimal separator.
    pub fn last_decimal_separator_offset_from_end(&self, text: &str) -> Option<usize> {
        text.graphemes(true)
            .rev()
            .position(|g| self.is_decimal_separator(g))
    }

    /// Insert [`DECIMAL_POINT`] `decimal_digits` graphemes before the end.
    ///
    /// Meant for the ASCII output of [`NumeralAnalyzer::numeral_format`] on
    /// its way to numeric parsing, so the point is canonical for every
    /// locale. Text shorter than `decimal_digits`, or `decimal_digits == 0`,
    /// is returned unchanged. An existing separator is not detected; callers
    /// pass text without one.
    pub fn insert_decimal_separator(&self, text: &str, decimal_digits: usize) -> String {
        insert_separator(text, decimal_digits, DECIMAL_POINT)
    }

    /// In-place form of [`NumeralAnalyzer::insert_decimal_separator`].
    pub fn update_decimal_separator(&self, text: &mut String, decimal_digits: usize) {
        if decimal_digits == 0 {
            return;
        }
        let Some(at) = split_graphemes_from_end(text, decimal_digits).map(|(head, _)| head.len())
        else {
            return;
        };
        text.insert_str(at, DECIMAL_POINT);
    }

    /// Like [`NumeralAnalyzer::insert_decimal_separator`], but with the
    /// locale's own separator, for display.
    pub fn insert_locale_decimal_separator(&self, text: &str, decimal_digits: usize) -> String {
        insert_separator(text, decimal_digits, self.locale.decimal_separator())
    }
}

fn insert_separator(text: &str, decimal_digits: usize, separator: &str) -> String {
    if decimal_digits == 0 {
        return text.to_string();
    }
    match split_graphemes_from_end(text, decimal_digits) {
        Some((head, tail)) => format!("{head}{separator}{tail}"),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::registry;

    fn en() -> NumberLocale {
        NumberLocale::en_us()
    }

    #[test]
    fn test_empty_text() {
        let locale = en();
        let a = NumeralAnalyzer::new(&locale);
        assert!(a.represents_zero(""));
        assert!(!a.has_numbers(""));
        assert_eq!(a.last_relevant_offset_from_end(""), None);
        assert_eq!(a.first_relevant_offset_from_start(""), None);
    }

    #[test]
    fn test_only_decoration() {
        let locale = en();
        let a = NumeralAnalyzer::new(&locale);
        assert!(a.represents_zero("$ ,"));
        assert!(!a.has_numbers("$ ,"));
        assert_eq!(a.last_relevant_offset_from_end("$ ,"), None);

        // the separator alone is still relevant for offsets
        assert!(!a.has_numbers("$."));
        assert_eq!(a.last_relevant_offset_from_end("$. "), Some(1));
        assert_eq!(a.first_relevant_offset_from_start("$. "), Some(1));
    }

    #[test]
    fn test_represents_zero() {
        let locale = en();
        let a = NumeralAnalyzer::new(&locale);
        assert!(a.represents_zero("$0.00"));
        assert!(a.represents_zero("-0,000"));
        assert!(!a.represents_zero("$0.01"));
        assert!(a.has_numbers("$0.00"));
    }

    #[test]
    fn test_relevant_offsets() {
        let locale = en();
        let a = NumeralAnalyzer::new(&locale);
        assert_eq!(a.last_relevant_offset_from_end("123abc"), Some(3));
        assert_eq!(a.first_relevant_offset_from_start("abc123"), Some(3));
        assert_eq!(a.last_relevant_offset_from_end("12.34"), Some(0));
        assert_eq!(a.last_relevant_offset_from_end("12. USD"), Some(4));
    }

    #[test]
    fn test_number_and_separator_offsets() {
        let locale = en();
        let a = NumeralAnalyzer::new(&locale);
        assert_eq!(a.last_number_offset_from_end("123some"), Some(4));
        assert_eq!(a.last_decimal_separator_offset_from_end("12.some"), Some(4));
        assert_eq!(a.last_decimal_separator_offset_from_end("12some"), None);
        assert_eq!(a.last_number_offset_from_end("12. "), Some(2));
        assert_eq!(a.last_relevant_offset_from_end("12. "), Some(1));
    }

    #[test]
    fn test_insert_decimal_separator() {
        let locale = en();
        let a = NumeralAnalyzer::new(&locale);
        assert_eq!(a.insert_decimal_separator("12345", 2), "123.45");
        assert_eq!(a.insert_decimal_separator("1", 2), "1");
        assert_eq!(a.insert_decimal_separator("12", 2), ".12");
        assert_eq!(a.insert_decimal_separator("12345", 0), "12345");
        assert_eq!(a.insert_decimal_separator("", 2), "");
    }

    #[test]
    fn test_update_decimal_separator_in_place() {
        let locale = registry().locale("de-DE").unwrap();
        let a = NumeralAnalyzer::new(&locale);
        let mut text = String::from("100050");
        a.update_decimal_separator(&mut text, 2);
        assert_eq!(text, "1000.50");

        let mut short = String::from("5");
        a.update_decimal_separator(&mut short, 2);
        assert_eq!(short, "5");
    }

    #[test]
    fn test_arabic_locale() {
        let locale = registry().locale("ar-EG").unwrap();
        let a = NumeralAnalyzer::new(&locale);
        let text = "\u{200f}١٬٢٣٤٫٥٠ ج.م.\u{200f}";
        assert_eq!(a.numeral_format(text), "123450");
        assert!(a.has_numbers(text));
        // " ج.م.\u{200f}" has 6 graphemes after the last digit
        assert_eq!(a.last_relevant_offset_from_end(text), Some(6));
        assert_eq!(a.first_relevant_offset_from_start(text), Some(1));
        assert_eq!(a.insert_decimal_separator("123", 2), "1.23");
        assert_eq!(a.insert_locale_decimal_separator("١٢٣", 2), "١٫٢٣");
    }

    #[test]
    fn test_ascii_period_not_relevant_under_comma_locale() {
        let locale = registry().locale("fr-FR").unwrap();
        let a = NumeralAnalyzer::new(&locale);
        assert_eq!(a.last_relevant_offset_from_end("1,5 ."), Some(2));
        assert_eq!(a.last_decimal_separator_offset_from_end("1.000,5"), Some(1));
    }

    #[test]
    fn test_canonical_point_for_every_locale() {
        let locale = registry().locale("de-DE").unwrap();
        let a = NumeralAnalyzer::new(&locale);
        let digits = a.numeral_format("1.000,50 €");
        assert_eq!(a.insert_decimal_separator(&digits, 2), "1000.50");
        assert_eq!(a.insert_locale_decimal_separator(&digits, 2), "1000,50");
    }

    #[test]
    fn test_digit_with_combining_mark() {
        let locale = en();
        let a = NumeralAnalyzer::new(&locale);
        for grapheme in ["1\u{20e3}", "5\u{301}"] {
            assert!(a.is_digit(grapheme), "{grapheme:?}");
            assert!(a.has_numbers(grapheme));
        }
        assert_eq!(a.last_relevant_offset_from_end("1\u{20e3} $"), Some(2));
        assert!(!a.is_digit("\u{301}"));
        assert!(!a.is_digit("a\u{301}"));

        let ar = registry().locale("ar-EG").unwrap();
        let a = NumeralAnalyzer::new(&ar);
        assert!(a.is_digit("\u{661}\u{651}"));
        assert_eq!(a.numeral_format("\u{661}\u{651}"), "1");
    }
}
