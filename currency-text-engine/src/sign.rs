//! Sign markers in decorated amounts

/// HYPHEN-MINUS (U+002D)
pub const NEGATIVE_SYMBOL: &str = "-";

/// MINUS SIGN (U+2212), used by some locales instead of the hyphen
pub const MINUS_SYMBOL: &str = "\u{2212}";

/// Whether the decorated amount carries a negative sign.
pub fn is_negative(text: &str) -> bool {
    text.contains(NEGATIVE_SYMBOL) || text.contains(MINUS_SYMBOL)
}
