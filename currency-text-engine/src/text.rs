//! Grapheme helpers shared by the analyzer and the repositioner.
//!
//! Every offset in this crate is counted in extended grapheme clusters, the
//! unit a user perceives as one character. A locale digit built from a base
//! letter and a combining mark is still a single step for the cursor.

use unicode_segmentation::UnicodeSegmentation;

/// Number of grapheme clusters in `s`.
pub fn grapheme_len(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Split `s` so that the second half holds the last `tail` graphemes.
///
/// Returns `None` when `s` has fewer than `tail` graphemes.
pub fn split_graphemes_from_end(s: &str, tail: usize) -> Option<(&str, &str)> {
    if tail == 0 {
        return Some((s, ""));
    }
    let (byte_idx, _) = s.grapheme_indices(true).rev().nth(tail - 1)?;
    Some(s.split_at(byte_idx))
}

/// Remove every occurrence of `pattern` from `s`.
///
/// An empty pattern leaves the text untouched.
pub fn strip_all(s: &str, pattern: &str) -> String {
    if pattern.is_empty() {
        return s.to_string();
    }
    s.replace(pattern, "")
}
