use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use super::error::{LocaleError, Result};

const ASCII_DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Result of a longest-match lookup in a [`DigitGlyphTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphMatch {
    /// Number of bytes of the input covered by the matched glyph
    pub byte_len: usize,
    /// Canonical ASCII digit the glyph stands for
    pub digit: char,
}

/// A node in the glyph trie
#[derive(Debug, Clone, Default)]
struct GlyphNode {
    /// Canonical digit if a glyph ends at this node
    digit: Option<char>,
    children: HashMap<char, GlyphNode>,
}

/// Mapping from locale digit glyphs to canonical ASCII digits.
///
/// Glyphs may be longer than one character, and one glyph may be a prefix of
/// another; lookups always prefer the longest glyph. Glyphs are stored in NFC
/// so that precomposed and decomposed input both match.
#[derive(Debug, Clone, Default)]
pub struct DigitGlyphTable {
    root: GlyphNode,
    len: usize,
}

impl DigitGlyphTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table mapping ASCII digits to themselves
    pub fn ascii() -> Self {
        let mut table = Self::new();
        for (digit, glyph) in ('0'..='9').zip(ASCII_DIGITS) {
            table.insert_normalized(glyph, digit);
        }
        table
    }

    /// Build a table from ten glyphs, in order, for the digits 0 through 9.
    pub fn from_glyphs<S: AsRef<str>>(glyphs: &[S]) -> Result<Self> {
        if glyphs.len() != 10 {
            return Err(LocaleError::DigitCount(glyphs.len()));
        }
        let mut table = Self::new();
        for (digit, glyph) in ('0'..='9').zip(glyphs) {
            table.insert(glyph.as_ref(), digit)?;
        }
        Ok(table)
    }

    /// Insert a glyph -> digit rule into the table
    pub fn insert(&mut self, glyph: &str, digit: char) -> Result<()> {
        if !digit.is_ascii_digit() {
            return Err(LocaleError::NotAsciiDigit(digit));
        }
        let glyph: String = glyph.nfc().collect();
        if glyph.is_empty() {
            return Err(LocaleError::EmptyGlyph(digit));
        }
        self.insert_normalized(&glyph, digit);
        Ok(())
    }

    fn insert_normalized(&mut self, glyph: &str, digit: char) {
        let mut node = &mut self.root;
        for ch in glyph.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.digit.replace(digit).is_none() {
            self.len += 1;
        }
    }

    /// Number of glyphs in the table
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Search for the longest glyph that prefixes `input`.
    ///
    /// `input` is expected to be NFC already.
    pub fn search_longest(&self, input: &str) -> Option<GlyphMatch> {
        let mut node = &self.root;
        let mut last_match = None;

        for (idx, ch) in input.char_indices() {
            let Some(child) = node.children.get(&ch) else {
                break;
            };
            node = child;
            if let Some(digit) = node.digit {
                last_match = Some(GlyphMatch {
                    byte_len: idx + ch.len_utf8(),
                    digit,
                });
            }
        }

        last_match
    }

    /// Canonical digit for a whole glyph, if `glyph` is exactly one table entry.
    pub fn digit_for(&self, glyph: &str) -> Option<char> {
        let glyph: String = glyph.nfc().collect();
        self.search_longest(&glyph)
            .filter(|m| m.byte_len == glyph.len())
            .map(|m| m.digit)
    }

    /// Replace every glyph occurrence in `text` with its ASCII digit.
    ///
    /// Characters that start no glyph are copied through unchanged.
    pub fn normalize(&self, text: &str) -> String {
        let text: String = text.nfc().collect();
        let mut out = String::with_capacity(text.len());
        let mut rest = text.as_str();

        while let Some(ch) = rest.chars().next() {
            match self.search_longest(rest) {
                Some(m) => {
                    out.push(m.digit);
                    rest = &rest[m.byte_len..];
                }
                None => {
                    out.push(ch);
                    rest = &rest[ch.len_utf8()..];
                }
            }
        }

        out
    }
}
