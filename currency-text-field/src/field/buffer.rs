//! FieldBuffer: in-memory text field with a caret.
//!
//! Stands in for a platform text widget. The caret is counted in grapheme
//! clusters, the unit the cursor offsets use.

use unicode_segmentation::UnicodeSegmentation;

use super::TextField;

/// Field text with caret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBuffer {
    text: String,
    /// Caret position (in graphemes, not bytes)
    caret: usize,
}

impl FieldBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text`, caret at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.graphemes(true).count();
        Self { text, caret }
    }

    fn len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn byte_index(&self, grapheme_pos: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert text at the caret, leaving the caret after it.
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let before = self.len();
        let byte_pos = self.byte_index(self.caret);
        self.text.insert_str(byte_pos, text);
        // the inserted text may merge with a neighbouring cluster
        self.caret = (self.caret + self.len().saturating_sub(before)).min(self.len());
    }

    /// Remove the grapheme before the caret.
    pub fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let start = self.byte_index(self.caret - 1);
        let end = self.byte_index(self.caret);
        self.text.replace_range(start..end, "");
        self.caret -= 1;
        true
    }

    pub fn move_caret_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_caret_right(&mut self) {
        self.caret = (self.caret + 1).min(self.len());
    }

    pub fn move_caret_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_caret_end(&mut self) {
        self.caret = self.len();
    }
}

impl TextField for FieldBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text and puts the caret at the end, as platform widgets do
    fn set_text(&mut self, text: String) {
        self.text = text;
        self.caret = self.len();
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.len());
    }
}
