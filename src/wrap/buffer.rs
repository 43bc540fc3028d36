//! Pending word buffer with a cached printable width.

use super::width::char_width;

/// A run of non-whitespace content not yet committed to the line.
///
/// Escape bytes travel with the word but never add to its width.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct WordBuffer {
    text: String,
    width: usize,
}

impl WordBuffer {
    /// Append a visible character.
    pub fn push(&mut self, c: char) {
        self.text.push(c);
        self.width += char_width(c);
    }

    /// Append a character belonging to an escape sequence.
    pub fn push_escape(&mut self, c: char) {
        self.text.push(c);
    }

    /// Append escape bytes synthesized by the normalizer.
    pub fn push_escape_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Hand back the buffered text and width, leaving the buffer empty.
    pub fn take(&mut self) -> (String, usize) {
        let width = std::mem::take(&mut self.width);
        (std::mem::take(&mut self.text), width)
    }
}
