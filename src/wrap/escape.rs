//! Escape sequence normalizer.
//!
//! Runs while the line filler is inside an escape sequence. Every character
//! is copied into the pending word (so the sequence travels with the text it
//! styles) and into a draft that becomes the active style once the sequence
//! terminates. Along the way it rewrites arguments:
//!
//! - zero padding is dropped: `ESC[0031m` becomes `ESC[31m`
//! - a bare `0` in the middle splits the sequence:
//!   `ESC[31;0;32m` becomes `ESC[31;0m` followed by `ESC[32m`
//! - a trailing bare `0` is kept, but leaves nothing to restore

use super::buffer::WordBuffer;
use super::width::{is_terminator, ESC};

/// Closes the current sequence and opens a fresh one after a bare zero.
const SPLIT_RESET: &str = "0m\x1b[";

/// What the line filler must do after a character was fed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Transition {
    /// Still inside the sequence.
    Continue,
    /// A bare `0` argument reset the style mid-sequence; drop any active style.
    Split,
    /// The sequence terminated. `None` when it ended in a full reset.
    Done(Option<String>),
}

/// Parser state for one escape sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EscapeParser {
    at_argument_start: bool,
    leading_zero_pending: bool,
    draft: String,
}

impl EscapeParser {
    /// Start a sequence at its introducer.
    pub fn begin(word: &mut WordBuffer) -> Self {
        word.push_escape(ESC);
        let mut draft = String::with_capacity(8);
        draft.push(ESC);
        Self {
            at_argument_start: true,
            leading_zero_pending: false,
            draft,
        }
    }

    pub fn feed(&mut self, c: char, word: &mut WordBuffer) -> Transition {
        // Ambiguous until the next character: padding or the whole argument.
        if c == '0' && self.at_argument_start {
            self.leading_zero_pending = true;
            return Transition::Continue;
        }
        self.at_argument_start = false;

        if matches!(c, '1'..='9') {
            self.leading_zero_pending = false;
        }

        if c == '[' || c == ';' {
            self.at_argument_start = true;
            if self.leading_zero_pending {
                self.leading_zero_pending = false;
                self.draft.clear();
                self.draft.push(ESC);
                self.draft.push('[');
                word.push_escape_str(SPLIT_RESET);
                return Transition::Split;
            }
        }

        self.draft.push(c);

        if is_terminator(c) {
            if self.leading_zero_pending {
                word.push_escape('0');
                word.push_escape(c);
                return Transition::Done(None);
            }
            word.push_escape(c);
            return Transition::Done(Some(std::mem::take(&mut self.draft)));
        }

        word.push_escape(c);
        Transition::Continue
    }

    #[cfg(test)]
    pub fn leading_zero_pending(&self) -> bool {
        self.leading_zero_pending
    }
}
