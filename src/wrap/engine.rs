//! Line-filling engine.
//!
//! Consumes text one code point at a time, buffering whitespace runs and
//! words until it knows whether they fit on the current line. Committed
//! content goes to an append-only output buffer.
//!
//! Invariant: `line_len` is the printable width of everything written to
//! `output` since the last line break.

use super::buffer::WordBuffer;
use super::escape::{EscapeParser, Transition};
use super::options::WrapOptions;
use super::width::{char_width, ESC};

/// Emitted before a line break while a style is active.
const RESET: &str = "\x1b[0m";

/// How a character outside an escape sequence is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    EscapeIntroducer,
    Newline,
    Space,
    Breakpoint,
    Other,
}

impl CharClass {
    /// Classify `c`. Newline and breakpoint sets win over whitespace.
    pub fn of(c: char, options: &WrapOptions) -> Self {
        if c == ESC {
            Self::EscapeIntroducer
        } else if options.is_newline(c) {
            Self::Newline
        } else if c.is_whitespace() {
            Self::Space
        } else if options.is_breakpoint(c) {
            Self::Breakpoint
        } else {
            Self::Other
        }
    }
}

/// Whether the engine is reading text or an escape sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Text,
    Escape(EscapeParser),
}

#[derive(Debug)]
pub(crate) struct LineFiller {
    options: WrapOptions,
    output: Vec<u8>,
    spaces: String,
    word: WordBuffer,
    line_len: usize,
    mode: Mode,
    /// Last completed sequence, replayed at the start of each new line.
    active_style: String,
    wrote_since_break: bool,
}

impl LineFiller {
    pub fn new(options: WrapOptions) -> Self {
        Self {
            options,
            output: Vec::new(),
            spaces: String::new(),
            word: WordBuffer::default(),
            line_len: 0,
            mode: Mode::Text,
            active_style: String::new(),
            wrote_since_break: false,
        }
    }

    pub fn options(&self) -> &WrapOptions {
        &self.options
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn into_output(self) -> Vec<u8> {
        self.output
    }

    /// Copy bytes to the output untouched.
    pub fn push_raw(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
    }

    pub fn push_str(&mut self, text: &str) {
        for c in text.chars() {
            self.push(c);
        }
    }

    pub fn push(&mut self, c: char) {
        self.restore_style();
        self.wrote_since_break = true;

        if c == ESC {
            self.mode = Mode::Escape(EscapeParser::begin(&mut self.word));
            return;
        }

        let transition = match &mut self.mode {
            Mode::Escape(parser) => Some(parser.feed(c, &mut self.word)),
            Mode::Text => None,
        };
        if let Some(transition) = transition {
            self.apply(transition);
            return;
        }

        match CharClass::of(c, &self.options) {
            // Handled above; an ESC never reaches classification.
            CharClass::EscapeIntroducer => {}
            CharClass::Newline => self.explicit_newline(),
            CharClass::Space => {
                self.flush_word();
                self.spaces.push(c);
            }
            CharClass::Breakpoint => self.push_breakpoint(c),
            CharClass::Other => self.push_word_char(c),
        }
    }

    /// Flush whatever is still buffered.
    pub fn finish(&mut self) {
        if self.options.preserve_spaces {
            self.flush_spaces();
        }
        self.flush_word();
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Continue => {}
            Transition::Split => self.active_style.clear(),
            Transition::Done(style) => {
                self.active_style = style.unwrap_or_default();
                self.mode = Mode::Text;
            }
        }
    }

    /// Replay the active style at the start of a line, ahead of any word
    /// carried over from the previous one.
    fn restore_style(&mut self) {
        if self.wrote_since_break
            || matches!(self.mode, Mode::Escape(_))
            || self.active_style.is_empty()
        {
            return;
        }
        let style = std::mem::take(&mut self.active_style);
        self.write_str(&style);
        self.active_style = style;
        self.flush_word();
    }

    fn explicit_newline(&mut self) {
        if self.word.is_empty() {
            let len = self.spaces_len();
            if self.line_len + len > self.options.limit {
                self.line_len = 0;
            } else {
                let spaces = std::mem::take(&mut self.spaces);
                self.write_str(&spaces);
                self.line_len += len;
            }
            self.spaces.clear();
        }
        self.flush_word();
        self.break_line();
    }

    /// Commit the line so far and write `c` literally. A breakpoint that
    /// would overflow a non-empty line starts the next one instead.
    fn push_breakpoint(&mut self, c: char) {
        self.flush_spaces();
        self.flush_word();

        let width = char_width(c);
        if self.line_len > 0 && self.line_len + width > self.options.limit {
            self.break_line();
            self.restore_style();
            self.wrote_since_break = true;
        }
        self.write_str(c.encode_utf8(&mut [0; 4]));
        self.line_len += width;
    }

    fn push_word_char(&mut self, c: char) {
        let limit = self.options.limit;
        let width = char_width(c);

        if self.options.hard_wrap
            && self.line_len + self.word.width() + width + self.spaces_len() == limit
        {
            // Exactly at the limit: commit so the next character starts a new line.
            self.word.push(c);
            self.flush_word();
            return;
        }

        self.word.push(c);
        let word_width = self.word.width();
        if self.line_len + self.spaces_len() + word_width > limit && word_width < limit {
            tracing::trace!(
                line_len = self.line_len,
                word_width,
                limit,
                "word exceeds line, breaking"
            );
            self.break_line();
        }
    }

    fn spaces_len(&self) -> usize {
        self.spaces.chars().count()
    }

    fn flush_spaces(&mut self) {
        let len = self.spaces_len();
        if len == 0 {
            return;
        }
        let limit = self.options.limit;
        let room = limit.saturating_sub(self.line_len);

        if len <= room {
            let spaces = std::mem::take(&mut self.spaces);
            self.write_str(&spaces);
            self.line_len += len;
            return;
        }

        tracing::trace!(len, room, limit, "splitting whitespace run across lines");
        self.write_str(&" ".repeat(room));
        let mut remaining = len - room;
        while remaining > limit {
            self.write_str("\n");
            self.write_str(&" ".repeat(limit));
            remaining -= limit;
        }
        self.write_str("\n");
        self.write_str(&" ".repeat(remaining));
        self.line_len = remaining;
        self.spaces.clear();
    }

    fn flush_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        self.flush_spaces();
        let (text, width) = self.word.take();
        self.write_str(&text);
        self.line_len += width;
    }

    fn break_line(&mut self) {
        if self.options.preserve_spaces {
            self.flush_spaces();
        }
        if !self.active_style.is_empty() {
            self.write_str(RESET);
        }
        self.write_str("\n");
        self.line_len = 0;
        self.spaces.clear();
        self.wrote_since_break = false;
    }

    fn write_str(&mut self, s: &str) {
        self.output.extend_from_slice(s.as_bytes());
    }

    #[cfg(test)]
    fn line_len(&self) -> usize {
        self.line_len
    }
}
