//! Printable width measurement for text containing escape sequences.

use unicode_width::UnicodeWidthChar;
use vte::{Parser, Perform};

/// The escape introducer.
pub const ESC: char = '\x1b';

/// Whether `c` ends an escape sequence (`@`..`Z` or `a`..`z`).
pub fn is_terminator(c: char) -> bool {
    matches!(c, '\x40'..='\x5a' | '\x61'..='\x7a')
}

/// Display width of a single visible character.
///
/// Control characters and other zero-width code points count as 0.
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        return 0;
    }
    c.width().unwrap_or(0)
}

/// Number of terminal columns `text` occupies.
///
/// Bytes from an escape introducer up to and including its terminator
/// letter contribute nothing.
pub fn visible_width(text: &str) -> usize {
    // Same ESC..terminator rule as the line filler, so widths agree with
    // where it breaks. Not a full vte grammar.
    let mut in_escape = false;
    let mut width = 0;

    for c in text.chars() {
        if c == ESC {
            in_escape = true;
        } else if in_escape {
            if is_terminator(c) {
                in_escape = false;
            }
        } else {
            width += char_width(c);
        }
    }
    width
}

/// Collects printable text and layout controls, dropping everything else.
struct Stripper {
    out: String,
}

impl Perform for Stripper {
    fn print(&mut self, c: char) {
        self.out.push(c);
    }

    fn execute(&mut self, byte: u8) {
        if matches!(byte, b'\n' | b'\t' | b'\r') {
            self.out.push(byte as char);
        }
    }
}

/// Remove all terminal escape sequences from `text`.
pub fn strip_ansi(text: &str) -> String {
    let mut parser = Parser::new();
    let mut stripper = Stripper {
        out: String::with_capacity(text.len()),
    };
    parser.advance(&mut stripper, text.as_bytes());
    stripper.out
}
