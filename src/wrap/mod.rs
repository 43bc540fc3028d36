//! Streaming word wrapping that keeps terminal escape sequences intact.
//!
//! Text is reflowed to a fixed number of visible columns. Escape sequences
//! travel with the word they are attached to, never count toward the line
//! width, and the last active style is replayed after every line break so
//! colors survive the wrap.
//!
//! # Module Structure
//!
//! - [`options`] - Wrap parameters
//! - `engine` - Line-filling state machine
//! - `escape` - Escape sequence normalizer used by the engine
//! - [`writer`] - Streaming session API
//! - [`width`] - Printable width measurement

mod buffer;
mod engine;
mod error;
mod escape;
pub mod options;
pub mod width;
pub mod writer;

pub use error::WrapError;
pub use options::WrapOptions;
pub use width::{strip_ansi, visible_width};
pub use writer::WordWrap;

/// Word-wrap `bytes` at `limit` columns with default options.
pub fn wrap_bytes(bytes: &[u8], limit: usize) -> Vec<u8> {
    let mut wrapper = WordWrap::new(limit);
    wrapper.feed(bytes);
    wrapper.into_bytes()
}

/// Word-wrap `text` at `limit` columns with default options.
pub fn wrap_str(text: &str, limit: usize) -> String {
    wrap_with(WrapOptions::new(limit), text)
}

/// Hard-wrap `text` at exactly `limit` columns, even inside words.
///
/// Tabs are replaced with `tab_replacement` since their width depends on
/// where they land; pass the matching number of spaces.
pub fn hard_wrap(text: &str, limit: usize, tab_replacement: &str) -> String {
    wrap_with(WrapOptions::new(limit).hard_wrap(tab_replacement), text)
}

/// Wrap `text` in one go with custom options.
pub fn wrap_with(options: WrapOptions, text: &str) -> String {
    let mut wrapper = WordWrap::with_options(options);
    wrapper.feed(text.as_bytes());
    wrapper.into_string()
}
