//! ansiwrap - word wrapping for text that carries terminal escape sequences.
//!
//! The library side is [`wrap`]: a streaming [`WordWrap`] session plus the
//! one-shot helpers [`wrap_str`], [`wrap_bytes`] and [`hard_wrap`].
//! [`config`] and [`cli`] back the `ansiwrap` command.

pub mod cli;
pub mod config;
pub mod wrap;

pub use config::Config;
pub use wrap::{
    hard_wrap, strip_ansi, visible_width, wrap_bytes, wrap_str, wrap_with, WordWrap, WrapError,
    WrapOptions,
};
