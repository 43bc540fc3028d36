//! Subcommand handlers for the `ansiwrap` binary.

pub mod completions;
pub mod config;
pub mod wrap;
