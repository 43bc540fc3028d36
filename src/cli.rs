//! Command-line definitions, shared by the binary and the man page generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
    " (",
    env!("ANSIWRAP_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ANSIWRAP_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "ansiwrap",
    version = VERSION,
    about = "Word-wrap text to a fixed width without breaking terminal colors",
    long_about = "Word-wrap text to a fixed width without breaking terminal colors.\n\n\
        Escape sequences never count toward the line width, and the active \
        style is restored at the start of every wrapped line.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub wrap: WrapArgs,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Options for the default wrap command.
#[derive(Debug, Clone, Default, Args)]
pub struct WrapArgs {
    /// Files to wrap; reads stdin when none are given or for "-"
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Wrap width in columns (0 copies input unchanged) [default: terminal width]
    #[arg(short, long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Break exactly at the width, even inside words
    #[arg(long)]
    pub hard: bool,

    /// Replacement for tabs when hard wrapping
    #[arg(long, value_name = "STR")]
    pub tab: Option<String>,

    /// Keep trailing whitespace at line breaks
    #[arg(long)]
    pub preserve_spaces: bool,

    /// Join input lines into one paragraph per input chunk
    #[arg(long)]
    pub join_lines: bool,

    /// Characters that may break a word (replaces the default "-")
    #[arg(long, value_name = "CHARS", allow_hyphen_values = true)]
    pub breakpoints: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
}
