//! Default command: wrap files or stdin to stdout.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use ansiwrap::cli::WrapArgs;
use ansiwrap::{Config, WordWrap, WrapOptions};

/// Width used when stdout is not a terminal and none is configured.
const FALLBACK_WIDTH: usize = 80;

/// Wrap every input in order, as one continuous stream.
pub fn handle(args: &WrapArgs, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let options = resolve_options(args, &config);
    tracing::debug!(?options, "wrapping");

    if args.files.is_empty() && atty::is(atty::Stream::Stdin) {
        bail!("No input: pass one or more files, or pipe text on stdin");
    }

    let join_lines = !options.keep_newlines;
    let mut session = WordWrap::with_options(options);
    let stdin_only = [PathBuf::from("-")];
    let inputs = if args.files.is_empty() {
        &stdin_only[..]
    } else {
        &args.files[..]
    };

    if join_lines {
        // Joining trims and collapses per write, so the whole input must
        // arrive in one write regardless of read buffer or file boundaries.
        let mut joined = Vec::new();
        for path in inputs {
            copy_input(path, &mut joined)?;
        }
        session.write(&joined)?;
    } else {
        for path in inputs {
            copy_input(path, &mut session)?;
        }
    }
    session.finish()?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(session.result()?)
        .context("Failed to write output")?;
    stdout.flush().context("Failed to write output")?;
    Ok(())
}

/// Merge command-line flags over the config file.
pub fn resolve_options(args: &WrapArgs, config: &Config) -> WrapOptions {
    let width = args
        .width
        .or(config.wrap.width)
        .unwrap_or_else(terminal_width);

    let mut options = config.wrap.to_options(width);
    if args.hard {
        options.hard_wrap = true;
    }
    if let Some(tab) = &args.tab {
        options.tab_replacement = tab.clone();
    }
    if args.preserve_spaces {
        options.preserve_spaces = true;
    }
    if args.join_lines {
        options.keep_newlines = false;
    }
    if let Some(chars) = &args.breakpoints {
        options.breakpoints = chars.chars().collect();
    }
    options
}

fn copy_input<W: Write>(path: &Path, sink: &mut W) -> Result<()> {
    if path == Path::new("-") {
        io::copy(&mut io::stdin().lock(), sink).context("Failed to read stdin")?;
        return Ok(());
    }
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    io::copy(&mut file, sink).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(())
}

fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| usize::from(w))
        .unwrap_or(FALLBACK_WIDTH)
}
