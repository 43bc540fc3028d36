//! ansiwrap - word-wrap text without breaking terminal colors

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ansiwrap::cli::{Cli, Commands, ConfigCommands};

/// Environment variable holding the log filter (e.g. `ansiwrap=trace`).
const LOG_ENV: &str = "ANSIWRAP_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Config {
            command: ConfigCommands::Show,
        }) => commands::config::handle_show(config_path),
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
        None => commands::wrap::handle(&cli.wrap, config_path),
    }
}
