//! Config subcommands handler

use std::path::Path;

use anyhow::{Context, Result};

use ansiwrap::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let toml_str = config
        .to_toml()
        .context("Failed to render configuration")?;
    print!("{}", toml_str);
    Ok(())
}
