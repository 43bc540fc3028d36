//! File-based configuration for the `ansiwrap` command.
//!
//! Lookup order: `--config <path>`, then `$ANSIWRAP_CONFIG`, then
//! `<config dir>/ansiwrap/config.toml` when it exists. Missing fields
//! take their defaults, so an empty file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::wrap::options::{DEFAULT_BREAKPOINTS, DEFAULT_NEWLINES};
use crate::wrap::WrapOptions;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "ANSIWRAP_CONFIG";

/// Tab replacement used for hard wrapping unless configured otherwise.
pub const DEFAULT_TAB_REPLACEMENT: &str = "    ";

/// Errors loading or writing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub wrap: WrapConfig,
}

/// The `[wrap]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapConfig {
    /// Column width. Unset means "use the terminal width".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    pub breakpoints: Vec<char>,
    pub newlines: Vec<char>,
    pub keep_newlines: bool,
    pub hard_wrap: bool,
    pub tab_replacement: String,
    pub preserve_spaces: bool,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            width: None,
            breakpoints: DEFAULT_BREAKPOINTS.to_vec(),
            newlines: DEFAULT_NEWLINES.to_vec(),
            keep_newlines: true,
            hard_wrap: false,
            tab_replacement: DEFAULT_TAB_REPLACEMENT.to_string(),
            preserve_spaces: false,
        }
    }
}

impl WrapConfig {
    /// Build session options wrapping at `width` columns.
    pub fn to_options(&self, width: usize) -> WrapOptions {
        WrapOptions {
            limit: width,
            breakpoints: self.breakpoints.clone(),
            newlines: self.newlines.clone(),
            keep_newlines: self.keep_newlines,
            hard_wrap: self.hard_wrap,
            tab_replacement: self.tab_replacement.clone(),
            preserve_spaces: self.preserve_spaces,
        }
    }
}

impl Config {
    /// Default config location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ansiwrap").join("config.toml"))
    }

    /// Load configuration following the documented lookup order.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load a specific file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
