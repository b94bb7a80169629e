//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::{Error, Result};
use crate::fibonacci::OverflowMode;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Default settings
    #[serde(default)]
    pub defaults: Defaults,
}

/// Default settings used when the command line leaves them out
#[derive(Debug, Deserialize)]
pub struct Defaults {
    /// Term to compute when no `N` is given
    #[serde(default = "default_n")]
    pub n: i64,

    /// Overflow handling when `--checked` is not passed
    #[serde(default)]
    pub overflow: OverflowMode,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            n: default_n(),
            overflow: OverflowMode::default(),
        }
    }
}

fn default_n() -> i64 {
    9
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}
