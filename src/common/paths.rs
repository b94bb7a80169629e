//! Configuration paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `$XDG_CONFIG_HOME/fib-cli/` (usually `~/.config/fib-cli/`)
//! - macOS: `~/Library/Application Support/fib-cli/`
//! - Windows: `%APPDATA%\fib-cli\`

use std::path::PathBuf;

/// Application name used for platform directories
const APP_NAME: &str = "fib-cli";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
