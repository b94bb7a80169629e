//! Error types for the Fibonacci CLI

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Fibonacci CLI
#[derive(Error, Debug)]
pub enum Error {
    // === Computation Errors ===
    #[error("Invalid argument: n must be non-negative, got {0}")]
    InvalidArgument(i64),

    #[error("F({n}) does not fit in a 64-bit signed integer (largest supported n is {max})", max = crate::fibonacci::MAX_CHECKED_N)]
    Overflow { n: i64 },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },
}

impl Error {
    /// Create a file read error from a path and the underlying IO error
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}
