use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CMakeLintError {
    /// Invalid invocation: bad filter grammar, unknown category, unreadable
    /// config, or an empty file list. Forces exit code 32.
    #[error("{0}")]
    Usage(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CMakeLintError {
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

pub type Result<T> = std::result::Result<T, CMakeLintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
