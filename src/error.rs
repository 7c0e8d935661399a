//! Error types for the coverage checker.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a coverage run
#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("Directory not found: {0}")]
    NotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoverageError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoverageError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for CoverageError {
    fn from(err: config::ConfigError) -> Self {
        CoverageError::Config(err.to_string())
    }
}
