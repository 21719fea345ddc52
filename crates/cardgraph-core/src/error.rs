//! Error types for the card graph system.
//!
//! All errors are represented by the [`Error`] enum. The graph core itself is
//! infallible; errors come from file access, configuration and serialization.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// The core error type for all cardgraph operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// File or directory not found
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Invalid configuration
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// Serialization failure (JSON, YAML)
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Error::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization_error(reason: impl Into<String>) -> Self {
        Error::SerializationError {
            reason: reason.into(),
        }
    }
}
