//! Error handling module for the minit CLI.
//!
//! Lexical problems in the scanned files are diagnostics, not errors. The
//! variants here cover what stops the driver itself.

use std::path::PathBuf;

use minic_util::SourceError;
use thiserror::Error;

/// Main error type for the minit CLI application.
#[derive(Error, Debug)]
pub enum MinitError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be opened.
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: SourceError,
    },

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using MinitError.
pub type Result<T> = std::result::Result<T, MinitError>;
