//! Core error types for minic-util crate
//!
//! This module defines error types used by source readers and source maps.
//! Lexical problems are never errors here: they are diagnostics.

use thiserror::Error;

/// Error raised while reading characters from a source
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying reader failed
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not valid UTF-8 on the given line
    #[error("source is not valid UTF-8 at line {line}")]
    InvalidUtf8 { line: u64 },
}

/// Error type for source map operations
#[derive(Debug, Error)]
pub enum SourceMapError {
    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

/// Result type alias for source reading
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
