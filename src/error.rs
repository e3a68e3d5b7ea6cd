//! Error types for the file-backed side of reelmatch.
//!
//! Parsing failures come from `reelmatch-parser` and are wrapped here next to
//! the filesystem and configuration failures that scanning can hit.

use reelmatch_parser::ParseError;

/// Error type for reelmatch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A path given by the caller does not exist.
    #[error("Path not found: {0}")]
    NotFound(String),

    /// A file is neither a video nor a subtitle.
    #[error("Unsupported file: {0}")]
    Unsupported(String),

    /// A filename could not be identified.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Directory traversal failed.
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Configuration was rejected.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new Unsupported error.
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias using the reelmatch Error type.
pub type Result<T> = std::result::Result<T, Error>;
