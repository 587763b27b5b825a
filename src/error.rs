//! Error types for the wordforest library.
//!
//! All fallible operations return [`WordForestError`] through the crate-wide
//! [`Result`] alias. Only I/O and persistence problems are errors: an unknown
//! word, a cross-length query or an unreachable pair are ordinary answers and
//! never show up here.
//!
//! # Examples
//!
//! ```
//! use wordforest::error::{WordForestError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordForestError::config("min_length must not exceed max_length"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordforest operations.
#[derive(Error, Debug)]
pub enum WordForestError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Word source errors (unreadable or malformed dictionary)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Snapshot decoding or validation errors
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary snapshot encoding errors
    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordForestError.
pub type Result<T> = std::result::Result<T, WordForestError>;

impl WordForestError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        WordForestError::Dictionary(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        WordForestError::Storage(msg.into())
    }

    /// Create a new snapshot error.
    pub fn snapshot<S: Into<String>>(msg: S) -> Self {
        WordForestError::Snapshot(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordForestError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WordForestError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordForestError::dictionary("cannot open words");
        assert_eq!(error.to_string(), "Dictionary error: cannot open words");

        let error = WordForestError::snapshot("bad version");
        assert_eq!(error.to_string(), "Snapshot error: bad version");

        let error = WordForestError::config("threads must be positive");
        assert_eq!(
            error.to_string(),
            "Configuration error: threads must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = WordForestError::from(io_error);

        match error {
            WordForestError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_anyhow_conversion() {
        let error = WordForestError::from(anyhow::anyhow!("context lost"));
        assert!(matches!(error, WordForestError::Anyhow(_)));
    }
}
