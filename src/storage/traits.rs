//! The storage trait the snapshot store writes through.

use std::io::{Read, Write};

use thiserror::Error;

use crate::error::{Result, WordForestError};

/// A flat namespace of named files.
///
/// Snapshots are replaced by writing a temporary file and renaming it over
/// the old one, so implementations must make `rename_file` replace an
/// existing target.
pub trait Storage: Send + Sync + std::fmt::Debug {
    fn open_input(&self, name: &str) -> Result<Box<dyn StorageInput>>;

    /// Create or truncate `name`. Contents are visible once the output is closed.
    fn create_output(&self, name: &str) -> Result<Box<dyn StorageOutput>>;

    fn file_exists(&self, name: &str) -> bool;

    /// Remove `name`. A missing file is not an error.
    fn delete_file(&self, name: &str) -> Result<()>;

    fn rename_file(&self, from: &str, to: &str) -> Result<()>;

    /// Make completed renames and deletes durable.
    fn sync(&self) -> Result<()>;

    /// Create an output under an unused `{prefix}_{n}.tmp` name.
    fn create_temp_output(&self, prefix: &str) -> Result<(String, Box<dyn StorageOutput>)> {
        let name = (0..MAX_TEMP_ATTEMPTS)
            .map(|n| format!("{prefix}_{n}.tmp"))
            .find(|name| !self.file_exists(name))
            .ok_or_else(|| StorageError::TempNamesExhausted(prefix.to_string()))?;
        let output = self.create_output(&name)?;
        Ok((name, output))
    }
}

const MAX_TEMP_ATTEMPTS: usize = 1024;

/// A readable file.
pub trait StorageInput: Read + Send + std::fmt::Debug {
    /// Length of the file in bytes.
    fn size(&self) -> u64;
}

/// A writable file.
pub trait StorageOutput: Write + Send + std::fmt::Debug {
    /// Bytes written so far.
    fn position(&self) -> u64;

    /// Flush buffered bytes and publish the file.
    fn close(&mut self) -> Result<()>;
}

/// Tuning for [`FileStorage`](crate::storage::FileStorage).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageConfig {
    /// Capacity of the read and write buffers.
    pub buffer_size: usize,
    /// fsync each file on close.
    pub sync_on_close: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            buffer_size: 64 * 1024,
            sync_on_close: true,
        }
    }
}

/// Failures of a storage backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("I/O error on {name}: {message}")]
    Io { name: String, message: String },

    #[error("No free temporary name for {0}")]
    TempNamesExhausted(String),

    #[error("Output {0} is already closed")]
    Closed(String),
}

impl StorageError {
    /// Classify an I/O failure on `name`.
    pub fn from_io(name: &str, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            StorageError::FileNotFound(name.to_string())
        } else {
            StorageError::Io {
                name: name.to_string(),
                message: err.to_string(),
            }
        }
    }
}

impl From<StorageError> for WordForestError {
    fn from(err: StorageError) -> Self {
        WordForestError::storage(err.to_string())
    }
}
