//! Configuration for building and persisting word forests.
//!
//! # Examples
//!
//! ```
//! use wordforest::config::WordForestConfig;
//! use wordforest::store::SnapshotFormat;
//!
//! let mut config = WordForestConfig::default();
//! config.filter.min_length = Some(3);
//! config.snapshot_format = SnapshotFormat::Bincode;
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.snapshot_file_name(), "wordForest.bin");
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dictionary::{FilterConfig, WordFilter};
use crate::error::{Result, WordForestError};
use crate::store::{DEFAULT_SNAPSHOT_NAME, SnapshotFormat};

pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

/// Settings for one wordforest run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordForestConfig {
    /// Dictionary file with one candidate word per line.
    pub dictionary_path: PathBuf,
    /// Directory holding the snapshot.
    pub data_dir: PathBuf,
    /// Snapshot base name; the extension comes from the format.
    pub snapshot_name: String,
    pub snapshot_format: SnapshotFormat,
    /// Length bounds for admitted words.
    pub filter: FilterConfig,
    /// Explore word lengths concurrently.
    pub parallel: bool,
    /// Worker threads for parallel exploration (defaults to the CPU count).
    pub threads: Option<usize>,
}

impl Default for WordForestConfig {
    fn default() -> Self {
        WordForestConfig {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            data_dir: PathBuf::from("."),
            snapshot_name: DEFAULT_SNAPSHOT_NAME.to_string(),
            snapshot_format: SnapshotFormat::Json,
            filter: FilterConfig::default(),
            parallel: true,
            threads: None,
        }
    }
}

impl WordForestConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            WordForestError::config(format!("Failed to open {}: {e}", path.display()))
        })?;
        let config: WordForestConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings for contradictions.
    pub fn validate(&self) -> Result<()> {
        if self.snapshot_name.trim().is_empty() {
            return Err(WordForestError::config("snapshot_name must not be empty"));
        }

        if self.filter.min_length == Some(0) || self.filter.max_length == Some(0) {
            return Err(WordForestError::config("length bounds must be at least 1"));
        }

        if let (Some(min), Some(max)) = (self.filter.min_length, self.filter.max_length)
            && min > max
        {
            return Err(WordForestError::config(format!(
                "min_length ({min}) must not exceed max_length ({max})"
            )));
        }

        if self.threads == Some(0) {
            return Err(WordForestError::config("threads must be at least 1"));
        }

        Ok(())
    }

    pub fn word_filter(&self) -> WordFilter {
        WordFilter::from(&self.filter)
    }

    pub fn snapshot_file_name(&self) -> String {
        format!(
            "{}.{}",
            self.snapshot_name,
            self.snapshot_format.extension()
        )
    }

    /// Number of worker threads used for parallel exploration.
    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}
