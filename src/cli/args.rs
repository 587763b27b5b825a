//! Command line argument parsing for the wordforest CLI using clap.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::WordForestConfig;
use crate::store::SnapshotFormat;

/// wordforest - connect words by single-letter edits
#[derive(Parser, Debug, Clone)]
#[command(name = "wordforest")]
#[command(about = "Partition a dictionary into word forests and find word ladders")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordForestArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDFOREST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Dictionary file, one word per line
    #[arg(short, long, value_name = "DICTIONARY_FILE", env = "WORDFOREST_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Directory holding the snapshot
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Snapshot encoding
    #[arg(long)]
    pub snapshot_format: Option<SnapshotFormat>,

    /// Shortest word length to admit
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Longest word length to admit
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Explore word lengths one after another
    #[arg(long)]
    pub no_parallel: bool,

    /// Worker threads for parallel exploration
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordForestArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            // 1 is the default, so a single -v already raises the level
            self.verbose.saturating_add(1)
        }
    }

    /// Flags that only take effect when the graph is built from the dictionary.
    pub fn build_overrides(&self) -> Vec<&'static str> {
        [
            (self.dictionary.is_some(), "--dictionary"),
            (self.min_length.is_some(), "--min-length"),
            (self.max_length.is_some(), "--max-length"),
        ]
        .into_iter()
        .filter_map(|(given, flag)| given.then_some(flag))
        .collect()
    }

    /// Merge the configuration file (if any) with the command line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<WordForestConfig> {
        let mut config = match &self.config {
            Some(path) => WordForestConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => WordForestConfig::default(),
        };

        if let Some(dictionary) = &self.dictionary {
            config.dictionary_path = dictionary.clone();
        }
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(format) = self.snapshot_format {
            config.snapshot_format = format;
        }
        if self.min_length.is_some() {
            config.filter.min_length = self.min_length;
        }
        if self.max_length.is_some() {
            config.filter.max_length = self.max_length;
        }
        if self.no_parallel {
            config.parallel = false;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the forests and save the snapshot
    Build(BuildArgs),

    /// Check whether two words are joined by a ladder
    Connected(PairArgs),

    /// Print the shortest ladder between two words
    Path(PairArgs),

    /// Show forest statistics
    Stats(StatsArgs),

    /// Run the built-in sample queries
    Demo,
}

/// Arguments for building the graph
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Rebuild from the dictionary even if a snapshot exists
    #[arg(long)]
    pub force: bool,
}

/// Two words to query
#[derive(Parser, Debug, Clone)]
pub struct PairArgs {
    #[arg(value_name = "FROM")]
    pub from: String,

    #[arg(value_name = "TO")]
    pub to: String,
}

/// Arguments for statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Include the per-length breakdown
    #[arg(long)]
    pub detailed: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
