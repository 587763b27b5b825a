//! Load-or-build orchestration.
//!
//! A run either restores an explored graph from its snapshot, skipping all
//! construction work, or reads the dictionary, explores every forest and
//! saves the result exactly once before answering queries.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::info;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};

use crate::config::WordForestConfig;
use crate::dictionary::{LoadStats, WordList};
use crate::error::{Result, WordForestError};
use crate::graph::WordGraph;
use crate::storage::{FileStorage, StorageConfig};
use crate::store::{GraphStore, SnapshotStore};

/// Where the graph of a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphOrigin {
    /// Restored from a saved snapshot.
    Restored,
    /// Built from the dictionary during this run.
    Built,
}

impl fmt::Display for GraphOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphOrigin::Restored => write!(f, "restored"),
            GraphOrigin::Built => write!(f, "built"),
        }
    }
}

/// An explored graph ready for queries.
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: WordGraph,
    pub origin: GraphOrigin,
    /// Dictionary counters, present when the graph was built.
    pub load_stats: Option<LoadStats>,
    pub elapsed: Duration,
}

/// Builds, restores and saves word graphs according to a [`WordForestConfig`].
#[derive(Debug, Clone)]
pub struct WordForestEngine {
    config: WordForestConfig,
}

impl WordForestEngine {
    /// Create an engine after validating the configuration.
    pub fn new(config: WordForestConfig) -> Result<Self> {
        config.validate()?;
        Ok(WordForestEngine { config })
    }

    /// The snapshot store in the configured data directory.
    pub fn open_store(&self) -> Result<SnapshotStore> {
        let storage = FileStorage::new(&self.config.data_dir, StorageConfig::default())?;
        Ok(SnapshotStore::new(
            Arc::new(storage),
            self.config.snapshot_name.clone(),
            self.config.snapshot_format,
        ))
    }

    /// Read the configured dictionary through the configured filter.
    pub fn load_dictionary(&self) -> Result<WordList> {
        info!(
            "Loading words from {}",
            self.config.dictionary_path.display()
        );
        let words =
            WordList::load_from_file(&self.config.dictionary_path, &self.config.word_filter())?;

        let stats = words.stats();
        info!(
            "Read {} lines: {} words accepted, {} rejected",
            stats.lines_read, stats.accepted, stats.rejected
        );
        Ok(words)
    }

    /// Bucket the words by length and explore every forest.
    pub fn build_graph(&self, words: &WordList) -> Result<WordGraph> {
        let mut graph: WordGraph = words.words().iter().map(String::as_str).collect();

        info!(
            "Assigning forests and analyzing neighbors. There are {} distinct word lengths",
            graph.distinct_lengths()
        );
        self.explore(&mut graph)?;
        info!(
            "Assigned {} words into {} forests",
            graph.total_words(),
            graph.total_forests()
        );

        Ok(graph)
    }

    fn explore(&self, graph: &mut WordGraph) -> Result<()> {
        if !self.config.parallel || graph.distinct_lengths() < 2 {
            graph.explore_forests();
            return Ok(());
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.thread_count())
            .build()
            .map_err(|e| WordForestError::other(format!("Failed to build thread pool: {e}")))?;
        pool.install(|| graph.explore_forests_parallel());
        Ok(())
    }

    /// Restore the graph from `store`, or build it and save it once.
    pub fn load_or_build(&self, store: &dyn GraphStore) -> Result<LoadedGraph> {
        let start = Instant::now();

        if let Some(graph) = store.try_load()? {
            return Ok(LoadedGraph {
                graph,
                origin: GraphOrigin::Restored,
                load_stats: None,
                elapsed: start.elapsed(),
            });
        }

        self.build_and_save(store, start)
    }

    /// Build from the dictionary and overwrite whatever `store` holds.
    pub fn rebuild(&self, store: &dyn GraphStore) -> Result<LoadedGraph> {
        self.build_and_save(store, Instant::now())
    }

    fn build_and_save(&self, store: &dyn GraphStore, start: Instant) -> Result<LoadedGraph> {
        let words = self.load_dictionary()?;
        let graph = self.build_graph(&words)?;
        store.save(&graph)?;

        Ok(LoadedGraph {
            graph,
            origin: GraphOrigin::Built,
            load_stats: Some(words.stats()),
            elapsed: start.elapsed(),
        })
    }
}
