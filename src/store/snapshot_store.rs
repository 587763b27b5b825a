//! Loading and saving graph snapshots through a [`Storage`].

use std::sync::Arc;

use log::{debug, info};

use crate::error::{Result, WordForestError};
use crate::graph::WordGraph;
use crate::storage::Storage;
use crate::store::format::SnapshotFormat;
use crate::store::snapshot::GraphSnapshot;

/// Where explored graphs are restored from and saved to.
pub trait GraphStore: Send + Sync + std::fmt::Debug {
    /// Restore a previously saved graph, or `None` if nothing was saved yet.
    fn try_load(&self) -> Result<Option<WordGraph>>;

    /// Save a fully explored graph, replacing any previous one.
    fn save(&self, graph: &WordGraph) -> Result<()>;
}

/// A [`GraphStore`] keeping one snapshot file in a [`Storage`].
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    storage: Arc<dyn Storage>,
    name: String,
    format: SnapshotFormat,
}

impl SnapshotStore {
    /// Store snapshots as `<name>.<extension>` in `storage`.
    pub fn new<S: Into<String>>(
        storage: Arc<dyn Storage>,
        name: S,
        format: SnapshotFormat,
    ) -> Self {
        SnapshotStore {
            storage,
            name: name.into(),
            format,
        }
    }

    /// Name of the snapshot file inside the storage.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.format.extension())
    }

    pub fn exists(&self) -> bool {
        self.storage.file_exists(&self.file_name())
    }
}

impl GraphStore for SnapshotStore {
    fn try_load(&self) -> Result<Option<WordGraph>> {
        let file_name = self.file_name();
        if !self.storage.file_exists(&file_name) {
            debug!("No snapshot named {file_name}");
            return Ok(None);
        }

        let input = self.storage.open_input(&file_name)?;
        info!(
            "Reading pre-processed graph from {file_name} ({} bytes)",
            input.size()
        );
        let snapshot = self.format.decode(input).map_err(|e| {
            WordForestError::snapshot(format!("Failed to decode {file_name}: {e}"))
        })?;
        let graph = WordGraph::try_from(snapshot)?;

        info!(
            "Loaded pre-processed forest graph. {} distinct word lengths in graph",
            graph.distinct_lengths()
        );
        Ok(Some(graph))
    }

    fn save(&self, graph: &WordGraph) -> Result<()> {
        if !graph.is_fully_explored() {
            return Err(WordForestError::snapshot(
                "Cannot save a graph whose forests have not been explored",
            ));
        }

        let file_name = self.file_name();
        let snapshot = GraphSnapshot::from(graph);

        // Write next to the target and rename, so a failed save keeps the old snapshot.
        let (temp_name, mut output) = self.storage.create_temp_output(&self.name)?;
        let written = self
            .format
            .encode(&snapshot, &mut output)
            .map(|_| output.position())
            .and_then(|bytes| output.close().map(|_| bytes));
        drop(output);
        let bytes = match written {
            Ok(bytes) => bytes,
            Err(e) => {
                self.storage.delete_file(&temp_name)?;
                return Err(e);
            }
        };

        self.storage.rename_file(&temp_name, &file_name)?;
        self.storage.sync()?;

        info!(
            "Saved {} words in {} forests to {file_name} ({bytes} bytes)",
            graph.total_words(),
            graph.total_forests()
        );
        Ok(())
    }
}
