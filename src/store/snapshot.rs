//! Snapshot types for a fully explored word graph.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordForestError};
use crate::graph::{ForestTag, SameLengthGraph, WordGraph};

pub const SNAPSHOT_VERSION: u32 = 1;
pub const DEFAULT_SNAPSHOT_NAME: &str = "wordForest";

/// Structural copy of a [`WordGraph`]: every word with its tag and neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub version: u32,
    pub subgraphs: Vec<SubgraphSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubgraphSnapshot {
    pub word_length: usize,
    pub next_forest: ForestTag,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub word: String,
    pub forest: ForestTag,
    pub neighbors: Vec<String>,
}

impl From<&SameLengthGraph> for SubgraphSnapshot {
    fn from(graph: &SameLengthGraph) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .map(|node| NodeSnapshot {
                word: node.word().to_string(),
                forest: node.forest(),
                neighbors: node
                    .neighbor_ids()
                    .iter()
                    .map(|&id| graph.node_by_id(id).word().to_string())
                    .collect(),
            })
            .collect();

        SubgraphSnapshot {
            word_length: graph.word_length(),
            next_forest: graph.next_forest(),
            nodes,
        }
    }
}

impl From<&WordGraph> for GraphSnapshot {
    fn from(graph: &WordGraph) -> Self {
        GraphSnapshot {
            version: SNAPSHOT_VERSION,
            subgraphs: graph.subgraphs().map(SubgraphSnapshot::from).collect(),
        }
    }
}

impl TryFrom<GraphSnapshot> for WordGraph {
    type Error = WordForestError;

    /// Restore a graph, checking that the snapshot describes a fully explored one.
    fn try_from(snapshot: GraphSnapshot) -> Result<Self> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(WordForestError::snapshot(format!(
                "Unsupported snapshot version: {}",
                snapshot.version
            )));
        }

        let mut graph = WordGraph::new();
        for subgraph in snapshot.subgraphs {
            if graph.subgraph(subgraph.word_length).is_some() {
                return Err(WordForestError::snapshot(format!(
                    "Duplicate subgraph for length {}",
                    subgraph.word_length
                )));
            }

            let entries = subgraph
                .nodes
                .into_iter()
                .map(|node| (node.word, node.forest, node.neighbors));
            graph.insert_subgraph(SameLengthGraph::restore(
                subgraph.word_length,
                subgraph.next_forest,
                entries,
            )?);
        }

        Ok(graph)
    }
}
