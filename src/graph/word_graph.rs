//! The complete word graph, partitioned by word length.

use std::collections::BTreeMap;
use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::graph::same_length::SameLengthGraph;
use crate::util::hamming::word_length;

/// Why two words are, or are not, connected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Reachability {
    /// Both words belong to the same forest.
    Connected,
    /// Both words exist but belong to different forests.
    Disconnected,
    /// The words have different lengths, so no ladder can join them.
    LengthMismatch { left: usize, right: usize },
    /// The word is not in the graph.
    UnknownWord { word: String },
}

impl Reachability {
    pub fn is_connected(&self) -> bool {
        matches!(self, Reachability::Connected)
    }
}

impl fmt::Display for Reachability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reachability::Connected => write!(f, "connected"),
            Reachability::Disconnected => write!(f, "in different forests"),
            Reachability::LengthMismatch { left, right } => {
                write!(f, "length mismatch ({left} vs {right})")
            }
            Reachability::UnknownWord { word } => write!(f, "unknown word '{word}'"),
        }
    }
}

/// Word and forest counts for one word length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthStats {
    pub word_length: usize,
    pub words: usize,
    pub forests: usize,
    pub largest_forest: usize,
}

/// Every admitted word, split into one [`SameLengthGraph`] per length.
///
/// No edge ever crosses two lengths, so this type only routes words and
/// queries to the right subgraph and aggregates counts.
///
/// # Examples
///
/// ```
/// use wordforest::graph::WordGraph;
///
/// let mut graph = WordGraph::new();
/// for word in ["cat", "cot", "cog", "dog", "pig"] {
///     graph.add_word(word);
/// }
/// graph.explore_forests();
///
/// assert!(graph.are_connected("cat", "dog"));
/// assert!(!graph.are_connected("cat", "pig"));
/// assert_eq!(graph.shortest_path("cat", "dog").map(|ladder| ladder.len()), Some(4));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    graphs: BTreeMap<usize, SameLengthGraph>,
}

impl WordGraph {
    pub fn new() -> Self {
        WordGraph::default()
    }

    /// Add a word to the subgraph of its length, creating that subgraph on first use.
    pub fn add_word<S: Into<String>>(&mut self, word: S) {
        let word = word.into();
        let length = word_length(&word);
        self.graphs
            .entry(length)
            .or_insert_with(|| SameLengthGraph::new(length))
            .add_word(word);
    }

    /// Explore the forests of every subgraph, one after another.
    pub fn explore_forests(&mut self) {
        for graph in self.graphs.values_mut() {
            graph.explore_all_forests();
        }
    }

    /// Explore the forests of every subgraph on the current rayon pool.
    ///
    /// Subgraphs share nothing, so each one is explored on its own task.
    pub fn explore_forests_parallel(&mut self) {
        self.graphs.par_iter_mut().for_each(|(_, graph)| {
            graph.explore_all_forests();
        });
    }

    /// Explain whether `w1` and `w2` are connected.
    pub fn reachability(&self, w1: &str, w2: &str) -> Reachability {
        let left = word_length(w1);
        let right = word_length(w2);
        if left != right {
            return Reachability::LengthMismatch { left, right };
        }

        let Some(graph) = self.graphs.get(&left) else {
            return Reachability::UnknownWord {
                word: w1.to_string(),
            };
        };

        for word in [w1, w2] {
            if !graph.contains(word) {
                return Reachability::UnknownWord {
                    word: word.to_string(),
                };
            }
        }

        if graph.are_connected(w1, w2) {
            Reachability::Connected
        } else {
            Reachability::Disconnected
        }
    }

    /// Whether a ladder joins `w1` and `w2`.
    ///
    /// Unknown words and words of different lengths are simply not connected.
    pub fn are_connected(&self, w1: &str, w2: &str) -> bool {
        self.same_length_pair(w1, w2)
            .is_some_and(|graph| graph.are_connected(w1, w2))
    }

    /// A shortest ladder from `w1` to `w2`, if one exists.
    pub fn shortest_path(&self, w1: &str, w2: &str) -> Option<Vec<String>> {
        self.same_length_pair(w1, w2)?.shortest_path(w1, w2)
    }

    /// Number of edits on a shortest ladder from `w1` to `w2`, if one exists.
    pub fn distance(&self, w1: &str, w2: &str) -> Option<usize> {
        self.same_length_pair(w1, w2)?.distance(w1, w2)
    }

    fn same_length_pair(&self, w1: &str, w2: &str) -> Option<&SameLengthGraph> {
        let length = word_length(w1);
        if length != word_length(w2) {
            return None;
        }
        self.graphs.get(&length)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.graphs
            .get(&word_length(word))
            .is_some_and(|graph| graph.contains(word))
    }

    /// The subgraph holding words of `length` characters.
    pub fn subgraph(&self, length: usize) -> Option<&SameLengthGraph> {
        self.graphs.get(&length)
    }

    /// Subgraphs in increasing word length.
    pub fn subgraphs(&self) -> impl Iterator<Item = &SameLengthGraph> {
        self.graphs.values()
    }

    pub(crate) fn insert_subgraph(&mut self, graph: SameLengthGraph) {
        self.graphs.insert(graph.word_length(), graph);
    }

    pub fn total_words(&self) -> usize {
        self.graphs.values().map(SameLengthGraph::len).sum()
    }

    pub fn total_forests(&self) -> usize {
        self.graphs.values().map(SameLengthGraph::total_forests).sum()
    }

    pub fn distinct_lengths(&self) -> usize {
        self.graphs.len()
    }

    pub fn is_fully_explored(&self) -> bool {
        self.graphs.values().all(SameLengthGraph::is_fully_explored)
    }

    /// Per-length counts, in increasing word length.
    pub fn length_stats(&self) -> Vec<LengthStats> {
        self.graphs
            .values()
            .map(|graph| LengthStats {
                word_length: graph.word_length(),
                words: graph.len(),
                forests: graph.total_forests(),
                largest_forest: graph.largest_forest(),
            })
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for WordGraph {
    /// Collect words into an unexplored graph.
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut graph = WordGraph::new();
        for word in words {
            graph.add_word(word);
        }
        graph
    }
}
