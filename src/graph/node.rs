//! A single word in the graph.

/// Tag shared by every word of one connected component ("forest").
///
/// Tags are only unique within a single word length, and their numeric
/// values depend on exploration order. Compare them, never interpret them.
pub type ForestTag = u32;

/// Tag carried by a node that has not been explored yet.
pub const UNEXPLORED: ForestTag = 0;

/// A word together with its forest tag and one-letter neighbors.
///
/// Neighbors are stored as node ids inside the owning
/// [`SameLengthGraph`](crate::graph::SameLengthGraph). They are computed once,
/// when the node is first explored, and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordNode {
    word: String,
    forest: ForestTag,
    neighbors: Vec<usize>,
}

impl WordNode {
    pub(crate) fn new(word: String) -> Self {
        WordNode {
            word,
            forest: UNEXPLORED,
            neighbors: Vec::new(),
        }
    }

    pub(crate) fn explored(word: String, forest: ForestTag, neighbors: Vec<usize>) -> Self {
        WordNode {
            word,
            forest,
            neighbors,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn forest(&self) -> ForestTag {
        self.forest
    }

    pub fn is_explored(&self) -> bool {
        self.forest != UNEXPLORED
    }

    pub(crate) fn neighbor_ids(&self) -> &[usize] {
        &self.neighbors
    }

    /// Assign the forest tag and freeze the adjacency list.
    pub(crate) fn mark_explored(&mut self, forest: ForestTag, neighbors: Vec<usize>) {
        debug_assert!(!self.is_explored());
        debug_assert_ne!(forest, UNEXPLORED);
        self.forest = forest;
        self.neighbors = neighbors;
    }

    /// Drop the tag and adjacency so the node is explored again.
    pub(crate) fn reset(&mut self) {
        self.forest = UNEXPLORED;
        self.neighbors.clear();
    }
}
