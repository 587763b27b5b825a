//! All words of one length, with forest exploration and adjacency.

use std::collections::VecDeque;

use ahash::AHashMap;
use log::debug;

use crate::error::{Result, WordForestError};
use crate::graph::node::{ForestTag, UNEXPLORED, WordNode};
use crate::util::hamming::{are_neighbors, word_length};

/// The subgraph of every admitted word with one fixed length.
///
/// Nodes are owned here and addressed by id. Adjacency is not precomputed:
/// it is discovered while forests are explored, by comparing a node against
/// every other word of the subgraph. That pairwise scan makes a full
/// exploration quadratic in the number of words of this length.
#[derive(Debug, Clone)]
pub struct SameLengthGraph {
    /// Length, in characters, of every word in this subgraph.
    word_length: usize,
    /// Tag handed to the next forest found.
    next_forest: ForestTag,
    /// Number of nodes that already carry a forest tag.
    explored: usize,
    nodes: Vec<WordNode>,
    index: AHashMap<String, usize>,
}

impl SameLengthGraph {
    /// Create an empty subgraph for words of `word_length` characters.
    pub fn new(word_length: usize) -> Self {
        SameLengthGraph {
            word_length,
            next_forest: 1,
            explored: 0,
            nodes: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Add a word as a fresh, unexplored node.
    ///
    /// Adding a word that is already present leaves a single node for it.
    /// Adding anything once exploration has started discards all forest tags
    /// and adjacency, so the next exploration sees the complete word set.
    ///
    /// # Panics
    ///
    /// Panics if the word length does not match the subgraph. Callers route
    /// words by length, so a mismatch is a bug upstream.
    pub fn add_word<S: Into<String>>(&mut self, word: S) {
        let word = word.into();
        let length = word_length(&word);
        assert_eq!(
            length, self.word_length,
            "word {word:?} has length {length} but the subgraph holds length {}",
            self.word_length
        );

        if self.explored > 0 {
            debug!(
                "Adding {word:?} after exploration; resetting forests of length {}",
                self.word_length
            );
            self.reset_forests();
        }

        if !self.index.contains_key(&word) {
            self.index.insert(word.clone(), self.nodes.len());
            self.nodes.push(WordNode::new(word));
        }
    }

    fn reset_forests(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
        self.next_forest = 1;
        self.explored = 0;
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of words in the subgraph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of forests assigned so far.
    pub fn total_forests(&self) -> usize {
        (self.next_forest - 1) as usize
    }

    /// Whether every node carries a forest tag.
    pub fn is_fully_explored(&self) -> bool {
        self.explored == self.nodes.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn node(&self, word: &str) -> Option<&WordNode> {
        self.index.get(word).map(|&id| &self.nodes[id])
    }

    /// Forest tag of `word`, or `None` if the word is absent or unexplored.
    pub fn forest_of(&self, word: &str) -> Option<ForestTag> {
        self.node(word)
            .filter(|node| node.is_explored())
            .map(WordNode::forest)
    }

    /// The explored neighbors of `word`.
    pub fn neighbors(&self, word: &str) -> Option<Vec<&str>> {
        self.node(word).map(|node| {
            node.neighbor_ids()
                .iter()
                .map(|&id| self.nodes[id].word())
                .collect()
        })
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(WordNode::word)
    }

    pub fn nodes(&self) -> &[WordNode] {
        &self.nodes
    }

    pub(crate) fn id_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub(crate) fn node_by_id(&self, id: usize) -> &WordNode {
        &self.nodes[id]
    }

    pub(crate) fn next_forest(&self) -> ForestTag {
        self.next_forest
    }

    /// Ids of every node exactly one letter away from node `id`.
    fn compute_neighbors(&self, id: usize) -> Vec<usize> {
        let word = self.nodes[id].word();

        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, other)| are_neighbors(word, other.word()))
            .map(|(other_id, _)| other_id)
            .collect()
    }

    /// Tag every node reachable from `seed` with the current forest tag.
    ///
    /// Adjacency is computed for each node as it is tagged. Neighbors are
    /// queued whether tagged or not; the check happens when a node is popped,
    /// so a node queued by several neighbors is only processed once.
    ///
    /// Returns the number of nodes tagged by this call.
    pub(crate) fn explore_forest(&mut self, seed: usize) -> usize {
        let forest = self.next_forest;
        let mut tagged = 0;

        let mut queue = VecDeque::new();
        queue.push_back(seed);

        while let Some(id) = queue.pop_front() {
            if self.nodes[id].is_explored() {
                continue;
            }

            let neighbors = self.compute_neighbors(id);
            queue.extend(neighbors.iter().copied());
            self.nodes[id].mark_explored(forest, neighbors);
            tagged += 1;
        }

        self.explored += tagged;
        tagged
    }

    /// Explore every forest of the subgraph.
    ///
    /// Afterwards each node has a non-zero tag and adjacency list, and two
    /// nodes share a tag exactly when a one-letter-edit chain joins them.
    /// Returns the number of forests found by this call.
    pub fn explore_all_forests(&mut self) -> usize {
        let mut found = 0;

        for id in 0..self.nodes.len() {
            if !self.nodes[id].is_explored() {
                self.explore_forest(id);
                self.next_forest += 1;
                found += 1;
            }
        }

        debug!(
            "Explored {} words of length {} into {} forests",
            self.nodes.len(),
            self.word_length,
            self.total_forests()
        );

        found
    }

    /// Whether both words are present and explored into the same forest.
    pub fn are_connected(&self, w1: &str, w2: &str) -> bool {
        match (self.node(w1), self.node(w2)) {
            (Some(a), Some(b)) => a.is_explored() && a.forest() == b.forest(),
            _ => false,
        }
    }

    /// Size of the largest forest, or 0 for an empty subgraph.
    pub fn largest_forest(&self) -> usize {
        let mut sizes: AHashMap<ForestTag, usize> = AHashMap::new();
        for node in self.nodes.iter().filter(|node| node.is_explored()) {
            *sizes.entry(node.forest()).or_insert(0) += 1;
        }
        sizes.values().copied().max().unwrap_or(0)
    }

    /// Rebuild an explored subgraph from `(word, forest, neighbor words)` entries.
    ///
    /// The entries must describe a fully explored subgraph: unique words of the
    /// right length, every neighbor listed once on both sides, and one connected
    /// forest per tag in `1..next_forest`.
    pub(crate) fn restore<I>(
        length: usize,
        next_forest: ForestTag,
        entries: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (String, ForestTag, Vec<String>)>,
    {
        if next_forest == UNEXPLORED {
            return Err(WordForestError::snapshot(format!(
                "Subgraph of length {length} has an invalid forest counter"
            )));
        }

        let mut index = AHashMap::new();
        let mut pending = Vec::new();

        for (id, (word, forest, neighbors)) in entries.into_iter().enumerate() {
            if word_length(&word) != length {
                return Err(WordForestError::snapshot(format!(
                    "Word {word:?} stored in subgraph of length {length}"
                )));
            }
            if forest == UNEXPLORED || forest >= next_forest {
                return Err(WordForestError::snapshot(format!(
                    "Word {word:?} has invalid forest tag {forest}"
                )));
            }
            if index.insert(word.clone(), id).is_some() {
                return Err(WordForestError::snapshot(format!(
                    "Word {word:?} appears twice in subgraph of length {length}"
                )));
            }
            pending.push((word, forest, neighbors));
        }

        let mut nodes = Vec::with_capacity(pending.len());
        for (word, forest, neighbors) in pending {
            let mut ids = Vec::with_capacity(neighbors.len());
            for neighbor in neighbors {
                let id = index.get(&neighbor).copied().ok_or_else(|| {
                    WordForestError::snapshot(format!(
                        "Neighbor {neighbor:?} of {word:?} is not in the graph"
                    ))
                })?;
                if !are_neighbors(&word, &neighbor) {
                    return Err(WordForestError::snapshot(format!(
                        "{word:?} and {neighbor:?} are not one letter apart"
                    )));
                }
                if ids.contains(&id) {
                    return Err(WordForestError::snapshot(format!(
                        "Neighbor {neighbor:?} of {word:?} is listed twice"
                    )));
                }
                ids.push(id);
            }
            nodes.push(WordNode::explored(word, forest, ids));
        }

        for (id, node) in nodes.iter().enumerate() {
            for &other in node.neighbor_ids() {
                let neighbor = &nodes[other];
                if neighbor.forest() != node.forest() || !neighbor.neighbor_ids().contains(&id) {
                    return Err(WordForestError::snapshot(format!(
                        "Adjacency between {:?} and {:?} is inconsistent",
                        node.word(),
                        neighbor.word()
                    )));
                }
            }
        }

        check_adjacency_complete(&nodes)?;
        check_forests_connected(&nodes, next_forest)?;

        Ok(SameLengthGraph {
            word_length: length,
            next_forest,
            explored: nodes.len(),
            nodes,
            index,
        })
    }
}

/// Every word must list all of its one-letter neighbors in the subgraph.
///
/// Words sharing a one-position wildcard pattern are exactly the neighbors
/// at that position, so the expected degree is counted from pattern buckets
/// instead of comparing all pairs.
fn check_adjacency_complete(nodes: &[WordNode]) -> Result<()> {
    fn patterns(word: &str) -> impl Iterator<Item = (usize, String)> + '_ {
        word.char_indices().enumerate().map(move |(position, (offset, c))| {
            let mut pattern = String::with_capacity(word.len());
            pattern.push_str(&word[..offset]);
            pattern.push('*');
            pattern.push_str(&word[offset + c.len_utf8()..]);
            (position, pattern)
        })
    }

    let mut buckets: AHashMap<(usize, String), usize> = AHashMap::new();
    for node in nodes {
        for key in patterns(node.word()) {
            *buckets.entry(key).or_insert(0) += 1;
        }
    }

    for node in nodes {
        let expected: usize = patterns(node.word())
            .map(|key| buckets.get(&key).map_or(0, |count| count - 1))
            .sum();
        if node.neighbor_ids().len() != expected {
            return Err(WordForestError::snapshot(format!(
                "{:?} lists {} neighbors but has {expected} in the graph",
                node.word(),
                node.neighbor_ids().len()
            )));
        }
    }
    Ok(())
}

/// Each forest tag must name exactly one connected component, and the
/// counter must sit one past the number of forests.
fn check_forests_connected(nodes: &[WordNode], next_forest: ForestTag) -> Result<()> {
    let mut members: AHashMap<ForestTag, usize> = AHashMap::new();
    for node in nodes {
        *members.entry(node.forest()).or_insert(0) += 1;
    }

    let mut seen = vec![false; nodes.len()];
    for seed in 0..nodes.len() {
        if seen[seed] {
            continue;
        }

        let mut reached = 0;
        let mut queue = VecDeque::from([seed]);
        seen[seed] = true;
        while let Some(id) = queue.pop_front() {
            reached += 1;
            for &next in nodes[id].neighbor_ids() {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }

        // A second component under the same tag always falls short.
        let forest = nodes[seed].forest();
        let expected = members.get(&forest).copied().unwrap_or(0);
        if reached != expected {
            return Err(WordForestError::snapshot(format!(
                "Forest {forest} of {:?} is not connected ({reached} of {expected} words reachable)",
                nodes[seed].word()
            )));
        }
    }

    if members.len() + 1 != next_forest as usize {
        return Err(WordForestError::snapshot(format!(
            "Forest counter {next_forest} does not match {} forests",
            members.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::hamming::hamming_distance;

    fn subgraph(words: &[&str]) -> SameLengthGraph {
        let mut graph = SameLengthGraph::new(3);
        for word in words {
            graph.add_word(*word);
        }
        graph
    }

    #[test]
    fn test_add_word_creates_unexplored_nodes() {
        let graph = subgraph(&["cat", "cot", "cat"]);
        assert_eq!(graph.len(), 2);
        assert!(graph.contains("cat"));
        assert_eq!(graph.forest_of("cat"), None);
        assert!(!graph.is_fully_explored());
        assert_eq!(graph.total_forests(), 0);
    }

    #[test]
    #[should_panic(expected = "subgraph holds length 3")]
    fn test_add_word_with_wrong_length_panics() {
        let mut graph = SameLengthGraph::new(3);
        graph.add_word("goat");
    }

    #[test]
    fn test_explore_forest_counts_tagged_nodes() {
        let mut graph = subgraph(&["cat", "cot", "cog", "dog", "pig"]);
        let seed = graph.id_of("cat").unwrap();

        assert_eq!(graph.explore_forest(seed), 4);
        assert!(graph.node("dog").unwrap().is_explored());
        assert!(!graph.node("pig").unwrap().is_explored());

        // Already tagged, nothing new to do.
        assert_eq!(graph.explore_forest(seed), 0);
    }

    #[test]
    fn test_explore_all_forests() {
        let mut graph = subgraph(&["cat", "cot", "cog", "dog", "cag", "pig", "big"]);
        assert_eq!(graph.explore_all_forests(), 2);
        assert!(graph.is_fully_explored());
        assert_eq!(graph.total_forests(), 2);

        assert!(graph.are_connected("cat", "dog"));
        assert!(graph.are_connected("pig", "big"));
        assert!(!graph.are_connected("cat", "pig"));
        assert_ne!(graph.forest_of("cat"), graph.forest_of("pig"));
        assert_eq!(graph.largest_forest(), 5);

        // A second pass finds nothing new.
        assert_eq!(graph.explore_all_forests(), 0);
        assert_eq!(graph.total_forests(), 2);
    }

    #[test]
    fn test_adjacency_is_exact_and_symmetric() {
        let mut graph = subgraph(&["cat", "cot", "cog", "dog", "cag", "bat", "bag"]);
        graph.explore_all_forests();

        for word in graph.words() {
            let neighbors = graph.neighbors(word).unwrap();
            assert!(!neighbors.contains(&word));
            for neighbor in neighbors {
                assert_eq!(hamming_distance(word, neighbor), Some(1));
                assert!(graph.neighbors(neighbor).unwrap().contains(&word));
            }
        }
    }

    #[test]
    fn test_are_connected_before_exploration() {
        let graph = subgraph(&["cat", "pig"]);
        assert!(!graph.are_connected("cat", "pig"));
        assert!(!graph.are_connected("cat", "cat"));
    }

    #[test]
    fn test_are_connected_unknown_word() {
        let mut graph = subgraph(&["cat", "cot"]);
        graph.explore_all_forests();
        assert!(!graph.are_connected("cat", "zzz"));
        assert!(!graph.are_connected("zzz", "zzz"));
        assert!(graph.are_connected("cat", "cat"));
    }

    #[test]
    fn test_adding_after_exploration_resets_forests() {
        let mut graph = subgraph(&["cat", "cog"]);
        graph.explore_all_forests();
        assert!(!graph.are_connected("cat", "cog"));

        graph.add_word("cot");
        assert_eq!(graph.total_forests(), 0);
        assert!(!graph.is_fully_explored());

        graph.explore_all_forests();
        assert!(graph.are_connected("cat", "cog"));
        assert_eq!(graph.total_forests(), 1);
        assert_eq!(graph.neighbors("cat").unwrap(), vec!["cot"]);
    }

    #[test]
    fn test_restore_round_trip() {
        let mut graph = subgraph(&["cat", "cot", "pig"]);
        graph.explore_all_forests();

        let entries = graph.nodes().iter().map(|node| {
            (
                node.word().to_string(),
                node.forest(),
                graph
                    .neighbors(node.word())
                    .unwrap()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            )
        });
        let restored = SameLengthGraph::restore(3, graph.next_forest(), entries).unwrap();

        assert_eq!(restored.len(), 3);
        assert!(restored.is_fully_explored());
        assert_eq!(restored.total_forests(), 2);
        assert!(restored.are_connected("cat", "cot"));
        assert!(!restored.are_connected("cat", "pig"));
    }

    #[test]
    fn test_restore_rejects_unknown_neighbor() {
        let entries = vec![("cat".to_string(), 1, vec!["cot".to_string()])];
        let result = SameLengthGraph::restore(3, 2, entries);
        assert!(matches!(result, Err(WordForestError::Snapshot(_))));
    }

    #[test]
    fn test_restore_rejects_asymmetric_adjacency() {
        let entries = vec![
            ("cat".to_string(), 1, vec!["cot".to_string()]),
            ("cot".to_string(), 1, vec![]),
        ];
        let result = SameLengthGraph::restore(3, 2, entries);
        assert!(matches!(result, Err(WordForestError::Snapshot(_))));
    }

    #[test]
    fn test_restore_rejects_unlinked_words_sharing_a_forest() {
        let entries = vec![
            ("cat".to_string(), 1, vec![]),
            ("pig".to_string(), 1, vec![]),
        ];
        let result = SameLengthGraph::restore(3, 2, entries);
        assert!(matches!(result, Err(WordForestError::Snapshot(_))));
    }

    #[test]
    fn test_restore_rejects_missing_adjacency() {
        let entries = vec![
            ("cat".to_string(), 1, vec![]),
            ("cot".to_string(), 2, vec![]),
        ];
        let result = SameLengthGraph::restore(3, 3, entries);
        assert!(matches!(result, Err(WordForestError::Snapshot(_))));
    }

    #[test]
    fn test_restore_rejects_inflated_forest_counter() {
        let entries = vec![
            ("cat".to_string(), 1, vec!["cot".to_string()]),
            ("cot".to_string(), 1, vec!["cat".to_string()]),
            ("pig".to_string(), 2, vec![]),
        ];
        assert!(SameLengthGraph::restore(3, 3, entries.clone()).is_ok());

        let result = SameLengthGraph::restore(3, 9, entries);
        assert!(matches!(result, Err(WordForestError::Snapshot(_))));
    }

    #[test]
    fn test_restore_rejects_duplicate_neighbor() {
        let entries = vec![
            ("cat".to_string(), 1, vec!["cot".to_string(), "cot".to_string()]),
            ("cot".to_string(), 1, vec!["cat".to_string()]),
        ];
        let result = SameLengthGraph::restore(3, 2, entries);
        assert!(matches!(result, Err(WordForestError::Snapshot(_))));
    }

    #[test]
    fn test_restore_rejects_unexplored_node() {
        let entries = vec![("cat".to_string(), UNEXPLORED, vec![])];
        let result = SameLengthGraph::restore(3, 2, entries);
        assert!(matches!(result, Err(WordForestError::Snapshot(_))));
    }
}
