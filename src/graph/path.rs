//! Shortest word ladders inside one subgraph.

use std::collections::VecDeque;

use crate::graph::same_length::SameLengthGraph;

impl SameLengthGraph {
    /// Find a shortest ladder from `from` to `to`.
    ///
    /// Returns the words of the ladder, starting with `from` and ending with
    /// `to`, or `None` when either word is absent or they live in different
    /// forests. When several ladders are equally short, which one is returned
    /// depends on adjacency order.
    ///
    /// The search runs backwards, from `to` towards `from`, so following the
    /// parent links out of `from` already yields the ladder in reading order.
    pub fn shortest_path(&self, from: &str, to: &str) -> Option<Vec<String>> {
        if !self.are_connected(from, to) {
            return None;
        }

        let start = self.id_of(from)?;
        let root = self.id_of(to)?;

        let mut parents: Vec<Option<usize>> = vec![None; self.len()];
        let mut visited = vec![false; self.len()];

        // Nodes are marked when queued, so each one enters the queue once.
        let mut queue = VecDeque::new();
        visited[root] = true;
        queue.push_back(root);

        while let Some(id) = queue.pop_front() {
            if id == start {
                return Some(self.trace_ladder(id, &parents));
            }

            for &next in self.node_by_id(id).neighbor_ids() {
                if !visited[next] {
                    visited[next] = true;
                    parents[next] = Some(id);
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// Number of one-letter edits on a shortest ladder, if one exists.
    pub fn distance(&self, from: &str, to: &str) -> Option<usize> {
        self.shortest_path(from, to).map(|ladder| ladder.len() - 1)
    }

    fn trace_ladder(&self, start: usize, parents: &[Option<usize>]) -> Vec<String> {
        let mut ladder = Vec::new();
        let mut current = Some(start);

        while let Some(id) = current {
            ladder.push(self.node_by_id(id).word().to_string());
            current = parents[id];
        }

        ladder
    }
}
