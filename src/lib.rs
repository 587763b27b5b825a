//! # wordforest
//!
//! Partition a dictionary into word forests and answer word ladder queries.
//!
//! Two words are neighbors when they have the same length and differ in
//! exactly one position. A forest is a connected component of that neighbor
//! relation, so two words can be joined by a ladder of single-letter edits
//! exactly when they share a forest.
//!
//! ## Features
//!
//! - Dictionary loading with lowercase-alphabetic admission and length bounds
//! - Per-length subgraphs explored sequentially or in parallel with rayon
//! - Constant-time connectivity checks and BFS shortest ladders
//! - JSON or bincode snapshots so later runs skip construction
//!
//! ```
//! use wordforest::graph::WordGraph;
//!
//! let mut graph: WordGraph = ["cat", "cot", "cog", "dog", "pig"].into_iter().collect();
//! graph.explore_forests();
//!
//! assert!(graph.are_connected("cat", "dog"));
//! assert!(!graph.are_connected("cat", "pig"));
//! assert_eq!(graph.distance("cat", "dog"), Some(3));
//! ```

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod graph;
pub mod storage;
pub mod store;
pub mod util;

pub mod prelude {
    pub use crate::config::WordForestConfig;
    pub use crate::dictionary::{WordFilter, WordList};
    pub use crate::engine::{GraphOrigin, LoadedGraph, WordForestEngine};
    pub use crate::error::{Result, WordForestError};
    pub use crate::graph::{Reachability, SameLengthGraph, WordGraph};
    pub use crate::store::{GraphStore, SnapshotFormat, SnapshotStore};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
