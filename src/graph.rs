//! The word graph: equal-length words joined by one-letter edits.
//!
//! Words of different lengths can never be neighbors, so the graph is split
//! into independent [`SameLengthGraph`]s keyed by word length and collected
//! in a [`WordGraph`]. Every real graph algorithm runs inside one subgraph.

pub mod node;
pub mod path;
pub mod same_length;
pub mod word_graph;

pub use node::*;
pub use same_length::*;
pub use word_graph::*;
