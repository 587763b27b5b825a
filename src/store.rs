//! Persistence of explored word graphs.
//!
//! Exploring a large dictionary is expensive, so the explored graph is saved
//! as a snapshot and restored on later runs instead of being rebuilt.

pub mod format;
pub mod snapshot;
pub mod snapshot_store;

pub use format::*;
pub use snapshot::*;
pub use snapshot_store::*;
