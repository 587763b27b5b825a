//! Storage abstraction layer for wordforest.
//!
//! Graph snapshots are written through the [`Storage`] trait so that the same
//! store code runs against a directory on disk or an in-memory map.

pub mod file;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use file::*;
pub use memory::*;
pub use traits::*;
