//! Word source handling: admission filtering and dictionary loading.

pub mod filter;
pub mod word_list;

pub use filter::*;
pub use word_list::*;
