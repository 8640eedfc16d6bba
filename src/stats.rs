//! Statistics engine
//!
//! Tokenizes a document into words, accumulates counts and a word-frequency
//! table, and exposes the two sort transforms applied to the repeated-words
//! table. Every operation here is a pure function of its input.

mod counter;
mod sort;
mod types;

pub use counter::compute;
pub use sort::{sort_alphabetical, sort_by_frequency};
pub use types::{DEFAULT_THRESHOLD, TextStats, WordCounts};
