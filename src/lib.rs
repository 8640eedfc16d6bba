//! textstat library - command-line text analyzer
//!
//! This library exposes the text-statistics engine and its CLI plumbing
//! for testing purposes.

pub mod analyze;
pub mod config;
pub mod error;
pub mod fetch;
pub mod help;
pub mod prompt;
pub mod report;
pub mod stats;
pub mod strip;

// Re-export commonly used types for convenience
pub use analyze::{Options, analyze};
pub use config::{Config, SortOrder};
pub use error::TextStatError;
pub use stats::{TextStats, compute, sort_alphabetical, sort_by_frequency};
pub use strip::strip_tags;
