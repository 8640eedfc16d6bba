//! Composition of the engine steps for one document.

use crate::config::SortOrder;
use crate::stats::{self, TextStats};
use crate::strip::strip_tags;

/// How one analysis run should treat the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Strip HTML tags before counting.
    pub strip_tags: bool,
    /// Ordering applied to the repeated-words table.
    pub sort: SortOrder,
    /// Minimum count a word must exceed to be reported.
    pub threshold: usize,
}

/// Run the engine over an already-fetched document: optional tag strip,
/// counting, then the requested sort of the repeated-words table.
pub fn analyze(text: &str, options: Options) -> TextStats {
    let mut stats = if options.strip_tags {
        stats::compute(&strip_tags(text), options.threshold)
    } else {
        stats::compute(text, options.threshold)
    };

    stats.repeated_words = match options.sort {
        SortOrder::None => stats.repeated_words,
        SortOrder::Alpha => stats::sort_alphabetical(stats.repeated_words),
        SortOrder::Frequency => stats::sort_by_frequency(stats.repeated_words),
    };

    stats
}
