use crate::stats::types::WordCounts;

/// Reorder a word-frequency table so keys ascend lexicographically.
///
/// Ordinal comparison on the already-lowercased keys; keys are unique so
/// there are no ties. Entries themselves are untouched.
pub fn sort_alphabetical(mut words: WordCounts) -> WordCounts {
    words.sort_by(|a, b| a.0.cmp(&b.0));
    words
}

/// Reorder a word-frequency table from highest count to lowest.
///
/// Equal counts tie-break alphabetically ascending, so the result is
/// deterministic regardless of the incoming order.
pub fn sort_by_frequency(mut words: WordCounts) -> WordCounts {
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    words
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod sort_tests;
