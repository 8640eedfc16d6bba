//! Plain-text rendering of a statistics record.

use std::fmt::Write;

use crate::stats::TextStats;

/// Render the report block the CLI prints: the three totals, then one
/// `word : count` line per repeated-words entry in stored order.
pub fn render(stats: &TextStats) -> String {
    let mut out = String::new();
    writeln!(out, "Total number of words: {}", stats.word_count).ok();
    writeln!(out, "Number of letters: {}", stats.letter_count).ok();
    writeln!(out, "Number of spaces: {}", stats.space_count).ok();
    writeln!(
        out,
        "Words that repeat more than the threshold and how often they repeat:"
    )
    .ok();
    for (word, count) in &stats.repeated_words {
        writeln!(out, "{word} : {count}").ok();
    }
    out
}
