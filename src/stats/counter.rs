use std::collections::HashMap;

use memchr::memchr_iter;

use crate::stats::types::{TextStats, WordCounts};

/// Compute word, letter, and space counts plus the repeated-words table for
/// one document.
///
/// Letter and space counts come from whole-document scans and are therefore
/// insensitive to how tokenization splits words. Tokenization splits on
/// newlines, then on single spaces; a token counts as a word only if it
/// contains at least one ASCII letter, so punctuation-only and digit-only
/// tokens (and the empty tokens consecutive spaces produce) are skipped.
/// Frequency keys are the qualifying tokens folded with ASCII lowercasing.
///
/// Total over any input: the empty string yields all zeros and an empty
/// table.
pub fn compute(input: &str, threshold: usize) -> TextStats {
    let letter_count = input.chars().filter(char::is_ascii_alphabetic).count();
    // 0x20 never appears inside a multi-byte UTF-8 sequence, so a byte scan
    // counts exactly the literal space characters.
    let space_count = memchr_iter(b' ', input.as_bytes()).count();

    let mut word_count = 0usize;
    let mut frequency: HashMap<String, usize> = HashMap::new();
    // First-appearance order, so unsorted output stays deterministic.
    let mut order: Vec<String> = Vec::new();

    for line in input.split('\n') {
        for token in line.split(' ') {
            if !token.bytes().any(|b| b.is_ascii_alphabetic()) {
                continue;
            }
            word_count += 1;
            let key = token.to_ascii_lowercase();
            match frequency.get_mut(&key) {
                Some(count) => *count += 1,
                None => {
                    frequency.insert(key.clone(), 1);
                    order.push(key);
                }
            }
        }
    }

    let repeated_words: WordCounts = order
        .into_iter()
        .filter_map(|word| {
            let count = frequency[&word];
            (count > threshold).then_some((word, count))
        })
        .collect();

    log::debug!(
        "computed stats: {} words, {} letters, {} spaces, {} repeated",
        word_count,
        letter_count,
        space_count,
        repeated_words.len()
    );

    TextStats {
        word_count,
        letter_count,
        space_count,
        repeated_words,
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod counter_tests;
