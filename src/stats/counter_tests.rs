use super::compute;
use crate::stats::DEFAULT_THRESHOLD;
use proptest::prelude::*;
use std::collections::HashMap;

fn stats(input: &str) -> super::TextStats {
    compute(input, DEFAULT_THRESHOLD)
}

#[test]
fn hello_world_counts() {
    let result = stats("Hello, world!");
    assert_eq!(result.word_count, 2);
    assert_eq!(result.letter_count, 10);
    assert_eq!(result.space_count, 1);
    assert!(result.repeated_words.is_empty());
}

#[test]
fn empty_input_is_all_zeros() {
    let result = stats("");
    assert_eq!(result.word_count, 0);
    assert_eq!(result.letter_count, 0);
    assert_eq!(result.space_count, 0);
    assert!(result.repeated_words.is_empty());
}

#[test]
fn case_folds_to_one_key() {
    let result = compute("Cat cat CAT cat", 0);
    assert_eq!(result.repeated_words, vec![("cat".to_string(), 4)]);
    assert_eq!(result.word_count, 4);
}

#[test]
fn punctuation_only_tokens_are_not_words() {
    let result = stats("a -- b ... 123 !!");
    assert_eq!(result.word_count, 2);
    // every character still feeds the whole-document scans
    assert_eq!(result.letter_count, 2);
    assert_eq!(result.space_count, 5);
}

#[test]
fn consecutive_spaces_produce_empty_tokens_not_words() {
    let result = stats("a  b");
    assert_eq!(result.word_count, 2);
    assert_eq!(result.space_count, 2);
}

#[test]
fn tabs_and_newlines_are_not_spaces() {
    let result = stats("a\tb\nc");
    assert_eq!(result.space_count, 0);
    // a tab does not split tokens, so "a\tb" is a single word
    assert_eq!(result.word_count, 2);
}

#[test]
fn punctuation_stays_in_the_key() {
    let result = compute("Yes! yes! YES!", 0);
    assert_eq!(result.repeated_words, vec![("yes!".to_string(), 3)]);
}

#[test]
fn threshold_is_strictly_greater_than() {
    let ten = "cat ".repeat(10);
    assert!(stats(&ten).repeated_words.is_empty());

    let eleven = "cat ".repeat(11);
    assert_eq!(
        stats(&eleven).repeated_words,
        vec![("cat".to_string(), 11)]
    );
}

#[test]
fn repeated_words_keep_first_appearance_order() {
    let mut doc = String::new();
    for _ in 0..12 {
        doc.push_str("zebra ant ");
    }
    let result = stats(&doc);
    assert_eq!(
        result.repeated_words,
        vec![("zebra".to_string(), 12), ("ant".to_string(), 12)]
    );
}

proptest! {
    // The unthresholded frequency table must account for every word exactly
    // once: its counts sum to the word count.
    #[test]
    fn word_count_equals_frequency_sum(input in "[ -~\n]{0,300}") {
        let result = compute(&input, 0);
        let sum: usize = result.repeated_words.iter().map(|(_, n)| n).sum();
        prop_assert_eq!(result.word_count, sum);
    }

    #[test]
    fn repeated_words_never_at_or_below_threshold(input in "[a-c ]{0,200}") {
        let result = compute(&input, 2);
        prop_assert!(result.repeated_words.iter().all(|(_, n)| *n > 2));
    }

    #[test]
    fn keys_are_unique_and_lowercase(input in "[ -~\n]{0,300}") {
        let result = compute(&input, 0);
        let mut seen = HashMap::new();
        for (word, _) in &result.repeated_words {
            prop_assert_eq!(word.to_ascii_lowercase(), word.clone());
            prop_assert!(seen.insert(word.clone(), ()).is_none());
        }
    }

    #[test]
    fn never_panics(input in ".{0,300}") {
        let _ = stats(&input);
    }
}
