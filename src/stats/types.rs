// Statistics type definitions

/// A word only qualifies for the repeated-words table once its count is
/// strictly greater than this.
pub const DEFAULT_THRESHOLD: usize = 10;

/// An ordered word-frequency table: lowercased word paired with its
/// occurrence count. A `Vec` rather than a map so the entry order is part
/// of the value, which is what the sort transforms rearrange.
pub type WordCounts = Vec<(String, usize)>;

/// Statistics computed over one document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Tokens containing at least one ASCII letter.
    pub word_count: usize,
    /// ASCII letters in the whole document, counted independently of
    /// tokenization.
    pub letter_count: usize,
    /// Literal `' '` characters in the whole document. A raw scan, not a
    /// word-boundary count: consecutive spaces all count, tabs and
    /// newlines never do.
    pub space_count: usize,
    /// Words whose count exceeded the threshold, in first-appearance order.
    pub repeated_words: WordCounts,
}
