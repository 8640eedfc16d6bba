//! Tag stripper
//!
//! Removes HTML/XML-like tags from raw text before counting, so statistics
//! reflect the words visible on a page rather than its markup.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a minimal `<...>` span: a `<`, one or more non-`>` characters,
/// then the next `>`. No awareness of nesting, comments, or CDATA; a bare
/// `<>` is left alone.
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

/// Remove every tag span from `input`.
///
/// Pure and total: input with no tags comes back unchanged, malformed
/// markup (unbalanced `<` or `>`) is treated literally rather than parsed.
pub fn strip_tags(input: &str) -> String {
    TAG.replace_all(input, "").into_owned()
}

#[cfg(test)]
#[path = "strip_tests.rs"]
mod strip_tests;
