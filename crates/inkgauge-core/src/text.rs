//! Text processing utilities.
//!
//! Splits plain text into terms (words) and sentences for the readability
//! analyzer. Both splitters borrow from the input and keep document order.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for a single term: letters or digits, with inner apostrophes and
/// hyphens kept ("don't", "well-known").
static TERM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['\u{2019}-][\p{L}\p{N}]+)*").expect("valid regex")
});

/// Regex for a run of sentence-terminal punctuation.
static TERMINATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Extract terms in document order, preserving case.
pub fn extract_terms(text: &str) -> Vec<&str> {
    TERM_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split text into sentences on `.`, `!` and `?`.
///
/// A sentence is whatever lies between terminators and contains at least one
/// term; punctuation-only or blank fragments are dropped. Trailing text
/// without a terminator still counts as a sentence.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    TERMINATOR_PATTERN
        .split(text)
        .map(str::trim)
        .filter(|fragment| TERM_PATTERN.is_match(fragment))
        .collect()
}
