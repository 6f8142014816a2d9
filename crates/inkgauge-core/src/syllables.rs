//! Syllable estimation.
//!
//! A pattern heuristic, not a dictionary: lowercase the term, drop one
//! silent-looking ending, drop a leading `y`, then count runs of one or two
//! vowels. The counts are often linguistically wrong ("the" scores 0); the
//! readability scale is calibrated against this exact heuristic.

use std::sync::LazyLock;

use regex::Regex;

/// Terms with more estimated syllables than this are complex.
pub const COMPLEX_SYLLABLE_THRESHOLD: usize = 3;

/// One trailing consonant, `ed`, or consonant + `e`. The class also excludes
/// `l`, so words ending in `l` or `le` keep their ending.
static SILENT_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]|ed|[^laeiouy]e)$").expect("valid regex"));

static LEADING_Y: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^y").expect("valid regex"));

static VOWEL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"));

/// Estimate the syllable count of a single term.
pub fn estimate_syllables(term: &str) -> usize {
    let lowered = term.to_lowercase();
    let trimmed = SILENT_ENDING.replace(&lowered, "");
    let trimmed = LEADING_Y.replace(&trimmed, "");
    VOWEL_RUN.find_iter(&trimmed).count()
}

/// Whether a term counts as a complex word.
pub fn is_complex(term: &str) -> bool {
    estimate_syllables(term) > COMPLEX_SYLLABLE_THRESHOLD
}
