//! Readability scoring for rich-text documents.
//!
//! Formula: `(0.39 * (terms/sentences) + 11.8 * (complex/terms)) / 2`,
//! clamped to `1.0..=10.0`.
//!
//! This is inkgauge's own scale, not Flesch-Kincaid: lower = simpler. A term
//! is complex when [`syllables::estimate_syllables`] puts it above
//! [`syllables::COMPLEX_SYLLABLE_THRESHOLD`].
//!
//! [`analyze`] is total. Empty input, markup-only input and text without
//! sentences all produce a report (score 1, nothing flagged), never an error.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::markup;
use crate::syllables;
use crate::text;

/// Lowest possible score.
pub const MIN_SCORE: f64 = 1.0;

/// Highest possible score.
pub const MAX_SCORE: f64 = 10.0;

/// Average sentence length (in terms) above which a `length` suggestion is made.
pub const LONG_SENTENCE_WORDS: f64 = 20.0;

/// Message attached to the `complexity` suggestion.
pub const COMPLEXITY_MESSAGE: &str = "Consider simplifying these complex words:";

/// Message attached to the `length` suggestion.
pub const LENGTH_MESSAGE: &str =
    "Your sentences are quite long. Consider breaking them into shorter ones for better readability.";

/// A writing suggestion attached to a [`ReadabilityReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// The text contains complex words.
    Complexity {
        /// Advisory message.
        message: String,
        /// Every complex word, in document order, duplicates included.
        words: Vec<String>,
    },
    /// Sentences are long on average.
    Length {
        /// Advisory message.
        message: String,
    },
}

impl Suggestion {
    /// The advisory message for this suggestion.
    pub fn message(&self) -> &str {
        match self {
            Self::Complexity { message, .. } | Self::Length { message } => message,
        }
    }

    /// Short name of the suggestion kind (`complexity` or `length`).
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Complexity { .. } => "complexity",
            Self::Length { .. } => "length",
        }
    }
}

/// Coarse difficulty band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Score of 4 or below.
    Easy,
    /// Score above 4, up to 7.
    Moderate,
    /// Score above 7.
    Hard,
}

impl ScoreBand {
    /// Classify a score.
    pub fn from_score(score: f64) -> Self {
        if score <= 4.0 {
            Self::Easy
        } else if score <= 7.0 {
            Self::Moderate
        } else {
            Self::Hard
        }
    }

    /// Returns the band as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Score on the 1--10 scale (lower = simpler).
    pub readability_score: f64,
    /// Difficulty band of the score.
    pub band: ScoreBand,
    /// Complex words in document order, duplicates included.
    pub complex_words: Vec<String>,
    /// Suggestions, `complexity` before `length`.
    pub suggestions: Vec<Suggestion>,
    /// Number of terms detected.
    pub terms: usize,
    /// Number of sentences detected.
    pub sentences: usize,
    /// Average terms per sentence (0 when there are no sentences).
    pub avg_words_per_sentence: f64,
    /// Share of terms that are complex (0 when there are no terms).
    pub complex_ratio: f64,
    /// Maximum acceptable score (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    /// Whether the score exceeds the maximum.
    pub over_max: bool,
}

/// Analyze a document.
///
/// Tags are stripped with [`markup::strip_tags`] before the text is
/// tokenized, so HTML straight from an editor is fine.
#[tracing::instrument(skip(document), fields(document_len = document.len()))]
pub fn analyze(document: &str) -> ReadabilityReport {
    let plain = markup::strip_tags(document);

    let terms = text::extract_terms(&plain);
    let sentences = text::split_sentences(&plain).len();

    let complex_words: Vec<String> = terms
        .iter()
        .filter(|term| syllables::is_complex(term))
        .map(|term| (*term).to_string())
        .collect();

    let avg_words_per_sentence = ratio(terms.len(), sentences);
    let complex_ratio = ratio(complex_words.len(), terms.len());
    let readability_score = score(avg_words_per_sentence, complex_ratio);
    let suggestions = build_suggestions(&complex_words, avg_words_per_sentence);

    tracing::debug!(
        terms = terms.len(),
        sentences,
        complex = complex_words.len(),
        readability_score,
        "document analyzed"
    );

    ReadabilityReport {
        readability_score,
        band: ScoreBand::from_score(readability_score),
        complex_words,
        suggestions,
        terms: terms.len(),
        sentences,
        avg_words_per_sentence,
        complex_ratio,
        max_score: None,
        over_max: false,
    }
}

/// [`analyze`] `document`, then mark the report `over_max` when its score is
/// above `max_score`. The score itself is unchanged.
pub fn check_readability(document: &str, max_score: Option<f64>) -> ReadabilityReport {
    let mut report = analyze(document);
    report.max_score = max_score;
    report.over_max = max_score.is_some_and(|max| report.readability_score > max);
    report
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[allow(clippy::suboptimal_flops)]
fn score(avg_words_per_sentence: f64, complex_ratio: f64) -> f64 {
    let raw = (avg_words_per_sentence * 0.39 + complex_ratio * 11.8) / 2.0;
    raw.clamp(MIN_SCORE, MAX_SCORE)
}

fn build_suggestions(complex_words: &[String], avg_words_per_sentence: f64) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if !complex_words.is_empty() {
        suggestions.push(Suggestion::Complexity {
            message: COMPLEXITY_MESSAGE.to_string(),
            words: complex_words.to_vec(),
        });
    }

    if avg_words_per_sentence > LONG_SENTENCE_WORDS {
        suggestions.push(Suggestion::Length {
            message: LENGTH_MESSAGE.to_string(),
        });
    }

    suggestions
}
