//! Analysis result types

use serde::Serialize;

/// Coarse sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Classify a raw integer sum by its sign
    pub fn from_raw_score(raw: i64) -> Self {
        match raw.signum() {
            1 => Sentiment::Positive,
            -1 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    /// Classify an opaque polarity value in [-1, 1] by its sign.
    ///
    /// NaN is treated as neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight of one distinct surviving token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordScore {
    pub word: String,
    pub weight: i8,
}

/// Outcome of a single `analyze` call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    /// `raw_score / tokens.len()`, or 0 when no token survived
    pub score: f64,
    /// Unnormalized sum of weights over every surviving token
    pub raw_score: i64,
    /// Surviving tokens in input order, duplicates included
    pub tokens: Vec<String>,
    /// One entry per distinct token, ordered by first occurrence
    pub word_scores: Vec<WordScore>,
}

impl AnalysisResult {
    /// The result for blank input or input made only of stop words
    pub fn neutral() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            score: 0.0,
            raw_score: 0,
            tokens: Vec::new(),
            word_scores: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Weight recorded for a word, if it survived filtering
    pub fn weight_of(&self, word: &str) -> Option<i8> {
        self.word_scores
            .iter()
            .find(|ws| ws.word == word)
            .map(|ws| ws.weight)
    }

    /// Number of distinct tokens that carry a non-zero weight
    pub fn scored_word_count(&self) -> usize {
        self.word_scores.iter().filter(|ws| ws.weight != 0).count()
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::neutral()
    }
}
