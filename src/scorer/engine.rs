//! Sentiment engines
//!
//! `SentimentEngine` is the boundary the presentation layers call through.
//! `LexiconScorer` is the built-in implementation: a pure function of the
//! input text and the two static tables.

use super::lexicon::Lexicon;
use super::stopwords::StopWords;
use super::tokenizer;
use crate::models::{AnalysisResult, Sentiment, WordScore};
use std::collections::HashMap;
use tracing::debug;

/// Text in, `AnalysisResult` out
pub trait SentimentEngine: Send + Sync {
    /// Short identifier shown in logs and headers
    fn name(&self) -> &str;

    fn analyze(&self, text: &str) -> AnalysisResult;
}

/// Lexicon-backed scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer {
    lexicon: Lexicon,
    stop_words: StopWords,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Tokenize and drop stop words
    pub fn content_tokens(&self, text: &str) -> Vec<String> {
        tokenizer::tokenize(text)
            .into_iter()
            .filter(|token| !self.stop_words.contains(token))
            .collect()
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            return AnalysisResult::neutral();
        }

        let tokens = self.content_tokens(text);
        if tokens.is_empty() {
            debug!("no content tokens after stop-word filtering");
            return AnalysisResult::neutral();
        }

        let (raw_score, word_scores) = self.score_tokens(&tokens);

        let sentiment = Sentiment::from_raw_score(raw_score);
        let score = raw_score as f64 / tokens.len() as f64;

        debug!(
            tokens = tokens.len(),
            raw_score,
            score,
            sentiment = %sentiment,
            "text analyzed"
        );

        AnalysisResult {
            sentiment,
            score,
            raw_score,
            tokens,
            word_scores,
        }
    }

    /// Sum the weights of every token and collect one entry per distinct word
    fn score_tokens(&self, tokens: &[String]) -> (i64, Vec<WordScore>) {
        let mut raw_score: i64 = 0;
        let mut word_scores: Vec<WordScore> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for token in tokens {
            let weight = self.lexicon.weight(token);
            raw_score += i64::from(weight);

            // Repeated words keep their first position; the later weight overwrites.
            match index.get(token.as_str()) {
                Some(&i) => word_scores[i].weight = weight,
                None => {
                    index.insert(token.as_str(), word_scores.len());
                    word_scores.push(WordScore {
                        word: token.clone(),
                        weight,
                    });
                }
            }
        }

        (raw_score, word_scores)
    }
}

impl SentimentEngine for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn analyze(&self, text: &str) -> AnalysisResult {
        LexiconScorer::analyze(self, text)
    }
}
