//! Lexicon-based sentiment scoring
//!
//! ```text
//! text → lowercase → strip punctuation → word boundaries → stop words → lexicon → AnalysisResult
//! ```

pub mod engine;
pub mod lexicon;
pub mod stopwords;
pub mod tokenizer;

pub use engine::{LexiconScorer, SentimentEngine};
pub use lexicon::Lexicon;
pub use stopwords::StopWords;

use crate::models::AnalysisResult;

/// Analyze text with the built-in lexicon
pub fn analyze(text: &str) -> AnalysisResult {
    LexiconScorer::new().analyze(text)
}
