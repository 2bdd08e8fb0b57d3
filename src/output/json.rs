//! JSON output formatter

use crate::models::{AnalysisResult, Sentiment, WordScore};
use crate::utils::Result;
use serde::Serialize;

/// JSON-serializable output structure
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub engine: &'a str,
    pub sentiment: Sentiment,
    pub score: f64,
    pub raw_score: i64,
    pub token_count: usize,
    /// Distinct words with a non-zero weight
    pub scored_words: usize,
    pub tokens: &'a [String],
    pub word_scores: &'a [WordScore],
}

/// Build the JSON view of an analysis result
pub fn to_json_output<'a>(engine: &'a str, result: &'a AnalysisResult) -> JsonOutput<'a> {
    JsonOutput {
        engine,
        sentiment: result.sentiment,
        score: result.score,
        raw_score: result.raw_score,
        token_count: result.tokens.len(),
        scored_words: result.scored_word_count(),
        tokens: &result.tokens,
        word_scores: &result.word_scores,
    }
}

/// Render an analysis result as pretty JSON
pub fn to_json_string(engine: &str, result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json_output(engine, result))?)
}

/// Print an analysis result as pretty JSON to stdout
pub fn print_json(engine: &str, result: &AnalysisResult) -> Result<()> {
    println!("{}", to_json_string(engine, result)?);
    Ok(())
}
