//! Data models for the sentiment analyzer

pub mod analysis;

pub use analysis::{AnalysisResult, Sentiment, WordScore};
