//! Sentiment Analyzer Library
//!
//! A lexicon-based sentiment scorer for Russian text providing:
//! - Tokenization with punctuation stripping and stop-word filtering
//! - Static word weights aggregated into a label and a normalized score
//! - A background worker usable from any frontend
//! - Terminal output (tables, JSON) and a full-screen ratatui window
//!
//! # Usage
//!
//! ```rust
//! use sentiment_analyzer::{scorer, Sentiment};
//!
//! let result = scorer::analyze("Хороший день!");
//! assert_eq!(result.sentiment, Sentiment::Positive);
//! assert_eq!(result.score, 0.5);
//! ```

pub mod cli;
pub mod config;
pub mod models;
pub mod output;
pub mod runner;
pub mod scorer;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{Messages, Settings, Theme};
pub use models::{AnalysisResult, Sentiment, WordScore};
pub use scorer::{LexiconScorer, SentimentEngine};
pub use utils::{AnalyzerError, Result};
