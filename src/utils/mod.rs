//! Utility modules for the sentiment analyzer
//!
//! This module contains error types shared by the library and the binary.

pub mod error;

pub use error::{AnalyzerError, ConfigError, Result};
