//! Custom error types for the sentiment analyzer
//!
//! Scoring itself is total, so most of these describe the surfaces around it:
//! user input, configuration loading and the background worker.

use thiserror::Error;

/// Top-level error type for the analyzer
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("No text to analyze")]
    EmptyInput,

    #[error("Initialization failed: {message}")]
    Initialization { message: String },

    #[error("Analysis failed: {message}")]
    Scoring { message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalyzerError {
    /// Whether the user can fix this by editing the input and submitting again
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, AnalyzerError::EmptyInput | AnalyzerError::Scoring { .. })
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias using AnalyzerError
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: AnalyzerError = ConfigError::FileNotFound {
            path: "config/theme.toml".to_string(),
        }
        .into();
        assert!(matches!(err, AnalyzerError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Configuration file not found: config/theme.toml"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let err: AnalyzerError = serde_json::from_str::<u8>("не число").unwrap_err().into();
        assert!(matches!(err, AnalyzerError::Json(_)));
        assert!(!err.is_user_correctable());
    }

    #[test]
    fn test_user_correctable() {
        assert!(AnalyzerError::EmptyInput.is_user_correctable());
        assert!(AnalyzerError::Scoring {
            message: "worker panicked".to_string()
        }
        .is_user_correctable());
        assert!(!AnalyzerError::Initialization {
            message: "no terminal".to_string()
        }
        .is_user_correctable());
    }
}
