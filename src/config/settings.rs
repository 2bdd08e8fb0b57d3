//! Application settings configuration
//!
//! Defines UI timing, score formatting and output options.

use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Largest number of decimals accepted for the displayed score
pub const MAX_SCORE_PRECISION: usize = 6;

/// Terminal UI settings
#[derive(Debug, Clone, Deserialize)]
pub struct UiSettings {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_score_precision")]
    pub score_precision: usize,
    #[serde(default = "default_input_height")]
    pub input_height: u16,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_score_precision() -> usize {
    2
}

fn default_input_height() -> u16 {
    10
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            score_precision: default_score_precision(),
            input_height: default_input_height(),
        }
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Non-interactive output settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputSettings {
    /// Print the per-word table without `--verbose`
    #[serde(default)]
    pub show_tokens: bool,
}

/// Application settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

impl Settings {
    /// Load settings from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the UI cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ui.tick_rate_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.ui.score_precision > MAX_SCORE_PRECISION {
            return Err(ConfigError::InvalidValue {
                key: "ui.score_precision".to_string(),
                message: format!("must be at most {}", MAX_SCORE_PRECISION),
            });
        }
        if self.ui.input_height < 3 {
            return Err(ConfigError::InvalidValue {
                key: "ui.input_height".to_string(),
                message: "must be at least 3 rows".to_string(),
            });
        }
        Ok(())
    }
}
