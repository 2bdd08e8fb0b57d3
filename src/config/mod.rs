//! Configuration module for the sentiment analyzer
//!
//! Handles loading and managing configuration from TOML files.

pub mod messages;
pub mod settings;
pub mod theme;

pub use messages::Messages;
pub use settings::Settings;
pub use theme::{SentimentStyle, Theme};

use crate::utils::ConfigError;
use std::path::Path;
use tracing::debug;

/// Load all configuration from default paths
pub fn load_default_config() -> Result<(Settings, Theme, Messages), ConfigError> {
    let settings = Settings::load_default()?;
    let theme = Theme::load_default()?;
    let messages = Messages::load_default()?;
    Ok((settings, theme, messages))
}

/// Load configuration from a custom directory.
///
/// The directory must exist; files missing inside it fall back to defaults.
pub fn load_config_from_dir<P: AsRef<Path>>(
    dir: P,
) -> Result<(Settings, Theme, Messages), ConfigError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ConfigError::FileNotFound {
            path: dir.display().to_string(),
        });
    }

    let settings = load_or_default(&dir.join("default.toml"), |p| Settings::load_from_file(p))?;
    let theme = load_or_default(&dir.join("theme.toml"), |p| Theme::load_from_file(p))?;
    let messages = load_or_default(&dir.join("messages.toml"), |p| Messages::load_from_file(p))?;
    Ok((settings, theme, messages))
}

fn load_or_default<T, F>(path: &Path, load: F) -> Result<T, ConfigError>
where
    T: Default,
    F: Fn(&Path) -> Result<T, ConfigError>,
{
    if path.exists() {
        debug!(path = %path.display(), "loading configuration file");
        load(path)
    } else {
        debug!(path = %path.display(), "configuration file absent, using defaults");
        Ok(T::default())
    }
}
