//! Theme configuration for CLI and TUI display
//!
//! Maps each sentiment to a display style (colour and icon). Styles are
//! resolved here at render time; the scorer never sees them.

use crate::models::Sentiment;
use crate::utils::ConfigError;
use console::Style;
use serde::Deserialize;
use std::path::Path;

/// Status icons
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Icons {
    pub positive: String,
    pub negative: String,
    pub neutral: String,
    pub warning: String,
    pub error: String,
    pub bullet: String,
    #[serde(default = "Icons::default_spinner")]
    pub spinner: Vec<String>,
}

impl Icons {
    fn default_spinner() -> Vec<String> {
        ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            positive: "😊".to_string(),
            negative: "😠".to_string(),
            neutral: "😐".to_string(),
            warning: "⚠".to_string(),
            error: "✗".to_string(),
            bullet: "•".to_string(),
            spinner: Self::default_spinner(),
        }
    }
}

/// Color scheme (stored as hex strings, converted per frontend)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub positive: String,
    pub negative: String,
    pub neutral: String,
    pub warning: String,
    pub primary: String,
    pub secondary: String,
    pub border: String,
    #[serde(default = "Colors::default_highlight")]
    pub highlight: String,
}

impl Colors {
    fn default_highlight() -> String {
        "#60A5FA".to_string()
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            positive: "#10B981".to_string(),
            negative: "#EF4444".to_string(),
            neutral: "#3B82F6".to_string(),
            warning: "#F59E0B".to_string(),
            primary: "#7C3AED".to_string(),
            secondary: "#6B7280".to_string(),
            border: "#374151".to_string(),
            highlight: Self::default_highlight(),
        }
    }
}

impl Colors {
    /// Parse a hex color string to RGB components
    pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        (r, g, b)
    }

    /// Create a console::Style with the given hex color as foreground
    pub fn style_from_hex(hex: &str) -> Style {
        let (r, g, b) = Self::hex_to_rgb(hex);
        Style::new().color256(
            // Map RGB to closest 256-color
            16 + (36 * (r as u16 * 5 / 255) + 6 * (g as u16 * 5 / 255) + (b as u16 * 5 / 255))
                as u8,
        )
    }

    /// Convert a hex color to a ratatui color
    pub fn tui_color(hex: &str) -> ratatui::style::Color {
        let (r, g, b) = Self::hex_to_rgb(hex);
        ratatui::style::Color::Rgb(r, g, b)
    }
}

/// Display style for one sentiment tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentStyle {
    pub color: String,
    pub icon: String,
}

impl SentimentStyle {
    pub fn console_style(&self) -> Style {
        Colors::style_from_hex(&self.color).bold()
    }

    pub fn tui_color(&self) -> ratatui::style::Color {
        Colors::tui_color(&self.color)
    }
}

/// Complete theme configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Theme {
    #[serde(default)]
    pub icons: Icons,
    #[serde(default)]
    pub colors: Colors,
}

impl Theme {
    /// Load theme from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/theme.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load theme from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Positive → affirmative, negative → warning, neutral → informational
    pub fn sentiment_style(&self, sentiment: Sentiment) -> SentimentStyle {
        let (color, icon) = match sentiment {
            Sentiment::Positive => (&self.colors.positive, &self.icons.positive),
            Sentiment::Negative => (&self.colors.negative, &self.icons.negative),
            Sentiment::Neutral => (&self.colors.neutral, &self.icons.neutral),
        };
        SentimentStyle {
            color: color.clone(),
            icon: icon.clone(),
        }
    }

    /// Row colour for a single word weight, keyed by its sign
    pub fn weight_color(&self, weight: i8) -> &str {
        match weight.signum() {
            1 => &self.colors.positive,
            -1 => &self.colors.negative,
            _ => &self.colors.secondary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(Colors::hex_to_rgb("#10B981"), (0x10, 0xB9, 0x81));
        assert_eq!(Colors::hex_to_rgb("EF4444"), (0xEF, 0x44, 0x44));
        assert_eq!(Colors::hex_to_rgb("#fff"), (255, 255, 255));
        assert_eq!(Colors::hex_to_rgb("#zzzzzz"), (255, 255, 255));
    }

    #[test]
    fn test_sentiment_styles_are_distinct() {
        let theme = Theme::default();
        let pos = theme.sentiment_style(Sentiment::Positive);
        let neg = theme.sentiment_style(Sentiment::Negative);
        let neu = theme.sentiment_style(Sentiment::Neutral);
        assert_ne!(pos, neg);
        assert_ne!(pos, neu);
        assert_ne!(neg, neu);
        assert_eq!(pos.icon, "😊");
    }

    #[test]
    fn test_weight_color_by_sign() {
        let theme = Theme::default();
        assert_eq!(theme.weight_color(1), theme.colors.positive);
        assert_eq!(theme.weight_color(-1), theme.colors.negative);
        assert_eq!(theme.weight_color(0), theme.colors.secondary);
    }

    #[test]
    fn test_partial_theme_uses_defaults() {
        let theme: Theme = toml::from_str(
            r##"
            [colors]
            positive = "#00FF00"
            negative = "#FF0000"
            neutral = "#0000FF"
            warning = "#FFFF00"
            primary = "#FFFFFF"
            secondary = "#888888"
            border = "#444444"
            "##,
        )
        .unwrap();
        assert_eq!(theme.colors.positive, "#00FF00");
        assert_eq!(theme.colors.highlight, "#60A5FA");
        assert_eq!(theme.icons.neutral, "😐");
        assert_eq!(
            theme.sentiment_style(Sentiment::Positive).tui_color(),
            ratatui::style::Color::Rgb(0, 255, 0)
        );
    }
}
