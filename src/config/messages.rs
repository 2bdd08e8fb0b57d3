//! Message templates for user-facing text
//!
//! All user-visible strings are defined here for easy localization and customization.
//! Defaults are Russian, matching the lexicon's language.

use crate::models::Sentiment;
use crate::utils::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Header messages for consistent TUI chrome
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeaderMessages {
    pub app_name: String,
}

impl Default for HeaderMessages {
    fn default() -> Self {
        Self {
            app_name: "Анализатор тональности".to_string(),
        }
    }
}

/// Input panel messages
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputMessages {
    pub prompt: String,
    pub placeholder: String,
    pub button: String,
}

impl Default for InputMessages {
    fn default() -> Self {
        Self {
            prompt: "Введите текст для анализа:".to_string(),
            placeholder: "Сегодня отличный день".to_string(),
            button: "Анализировать".to_string(),
        }
    }
}

/// Result panel messages
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResultMessages {
    pub title: String,
    pub summary: String,
    pub positive: String,
    pub negative: String,
    pub neutral: String,
    pub word_header: String,
    pub weight_header: String,
    pub no_tokens: String,
    pub analyzing: String,
}

impl Default for ResultMessages {
    fn default() -> Self {
        Self {
            title: "Результат:".to_string(),
            summary: "Тональность: {label} {icon} (Оценка: {score})".to_string(),
            positive: "Положительный".to_string(),
            negative: "Отрицательный".to_string(),
            neutral: "Нейтральный".to_string(),
            word_header: "Слово".to_string(),
            weight_header: "Вес".to_string(),
            no_tokens: "Значимых слов не найдено".to_string(),
            analyzing: "Анализ текста...".to_string(),
        }
    }
}

/// Error and warning messages
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ErrorMessages {
    pub title: String,
    pub empty_input: String,
    pub analysis_failed: String,
    pub dismiss: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            title: "Ошибка".to_string(),
            empty_input: "Пожалуйста, введите текст для анализа".to_string(),
            analysis_failed: "Не удалось проанализировать текст: {error}".to_string(),
            dismiss: "Enter или Esc — закрыть".to_string(),
        }
    }
}

/// Navigation hints for each screen
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HintMessages {
    pub editing: String,
    pub analyzing: String,
    pub dialog: String,
}

impl Default for HintMessages {
    fn default() -> Self {
        Self {
            editing: "Ctrl+S/F5: Анализировать │ Ctrl+L: Очистить │ Esc: Выход".to_string(),
            analyzing: "Пожалуйста, подождите...".to_string(),
            dialog: "Enter/Esc: Закрыть".to_string(),
        }
    }
}

/// All messages
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Messages {
    #[serde(default)]
    pub header: HeaderMessages,
    #[serde(default)]
    pub input: InputMessages,
    #[serde(default)]
    pub results: ResultMessages,
    #[serde(default)]
    pub errors: ErrorMessages,
    #[serde(default)]
    pub hints: HintMessages,
}

impl Messages {
    /// Load messages from the default config file
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/messages.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load messages from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Format a message with placeholder substitution
    pub fn format(template: &str, vars: &HashMap<&str, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{}}}", key), value);
        }
        result
    }

    /// Localized label for a sentiment
    pub fn sentiment_label(&self, sentiment: Sentiment) -> &str {
        match sentiment {
            Sentiment::Positive => &self.results.positive,
            Sentiment::Negative => &self.results.negative,
            Sentiment::Neutral => &self.results.neutral,
        }
    }

    /// The analysis-failed message with the error filled in
    pub fn analysis_failed(&self, error: &str) -> String {
        let mut vars = HashMap::new();
        vars.insert("error", error.to_string());
        Self::format(&self.errors.analysis_failed, &vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_replaces_placeholders() {
        let mut vars = HashMap::new();
        vars.insert("label", "Положительный".to_string());
        vars.insert("score", "0.50".to_string());
        let text = Messages::format("{label} ({score}) {missing}", &vars);
        assert_eq!(text, "Положительный (0.50) {missing}");
    }

    #[test]
    fn test_sentiment_label() {
        let messages = Messages::default();
        assert_eq!(messages.sentiment_label(Sentiment::Negative), "Отрицательный");
    }

    #[test]
    fn test_analysis_failed() {
        let messages = Messages::default();
        assert_eq!(
            messages.analysis_failed("boom"),
            "Не удалось проанализировать текст: boom"
        );
    }
}
