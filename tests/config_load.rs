use sentiment_analyzer::config::{self, Messages, Settings, Theme};
use sentiment_analyzer::utils::ConfigError;
use sentiment_analyzer::Sentiment;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_dir_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let (settings, theme, messages) = config::load_config_from_dir(dir.path()).unwrap();
    assert_eq!(settings.ui.score_precision, 2);
    assert_eq!(theme.icons.positive, "😊");
    assert_eq!(messages.results.positive, "Положительный");
}

#[test]
fn test_missing_dir_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(
        config::load_config_from_dir(&missing),
        Err(ConfigError::FileNotFound { .. })
    ));
}

#[test]
fn test_partial_messages_override() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("messages.toml"),
        "[results]\npositive = \"Positive\"\n",
    )
    .unwrap();

    let (_, _, messages) = config::load_config_from_dir(dir.path()).unwrap();
    assert_eq!(messages.sentiment_label(Sentiment::Positive), "Positive");
    // Keys left out keep their defaults
    assert_eq!(messages.sentiment_label(Sentiment::Negative), "Отрицательный");
    assert_eq!(messages.errors.title, Messages::default().errors.title);
}

#[test]
fn test_partial_theme_override() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("theme.toml"), "[icons]\npositive = \":)\"\n").unwrap();

    let (_, theme, _) = config::load_config_from_dir(dir.path()).unwrap();
    assert_eq!(theme.sentiment_style(Sentiment::Positive).icon, ":)");
    assert_eq!(theme.icons.negative, "😠");
    assert_eq!(theme.colors.positive, "#10B981");
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.toml");
    fs::write(&path, "[colors\npositive = ").unwrap();
    assert!(matches!(
        Theme::load_from_file(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_invalid_settings_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("default.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();
    assert!(matches!(
        Settings::load_from_file(&path),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_partial_ui_section_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("default.toml"), "[ui]\nscore_precision = 3\n").unwrap();

    let (settings, _, _) = config::load_config_from_dir(dir.path()).unwrap();
    assert_eq!(settings.ui.score_precision, 3);
    assert_eq!(settings.ui.tick_rate_ms, 100);
    assert_eq!(settings.ui.input_height, 10);
}

#[test]
fn test_bundled_config_files_parse() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
    let (settings, theme, messages) = config::load_config_from_dir(&root).unwrap();
    assert_eq!(settings.ui.tick_rate_ms, 100);
    assert_eq!(theme.colors.negative, "#EF4444");
    assert_eq!(messages.input.button, "Анализировать");
}
