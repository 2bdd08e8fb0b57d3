//! Rich terminal output formatting

use super::tables;
use crate::config::{Messages, Theme};
use crate::models::AnalysisResult;
use crate::scorer::LexiconScorer;
use console::style;
use std::collections::HashMap;

/// Build the one-line summary, e.g. "Тональность: Положительный 😊 (Оценка: 0.50)"
pub fn summary_text(
    result: &AnalysisResult,
    theme: &Theme,
    messages: &Messages,
    precision: usize,
) -> String {
    let sentiment_style = theme.sentiment_style(result.sentiment);
    let mut vars = HashMap::new();
    vars.insert("label", messages.sentiment_label(result.sentiment).to_string());
    vars.insert("icon", sentiment_style.icon);
    vars.insert("score", format!("{:.*}", precision, result.score));
    vars.insert("raw", result.raw_score.to_string());
    Messages::format(&messages.results.summary, &vars)
}

/// Print section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(format!("━━━ {} ━━━", title)).cyan().bold());
    println!();
}

/// Print the coloured summary line
pub fn print_summary(result: &AnalysisResult, theme: &Theme, messages: &Messages, precision: usize) {
    let text = summary_text(result, theme, messages, precision);
    let sentiment_style = theme.sentiment_style(result.sentiment);
    println!("  {}", sentiment_style.console_style().apply_to(text));
}

/// Print the per-word table, or a note when nothing survived filtering
pub fn print_word_scores(result: &AnalysisResult, theme: &Theme, messages: &Messages) {
    if result.is_empty() {
        println!("  {}", style(&messages.results.no_tokens).dim());
        return;
    }
    print!("{}", tables::format_word_table(result, theme, messages));
}

/// Print the full analysis report
pub fn print_analysis(
    result: &AnalysisResult,
    theme: &Theme,
    messages: &Messages,
    precision: usize,
    show_tokens: bool,
) {
    print_header(messages.results.title.trim_end_matches(':'));
    print_summary(result, theme, messages, precision);
    if show_tokens {
        println!();
        print_word_scores(result, theme, messages);
    }
}

/// Print the built-in lexicon and stop words
pub fn print_lexicon(scorer: &LexiconScorer, theme: &Theme, messages: &Messages) {
    print_header("Lexicon");
    print!(
        "{}",
        tables::format_lexicon_table(&scorer.lexicon().entries(), theme, messages)
    );

    print_header("Stop words");
    let words = scorer.stop_words().sorted();
    for chunk in words.chunks(12) {
        println!("  {} {}", theme.icons.bullet, style(chunk.join(", ")).dim());
    }
    println!("\n  Total: {} stop words", words.len());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("  {} {}", style("⚠").yellow(), style(message).yellow());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer;

    #[test]
    fn test_summary_text_positive() {
        let result = scorer::analyze("хороший день");
        let text = summary_text(&result, &Theme::default(), &Messages::default(), 2);
        assert_eq!(text, "Тональность: Положительный 😊 (Оценка: 0.50)");
    }

    #[test]
    fn test_summary_text_precision() {
        let result = scorer::analyze("плохой день погода");
        let text = summary_text(&result, &Theme::default(), &Messages::default(), 3);
        assert!(text.ends_with("(Оценка: -0.333)"));
        assert!(text.contains("Отрицательный 😠"));
    }

    #[test]
    fn test_summary_text_neutral_for_blank() {
        let result = scorer::analyze("   ");
        let text = summary_text(&result, &Theme::default(), &Messages::default(), 2);
        assert_eq!(text, "Тональность: Нейтральный 😐 (Оценка: 0.00)");
    }
}
