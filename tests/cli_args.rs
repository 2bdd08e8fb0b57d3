use clap::Parser;
use sentiment_analyzer::cli::{Cli, Commands, InputSource};
use std::path::PathBuf;

fn cli() -> Cli {
    Cli {
        command: None,
        text: vec![],
        stdin: false,
        json: false,
        quiet: false,
        verbose: false,
        no_color: false,
        config: None,
    }
}

#[test]
fn test_no_input_is_interactive() {
    let cli = cli();
    assert!(cli.is_interactive());
    assert_eq!(cli.input_source(), None);
}

#[test]
fn test_inline_text_is_one_shot() {
    let cli = Cli {
        text: vec!["хороший".to_string(), "день".to_string()],
        ..cli()
    };
    assert!(!cli.is_interactive());
    assert_eq!(
        cli.input_source(),
        Some(InputSource::Inline("хороший день".to_string()))
    );
}

#[test]
fn test_is_interactive_with_json() {
    let cli = Cli { json: true, ..cli() };
    assert!(!cli.is_interactive());
}

#[test]
fn test_stdin_source() {
    let cli = Cli::try_parse_from(["sentiment-analyzer", "--stdin"]).unwrap();
    assert_eq!(cli.input_source(), Some(InputSource::Stdin));
    assert!(!cli.is_interactive());
}

#[test]
fn test_analyze_subcommand() {
    let cli = Cli::try_parse_from(["sentiment-analyzer", "analyze", "ужасный", "день"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Analyze(_))));
    assert_eq!(
        cli.input_source(),
        Some(InputSource::Inline("ужасный день".to_string()))
    );
}

#[test]
fn test_lexicon_subcommand() {
    let cli = Cli::try_parse_from(["sentiment-analyzer", "lexicon"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Lexicon)));
    assert!(!cli.is_interactive());
}

#[test]
fn test_quiet_conflicts_with_json() {
    assert!(Cli::try_parse_from(["sentiment-analyzer", "-q", "-j", "текст"]).is_err());
}

#[test]
fn test_config_dir_and_verbose() {
    let cli =
        Cli::try_parse_from(["sentiment-analyzer", "-v", "--config", "conf", "текст"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("conf")));
    assert_eq!(cli.log_filter(), "debug");
}
