//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sentiment-analyzer")]
#[command(version)]
#[command(about = "Lexicon-based sentiment analysis for Russian text", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Text to analyze; opens the interactive window when omitted.
    /// A leading word equal to a subcommand name (`analyze`, `lexicon`) runs
    /// that subcommand; put `--` before the text to analyze it as text.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Read the text from standard input
    #[arg(long, conflicts_with = "text")]
    pub stdin: bool,

    /// Print the result as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Print only the sentiment label
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Show the per-word table and debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Directory containing default.toml, theme.toml and messages.toml
    #[arg(short, long, value_name = "DIR")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze the given text
    Analyze(AnalyzeArgs),

    /// List the built-in lexicon and stop words
    Lexicon,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text to analyze
    #[arg(required = true, value_name = "TEXT")]
    pub text: Vec<String>,
}

/// Where the text to analyze comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    Stdin,
}

impl Cli {
    /// Resolve the input for one-shot mode, `None` when no input was given
    pub fn input_source(&self) -> Option<InputSource> {
        if let Some(Commands::Analyze(args)) = &self.command {
            return Some(InputSource::Inline(args.text.join(" ")));
        }
        if self.stdin {
            return Some(InputSource::Stdin);
        }
        if !self.text.is_empty() {
            return Some(InputSource::Inline(self.text.join(" ")));
        }
        None
    }

    /// Whether to open the terminal window instead of printing once
    pub fn is_interactive(&self) -> bool {
        self.command.is_none() && self.input_source().is_none() && !self.json && !self.quiet
    }

    /// Default tracing filter when RUST_LOG is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_words_are_joined() {
        let cli = Cli::parse_from(["sentiment-analyzer", "хороший", "день"]);
        assert_eq!(
            cli.input_source(),
            Some(InputSource::Inline("хороший день".to_string()))
        );
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_subcommand_name_needs_separator_to_be_text() {
        let cli = Cli::parse_from(["sentiment-analyzer", "lexicon"]);
        assert!(matches!(cli.command, Some(Commands::Lexicon)));

        let cli = Cli::parse_from(["sentiment-analyzer", "--", "lexicon", "хороший"]);
        assert!(cli.command.is_none());
        assert_eq!(
            cli.input_source(),
            Some(InputSource::Inline("lexicon хороший".to_string()))
        );
    }

    #[test]
    fn test_stdin_conflicts_with_text() {
        let result = Cli::try_parse_from(["sentiment-analyzer", "--stdin", "текст"]);
        assert!(result.is_err());
    }
}
