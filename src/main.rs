//! Sentiment Analyzer - lexicon-based sentiment scoring for Russian text
//!
//! Runs either as a one-shot command that prints the verdict, or as a
//! full-screen terminal window when no text is given.

use clap::Parser;
use console::style;
use sentiment_analyzer::cli::{Cli, Commands, InputSource};
use sentiment_analyzer::config::{self, Messages, Settings, Theme};
use sentiment_analyzer::scorer::{LexiconScorer, SentimentEngine};
use sentiment_analyzer::tui::{App, TuiRunner};
use sentiment_analyzer::utils::ConfigError;
use sentiment_analyzer::{output, runner, AnalyzerError};
use std::io::Read;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(cli).await {
        // User-correctable errors were already reported as warnings
        let reported = e
            .downcast_ref::<AnalyzerError>()
            .is_some_and(AnalyzerError::is_user_correctable);
        if !reported {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let (settings, theme, messages) = load_config(&cli).map_err(|e| AnalyzerError::Initialization {
        message: e.to_string(),
    })?;

    let engine: Arc<dyn SentimentEngine> = Arc::new(LexiconScorer::new());

    if let Some(Commands::Lexicon) = cli.command {
        output::print_lexicon(&LexiconScorer::new(), &theme, &messages);
        return Ok(());
    }

    if cli.is_interactive() {
        let app = App::new(engine, settings, theme, messages);
        let mut tui = TuiRunner::new(app)?;
        tui.run().await?;
        return Ok(());
    }

    let text = match cli.input_source() {
        Some(InputSource::Inline(text)) => text,
        Some(InputSource::Stdin) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        None => String::new(),
    };

    if text.trim().is_empty() {
        output::print_warning(&messages.errors.empty_input);
        return Err(AnalyzerError::EmptyInput.into());
    }

    let result = runner::run_analysis(engine.clone(), text).await.map_err(|e| {
        output::print_warning(&messages.analysis_failed(&e.to_string()));
        e
    })?;

    if cli.json {
        output::print_json(engine.name(), &result)?;
    } else if cli.quiet {
        println!("{}", messages.sentiment_label(result.sentiment));
    } else {
        print_report(&cli, &settings, &theme, &messages, &result);
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<(Settings, Theme, Messages), ConfigError> {
    match &cli.config {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading configuration directory");
            config::load_config_from_dir(dir)
        }
        None => config::load_default_config(),
    }
}

fn print_report(
    cli: &Cli,
    settings: &Settings,
    theme: &Theme,
    messages: &Messages,
    result: &sentiment_analyzer::AnalysisResult,
) {
    let show_tokens = cli.verbose || settings.output.show_tokens;
    output::print_analysis(
        result,
        theme,
        messages,
        settings.ui.score_precision,
        show_tokens,
    );
}
