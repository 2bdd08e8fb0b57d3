//! Analysis worker
//!
//! Runs a single analysis off the caller's thread and hands the outcome back
//! through a callback, so any frontend (CLI, TUI) can drive it. The worker
//! never touches frontend state; the callback is expected to post the
//! response onto a channel the frontend drains.

use crate::models::AnalysisResult;
use crate::scorer::SentimentEngine;
use crate::utils::{AnalyzerError, Result};
use std::any::Any;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, warn};

/// One submitted text
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Monotonic id assigned by the frontend, echoed in the response
    pub id: u64,
    pub text: String,
}

/// Outcome of an `AnalysisRequest`
#[derive(Debug)]
pub struct AnalysisResponse {
    pub id: u64,
    pub outcome: Result<AnalysisResult>,
}

/// Analyze `text` on the blocking pool and wait for the result.
///
/// A panic inside the engine is reported as `AnalyzerError::Scoring`.
pub async fn run_analysis(engine: Arc<dyn SentimentEngine>, text: String) -> Result<AnalysisResult> {
    let name = engine.name().to_string();
    debug!(engine = %name, chars = text.chars().count(), "analysis started");

    let result = tokio::task::spawn_blocking(move || engine.analyze(&text))
        .await
        .map_err(scoring_error)?;

    debug!(engine = %name, sentiment = %result.sentiment, "analysis finished");
    Ok(result)
}

/// Spawn an analysis and invoke `on_complete` exactly once with its response
pub fn spawn_analysis<F>(
    engine: Arc<dyn SentimentEngine>,
    request: AnalysisRequest,
    on_complete: F,
) -> JoinHandle<()>
where
    F: FnOnce(AnalysisResponse) + Send + 'static,
{
    tokio::spawn(async move {
        let AnalysisRequest { id, text } = request;
        let outcome = run_analysis(engine, text).await;
        if let Err(e) = &outcome {
            warn!(request = id, error = %e, "analysis failed");
        }
        on_complete(AnalysisResponse { id, outcome });
    })
}

fn scoring_error(err: JoinError) -> AnalyzerError {
    let message = if err.is_panic() {
        panic_message(err.into_panic())
    } else {
        err.to_string()
    };
    AnalyzerError::Scoring { message }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "analysis task panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;
    use crate::scorer::LexiconScorer;
    use tokio::sync::mpsc;

    struct PanickingEngine;

    impl SentimentEngine for PanickingEngine {
        fn name(&self) -> &str {
            "panicking"
        }

        fn analyze(&self, _text: &str) -> AnalysisResult {
            panic!("lexicon unavailable")
        }
    }

    #[tokio::test]
    async fn test_run_analysis() {
        let engine: Arc<dyn SentimentEngine> = Arc::new(LexiconScorer::new());
        let result = run_analysis(engine, "отличный день".to_string())
            .await
            .unwrap();
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[tokio::test]
    async fn test_panic_becomes_scoring_error() {
        let engine: Arc<dyn SentimentEngine> = Arc::new(PanickingEngine);
        let err = run_analysis(engine, "текст".to_string()).await.unwrap_err();
        match err {
            AnalyzerError::Scoring { message } => assert_eq!(message, "lexicon unavailable"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_spawn_analysis_posts_response() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let engine: Arc<dyn SentimentEngine> = Arc::new(LexiconScorer::new());
        let request = AnalysisRequest {
            id: 7,
            text: "ужасный день".to_string(),
        };

        spawn_analysis(engine, request, move |response| {
            let _ = tx.send(response);
        })
        .await
        .unwrap();

        let response = rx.recv().await.unwrap();
        assert_eq!(response.id, 7);
        assert_eq!(response.outcome.unwrap().sentiment, Sentiment::Negative);
    }
}
