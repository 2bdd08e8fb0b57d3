//! TUI Application state and event handling

use crate::config::{Messages, Settings, Theme};
use crate::models::AnalysisResult;
use crate::runner::{self, AnalysisRequest, AnalysisResponse};
use crate::scorer::SentimentEngine;
use crate::tui::events::{AppEvent, EventHandler, KeyAction};
use crate::tui::widgets::{LoadingSpinner, ResultsState, TextAreaState};
use crate::utils::{AnalyzerError, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Modal dialog shown over the main view
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Warning(String),
    Error(String),
}

/// Main application struct
pub struct App {
    engine: Arc<dyn SentimentEngine>,
    pub settings: Settings,
    pub theme: Theme,
    pub messages: Messages,

    pub input: TextAreaState,
    pub results: Option<AnalysisResult>,
    pub results_state: ResultsState,

    /// An analysis is in flight; the trigger is disabled
    pub busy: bool,
    pub dialog: Option<Dialog>,
    pub spinner: LoadingSpinner,

    pending: Option<u64>,
    next_request_id: u64,

    pub should_quit: bool,
}

impl App {
    pub fn new(
        engine: Arc<dyn SentimentEngine>,
        settings: Settings,
        theme: Theme,
        messages: Messages,
    ) -> Self {
        let spinner = LoadingSpinner::new(&theme.icons.spinner, &messages.results.analyzing);
        Self {
            engine,
            settings,
            theme,
            messages,
            input: TextAreaState::new(),
            results: None,
            results_state: ResultsState::default(),
            busy: false,
            dialog: None,
            spinner,
            pending: None,
            next_request_id: 1,
            should_quit: false,
        }
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, action: KeyAction, event_tx: &mpsc::UnboundedSender<AppEvent>) {
        if self.has_dialog() {
            self.handle_dialog_key(action);
            return;
        }

        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Submit => {
                if let Some(request) = self.begin_analysis() {
                    self.dispatch(request, event_tx);
                }
            }
            KeyAction::PageUp => self.results_state.scroll_up(5),
            KeyAction::PageDown => self.results_state.scroll_down(5),
            _ if self.busy => {}
            KeyAction::Clear => {
                self.input.clear();
                self.results = None;
                self.results_state.reset();
            }
            KeyAction::Char(c) => self.input.insert(c),
            KeyAction::Newline => self.input.newline(),
            KeyAction::Backspace => self.input.delete_backward(),
            KeyAction::Delete => self.input.delete_forward(),
            KeyAction::Left => self.input.move_left(),
            KeyAction::Right => self.input.move_right(),
            KeyAction::Up => self.input.move_up(),
            KeyAction::Down => self.input.move_down(),
            KeyAction::Home => self.input.move_home(),
            KeyAction::End => self.input.move_end(),
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Dismiss => self.dialog = None,
            _ => {}
        }
    }

    /// Validate the input and mark the app busy.
    ///
    /// Returns `None` when a request is already in flight or the input is
    /// blank; the latter opens a warning dialog instead.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        if self.busy {
            debug!("submit ignored while busy");
            return None;
        }
        if self.input.is_blank() {
            self.dialog = Some(Dialog::Warning(self.messages.errors.empty_input.clone()));
            return None;
        }

        let id = self.next_request_id;
        self.next_request_id += 1;
        self.pending = Some(id);
        self.busy = true;
        self.input.enabled = false;

        Some(AnalysisRequest {
            id,
            text: self.input.text(),
        })
    }

    fn dispatch(&self, request: AnalysisRequest, event_tx: &mpsc::UnboundedSender<AppEvent>) {
        let tx = event_tx.clone();
        runner::spawn_analysis(self.engine.clone(), request, move |response| {
            let _ = tx.send(response_event(response));
        });
    }

    /// Handle a finished analysis
    pub fn handle_analysis_complete(&mut self, id: u64, result: AnalysisResult) {
        if self.pending != Some(id) {
            return;
        }
        self.results = Some(result);
        self.results_state.reset();
        self.finish();
    }

    /// Handle a failed analysis
    pub fn handle_analysis_failed(&mut self, id: u64, message: &str) {
        if self.pending != Some(id) {
            return;
        }
        self.results = None;
        self.results_state.reset();
        self.dialog = Some(Dialog::Error(self.messages.analysis_failed(message)));
        self.finish();
    }

    fn finish(&mut self) {
        self.pending = None;
        self.busy = false;
        self.input.enabled = true;
    }

    /// Tick for animations
    pub fn tick(&mut self) {
        if self.busy {
            self.spinner.tick();
        }
    }

    /// Route an event from the handler to the matching state change
    pub fn handle_event(&mut self, event: AppEvent, event_tx: &mpsc::UnboundedSender<AppEvent>) {
        match event {
            AppEvent::Key(key) => {
                let action = if self.has_dialog() {
                    KeyAction::from_dialog(key)
                } else {
                    KeyAction::from_editor(key)
                };
                self.handle_key(action, event_tx);
            }
            AppEvent::Tick => self.tick(),
            AppEvent::AnalysisComplete { id, result } => self.handle_analysis_complete(id, *result),
            AppEvent::AnalysisFailed { id, message } => self.handle_analysis_failed(id, &message),
            AppEvent::Resize(_, _) => {
                // Terminal will handle resize automatically
            }
        }
    }
}

fn response_event(response: AnalysisResponse) -> AppEvent {
    match response.outcome {
        Ok(result) => AppEvent::AnalysisComplete {
            id: response.id,
            result: Box::new(result),
        },
        Err(e) => AppEvent::AnalysisFailed {
            id: response.id,
            message: e.to_string(),
        },
    }
}

fn init_error(e: io::Error) -> AnalyzerError {
    AnalyzerError::Initialization {
        message: format!("terminal: {}", e),
    }
}

/// TUI runner that manages terminal and event loop
pub struct TuiRunner {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventHandler,
    app: App,
}

impl TuiRunner {
    /// Create a new TUI runner
    pub fn new(app: App) -> Result<Self> {
        enable_raw_mode().map_err(init_error)?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(init_error(e));
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(init_error(e));
            }
        };

        let events = EventHandler::new(app.settings.ui.tick_rate());

        Ok(Self {
            terminal,
            events,
            app,
        })
    }

    /// Run the TUI event loop
    pub async fn run(&mut self) -> Result<()> {
        let event_tx = self.events.sender();

        loop {
            self.terminal.draw(|f| crate::tui::ui::draw(f, &mut self.app))?;

            match self.events.next().await {
                Some(event) => self.app.handle_event(event, &event_tx),
                None => break,
            }

            if self.app.should_quit {
                break;
            }
        }

        Ok(())
    }
}

impl Drop for TuiRunner {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
