//! Event handling for TUI

use crate::models::AnalysisResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// Application events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input
    Key(KeyEvent),
    /// Tick for animations/updates
    Tick,
    /// Resize event
    Resize(u16, u16),
    /// Background analysis finished
    AnalysisComplete {
        id: u64,
        result: Box<AnalysisResult>,
    },
    /// Background analysis failed
    AnalysisFailed { id: u64, message: String },
}

/// Event handler that polls for keyboard events
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        tokio::spawn(async move {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let app_event = match evt {
                            // Windows reports both press and release
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                AppEvent::Key(key)
                            }
                            Event::Resize(w, h) => AppEvent::Resize(w, h),
                            _ => continue,
                        };
                        if event_tx.send(app_event).is_err() {
                            break;
                        }
                    }
                } else if event_tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx }
    }

    /// Get the next event
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    /// Get sender for sending events from async tasks
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}

/// Key action abstraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Quit,
    Submit,
    Clear,
    Dismiss,
    Up,
    Down,
    Left,
    Right,
    Newline,
    Char(char),
    Backspace,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    None,
}

impl KeyAction {
    /// Convert key event to action while editing text.
    /// Printable characters pass through; shortcuts use Ctrl or function keys.
    pub fn from_editor(key: KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => KeyAction::Quit,
            KeyCode::Char('s') if ctrl => KeyAction::Submit,
            KeyCode::Char('l') if ctrl => KeyAction::Clear,
            KeyCode::Enter if ctrl => KeyAction::Submit,
            KeyCode::F(5) => KeyAction::Submit,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Up => KeyAction::Up,
            KeyCode::Down => KeyAction::Down,
            KeyCode::Left => KeyAction::Left,
            KeyCode::Right => KeyAction::Right,
            KeyCode::Enter => KeyAction::Newline,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Delete => KeyAction::Delete,
            KeyCode::Home => KeyAction::Home,
            KeyCode::End => KeyAction::End,
            KeyCode::PageUp => KeyAction::PageUp,
            KeyCode::PageDown => KeyAction::PageDown,
            KeyCode::Char(_) if ctrl => KeyAction::None,
            KeyCode::Char(c) => KeyAction::Char(c),
            _ => KeyAction::None,
        }
    }

    /// Convert key event to action while a dialog is open
    pub fn from_dialog(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyAction::Quit
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => KeyAction::Dismiss,
            _ => KeyAction::None,
        }
    }
}
