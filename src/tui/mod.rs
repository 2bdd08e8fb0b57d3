//! Terminal User Interface module
//!
//! Full-screen analyzer window built on ratatui:
//! - Multi-line text input and analyze trigger
//! - Coloured summary line and per-word weights table
//! - Warning and error dialogs

pub mod app;
pub mod events;
pub mod ui;
pub mod widgets;

pub use app::{App, Dialog, TuiRunner};
