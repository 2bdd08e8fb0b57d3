//! TUI Widgets

pub mod input;
pub mod results;
pub mod status;

pub use input::{render_text_area, TextAreaState};
pub use results::{ResultsState, ResultsWidget};
pub use status::{HeaderBar, LoadingSpinner, StatusBar};
