//! Output formatting module
//!
//! Provides two output formats for the non-interactive mode:
//! - Rich terminal output with colors and tables
//! - JSON export

pub mod json;
pub mod tables;
pub mod terminal;

pub use json::{print_json, to_json_output, to_json_string, JsonOutput};
pub use tables::format_weight;
pub use terminal::{
    print_analysis, print_header, print_lexicon, print_summary, print_warning,
    print_word_scores, summary_text,
};
