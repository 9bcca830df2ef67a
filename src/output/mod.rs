//! Output formatting.
//!
//! - [`terminal`] - colored terminal match report

mod terminal;

pub use terminal::{pad_field, print_match_report};
