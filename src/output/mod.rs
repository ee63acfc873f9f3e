//! Terminal output formatting
//!
//! Display utilities for the line-based front end and command results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_end_screen, print_seed_report, print_share_result};
