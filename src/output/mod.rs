//! Terminal output formatting
//!
//! Display utilities for the line-mode game and command results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_round_end, print_simulation_result, print_summary};
