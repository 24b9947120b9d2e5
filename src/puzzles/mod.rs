//! Puzzle definitions
//!
//! The embedded default puzzle and loading of custom ones.

mod embedded;
pub mod loader;

pub use embedded::default_puzzle;
