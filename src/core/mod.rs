//! Core domain types for the puzzle
//!
//! Categories, the validated puzzle, and the round status vocabulary.
//! Everything here is pure data with no I/O.

mod category;
mod status;

pub use category::{CATEGORY_COUNT, Category, Difficulty, GROUP_SIZE, Puzzle, normalize};
pub use status::{Feedback, GameStatus, SubmitOutcome, WON_MESSAGE};
