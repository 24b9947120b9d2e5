//! Puzzle loading utilities
//!
//! Custom puzzles are TOML files with four `[[categories]]` tables.

use crate::core::{Category, Puzzle};
use crate::error::{ConfigError, PuzzleError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PuzzleFile {
    categories: Vec<Category>,
}

/// Parse a puzzle from TOML text
///
/// # Errors
///
/// Returns `PuzzleError::Parse` for malformed TOML, or the validation error
/// from [`Puzzle::new`].
///
/// # Examples
/// ```
/// use connections::puzzles::loader::parse_puzzle;
///
/// let text = r#"
/// [[categories]]
/// name = "FISH"
/// words = ["bass", "pike", "carp", "sole"]
/// color = "blue"
/// difficulty = "easy"
///
/// [[categories]]
/// name = "TREES"
/// words = ["ash", "elm", "oak", "yew"]
/// color = "green"
/// difficulty = "medium"
///
/// [[categories]]
/// name = "NOTES"
/// words = ["do", "re", "mi", "fa"]
/// color = "yellow"
/// difficulty = "hard"
///
/// [[categories]]
/// name = "GREEK"
/// words = ["pi", "nu", "xi", "mu"]
/// color = "purple"
/// difficulty = "hardest"
/// "#;
/// let puzzle = parse_puzzle(text).unwrap();
/// assert_eq!(puzzle.categories().len(), 4);
/// ```
pub fn parse_puzzle(text: &str) -> Result<Puzzle, PuzzleError> {
    let file: PuzzleFile = toml::from_str(text)?;
    Puzzle::new(file.categories)
}

/// Load a puzzle from a TOML file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not describe a valid puzzle.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Puzzle, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_puzzle(&content)?)
}
