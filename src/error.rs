//! Error types for the puzzle crate

use thiserror::Error;

/// A puzzle definition that cannot be played
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Puzzle must have exactly 4 categories, got {0}")]
    CategoryCount(usize),

    #[error("Category {0} has an empty name")]
    EmptyName(usize),

    #[error("Category '{0}' contains an empty word")]
    EmptyWord(String),

    #[error("Word '{word}' appears more than once in category '{category}'")]
    RepeatedWord { category: String, word: String },

    #[error("Word '{word}' belongs to both '{first}' and '{second}'")]
    SharedWord {
        word: String,
        first: String,
        second: String,
    },

    #[error("Failed to parse puzzle: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Failures of the persisted-state port
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed persisted state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of the statistics collaborators
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Stats I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stats encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unauthorized")]
    Unauthorized,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine a data directory; pass --state-dir")]
    NoDataDir,

    #[error("Failed to read puzzle file: {0}")]
    PuzzleRead(#[from] std::io::Error),

    #[error("Invalid puzzle: {0}")]
    Puzzle(#[from] PuzzleError),
}
