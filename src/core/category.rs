//! Puzzle categories
//!
//! A `Puzzle` is four categories of four words. Once built it is immutable and
//! guarantees that all sixteen words are distinct.

use crate::error::PuzzleError;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of categories in a puzzle
pub const CATEGORY_COUNT: usize = 4;

/// Number of words in a category
pub const GROUP_SIZE: usize = 4;

/// How hard a category is meant to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Hardest,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Hardest => "Hardest",
        };
        write!(f, "{label}")
    }
}

/// A themed group of four words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub words: [String; GROUP_SIZE],
    /// Display colour tag (e.g. "purple")
    pub color: String,
    pub difficulty: Difficulty,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        words: [&str; GROUP_SIZE],
        color: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            name: name.into(),
            words: words.map(str::to_string),
            color: color.into(),
            difficulty,
        }
    }

    /// Check whether `word` belongs to this category
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Count how many of `selection` belong to this category
    #[must_use]
    pub fn overlap(&self, selection: &[String]) -> usize {
        selection.iter().filter(|w| self.contains(w)).count()
    }
}

/// Normalize a word for comparison: trimmed and upper-cased
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

/// A validated set of four categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    categories: Vec<Category>,
    index: FxHashMap<String, usize>,
}

impl Puzzle {
    /// Build a puzzle from its categories
    ///
    /// Words are normalized before validation.
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - There are not exactly 4 categories
    /// - A category name or word is empty
    /// - A word repeats within a category or across categories
    pub fn new(categories: Vec<Category>) -> Result<Self, PuzzleError> {
        if categories.len() != CATEGORY_COUNT {
            return Err(PuzzleError::CategoryCount(categories.len()));
        }

        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut normalized = Vec::with_capacity(CATEGORY_COUNT);

        for (i, mut category) in categories.into_iter().enumerate() {
            category.name = category.name.trim().to_string();
            if category.name.is_empty() {
                return Err(PuzzleError::EmptyName(i));
            }

            let mut seen: FxHashSet<String> = FxHashSet::default();
            for word in &mut category.words {
                *word = normalize(word);
                if word.is_empty() {
                    return Err(PuzzleError::EmptyWord(category.name.clone()));
                }
                if !seen.insert(word.clone()) {
                    return Err(PuzzleError::RepeatedWord {
                        category: category.name.clone(),
                        word: word.clone(),
                    });
                }
                if let Some(&other) = index.get(word.as_str()) {
                    let first: &Category = &normalized[other];
                    return Err(PuzzleError::SharedWord {
                        word: word.clone(),
                        first: first.name.clone(),
                        second: category.name.clone(),
                    });
                }
                index.insert(word.clone(), i);
            }

            normalized.push(category);
        }

        Ok(Self {
            categories: normalized,
            index,
        })
    }

    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[inline]
    #[must_use]
    pub fn category(&self, index: usize) -> &Category {
        &self.categories[index]
    }

    /// All sixteen words in category order
    #[must_use]
    pub fn all_words(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.words.iter().cloned())
            .collect()
    }

    /// Index of the category that owns `word`
    #[inline]
    #[must_use]
    pub fn category_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Find the category whose word set equals `selection`
    ///
    /// Order does not matter. Anything other than four words never matches.
    #[must_use]
    pub fn matching_category(&self, selection: &[String]) -> Option<usize> {
        if selection.len() != GROUP_SIZE {
            return None;
        }
        self.categories
            .iter()
            .position(|c| c.overlap(selection) == GROUP_SIZE)
    }

    /// True if some category shares exactly three words with `selection`
    #[must_use]
    pub fn is_one_away(&self, selection: &[String]) -> bool {
        self.categories
            .iter()
            .any(|c| c.overlap(selection) == GROUP_SIZE - 1)
    }
}
