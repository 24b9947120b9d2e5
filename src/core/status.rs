//! Round status, player-facing feedback, and submission outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a round: `Loading -> Playing -> {Won, Lost}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Loading,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and lost rounds only leave their state through a reset
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Loading => "loading",
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        write!(f, "{label}")
    }
}

/// Message shown to the player after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// A category was matched
    Solved(String),
    /// Three of the four selected words share a category
    OneAway,
    NotQuite,
    /// All four categories are solved
    Won,
}

/// Final celebratory message
pub const WON_MESSAGE: &str = "Congrats, you solved it! I love you... what? who typed that?";

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved(name) => write!(f, "✨ {name}! ✨"),
            Self::OneAway => write!(f, "One away! 🤏"),
            Self::NotQuite => write!(f, "Not quite! Try again 💜"),
            Self::Won => write!(f, "{WON_MESSAGE}"),
        }
    }
}

/// What a submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Not playing, or fewer than four words selected
    Ignored,
    Matched { category: usize, won: bool },
    Missed { one_away: bool, lost: bool },
}

impl SubmitOutcome {
    /// True if this submission ended the round
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Matched { won: true, .. } | Self::Missed { lost: true, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        assert!(!GameStatus::Loading.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
    }

    #[test]
    fn feedback_display() {
        assert_eq!(
            Feedback::Solved("TEXTING ABBREVIATIONS".to_string()).to_string(),
            "✨ TEXTING ABBREVIATIONS! ✨"
        );
        assert_eq!(Feedback::OneAway.to_string(), "One away! 🤏");
        assert_eq!(Feedback::NotQuite.to_string(), "Not quite! Try again 💜");
        assert_eq!(Feedback::Won.to_string(), WON_MESSAGE);
    }

    #[test]
    fn outcome_terminal() {
        assert!(SubmitOutcome::Matched { category: 0, won: true }.is_terminal());
        assert!(!SubmitOutcome::Matched { category: 0, won: false }.is_terminal());
        assert!(SubmitOutcome::Missed { one_away: false, lost: true }.is_terminal());
        assert!(!SubmitOutcome::Ignored.is_terminal());
    }

    #[test]
    fn status_serde_lowercase() {
        assert_eq!(serde_json::to_string(&GameStatus::Won).unwrap(), "\"won\"");
        let status: GameStatus = serde_json::from_str("\"lost\"").unwrap();
        assert_eq!(status, GameStatus::Lost);
    }
}
