//! Finished-round records

use crate::core::GameStatus;
use crate::engine::{Engine, StateStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundResult {
    Won,
    Lost,
}

/// What a client submits when a round ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub result: RoundResult,
    pub mistakes: u8,
    /// Milliseconds from round start to the terminal transition
    pub time_to_complete: u64,
    pub categories_solved: Vec<String>,
}

impl GameRecord {
    /// Describe a finished round
    ///
    /// Returns `None` while the round is still in progress.
    pub fn from_engine<S: StateStore>(engine: &Engine<S>, elapsed: Duration) -> Option<Self> {
        let result = match engine.status() {
            GameStatus::Won => RoundResult::Won,
            GameStatus::Lost => RoundResult::Lost,
            GameStatus::Loading | GameStatus::Playing => return None,
        };

        Some(Self {
            result,
            mistakes: engine.mistakes(),
            time_to_complete: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            categories_solved: engine.solved_categories().map(|c| c.name.clone()).collect(),
        })
    }
}

/// A record as stored, augmented on receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecord {
    #[serde(flatten)]
    pub record: GameRecord,
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
    pub ip_hash: String,
}
