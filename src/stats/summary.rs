//! Aggregate statistics over stored rounds

use super::record::{RoundResult, StoredRecord};
use crate::error::StatsError;
use serde::Serialize;

/// Report returned by [`retrieve`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_plays: usize,
    pub wins: usize,
    pub losses: usize,
    /// Rounded to two decimals
    pub avg_mistakes: f64,
    /// Milliseconds, rounded to a whole number
    pub avg_time_to_complete: f64,
    /// Newest first
    pub plays: Vec<StoredRecord>,
}

impl Summary {
    /// Aggregate `records` in any order
    #[must_use]
    pub fn from_records(mut records: Vec<StoredRecord>) -> Self {
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let total = records.len();
        let count = |result| records.iter().filter(|r| r.record.result == result).count();
        let wins = count(RoundResult::Won);
        let losses = count(RoundResult::Lost);

        let (avg_mistakes, avg_time_to_complete) = if total == 0 {
            (0.0, 0.0)
        } else {
            let mistakes: f64 = records.iter().map(|r| f64::from(r.record.mistakes)).sum();
            let time: f64 = records
                .iter()
                .map(|r| r.record.time_to_complete as f64)
                .sum();
            (
                round_to(mistakes / total as f64, 2),
                round_to(time / total as f64, 0),
            )
        };

        Self {
            total_plays: total,
            wins,
            losses,
            avg_mistakes,
            avg_time_to_complete,
            plays: records,
        }
    }

    /// Share of plays that were won, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_plays == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_plays as f64 * 100.0
        }
    }
}

/// Build a [`Summary`] for a caller holding the shared secret
///
/// # Errors
/// Returns `StatsError::Unauthorized` if no secret is configured or
/// `provided` does not match it.
pub fn retrieve(
    records: Vec<StoredRecord>,
    provided: Option<&str>,
    expected: Option<&str>,
) -> Result<Summary, StatsError> {
    match (provided, expected) {
        (Some(provided), Some(expected)) if provided == expected => {
            Ok(Summary::from_records(records))
        }
        _ => Err(StatsError::Unauthorized),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
