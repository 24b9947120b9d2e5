//! Statistics submission
//!
//! Submission is fire-and-forget from the game's point of view: front-ends go
//! through [`submit_quietly`], so a failing sink can never alter gameplay.

use super::anonymize::hash_client;
use super::record::{GameRecord, StoredRecord};
use crate::error::StatsError;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Receiver of finished-round records
pub trait StatsSink {
    /// Store one record
    ///
    /// # Errors
    /// Returns an error if the record could not be stored.
    fn submit(&mut self, record: &GameRecord) -> Result<(), StatsError>;
}

/// Submit `record`, logging and discarding any failure
pub fn submit_quietly(sink: &mut dyn StatsSink, record: &GameRecord) {
    match sink.submit(record) {
        Ok(()) => debug!(result = ?record.result, "round submitted"),
        Err(e) => warn!(error = %e, "could not submit round statistics"),
    }
}

/// Sink that drops every record
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStats;

impl StatsSink for NullStats {
    fn submit(&mut self, _record: &GameRecord) -> Result<(), StatsError> {
        Ok(())
    }
}

/// JSON-lines file of [`StoredRecord`]s, one per finished round
#[derive(Debug, Clone)]
pub struct JsonlStats {
    path: PathBuf,
    ip_hash: String,
    user_agent: String,
}

impl JsonlStats {
    /// Open a stats file, anonymizing `client_id` once up front
    pub fn new(path: impl Into<PathBuf>, client_id: Option<&str>) -> Self {
        Self {
            path: path.into(),
            ip_hash: hash_client(client_id),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored record, oldest first
    ///
    /// A missing file is an empty history. Malformed lines are skipped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    pub fn load_all(path: &Path) -> Result<Vec<StoredRecord>, StatsError> {
        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (number, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => warn!(line = number + 1, error = %e, "skipping malformed stats line"),
            }
        }
        Ok(records)
    }
}

impl StatsSink for JsonlStats {
    fn submit(&mut self, record: &GameRecord) -> Result<(), StatsError> {
        let stored = StoredRecord {
            record: record.clone(),
            timestamp: Utc::now(),
            user_agent: self.user_agent.clone(),
            ip_hash: self.ip_hash.clone(),
        };
        let line = serde_json::to_string(&stored)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}
