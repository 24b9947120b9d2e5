//! Statistics report

use crate::error::StatsError;
use crate::stats::{JsonlStats, Summary, retrieve};
use std::path::Path;

/// Options for the stats report
#[derive(Debug, Clone)]
pub struct StatsRequest<'a> {
    pub path: &'a Path,
    /// Secret supplied by the caller
    pub secret: Option<&'a str>,
    /// Secret configured for this installation
    pub expected: Option<&'a str>,
}

/// Load stored rounds and summarize them for an authorized caller
///
/// The secret is checked before the file is read.
///
/// # Errors
///
/// Returns `StatsError::Unauthorized` on a secret mismatch, or an I/O error
/// if the stats file cannot be read.
pub fn load_summary(request: &StatsRequest<'_>) -> Result<Summary, StatsError> {
    retrieve(Vec::new(), request.secret, request.expected)?;
    let records = JsonlStats::load_all(request.path)?;
    retrieve(records, request.secret, request.expected)
}
