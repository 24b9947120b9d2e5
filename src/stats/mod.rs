//! Play statistics
//!
//! Collaborators around the engine: finished-round records, where they are
//! submitted, and the aggregate report built from them.

pub mod anonymize;
mod record;
mod sink;
mod summary;

pub use record::{GameRecord, RoundResult, StoredRecord};
pub use sink::{JsonlStats, NullStats, StatsSink, submit_quietly};
pub use summary::{Summary, retrieve};
