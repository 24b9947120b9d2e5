//! Command implementations

pub mod simple;
pub mod simulate;
pub mod stats;

pub use simple::run_simple;
pub use simulate::{RoundSummary, SimulationResult, run_simulation};
pub use stats::{StatsRequest, load_summary};
