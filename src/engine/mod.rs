//! Puzzle engine
//!
//! The round state machine plus the storage port it persists through.

mod game;
pub mod shuffle;
pub mod storage;

pub use game::{Engine, MAX_MISTAKES};
pub use storage::{FileStore, MemoryStore, PersistedState, STATE_KEY, SavedStatus, StateStore};
