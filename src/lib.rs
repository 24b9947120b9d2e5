//! Connections
//!
//! A Connections-style word grouping puzzle: find four groups of four words
//! before making four mistakes.
//!
//! # Quick Start
//!
//! ```rust
//! use connections::core::{GameStatus, SubmitOutcome};
//! use connections::engine::{Engine, MemoryStore};
//! use connections::puzzles::default_puzzle;
//!
//! let mut engine = Engine::start(default_puzzle(), MemoryStore::new());
//! for word in ["SMH", "NGL", "WTF", "LMAO"] {
//!     engine.toggle(word);
//! }
//! assert!(matches!(engine.submit(), SubmitOutcome::Matched { won: false, .. }));
//! assert_eq!(engine.status(), GameStatus::Playing);
//! ```

// Core domain types
pub mod core;

// Round state machine and storage port
pub mod engine;

// Built-in and custom puzzles
pub mod puzzles;

// Play statistics
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod config;
pub mod error;
pub mod logging;
