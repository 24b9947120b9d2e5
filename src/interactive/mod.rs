//! Interactive TUI interface

mod app;
pub mod combo;
mod rendering;
pub mod typewriter;

pub use app::{App, GRID_COLUMNS, HIDDEN_PART, run_tui};
pub use rendering::category_color;
