//! Formatting utilities for terminal output

use colored::{Color, ColoredString, Colorize};

/// Filled and empty dots for the remaining mistakes
#[must_use]
pub fn mistake_dots(remaining: u8, max: u8) -> String {
    format!(
        "{}{}",
        "●".repeat(remaining as usize),
        "○".repeat(max.saturating_sub(remaining) as usize)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Terminal colour for a category colour tag
#[must_use]
pub fn tag_color(tag: &str) -> Color {
    match tag.to_lowercase().as_str() {
        "purple" => Color::Magenta,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "red" => Color::Red,
        "cyan" => Color::Cyan,
        _ => Color::White,
    }
}

/// Text on a background in the category's colour
#[must_use]
pub fn category_badge(text: &str, tag: &str) -> ColoredString {
    format!(" {text} ").black().bold().on_color(tag_color(tag))
}
