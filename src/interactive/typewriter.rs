//! Progressive reveal of the winning message
//!
//! Purely a function of elapsed time, so dropping the value is all it takes
//! to cancel it.

use std::time::{Duration, Instant};

/// Delay between revealed characters
pub const CHAR_INTERVAL: Duration = Duration::from_millis(50);

/// When the hidden part starts to fade
pub const FADE_AFTER: Duration = Duration::from_millis(3000);

/// One rendered state of the typewriter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub before: String,
    /// The part that fades; empty until fully typed
    pub hidden: String,
    pub after: String,
    pub faded: bool,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    message: Vec<char>,
    hide: Option<String>,
    started: Instant,
}

impl Typewriter {
    pub fn new(message: &str, hide: Option<&str>) -> Self {
        Self {
            message: message.chars().collect(),
            hide: hide.map(str::to_string),
            started: Instant::now(),
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Number of characters visible after `elapsed`
    #[must_use]
    pub fn revealed(&self, elapsed: Duration) -> usize {
        let ticks = elapsed.as_millis() / CHAR_INTERVAL.as_millis();
        usize::try_from(ticks).map_or(self.message.len(), |t| t.min(self.message.len()))
    }

    #[must_use]
    pub fn is_done(&self, elapsed: Duration) -> bool {
        self.revealed(elapsed) == self.message.len()
    }

    /// Split the visible text around the hidden part
    #[must_use]
    pub fn frame(&self, elapsed: Duration) -> Frame {
        let displayed: String = self.message[..self.revealed(elapsed)].iter().collect();
        let faded = self.hide.is_some() && elapsed >= FADE_AFTER;

        if let Some(hide) = self.hide.as_deref()
            && let Some(index) = displayed.find(hide)
        {
            return Frame {
                before: displayed[..index].to_string(),
                hidden: hide.to_string(),
                after: displayed[index + hide.len()..].to_string(),
                faded,
            };
        }

        Frame {
            before: displayed,
            hidden: String::new(),
            after: String::new(),
            faded,
        }
    }
}
