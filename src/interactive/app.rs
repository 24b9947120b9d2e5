//! TUI application state and logic

use super::combo::ResetCombo;
use super::typewriter::Typewriter;
use crate::core::{GameStatus, SubmitOutcome, WON_MESSAGE};
use crate::engine::{Engine, StateStore};
use crate::stats::{GameRecord, StatsSink, submit_quietly};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// Words per row in the grid
pub const GRID_COLUMNS: usize = 4;

/// How long a wrong guess shakes the grid
const SHAKE_FOR: Duration = Duration::from_millis(300);

/// Redraw interval while nothing is pressed
const FRAME: Duration = Duration::from_millis(50);

/// Part of the winning message that fades away
pub const HIDDEN_PART: &str = "I love you";

/// Application state
pub struct App<S: StateStore> {
    pub engine: Engine<S>,
    /// Index into the engine's active words
    pub cursor: usize,
    pub typewriter: Option<Typewriter>,
    pub shake_until: Option<Instant>,
    pub should_quit: bool,
    combo: ResetCombo,
    stats: Box<dyn StatsSink>,
    round_started: Instant,
}

impl<S: StateStore> App<S> {
    /// Wrap a loaded engine
    ///
    /// A round restored as won starts its typewriter immediately.
    pub fn new(engine: Engine<S>, stats: Box<dyn StatsSink>) -> Self {
        let typewriter = (engine.status() == GameStatus::Won).then(won_typewriter);

        Self {
            engine,
            cursor: 0,
            typewriter,
            shake_until: None,
            should_quit: false,
            combo: ResetCombo::new(),
            stats,
            round_started: Instant::now(),
        }
    }

    /// Route one key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            if let KeyCode::Char(c) = key.code {
                self.combo.release(c);
            }
            return;
        }

        if let KeyCode::Char(c) = key.code {
            let shift = key.modifiers.contains(KeyModifiers::SHIFT) || c.is_ascii_uppercase();
            if self.combo.press(c, shift) {
                self.reset();
                return;
            }
            if shift {
                return;
            }
        } else {
            self.combo.clear();
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(0, 1),
            KeyCode::Char(' ') => self.toggle_at_cursor(),
            KeyCode::Enter => self.submit(),
            KeyCode::Char('s') => self.engine.shuffle(),
            KeyCode::Char('d') => self.engine.deselect_all(),
            _ => {}
        }
    }

    /// Move the cursor by columns and rows, clamped to the grid
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let len = self.engine.active_words().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }

        let columns = GRID_COLUMNS as isize;
        let target = self.cursor as isize + dx + dy * columns;
        if (0..len as isize).contains(&target) {
            self.cursor = target as usize;
        }
    }

    pub fn toggle_at_cursor(&mut self) {
        if let Some(word) = self.engine.active_words().get(self.cursor).cloned() {
            self.engine.toggle(&word);
        }
    }

    pub fn submit(&mut self) {
        let outcome = self.engine.submit();
        match outcome {
            SubmitOutcome::Ignored => return,
            SubmitOutcome::Matched { won, .. } => {
                if won {
                    self.typewriter = Some(won_typewriter());
                }
                self.clamp_cursor();
            }
            SubmitOutcome::Missed { .. } => {
                self.shake_until = Some(Instant::now() + SHAKE_FOR);
            }
        }

        if outcome.is_terminal() {
            self.report();
        }
    }

    /// Secret-combo reset: new round, timers dropped
    pub fn reset(&mut self) {
        self.engine.reset();
        self.typewriter = None;
        self.shake_until = None;
        self.cursor = 0;
        self.combo.clear();
        self.round_started = Instant::now();
        info!("round reset from keyboard");
    }

    #[must_use]
    pub fn is_shaking(&self) -> bool {
        self.shake_until.is_some_and(|until| Instant::now() < until)
    }

    fn clamp_cursor(&mut self) {
        let len = self.engine.active_words().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn report(&mut self) {
        if let Some(record) = GameRecord::from_engine(&self.engine, self.round_started.elapsed()) {
            submit_quietly(self.stats.as_mut(), &record);
        }
    }
}

fn won_typewriter() -> Typewriter {
    Typewriter::new(&format!("🎉 {WON_MESSAGE} 🎉"), Some(HIDDEN_PART))
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: StateStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: StateStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so the typewriter and shake keep animating between key presses
        if event::poll(FRAME)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
