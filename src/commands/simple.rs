//! Simple interactive CLI mode
//!
//! Text-based game without the TUI

use crate::core::SubmitOutcome;
use crate::engine::{Engine, StateStore};
use crate::output::{print_board, print_round_end};
use crate::stats::{GameRecord, StatsSink, submit_quietly};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle a word by name
    Toggle(String),
    /// Toggle the n-th active word (1-based)
    Index(usize),
    Submit,
    Shuffle,
    Deselect,
    /// Hidden escape hatch that starts the round over
    Reset,
    Help,
    Quit,
}

/// Parse a line of input into a command
#[must_use]
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let command = match input.to_lowercase().as_str() {
        "submit" | "enter" | "go" => Command::Submit,
        "shuffle" => Command::Shuffle,
        "deselect" | "clear" => Command::Deselect,
        "!reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => match input.parse::<usize>() {
            Ok(n) => Command::Index(n),
            Err(_) => Command::Toggle(input.to_string()),
        },
    };
    Some(command)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<S: StateStore>(engine: &mut Engine<S>, stats: &mut dyn StatsSink) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Connections - Create four groups of four!    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut round_started = Instant::now();

    if engine.status().is_terminal() {
        print_round_end(engine);
    } else {
        print_board(engine);
    }

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let Some(command) = parse_command(&line?) else {
            continue;
        };

        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => {
                print_help();
                continue;
            }
            Command::Reset => {
                engine.reset();
                round_started = Instant::now();
                println!("🔄 New round started!");
            }
            Command::Toggle(word) => {
                if !engine.toggle(&word) {
                    println!("Can't select '{word}' right now.");
                }
            }
            Command::Index(n) => {
                let word = n
                    .checked_sub(1)
                    .and_then(|i| engine.active_words().get(i).cloned());
                match word {
                    Some(word) => {
                        engine.toggle(&word);
                    }
                    None => println!("No word number {n}."),
                }
            }
            Command::Submit => {
                let outcome = engine.submit();
                if outcome == SubmitOutcome::Ignored {
                    println!("Select exactly four words first.");
                } else if outcome.is_terminal()
                    && let Some(record) = GameRecord::from_engine(engine, round_started.elapsed())
                {
                    submit_quietly(stats, &record);
                }
            }
            Command::Shuffle => engine.shuffle(),
            Command::Deselect => engine.deselect_all(),
        }

        print_board(engine);
        if engine.status().is_terminal() {
            print_round_end(engine);
        }
    }
}

fn print_help() {
    println!("Type a word or its number to select it (4 at a time).");
    println!("Commands: 'submit', 'shuffle', 'deselect', 'help', 'quit'\n");
}
