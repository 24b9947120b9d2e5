//! Random-play simulation
//!
//! Plays many independent rounds with a bot that guesses four random unsolved
//! words at a time, checking the pool invariant after every move.

use crate::core::{GROUP_SIZE, GameStatus, Puzzle};
use crate::engine::shuffle::fisher_yates;
use crate::engine::{Engine, MemoryStore, StateStore};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Upper bound on moves per round; a round always ends well before this
const MAX_MOVES: usize = 64;

/// Outcome of a single simulated round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub won: bool,
    pub mistakes: u8,
    pub solved: usize,
    pub violations: usize,
}

/// Aggregate over all simulated rounds
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub average_mistakes: f64,
    /// Index = number of categories solved in a round
    pub solved_distribution: [usize; GROUP_SIZE + 1],
    pub invariant_violations: usize,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Play `rounds` rounds in parallel, seeding round `i` with `seed + i`
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_simulation(
    puzzle: &Puzzle,
    rounds: usize,
    seed: u64,
    show_progress: bool,
) -> SimulationResult {
    let pb = if show_progress {
        ProgressBar::new(rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let summaries: Vec<RoundSummary> = (0..rounds as u64)
        .into_par_iter()
        .map(|i| {
            let summary = play_round(puzzle.clone(), seed.wrapping_add(i));
            pb.inc(1);
            summary
        })
        .collect();
    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut solved_distribution = [0; GROUP_SIZE + 1];
    for summary in &summaries {
        solved_distribution[summary.solved.min(GROUP_SIZE)] += 1;
    }
    let wins = summaries.iter().filter(|s| s.won).count();
    let total_mistakes: usize = summaries.iter().map(|s| usize::from(s.mistakes)).sum();

    SimulationResult {
        rounds,
        wins,
        losses: rounds - wins,
        average_mistakes: if rounds == 0 {
            0.0
        } else {
            total_mistakes as f64 / rounds as f64
        },
        solved_distribution,
        invariant_violations: summaries.iter().map(|s| s.violations).sum(),
        duration,
        rounds_per_second: if duration.as_secs_f64() > 0.0 {
            rounds as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}

/// Play one round to completion with a random guesser
#[must_use]
pub fn play_round(puzzle: Puzzle, seed: u64) -> RoundSummary {
    let mut engine = Engine::with_rng(puzzle, MemoryStore::new(), StdRng::seed_from_u64(seed));
    engine.load();
    let mut bot = StdRng::seed_from_u64(seed.rotate_left(32) ^ 0x5DEE_CE66_D1CE_4E5B);
    let mut violations = 0;
    let mut tried: FxHashSet<Vec<String>> = FxHashSet::default();

    for _ in 0..MAX_MOVES {
        if engine.status().is_terminal() {
            break;
        }

        let mut candidates = engine.active_words().to_vec();
        fisher_yates(&mut candidates, &mut bot);
        let mut guess: Vec<String> = candidates.into_iter().take(GROUP_SIZE).collect();
        guess.sort();
        if !tried.insert(guess.clone()) && engine.active_words().len() > GROUP_SIZE {
            engine.shuffle();
            continue;
        }

        engine.deselect_all();
        for word in &guess {
            engine.toggle(word);
        }
        engine.submit();

        if !pool_is_intact(&engine) {
            violations += 1;
        }
    }

    RoundSummary {
        won: engine.status() == GameStatus::Won,
        mistakes: engine.mistakes(),
        solved: engine.solved().len(),
        violations,
    }
}

/// Solved words form the pool prefix and the pool holds each word exactly once
fn pool_is_intact<S: StateStore>(engine: &Engine<S>) -> bool {
    let all = engine.puzzle().all_words();
    let pool: FxHashSet<&String> = engine.pool().iter().collect();
    if pool.len() != all.len() || engine.pool().len() != all.len() {
        return false;
    }
    if !all.iter().all(|w| pool.contains(w)) {
        return false;
    }

    let prefix = &engine.pool()[..engine.solved().len() * GROUP_SIZE];
    engine
        .solved_categories()
        .flat_map(|c| c.words.iter())
        .zip(prefix)
        .all(|(a, b)| a == b)
}
