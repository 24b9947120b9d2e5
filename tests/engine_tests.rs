//! Round-level properties of the puzzle engine

use connections::core::{Feedback, GameStatus, SubmitOutcome};
use connections::engine::{Engine, FileStore, MAX_MISTAKES, MemoryStore, STATE_KEY, StateStore};
use connections::puzzles::default_puzzle;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn seeded(seed: u64) -> Engine<MemoryStore> {
    let mut engine = Engine::with_rng(default_puzzle(), MemoryStore::new(), StdRng::seed_from_u64(seed));
    engine.load();
    engine
}

fn select<S: StateStore>(engine: &mut Engine<S>, words: &[&str]) {
    for word in words {
        engine.toggle(word);
    }
}

fn word_set<S: StateStore>(engine: &Engine<S>) -> HashSet<String> {
    engine.pool().iter().cloned().collect()
}

fn all_words() -> HashSet<String> {
    default_puzzle().all_words().into_iter().collect()
}

#[test]
fn every_permutation_of_a_category_matches() {
    let words = ["NGL", "LMAO", "WTF", "SMH"];
    let orders = [[0, 1, 2, 3], [3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]];

    for order in orders {
        let mut engine = seeded(5);
        let picked: Vec<&str> = order.iter().map(|&i| words[i]).collect();
        select(&mut engine, &picked);

        assert!(matches!(engine.submit(), SubmitOutcome::Matched { category: 3, .. }));
        assert_eq!(engine.solved().len(), 1);
    }
}

#[test]
fn one_away_example() {
    let mut engine = seeded(1);
    select(&mut engine, &["MADISON", "LOML", "ILYSM", "NGL"]);

    assert_eq!(
        engine.submit(),
        SubmitOutcome::Missed { one_away: true, lost: false }
    );
    assert_eq!(engine.mistakes(), 1);
    assert!(engine.solved().is_empty());
}

#[test]
fn four_misses_persist_lost() {
    let mut engine = seeded(2);
    let misses = [
        ["MADISON", "LOML", "NGL", "LMAO"],
        ["PEDRO", "DIVA", "COUCH", "IPAD"],
        ["ILYSM", "DL", "WTF", "LOUNGE"],
        ["ROYGBABE", "PRINCESS", "SMH", "CONNECTIONS"],
    ];

    let mut last = 0;
    for guess in misses {
        engine.deselect_all();
        select(&mut engine, &guess);
        engine.submit();
        assert!(engine.mistakes() > last, "mistakes only increase");
        last = engine.mistakes();
    }

    assert_eq!(engine.status(), GameStatus::Lost);
    assert_eq!(engine.mistakes(), MAX_MISTAKES);
    assert_eq!(
        engine.store().get(STATE_KEY).unwrap().as_deref(),
        Some(r#"{"status":"lost"}"#)
    );
}

#[test]
fn pool_invariant_holds_through_a_whole_round() {
    let mut engine = seeded(3);
    let expected = all_words();
    let groups: Vec<Vec<String>> = engine
        .puzzle()
        .categories()
        .iter()
        .map(|c| c.words.to_vec())
        .collect();

    select(&mut engine, &["MADISON", "NGL", "PEDRO", "COUCH"]);
    engine.submit();
    assert_eq!(word_set(&engine), expected);

    for group in groups.iter().rev() {
        engine.deselect_all();
        engine.shuffle();
        assert_eq!(word_set(&engine), expected);

        for word in group {
            engine.toggle(word);
        }
        engine.submit();
        assert_eq!(word_set(&engine), expected);
        assert_eq!(engine.pool().len(), 16);
    }

    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(engine.message(), Some(&Feedback::Won));
    assert_eq!(engine.mistakes(), 1);
}

#[test]
fn terminal_state_ignores_everything_but_reset() {
    let mut engine = seeded(4);
    select(&mut engine, &["MADISON", "LOML", "NGL", "LMAO"]);
    for _ in 0..4 {
        engine.submit();
    }
    let pool = engine.pool().to_vec();

    engine.shuffle();
    engine.deselect_all();
    assert!(!engine.toggle("DIVA"));
    assert_eq!(engine.submit(), SubmitOutcome::Ignored);
    assert_eq!(engine.pool(), pool.as_slice());
    assert_eq!(engine.status(), GameStatus::Lost);

    engine.reset();
    assert_eq!(engine.status(), GameStatus::Playing);
    assert_eq!(engine.mistakes(), 0);
    assert!(engine.selection().is_empty());
    assert!(engine.solved().is_empty());
}

#[test]
fn won_outcome_survives_a_reload() {
    let dir = tempfile::tempdir().unwrap();

    let mut engine = Engine::start(default_puzzle(), FileStore::new(dir.path()));
    let groups: Vec<[String; 4]> = engine
        .puzzle()
        .categories()
        .iter()
        .map(|c| c.words.clone())
        .collect();
    for group in &groups {
        for word in group {
            engine.toggle(word);
        }
        engine.submit();
    }
    assert_eq!(engine.status(), GameStatus::Won);

    let reloaded = Engine::start(default_puzzle(), FileStore::new(dir.path()));
    assert_eq!(reloaded.status(), GameStatus::Won);
    assert_eq!(reloaded.solved().len(), 4);
    assert_eq!(reloaded.mistakes(), 0);
}

#[test]
fn reset_clears_the_saved_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    store.set(STATE_KEY, r#"{"status":"lost"}"#).unwrap();

    let mut engine = Engine::start(default_puzzle(), store);
    assert_eq!(engine.status(), GameStatus::Lost);
    engine.reset();

    let reloaded = Engine::start(default_puzzle(), FileStore::new(dir.path()));
    assert_eq!(reloaded.status(), GameStatus::Playing);
}

#[test]
fn last_group_can_only_win() {
    for seed in 0..20 {
        let mut engine = seeded(seed);
        let groups: Vec<[String; 4]> = engine
            .puzzle()
            .categories()
            .iter()
            .map(|c| c.words.clone())
            .collect();
        for group in &groups[..3] {
            for word in group {
                engine.toggle(word);
            }
            engine.submit();
        }

        // Nothing selected: submit is a no-op, not a mistake
        assert_eq!(engine.submit(), SubmitOutcome::Ignored);
        assert_eq!(engine.active_words().len(), 4);

        let remaining: Vec<String> = engine.active_words().to_vec();
        for word in &remaining {
            engine.toggle(word);
        }
        assert_eq!(
            engine.submit(),
            SubmitOutcome::Matched { category: 3, won: true }
        );
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.mistakes(), 0);
    }
}
