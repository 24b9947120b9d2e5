//! Puzzle game-state engine
//!
//! Owns the word pool, the current selection, the solved categories and the
//! mistake counter of a single round. Every operation is a no-op unless the
//! round is in a state where it makes sense; nothing here returns an error.

use super::shuffle::fisher_yates;
use super::storage::{PersistedState, STATE_KEY, SavedStatus, StateStore};
use crate::core::{Category, Feedback, GROUP_SIZE, GameStatus, Puzzle, SubmitOutcome, normalize};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

/// Incorrect submissions allowed before the round is lost
pub const MAX_MISTAKES: u8 = 4;

/// State of one round of the puzzle
pub struct Engine<S: StateStore> {
    puzzle: Puzzle,
    store: S,
    rng: StdRng,
    /// Display order of all sixteen words; solved words form a prefix
    pool: Vec<String>,
    selection: Vec<String>,
    solved: Vec<usize>,
    mistakes: u8,
    status: GameStatus,
    message: Option<Feedback>,
}

impl<S: StateStore> Engine<S> {
    /// Create an engine in the `Loading` state with an OS-seeded RNG
    ///
    /// Call [`Engine::load`] to consult persisted state, or use
    /// [`Engine::start`] to do both.
    pub fn new(puzzle: Puzzle, store: S) -> Self {
        Self::with_rng(puzzle, store, StdRng::from_os_rng())
    }

    /// Create an engine in the `Loading` state with a caller-provided RNG
    pub fn with_rng(puzzle: Puzzle, store: S, mut rng: StdRng) -> Self {
        let mut pool = puzzle.all_words();
        fisher_yates(&mut pool, &mut rng);

        Self {
            puzzle,
            store,
            rng,
            pool,
            selection: Vec::new(),
            solved: Vec::new(),
            mistakes: 0,
            status: GameStatus::Loading,
            message: None,
        }
    }

    /// Create and load in one step
    pub fn start(puzzle: Puzzle, store: S) -> Self {
        let mut engine = Self::new(puzzle, store);
        engine.load();
        engine
    }

    /// Leave `Loading` by restoring a persisted terminal status, if any
    ///
    /// Unreadable or malformed state counts as absent.
    pub fn load(&mut self) {
        if self.status != GameStatus::Loading {
            return;
        }

        let saved = match self.store.get(STATE_KEY) {
            Ok(Some(text)) => match PersistedState::decode(&text) {
                Ok(state) => Some(state.status),
                Err(e) => {
                    warn!(error = %e, "ignoring malformed persisted state");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not read persisted state");
                None
            }
        };

        match saved {
            Some(SavedStatus::Won) => {
                self.solved = (0..self.puzzle.categories().len()).collect();
                self.pool = self.puzzle.all_words();
                self.message = Some(Feedback::Won);
                self.status = GameStatus::Won;
            }
            Some(SavedStatus::Lost) => self.status = GameStatus::Lost,
            None => self.status = GameStatus::Playing,
        }
        info!(status = %self.status, "round loaded");
    }

    /// Select or deselect `word`
    ///
    /// Returns `true` if the selection changed.
    pub fn toggle(&mut self, word: &str) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }

        let word = normalize(word);
        let Some(category) = self.puzzle.category_of(&word) else {
            return false;
        };
        if self.solved.contains(&category) {
            return false;
        }

        if let Some(pos) = self.selection.iter().position(|w| *w == word) {
            self.selection.remove(pos);
        } else if self.selection.len() < GROUP_SIZE {
            self.selection.push(word);
        } else {
            return false;
        }
        debug!(selection = ?self.selection, "selection changed");
        true
    }

    /// Reshuffle the unsolved words, keeping solved ones in front
    pub fn shuffle(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        let split = self.solved_word_count();
        fisher_yates(&mut self.pool[split..], &mut self.rng);
        debug!("pool shuffled");
    }

    /// Clear the selection and any message
    pub fn deselect_all(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.selection.clear();
        self.message = None;
    }

    /// Check the four selected words against the puzzle
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.status != GameStatus::Playing || self.selection.len() != GROUP_SIZE {
            return SubmitOutcome::Ignored;
        }

        if let Some(category) = self.puzzle.matching_category(&self.selection) {
            self.solve(category);
            let won = self.solved.len() == self.puzzle.categories().len();
            if won {
                self.finish(GameStatus::Won);
                self.message = Some(Feedback::Won);
            }
            return SubmitOutcome::Matched { category, won };
        }

        let one_away = self.puzzle.is_one_away(&self.selection);
        self.mistakes = (self.mistakes + 1).min(MAX_MISTAKES);
        info!(mistakes = self.mistakes, one_away, "incorrect guess");

        let lost = self.mistakes >= MAX_MISTAKES;
        if lost {
            self.finish(GameStatus::Lost);
        } else {
            self.message = Some(if one_away {
                Feedback::OneAway
            } else {
                Feedback::NotQuite
            });
        }
        SubmitOutcome::Missed { one_away, lost }
    }

    /// Start over regardless of status, forgetting any persisted outcome
    pub fn reset(&mut self) {
        if let Err(e) = self.store.remove(STATE_KEY) {
            warn!(error = %e, "could not clear persisted state");
        }

        self.pool = self.puzzle.all_words();
        fisher_yates(&mut self.pool, &mut self.rng);
        self.selection.clear();
        self.solved.clear();
        self.mistakes = 0;
        self.message = None;
        self.status = GameStatus::Playing;
        info!("round reset");
    }

    fn solve(&mut self, category: usize) {
        let words = &self.puzzle.category(category).words;
        info!(category = %self.puzzle.category(category).name, "category solved");

        let split = self.solved_word_count();
        let mut pool: Vec<String> = self.pool[..split].to_vec();
        pool.extend(words.iter().cloned());
        pool.extend(
            self.pool[split..]
                .iter()
                .filter(|w| !words.contains(w))
                .cloned(),
        );
        self.pool = pool;

        self.solved.push(category);
        self.selection.clear();
        self.message = Some(Feedback::Solved(self.puzzle.category(category).name.clone()));
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        let saved = match status {
            GameStatus::Won => SavedStatus::Won,
            _ => SavedStatus::Lost,
        };

        let written = PersistedState { status: saved }
            .encode()
            .and_then(|text| self.store.set(STATE_KEY, &text));
        if let Err(e) = written {
            warn!(error = %e, "could not persist round outcome");
        }
        info!(status = %status, mistakes = self.mistakes, "round finished");
    }

    fn solved_word_count(&self) -> usize {
        self.solved.len() * GROUP_SIZE
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// All sixteen words in display order, solved words first
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Unsolved words in display order
    #[inline]
    #[must_use]
    pub fn active_words(&self) -> &[String] {
        &self.pool[self.solved_word_count()..]
    }

    #[inline]
    #[must_use]
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, word: &str) -> bool {
        self.selection.iter().any(|w| w == word)
    }

    /// Indices of solved categories in the order they were found
    #[inline]
    #[must_use]
    pub fn solved(&self) -> &[usize] {
        &self.solved
    }

    pub fn solved_categories(&self) -> impl Iterator<Item = &Category> {
        self.solved.iter().map(|&i| self.puzzle.category(i))
    }

    #[inline]
    #[must_use]
    pub fn mistakes(&self) -> u8 {
        self.mistakes
    }

    #[inline]
    #[must_use]
    pub fn mistakes_remaining(&self) -> u8 {
        MAX_MISTAKES - self.mistakes
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> Option<&Feedback> {
        self.message.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::storage::MemoryStore;
    use crate::error::StorageError;
    use crate::puzzles::default_puzzle;
    use rustc_hash::FxHashSet;

    fn engine() -> Engine<MemoryStore> {
        let mut engine =
            Engine::with_rng(default_puzzle(), MemoryStore::new(), StdRng::seed_from_u64(11));
        engine.load();
        engine
    }

    fn select(engine: &mut Engine<impl StateStore>, words: &[&str]) {
        for word in words {
            assert!(engine.toggle(word), "could not select {word}");
        }
    }

    fn pool_intact(engine: &Engine<impl StateStore>) -> bool {
        let pool: FxHashSet<&String> = engine.pool().iter().collect();
        let all = engine.puzzle().all_words();
        pool.len() == 16 && all.iter().all(|w| pool.contains(w))
    }

    /// Store whose writes always fail
    struct BrokenStore;

    impl StateStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(std::io::Error::other("disk on fire").into())
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(std::io::Error::other("disk on fire").into())
        }
        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(std::io::Error::other("disk on fire").into())
        }
    }

    #[test]
    fn new_engine_is_loading_until_loaded() {
        let mut engine = Engine::new(default_puzzle(), MemoryStore::new());
        assert_eq!(engine.status(), GameStatus::Loading);
        assert!(!engine.toggle("NGL"));
        engine.load();
        assert_eq!(engine.status(), GameStatus::Playing);
        assert!(pool_intact(&engine));
    }

    #[test]
    fn toggle_selects_and_deselects() {
        let mut engine = engine();
        assert!(engine.toggle("ngl"));
        assert_eq!(engine.selection(), &["NGL".to_string()]);
        assert!(engine.toggle("NGL"));
        assert!(engine.selection().is_empty());
    }

    #[test]
    fn fifth_selection_is_ignored() {
        let mut engine = engine();
        select(&mut engine, &["NGL", "LMAO", "WTF", "PEDRO"]);
        assert!(!engine.toggle("DIVA"));
        assert_eq!(engine.selection().len(), 4);
    }

    #[test]
    fn unknown_word_is_ignored() {
        let mut engine = engine();
        assert!(!engine.toggle("BANANA"));
        assert!(engine.selection().is_empty());
    }

    #[test]
    fn submit_requires_four_words() {
        let mut engine = engine();
        select(&mut engine, &["NGL", "LMAO", "WTF"]);
        assert_eq!(engine.submit(), SubmitOutcome::Ignored);
        assert_eq!(engine.mistakes(), 0);
    }

    #[test]
    fn match_moves_words_to_front() {
        let mut engine = engine();
        select(&mut engine, &["SMH", "WTF", "NGL", "LMAO"]);
        let outcome = engine.submit();

        assert_eq!(outcome, SubmitOutcome::Matched { category: 3, won: false });
        assert_eq!(&engine.pool()[..4], &["NGL", "LMAO", "WTF", "SMH"]);
        assert_eq!(engine.active_words().len(), 12);
        assert!(engine.selection().is_empty());
        assert_eq!(
            engine.message(),
            Some(&Feedback::Solved("TEXTING ABBREVIATIONS".to_string()))
        );
        assert!(pool_intact(&engine));
    }

    #[test]
    fn solved_words_cannot_be_selected() {
        let mut engine = engine();
        select(&mut engine, &["NGL", "LMAO", "WTF", "SMH"]);
        engine.submit();
        assert!(!engine.toggle("NGL"));
    }

    #[test]
    fn one_away_miss() {
        let mut engine = engine();
        select(&mut engine, &["MADISON", "LOML", "ILYSM", "NGL"]);
        let outcome = engine.submit();

        assert_eq!(outcome, SubmitOutcome::Missed { one_away: true, lost: false });
        assert_eq!(engine.mistakes(), 1);
        assert_eq!(engine.message(), Some(&Feedback::OneAway));
        assert_eq!(engine.selection().len(), 4);
    }

    #[test]
    fn plain_miss_says_not_quite() {
        let mut engine = engine();
        select(&mut engine, &["MADISON", "LOML", "NGL", "LMAO"]);
        assert_eq!(
            engine.submit(),
            SubmitOutcome::Missed { one_away: false, lost: false }
        );
        assert_eq!(engine.message(), Some(&Feedback::NotQuite));
    }

    #[test]
    fn four_misses_lose_and_persist() {
        let mut engine = engine();
        select(&mut engine, &["MADISON", "LOML", "NGL", "LMAO"]);
        for _ in 0..3 {
            engine.submit();
        }
        assert_eq!(engine.status(), GameStatus::Playing);

        assert_eq!(
            engine.submit(),
            SubmitOutcome::Missed { one_away: false, lost: true }
        );
        assert_eq!(engine.status(), GameStatus::Lost);
        assert_eq!(engine.mistakes(), MAX_MISTAKES);
        assert_eq!(
            engine.store().get(STATE_KEY).unwrap().as_deref(),
            Some(r#"{"status":"lost"}"#)
        );

        // Terminal: further submissions do nothing
        assert_eq!(engine.submit(), SubmitOutcome::Ignored);
        assert_eq!(engine.mistakes(), MAX_MISTAKES);
    }

    #[test]
    fn solving_everything_wins() {
        let mut engine = engine();
        let groups: Vec<[String; 4]> = engine
            .puzzle()
            .categories()
            .iter()
            .map(|c| c.words.clone())
            .collect();

        for (i, group) in groups.iter().enumerate() {
            for word in group {
                engine.toggle(word);
            }
            let outcome = engine.submit();
            assert_eq!(
                outcome,
                SubmitOutcome::Matched { category: i, won: i == 3 }
            );
            assert!(pool_intact(&engine));
        }

        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.message(), Some(&Feedback::Won));
        assert!(engine.active_words().is_empty());
        assert_eq!(
            engine.store().get(STATE_KEY).unwrap().as_deref(),
            Some(r#"{"status":"won"}"#)
        );
    }

    #[test]
    fn shuffle_keeps_solved_prefix() {
        let mut engine = engine();
        select(&mut engine, &["PEDRO", "PRINCESS", "DIVA", "DL"]);
        engine.submit();
        let prefix: Vec<String> = engine.pool()[..4].to_vec();

        for _ in 0..5 {
            engine.shuffle();
            assert_eq!(&engine.pool()[..4], prefix.as_slice());
            assert!(pool_intact(&engine));
        }
    }

    #[test]
    fn deselect_all_clears_message() {
        let mut engine = engine();
        select(&mut engine, &["MADISON", "LOML", "NGL", "LMAO"]);
        engine.submit();
        engine.deselect_all();
        assert!(engine.selection().is_empty());
        assert_eq!(engine.message(), None);
    }

    #[test]
    fn restores_won_state() {
        let store = MemoryStore::with_entry(STATE_KEY, r#"{"status":"won"}"#);
        let engine = Engine::start(default_puzzle(), store);

        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(engine.solved(), &[0, 1, 2, 3]);
        assert_eq!(engine.mistakes(), 0);
        assert!(engine.active_words().is_empty());
    }

    #[test]
    fn restores_lost_state() {
        let store = MemoryStore::with_entry(STATE_KEY, r#"{"status":"lost"}"#);
        let mut engine = Engine::start(default_puzzle(), store);

        assert_eq!(engine.status(), GameStatus::Lost);
        assert!(engine.solved().is_empty());
        assert!(!engine.toggle("NGL"));
    }

    #[test]
    fn corrupt_state_means_playing() {
        for raw in ["{", r#"{"status":"playing"}"#, r#"{"status":7}"#, ""] {
            let store = MemoryStore::with_entry(STATE_KEY, raw);
            let engine = Engine::start(default_puzzle(), store);
            assert_eq!(engine.status(), GameStatus::Playing, "input {raw:?}");
        }
    }

    #[test]
    fn storage_failures_never_block_play() {
        let mut engine = Engine::start(default_puzzle(), BrokenStore);
        assert_eq!(engine.status(), GameStatus::Playing);

        select(&mut engine, &["MADISON", "LOML", "NGL", "LMAO"]);
        for _ in 0..4 {
            engine.submit();
        }
        assert_eq!(engine.status(), GameStatus::Lost);

        engine.reset();
        assert_eq!(engine.status(), GameStatus::Playing);
    }

    #[test]
    fn reset_from_terminal_state() {
        let store = MemoryStore::with_entry(STATE_KEY, r#"{"status":"won"}"#);
        let mut engine = Engine::start(default_puzzle(), store);
        engine.reset();

        assert_eq!(engine.status(), GameStatus::Playing);
        assert!(engine.solved().is_empty());
        assert!(engine.selection().is_empty());
        assert_eq!(engine.mistakes(), 0);
        assert_eq!(engine.message(), None);
        assert_eq!(engine.store().get(STATE_KEY).unwrap(), None);
        assert_eq!(engine.active_words().len(), 16);
        assert!(pool_intact(&engine));
    }
}
