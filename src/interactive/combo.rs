//! Secret reset combo
//!
//! Holding Shift while pressing R, E, S and T (in any order) resets the
//! round. Terminals rarely report key releases, so any unshifted key also
//! forgets what was held.

use rustc_hash::FxHashSet;

const COMBO: [char; 4] = ['r', 'e', 's', 't'];

#[derive(Debug, Default, Clone)]
pub struct ResetCombo {
    held: FxHashSet<char>,
}

impl ResetCombo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press
    ///
    /// Returns `true` when the combo completes; the held set is then cleared.
    pub fn press(&mut self, key: char, shift: bool) -> bool {
        if !shift {
            self.held.clear();
            return false;
        }

        self.held.insert(key.to_ascii_lowercase());
        if COMBO.iter().all(|k| self.held.contains(k)) {
            self.held.clear();
            return true;
        }
        false
    }

    pub fn release(&mut self, key: char) {
        self.held.remove(&key.to_ascii_lowercase());
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}
