//! Transposition table: hash-keyed cache of previously searched positions.
//!
//! Each entry stores the best move found, the depth it was searched to, and
//! lower/upper bounds on the position's value. An entry is usable only if it
//! was searched at least as deep as the current request and its bounds say
//! something about the current window: a fail-low search only yields an upper
//! bound, a fail-high only a lower bound, and an exact value has both bounds
//! equal. Entries are never invalidated; the depth check at probe time is the
//! only staleness guard.
//!
//! Hash collisions (two positions sharing a 64-bit key) are a theoretical
//! risk that is accepted, not detected.

use crate::window::SearchWindow;
use crate::{Value, INFINITY};
use std::collections::HashMap;

/// Bounds on the value of one searched position.
#[derive(Debug, Clone)]
pub struct TtEntry<M> {
    pub best_move: Option<M>,
    /// Remaining search depth below the position when the entry was written.
    pub depth: i32,
    pub lower: Value,
    pub upper: Value,
}

impl<M> TtEntry<M> {
    /// An entry whose value fell strictly inside the search window.
    pub fn exact(best_move: Option<M>, depth: i32, value: Value) -> Self {
        TtEntry {
            best_move,
            depth,
            lower: value,
            upper: value,
        }
    }

    /// Classify a completed search against the window it ran under:
    /// fail-low stores an upper bound, fail-high a lower bound, and a value
    /// strictly inside the window is exact.
    pub fn classify(best_move: Option<M>, depth: i32, value: Value, window: SearchWindow) -> Self {
        if value <= window.alpha {
            TtEntry {
                best_move,
                depth,
                lower: -INFINITY,
                upper: value,
            }
        } else if value >= window.beta {
            TtEntry {
                best_move,
                depth,
                lower: value,
                upper: INFINITY,
            }
        } else {
            TtEntry::exact(best_move, depth, value)
        }
    }

    pub fn is_exact(&self) -> bool {
        self.lower == self.upper
    }
}

/// Hash-keyed cache of [`TtEntry`] values, owned by one memory-enhanced
/// strategy instance. Not designed for concurrent access.
#[derive(Debug)]
pub struct TranspositionTable<M> {
    table: HashMap<u64, TtEntry<M>>,
    hits: u64,
    near_hits: u64,
    misses: u64,
}

impl<M> Default for TranspositionTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> TranspositionTable<M> {
    pub fn new() -> Self {
        TranspositionTable {
            table: HashMap::new(),
            hits: 0,
            near_hits: 0,
            misses: 0,
        }
    }

    /// Look up an entry usable at `depth`. An entry searched shallower than
    /// the request counts as a near hit and is not returned.
    pub fn probe(&mut self, key: u64, depth: i32) -> Option<&TtEntry<M>> {
        match self.table.get(&key) {
            Some(entry) if entry.depth >= depth => {
                self.hits += 1;
                self.table.get(&key)
            }
            Some(_) => {
                self.near_hits += 1;
                None
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store an entry, keeping whichever of the old and new entries was
    /// searched deeper.
    pub fn store(&mut self, key: u64, entry: TtEntry<M>) {
        match self.table.get(&key) {
            Some(existing) if existing.depth > entry.depth => {}
            _ => {
                self.table.insert(key, entry);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
        self.near_hits = 0;
        self.misses = 0;
    }

    /// (hits, near hits, misses) since construction or the last clear.
    pub fn stats(&self) -> (u64, u64, u64) {
        (self.hits, self.near_hits, self.misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_respects_depth() {
        let mut tt: TranspositionTable<u32> = TranspositionTable::new();
        tt.store(1, TtEntry::exact(Some(7), 3, 50));

        assert!(tt.probe(1, 3).is_some(), "same depth should hit");
        assert!(tt.probe(1, 2).is_some(), "shallower request should hit");
        assert!(tt.probe(1, 4).is_none(), "deeper request must miss");
        assert_eq!(tt.stats(), (2, 1, 0));
    }

    #[test]
    fn deeper_entry_is_kept_over_shallower() {
        let mut tt: TranspositionTable<u32> = TranspositionTable::new();
        tt.store(1, TtEntry::exact(Some(7), 5, 100));
        tt.store(1, TtEntry::exact(Some(9), 3, 40));

        let entry = tt.probe(1, 5).expect("deep entry should survive");
        assert_eq!(entry.best_move, Some(7));
        assert_eq!(entry.lower, 100);
    }

    #[test]
    fn classify_fail_low_gives_upper_bound() {
        let window = SearchWindow::new(10, 20);
        let entry: TtEntry<u32> = TtEntry::classify(None, 2, 5, window);
        assert_eq!(entry.upper, 5);
        assert_eq!(entry.lower, -INFINITY);
        assert!(!entry.is_exact());
    }

    #[test]
    fn classify_fail_high_gives_lower_bound() {
        let window = SearchWindow::new(10, 20);
        let entry: TtEntry<u32> = TtEntry::classify(None, 2, 25, window);
        assert_eq!(entry.lower, 25);
        assert_eq!(entry.upper, INFINITY);
    }

    #[test]
    fn classify_inside_window_is_exact() {
        let window = SearchWindow::new(10, 20);
        let entry: TtEntry<u32> = TtEntry::classify(Some(3), 2, 15, window);
        assert!(entry.is_exact());
        assert_eq!(entry.lower, 15);
        assert_eq!(entry.upper, 15);
    }
}
