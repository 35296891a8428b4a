//! Cooperative pause/interrupt token and progress counters.
//!
//! A search runs synchronously on whatever thread calls it. An interactive
//! front end keeps a clone of the [`SearchController`] handle and uses it to
//! pause, resume, or interrupt the worker from outside. The worker checks the
//! token once per sibling-move iteration, so pause latency is bounded by the
//! branching factor, never by tree depth.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

/// How long one wait slice lasts while paused. The condvar wakes immediately
/// on resume or interrupt; the timeout only bounds a missed notification.
const PAUSE_SLICE: Duration = Duration::from_millis(100);

/// Shared pause/interrupt state and progress counters for one search call.
#[derive(Debug, Default)]
pub struct SearchController {
    paused: Mutex<bool>,
    resumed: Condvar,
    interrupted: std::sync::atomic::AtomicBool,
    moves_considered: AtomicU64,
    percent_done: AtomicUsize,
}

impl SearchController {
    pub fn new() -> Arc<Self> {
        Arc::new(SearchController::default())
    }

    /// Ask the running search to block at its next check point.
    pub fn pause(&self) {
        let mut paused = self.paused.lock().unwrap();
        *paused = true;
    }

    /// Release a paused search.
    pub fn continue_processing(&self) {
        let mut paused = self.paused.lock().unwrap();
        *paused = false;
        self.resumed.notify_all();
    }

    pub fn is_paused(&self) -> bool {
        *self.paused.lock().unwrap()
    }

    /// Sticky cancellation. The search unwinds returning its best-so-far
    /// move; partial results are valid output, not an error.
    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
        // Wake a search blocked in a pause so it can unwind.
        self.resumed.notify_all();
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    /// Block while paused; called once per sibling-move iteration.
    ///
    /// Returns true if the search has been interrupted (either while paused
    /// or before this check point) and should unwind.
    pub fn check_pause(&self) -> bool {
        let mut paused = self.paused.lock().unwrap();
        while *paused && !self.is_interrupted() {
            let (guard, _timeout) = self.resumed.wait_timeout(paused, PAUSE_SLICE).unwrap();
            paused = guard;
        }
        self.is_interrupted()
    }

    /// Record one considered move.
    pub fn count_move(&self) {
        self.moves_considered.fetch_add(1, Ordering::Relaxed);
    }

    /// Monotonically non-decreasing count of moves considered so far.
    pub fn num_moves_considered(&self) -> u64 {
        self.moves_considered.load(Ordering::Relaxed)
    }

    pub fn set_percent_done(&self, percent: usize) {
        self.percent_done.store(percent.min(100), Ordering::Relaxed);
    }

    /// Approximate completion percentage, computed only at the top ply.
    /// Pruning makes this an underestimate of real progress; accepted
    /// approximation, kept for UI compatibility.
    pub fn percent_done(&self) -> usize {
        self.percent_done.load(Ordering::Relaxed)
    }

    /// Clear counters and flags for a fresh search with the same handle.
    pub fn reset(&self) {
        self.interrupted.store(false, Ordering::SeqCst);
        self.moves_considered.store(0, Ordering::Relaxed);
        self.percent_done.store(0, Ordering::Relaxed);
        self.continue_processing();
    }
}
