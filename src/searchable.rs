//! The contract between the search strategies and the game implementation.

use crate::move_types::TwoPlayerMove;
use crate::options::SearchOptions;
use crate::Value;

/// The capability a game must expose for the strategies to search it.
///
/// The implementor owns the board and the move list; a strategy borrows the
/// board exclusively for the duration of one `search` call and mutates it
/// only through paired [`make_move`](Searchable::make_move) /
/// [`undo_move`](Searchable::undo_move) calls in strict stack order.
///
/// Move lists are expected sorted best-first by the implementor's evaluation;
/// pruning efficiency (not correctness) depends on that ordering quality.
pub trait Searchable: Clone {
    type Move: TwoPlayerMove;

    /// Generate candidate next moves after `last_move`, sorted best-first.
    /// An empty list means the game is over and the player who made
    /// `last_move` won.
    fn generate_moves(&mut self, last_move: &Self::Move) -> Vec<Self::Move>;

    /// Generate only the urgent moves used by the quiescence extension
    /// (e.g. the continuations of a capture exchange).
    fn generate_urgent_moves(&mut self, last_move: &Self::Move) -> Vec<Self::Move>;

    /// Apply a move to the board.
    fn make_move(&mut self, mv: &Self::Move);

    /// Retract a move from the board. Must be called with the exact move most
    /// recently applied; implementors should treat a mismatch as fatal.
    fn undo_move(&mut self, mv: &Self::Move);

    /// True if the game is over after `last_move`.
    fn done(&self, last_move: &Self::Move) -> bool;

    /// True if `last_move` left the position unstable (mid-exchange, group in
    /// atari, ...) so the quiescence extension should keep searching.
    fn in_jeopardy(&self, last_move: &Self::Move) -> bool;

    /// Incrementally maintained 64-bit hash of the current position
    /// (Zobrist-style). Key for the transposition table.
    fn hash_key(&self) -> u64;

    /// Full evaluation of the position after `last_move`, from player one's
    /// perspective. Used by UCT to score rollout terminals.
    fn worth(&self, last_move: &Self::Move) -> Value;

    /// Independent deep copy for rollouts; mutations of the copy must never
    /// affect `self`.
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Configuration read once at strategy construction.
    fn search_options(&self) -> SearchOptions;
}
