//! # goshawk
//!
//! Adversarial game-tree search for two-player, zero-sum, perfect-information
//! games. The crate provides a family of interchangeable search strategies:
//!
//! - `MiniMax`: the reference max/min algorithm with alpha-beta pruning
//! - `NegaMax`: window-based negamax reformulation
//! - `NegaScout`: principal variation search with null-window probes
//! - `NegaMaxMemory` / `NegaScoutMemory`: transposition-table enhanced variants
//! - `Mtd`: the MTD(f) null-window driver over the memory strategy
//! - `Uct`: Monte-Carlo tree search with UCB selection and random rollouts
//!
//! The game itself (move generation, make/undo, evaluation) is supplied by the
//! caller through the [`Searchable`] trait; the strategies never own board
//! state, they only borrow it for the duration of one `search` call.
//!
//! ## Module structure
//!
//! - `window`: alpha/beta search window
//! - `searchable`: the collaborator contract
//! - `options`: search configuration
//! - `controller`: pause/interrupt token and progress counters
//! - `transposition`: hash-keyed cache of searched positions
//! - `search`: the deterministic minimax/negamax strategy family
//! - `mcts`: the stochastic UCT alternative
//! - `game_tree`: optional observational hook for tree visualization

pub mod controller;
pub mod game_tree;
pub mod mcts;
pub mod move_types;
pub mod options;
pub mod search;
pub mod searchable;
pub mod transposition;
pub mod window;

pub use controller::SearchController;
pub use game_tree::GameTreeListener;
pub use move_types::TwoPlayerMove;
pub use options::{MonteCarloOptions, SearchOptions};
pub use search::{SearchResult, SearchStrategy, SearchStrategyKind};
pub use searchable::Searchable;
pub use transposition::TranspositionTable;
pub use window::SearchWindow;

/// Position and move values throughout the crate.
pub type Value = i32;

/// Anything at or above this magnitude is considered a won game.
pub const WINNING_VALUE: Value = 1000;

/// Sentinel bound for open search windows. Kept well below `i32::MAX` so that
/// negation in the negamax recursion can never overflow.
pub const INFINITY: Value = 1_000_000;
