//! Search configuration.
//!
//! Plain data read once at strategy construction through
//! [`crate::Searchable::search_options`]. Serde derives let callers load
//! these from whatever configuration format they use.

use serde::{Deserialize, Serialize};

/// Options for the deterministic (minimax family) strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Use alpha-beta pruning. Turning this off gives a full-width search
    /// that must select the same move, only slower.
    pub alpha_beta: bool,

    /// Extend the search past the depth limit while the position is unstable.
    pub quiescence: bool,

    /// Number of plies to look ahead.
    pub look_ahead: i32,

    /// Never extend a quiescent line more than this many plies past depth 0.
    pub max_quiescent_depth: i32,

    pub monte_carlo: MonteCarloOptions,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            alpha_beta: true,
            quiescence: true,
            look_ahead: 4,
            max_quiescent_depth: 12,
            monte_carlo: MonteCarloOptions::default(),
        }
    }
}

/// Options for the UCT Monte-Carlo strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloOptions {
    /// Number of simulations to run before reading the best move off the root.
    pub max_simulations: u32,

    /// Ratio of exploration to exploitation in the UCB term.
    pub explore_exploit_ratio: f64,

    /// Maximum number of random moves to play in one rollout.
    pub random_look_ahead: u32,

    /// During a rollout, choose uniformly among this many of the best
    /// generated moves rather than among all of them.
    pub top_moves_to_consider: usize,

    /// Seed for the rollout RNG. Searches with equal seeds and equal inputs
    /// are reproducible.
    pub seed: u64,
}

impl Default for MonteCarloOptions {
    fn default() -> Self {
        MonteCarloOptions {
            max_simulations: 1000,
            explore_exploit_ratio: 1.0,
            random_look_ahead: 20,
            top_moves_to_consider: 5,
            seed: 0,
        }
    }
}
