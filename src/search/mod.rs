//! The deterministic search-strategy family and its shared machinery.
//!
//! Strategy selection is a tagged enum dispatched through one `search`
//! method; the per-algorithm recursions live in sibling modules as free
//! functions taking the searchable, the recursion parameters, and a
//! [`SearchContext`] carrying the cross-cutting state (options, controller,
//! listener, transposition table).
//!
//! Sign conventions: the minimax recursion works entirely in player-one's
//! perspective; the negamax family works in the perspective of the player to
//! move, negating child values on the way up. The shared leaf and terminal
//! helpers take a `from_player_one` flag so both families fold the same
//! positions to consistently signed values.

pub mod memory;
pub mod minimax;
pub mod mtd;
pub mod negamax;
pub mod negascout;

use crate::controller::SearchController;
use crate::game_tree::GameTreeListener;
use crate::mcts;
use crate::move_types::TwoPlayerMove;
use crate::options::SearchOptions;
use crate::searchable::Searchable;
use crate::transposition::TranspositionTable;
use crate::window::SearchWindow;
use crate::{Value, WINNING_VALUE};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Which search algorithm a [`SearchStrategy`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategyKind {
    MiniMax,
    NegaMax,
    NegaScout,
    NegaMaxMemory,
    NegaScoutMemory,
    Mtd,
    Uct,
}

impl SearchStrategyKind {
    /// True for the variants backed by a transposition table (including the
    /// MTD(f) driver, which owns a memory strategy internally).
    pub fn uses_memory(self) -> bool {
        matches!(
            self,
            SearchStrategyKind::NegaMaxMemory
                | SearchStrategyKind::NegaScoutMemory
                | SearchStrategyKind::Mtd
        )
    }

    /// Move-ordering polarity for the collaborator's generated move lists.
    ///
    /// Minimax compares values in player-one's perspective, so the list for
    /// player two's turn should come lowest-value first. The negamax family
    /// always maximizes from the mover's perspective and wants best-first
    /// regardless of the player.
    pub fn sort_ascending(self, player_one_to_move: bool) -> bool {
        match self {
            SearchStrategyKind::MiniMax => !player_one_to_move,
            _ => false,
        }
    }
}

/// The value and best move returned by one recursive search call.
///
/// This is the explicit return channel of the recursion: child values are
/// read from here, never from annotations on the move objects themselves.
/// `best_move` is `None` at leaves and at positions with no legal moves.
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    pub best_move: Option<M>,
    pub value: Value,
}

impl<M> SearchResult<M> {
    pub fn leaf(value: Value) -> Self {
        SearchResult {
            best_move: None,
            value,
        }
    }
}

/// Cross-cutting state threaded through one search recursion.
pub(crate) struct SearchContext<'a, M> {
    pub options: &'a SearchOptions,
    pub controller: &'a SearchController,
    pub listener: Option<&'a mut dyn GameTreeListener<M>>,
    pub table: &'a mut TranspositionTable<M>,
    /// Depth of the root ply; progress is only reported there.
    pub top_level_depth: i32,
    pub num_top_level_moves: usize,
}

impl<M> SearchContext<'_, M> {
    pub fn notify_expanded(&mut self, mv: &M, window: SearchWindow, depth: i32) {
        if let Some(listener) = self.listener.as_deref_mut() {
            listener.node_expanded(mv, window, depth);
        }
    }

    pub fn notify_pruned(&mut self, moves: &[M], value: Value, window: SearchWindow) {
        if let Some(listener) = self.listener.as_deref_mut() {
            if !moves.is_empty() {
                listener.nodes_pruned(moves, value, window);
            }
        }
    }

    /// Update the progress percentage when at the top ply; no-op elsewhere.
    /// `remaining` counts the siblings still waiting after the current move,
    /// so the final sibling reports exactly 100.
    /// Known approximation: pruning removes top-level work this never sees.
    pub fn update_percent_done(&self, depth: i32, remaining: usize) {
        if depth == self.top_level_depth && self.num_top_level_moves > 0 {
            let done = self.num_top_level_moves - remaining.min(self.num_top_level_moves);
            self.controller
                .set_percent_done(100 * done / self.num_top_level_moves);
        }
    }
}

/// Static evaluation of a leaf, signed for the requested perspective.
/// Move values are stored from player one's perspective.
pub(crate) fn leaf_value<M: TwoPlayerMove>(last_move: &M, from_player_one: bool) -> Value {
    if from_player_one {
        last_move.value()
    } else {
        -last_move.value()
    }
}

/// Value of a position with no legal moves: the player who made the last
/// move won. Signed for the requested perspective, like [`leaf_value`].
pub(crate) fn terminal_value<M: TwoPlayerMove>(last_move: &M, from_player_one: bool) -> Value {
    let player_one_value = if last_move.is_player_one() {
        WINNING_VALUE
    } else {
        -WINNING_VALUE
    };
    if from_player_one {
        player_one_value
    } else {
        -player_one_value
    }
}

/// Search deeper past the depth limit when quiescence is enabled, the
/// quiescent budget is not exhausted, the game is not over, and the last
/// move left the position unstable.
pub(crate) fn should_extend<S: Searchable>(
    searchable: &mut S,
    last_move: &S::Move,
    depth: i32,
    done: bool,
    options: &SearchOptions,
) -> bool {
    options.quiescence
        && depth > -options.max_quiescent_depth
        && !done
        && searchable.in_jeopardy(last_move)
}

/// A configured search strategy, single-use per `search` call.
///
/// Construct with [`SearchStrategy::create`], then call
/// [`search`](SearchStrategy::search). The pause/interrupt/progress surface
/// is shared with the caller through a cloneable [`SearchController`] handle.
pub struct SearchStrategy<S: Searchable> {
    kind: SearchStrategyKind,
    options: SearchOptions,
    controller: Arc<SearchController>,
    table: TranspositionTable<S::Move>,
    listener: Option<Box<dyn GameTreeListener<S::Move> + Send>>,
    rng: StdRng,
}

impl<S: Searchable> SearchStrategy<S> {
    /// Factory: build the strategy `kind` configured from the searchable's
    /// options.
    pub fn create(kind: SearchStrategyKind, searchable: &S) -> Self {
        Self::with_options(kind, searchable.search_options())
    }

    pub fn with_options(kind: SearchStrategyKind, options: SearchOptions) -> Self {
        let rng = StdRng::seed_from_u64(options.monte_carlo.seed);
        SearchStrategy {
            kind,
            options,
            controller: SearchController::new(),
            table: TranspositionTable::new(),
            listener: None,
            rng,
        }
    }

    pub fn kind(&self) -> SearchStrategyKind {
        self.kind
    }

    /// Handle for pausing, resuming, or interrupting this strategy from
    /// another thread.
    pub fn controller(&self) -> Arc<SearchController> {
        Arc::clone(&self.controller)
    }

    pub fn pause(&self) {
        self.controller.pause();
    }

    pub fn continue_processing(&self) {
        self.controller.continue_processing();
    }

    pub fn is_paused(&self) -> bool {
        self.controller.is_paused()
    }

    pub fn interrupt(&self) {
        self.controller.interrupt();
    }

    pub fn num_moves_considered(&self) -> u64 {
        self.controller.num_moves_considered()
    }

    pub fn percent_done(&self) -> usize {
        self.controller.percent_done()
    }

    /// Install an optional tree listener. Must have no effect on the chosen
    /// move or on pruning decisions.
    pub fn set_game_tree_listener(&mut self, listener: Box<dyn GameTreeListener<S::Move> + Send>) {
        self.listener = Some(listener);
    }

    /// Search for the best response to `last_move`.
    ///
    /// Returns a clone of `last_move` if the search was interrupted before
    /// any move could be evaluated, and the best move found so far if it was
    /// interrupted mid-search.
    pub fn search(&mut self, searchable: &mut S, last_move: &S::Move) -> S::Move {
        self.controller.reset();
        let look_ahead = self.options.look_ahead;
        debug!(
            "search start: kind={:?} look_ahead={} alpha_beta={} quiescence={}",
            self.kind, look_ahead, self.options.alpha_beta, self.options.quiescence
        );

        let mut ctx = SearchContext {
            options: &self.options,
            controller: &self.controller,
            listener: self
                .listener
                .as_deref_mut()
                .map(|l| l as &mut dyn GameTreeListener<S::Move>),
            table: &mut self.table,
            top_level_depth: look_ahead,
            num_top_level_moves: 0,
        };

        let window = SearchWindow::open();
        let result = match self.kind {
            SearchStrategyKind::MiniMax => {
                minimax::search(searchable, last_move, look_ahead, window, &mut ctx)
            }
            SearchStrategyKind::NegaMax => {
                negamax::search(searchable, last_move, look_ahead, window, &mut ctx)
            }
            SearchStrategyKind::NegaScout => {
                negascout::search(searchable, last_move, look_ahead, window, &mut ctx)
            }
            SearchStrategyKind::NegaMaxMemory => memory::search(
                searchable,
                last_move,
                look_ahead,
                window,
                memory::BruteAlgorithm::NegaMax,
                &mut ctx,
            ),
            SearchStrategyKind::NegaScoutMemory => memory::search(
                searchable,
                last_move,
                look_ahead,
                window,
                memory::BruteAlgorithm::NegaScout,
                &mut ctx,
            ),
            SearchStrategyKind::Mtd => mtd::search(searchable, last_move, look_ahead, &mut ctx),
            SearchStrategyKind::Uct => mcts::uct::search(
                searchable,
                last_move,
                &self.options.monte_carlo,
                &mut self.rng,
                &mut ctx,
            ),
        };

        if self.kind.uses_memory() {
            let (hits, near_hits, misses) = self.table.stats();
            debug!(
                "transposition stats: {} entries, {} hits, {} near hits, {} misses",
                self.table.len(),
                hits,
                near_hits,
                misses
            );
        }
        debug!(
            "search done: {} moves considered, interrupted={}",
            self.controller.num_moves_considered(),
            self.controller.is_interrupted()
        );

        match result.best_move {
            Some(best) => best,
            None => last_move.clone(),
        }
    }
}
