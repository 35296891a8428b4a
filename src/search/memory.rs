//! Memory-enhanced negamax and negascout.
//!
//! Both brute-force recursions wrapped with a transposition-table lookup
//! before a position is expanded and a bound-classification store after.
//! A depth-sufficient entry can cut the search off outright (its lower bound
//! already beats beta, or its upper bound is below alpha, or it is exact) or
//! tighten the window before expansion. Stored entries are classified
//! against the window the search ran under: fail-low gives an upper bound,
//! fail-high a lower bound, an inside value both.
//!
//! This probe-time depth/window compatibility check is the load-bearing
//! invariant of the whole memory family; entries are never invalidated.

use super::negamax::from_player_ones_perspective;
use super::{leaf_value, should_extend, terminal_value, SearchContext, SearchResult};
use crate::searchable::Searchable;
use crate::transposition::TtEntry;
use crate::window::SearchWindow;
use crate::INFINITY;
use log::trace;

/// Which brute-force recursion the memory wrapper drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BruteAlgorithm {
    NegaMax,
    NegaScout,
}

/// Transposition-table enhanced search; same sign conventions as
/// [`super::negamax::search`].
pub(crate) fn search<S: Searchable>(
    searchable: &mut S,
    last_move: &S::Move,
    depth: i32,
    window: SearchWindow,
    algorithm: BruteAlgorithm,
    ctx: &mut SearchContext<'_, S::Move>,
) -> SearchResult<S::Move> {
    let key = searchable.hash_key();

    let mut window = window;
    if let Some(entry) = ctx.table.probe(key, depth) {
        trace!("tt hit: key={:#x} depth={} bounds=[{}, {}]", key, entry.depth, entry.lower, entry.upper);
        if entry.lower >= window.beta {
            return SearchResult {
                best_move: entry.best_move.clone(),
                value: entry.lower,
            };
        }
        if entry.upper <= window.alpha {
            return SearchResult {
                best_move: entry.best_move.clone(),
                value: entry.upper,
            };
        }
        if entry.is_exact() {
            return SearchResult {
                best_move: entry.best_move.clone(),
                value: entry.lower,
            };
        }
        // The entry cannot resolve this window, but its bounds still
        // tighten it.
        window = SearchWindow::new(window.alpha.max(entry.lower), window.beta.min(entry.upper));
    }

    let done = searchable.done(last_move);
    if depth <= 0 || done {
        if should_extend(searchable, last_move, depth, done, ctx.options) {
            let urgent = searchable.generate_urgent_moves(last_move);
            if !urgent.is_empty() {
                let result = find_best(searchable, last_move, depth, urgent, window, algorithm, ctx);
                if !ctx.controller.is_interrupted() {
                    ctx.table.store(
                        key,
                        TtEntry::classify(result.best_move.clone(), depth, result.value, window),
                    );
                }
                return result;
            }
        }
        let value = leaf_value(last_move, from_player_ones_perspective(last_move));
        ctx.table.store(key, TtEntry::exact(None, depth, value));
        return SearchResult::leaf(value);
    }

    let moves = searchable.generate_moves(last_move);
    if depth == ctx.top_level_depth {
        ctx.num_top_level_moves = moves.len();
    }
    if moves.is_empty() {
        let value = terminal_value(last_move, from_player_ones_perspective(last_move));
        ctx.table.store(key, TtEntry::exact(None, depth, value));
        return SearchResult::leaf(value);
    }

    let result = find_best(searchable, last_move, depth, moves, window, algorithm, ctx);

    // Do not poison the table with a value from a half-finished expansion.
    if !ctx.controller.is_interrupted() {
        ctx.table.store(
            key,
            TtEntry::classify(result.best_move.clone(), depth, result.value, window),
        );
    }
    result
}

fn find_best<S: Searchable>(
    searchable: &mut S,
    last_move: &S::Move,
    depth: i32,
    moves: Vec<S::Move>,
    window: SearchWindow,
    algorithm: BruteAlgorithm,
    ctx: &mut SearchContext<'_, S::Move>,
) -> SearchResult<S::Move> {
    let mut alpha = window.alpha;
    let beta = window.beta;
    let mut new_beta = beta;
    let mut best_value = -INFINITY;
    let mut best_move: Option<S::Move> = None;
    let total = moves.len();

    for (i, mv) in moves.iter().enumerate() {
        if ctx.controller.check_pause() {
            break;
        }
        ctx.controller.count_move();
        ctx.update_percent_done(depth, total - i - 1);
        ctx.notify_expanded(mv, SearchWindow::new(alpha, new_beta), depth);

        searchable.make_move(mv);
        let child = search(
            searchable,
            mv,
            depth - 1,
            SearchWindow::new(-new_beta, -alpha),
            algorithm,
            ctx,
        );
        let mut value = -child.value;

        if algorithm == BruteAlgorithm::NegaScout
            && ctx.options.alpha_beta
            && i > 0
            && depth > 1
            && value > alpha
            && value < beta
            && !ctx.controller.is_interrupted()
        {
            let research = search(
                searchable,
                mv,
                depth - 1,
                SearchWindow::new(-beta, -value),
                algorithm,
                ctx,
            );
            value = -research.value;
        }
        searchable.undo_move(mv);

        if ctx.controller.is_interrupted() {
            break;
        }

        if value > best_value || best_move.is_none() {
            best_value = value;
            best_move = Some(mv.clone());
        }

        if ctx.options.alpha_beta {
            if best_value > alpha {
                alpha = best_value;
            }
            if alpha >= beta {
                ctx.notify_pruned(&moves[i + 1..], value, window);
                break;
            }
            if algorithm == BruteAlgorithm::NegaScout {
                new_beta = alpha + 1;
            }
        }
    }

    match best_move {
        Some(_) => SearchResult {
            best_move,
            value: best_value,
        },
        None => SearchResult::leaf(leaf_value(
            last_move,
            from_player_ones_perspective(last_move),
        )),
    }
}
