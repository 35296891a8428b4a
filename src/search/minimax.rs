//! The MiniMax search algorithm.
//!
//! The simplest strategy, against which every other variant is compared:
//! explicit maximizing and minimizing plies over values kept in player-one's
//! perspective, alpha-beta cutoffs symmetric per player, and a quiescence
//! extension that keeps searching urgent moves past the depth limit while
//! the position is unstable.

use super::{leaf_value, should_extend, terminal_value, SearchContext, SearchResult};
use crate::move_types::TwoPlayerMove;
use crate::searchable::Searchable;
use crate::window::SearchWindow;
use crate::INFINITY;

/// Recursive minimax over `searchable`, `depth` plies deep, inside `window`.
/// All values are from player one's perspective.
pub(crate) fn search<S: Searchable>(
    searchable: &mut S,
    last_move: &S::Move,
    depth: i32,
    window: SearchWindow,
    ctx: &mut SearchContext<'_, S::Move>,
) -> SearchResult<S::Move> {
    let done = searchable.done(last_move);
    if depth <= 0 || done {
        if should_extend(searchable, last_move, depth, done, ctx.options) {
            let urgent = searchable.generate_urgent_moves(last_move);
            if urgent.is_empty() {
                return SearchResult::leaf(leaf_value(last_move, true));
            }
            return find_best(searchable, last_move, depth, urgent, window, ctx);
        }
        return SearchResult::leaf(leaf_value(last_move, true));
    }

    let moves = searchable.generate_moves(last_move);
    if depth == ctx.top_level_depth {
        ctx.num_top_level_moves = moves.len();
    }
    if moves.is_empty() {
        // No reply exists: the player who made last_move won.
        return SearchResult::leaf(terminal_value(last_move, true));
    }

    find_best(searchable, last_move, depth, moves, window, ctx)
}

/// Expand the candidate moves at one node and pick the best reply.
///
/// `last_move` was made by the opponent of the player now choosing, so when
/// player one made it the chooser minimizes the (player-one) value, and
/// maximizes otherwise.
fn find_best<S: Searchable>(
    searchable: &mut S,
    last_move: &S::Move,
    depth: i32,
    moves: Vec<S::Move>,
    window: SearchWindow,
    ctx: &mut SearchContext<'_, S::Move>,
) -> SearchResult<S::Move> {
    let maximizing = !last_move.is_player_one();
    let mut alpha = window.alpha;
    let mut beta = window.beta;
    let mut best_value = if maximizing { -INFINITY } else { INFINITY };
    let mut best_move: Option<S::Move> = None;
    let total = moves.len();

    for (i, mv) in moves.iter().enumerate() {
        if ctx.controller.check_pause() {
            break;
        }
        ctx.controller.count_move();
        ctx.update_percent_done(depth, total - i - 1);
        ctx.notify_expanded(mv, SearchWindow::new(alpha, beta), depth);

        searchable.make_move(mv);
        let child = search(searchable, mv, depth - 1, SearchWindow::new(alpha, beta), ctx);
        searchable.undo_move(mv);

        // A child searched during an interrupt is unreliable; unwind with
        // the best fully evaluated move instead.
        if ctx.controller.is_interrupted() {
            break;
        }

        let value = child.value;
        let better = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if better || best_move.is_none() {
            best_value = value;
            best_move = Some(mv.clone());
        }

        if ctx.options.alpha_beta {
            if maximizing {
                if best_value > alpha {
                    alpha = best_value;
                }
                if best_value >= beta {
                    ctx.notify_pruned(&moves[i + 1..], value, window);
                    break;
                }
            } else {
                if best_value < beta {
                    beta = best_value;
                }
                if best_value <= alpha {
                    ctx.notify_pruned(&moves[i + 1..], value, window);
                    break;
                }
            }
        }
    }

    match best_move {
        Some(_) => SearchResult {
            best_move,
            value: best_value,
        },
        // Interrupted before the first child finished.
        None => SearchResult::leaf(leaf_value(last_move, true)),
    }
}
