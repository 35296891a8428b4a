//! The NegaMax search algorithm.
//!
//! Minimax reformulated so that every ply maximizes: each node works in the
//! perspective of the player to move, child values are negated on the way
//! up, and the window passed down is the negated-and-swapped parent window.
//! Cutoff when the running best reaches beta.
//!
//! Correctness hinges on the sign convention: every value entering a
//! comparison must be from the mover's perspective before negation.
//! Violating that corrupts pruning silently.

use super::{leaf_value, should_extend, terminal_value, SearchContext, SearchResult};
use crate::searchable::Searchable;
use crate::window::SearchWindow;
use crate::INFINITY;

/// True if the value at the node after `last_move` should be read from
/// player one's perspective; the player to move there is the opponent of
/// whoever made `last_move`.
pub(crate) fn from_player_ones_perspective<M: crate::move_types::TwoPlayerMove>(
    last_move: &M,
) -> bool {
    !last_move.is_player_one()
}

/// Recursive negamax; the returned value is from the perspective of the
/// player to move after `last_move`.
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
                return SearchResult::leaf(leaf_value(
                    last_move,
                    from_player_ones_perspective(last_move),
                ));
            }
            return find_best(searchable, last_move, depth, urgent, window, ctx);
        }
        return SearchResult::leaf(leaf_value(
            last_move,
            from_player_ones_perspective(last_move),
        ));
    }

    let moves = searchable.generate_moves(last_move);
    if depth == ctx.top_level_depth {
        ctx.num_top_level_moves = moves.len();
    }
    if moves.is_empty() {
        return SearchResult::leaf(terminal_value(
            last_move,
            from_player_ones_perspective(last_move),
        ));
    }

    find_best(searchable, last_move, depth, moves, window, ctx)
}

fn find_best<S: Searchable>(
    searchable: &mut S,
    last_move: &S::Move,
    depth: i32,
    moves: Vec<S::Move>,
    window: SearchWindow,
    ctx: &mut SearchContext<'_, S::Move>,
) -> SearchResult<S::Move> {
    let mut alpha = window.alpha;
    let mut best_value = -INFINITY;
    let mut best_move: Option<S::Move> = None;
    let total = moves.len();

    for (i, mv) in moves.iter().enumerate() {
        if ctx.controller.check_pause() {
            break;
        }
        ctx.controller.count_move();
        ctx.update_percent_done(depth, total - i - 1);
        ctx.notify_expanded(mv, SearchWindow::new(alpha, window.beta), depth);

        searchable.make_move(mv);
        let child = search(
            searchable,
            mv,
            depth - 1,
            SearchWindow::new(-window.beta, -alpha),
            ctx,
        );
        searchable.undo_move(mv);

        if ctx.controller.is_interrupted() {
            break;
        }

        let value = -child.value;
        if value > best_value || best_move.is_none() {
            best_value = value;
            best_move = Some(mv.clone());
        }

        if ctx.options.alpha_beta {
            if best_value > alpha {
                alpha = best_value;
            }
            if alpha >= window.beta {
                ctx.notify_pruned(&moves[i + 1..], value, window);
                break;
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
