//! The NegaScout (Principal Variation Search) algorithm.
//!
//! Negamax where only the first child at each node is searched with the full
//! window. Every later child is probed with a null window `(alpha, alpha+1)`,
//! which can only answer "above or below alpha". When a probe fails high but
//! lands inside the real window, that child is re-searched with the full
//! window to get its exact value. The extra re-searches on a minority of
//! children buy much larger pruning elsewhere, provided move ordering is
//! reasonable.

use super::negamax::from_player_ones_perspective;
use super::{leaf_value, should_extend, terminal_value, SearchContext, SearchResult};
use crate::searchable::Searchable;
use crate::window::SearchWindow;
use crate::INFINITY;

/// Recursive negascout; value returned from the perspective of the player
/// to move after `last_move`. With alpha-beta disabled this degenerates to
/// plain full-width negamax.
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
    let beta = window.beta;
    // Full window for the first child; a null window for the rest.
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
            ctx,
        );
        let mut value = -child.value;

        // Null-window probe failed high inside the real window: the exact
        // value is somewhere in (alpha, beta), so re-search this child with
        // the full remaining window. Pointless at depth 1 where the child
        // is a leaf and its value is exact regardless of the window.
        if ctx.options.alpha_beta
            && i > 0
            && depth > 1
            && value > alpha
            && value < beta
            && !ctx.controller.is_interrupted()
        {
            ctx.notify_expanded(mv, SearchWindow::new(value, beta), depth);
            let research = search(
                searchable,
                mv,
                depth - 1,
                SearchWindow::new(-beta, -value),
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
            if value > alpha {
                alpha = value;
            }
            if alpha >= beta {
                ctx.notify_pruned(&moves[i + 1..], value, window);
                break;
            }
            new_beta = alpha + 1;
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
