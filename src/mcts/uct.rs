//! The UCT search strategy.
//!
//! Repeated simulations from the root: descend the statistics tree by UCT
//! value, expand the first unexpanded node met, finish the game with a
//! bounded random playout on a board copy, and propagate the win back up
//! through the visited nodes. The move finally returned is the root child
//! with the best win rate, which favors robustness over raw visit counts.
//!
//! Rollouts draw from the context RNG only, so a fixed seed reproduces the
//! whole search.

use super::node::UctNode;
use crate::move_types::TwoPlayerMove;
use crate::options::MonteCarloOptions;
use crate::search::{SearchContext, SearchResult};
use crate::searchable::Searchable;
use log::debug;
use rand::Rng;

/// Run `max_simulations` UCT simulations and return the root child with the
/// best win rate.
pub(crate) fn search<S: Searchable, R: Rng>(
    searchable: &mut S,
    last_move: &S::Move,
    options: &MonteCarloOptions,
    rng: &mut R,
    ctx: &mut SearchContext<'_, S::Move>,
) -> SearchResult<S::Move> {
    let mut root = UctNode::new(last_move.clone());
    let max = options.max_simulations.max(1);

    for sim in 0..max {
        if ctx.controller.check_pause() {
            break;
        }
        play_simulation(searchable, &mut root, options, rng, ctx);
        ctx.controller
            .set_percent_done((100 * (sim as usize + 1)) / max as usize);
    }

    debug!(
        "uct done: {} visits at root, {} children",
        root.num_visits(),
        root.children().len()
    );

    match root.best_child() {
        Some(best) => SearchResult {
            best_move: Some(best.mv.clone()),
            value: (best.win_rate() * 1000.0) as crate::Value,
        },
        None => SearchResult::leaf(0),
    }
}

/// One simulation pass rooted at `node`; the board must be in the position
/// reached by `node.mv`. Returns true if player one won the playout.
fn play_simulation<S: Searchable, R: Rng>(
    searchable: &mut S,
    node: &mut UctNode<S::Move>,
    options: &MonteCarloOptions,
    rng: &mut R,
    ctx: &mut SearchContext<'_, S::Move>,
) -> bool {
    let player_one_won;

    if node.is_leaf() && node.num_visits() == 0 {
        player_one_won = play_random_game(searchable, &node.mv, options, rng);
        ctx.controller.count_move();
    } else {
        if node.is_leaf() {
            let last = node.mv.clone();
            let moves = searchable.generate_moves(&last);
            node.add_children(moves);
        }
        match select_child(node, options, rng) {
            Some(index) => {
                let child = &mut node.children_mut()[index];
                let mv = child.mv.clone();
                searchable.make_move(&mv);
                player_one_won = play_simulation(searchable, child, options, rng, ctx);
                searchable.undo_move(&mv);
            }
            // Expansion produced no children: the game is over here, so
            // score the position the same way rollout terminals are scored.
            None => player_one_won = searchable.worth(&node.mv) > 0,
        }
    }

    node.increment_visits();
    node.update_win(player_one_won);
    node.set_best_child();
    player_one_won
}

/// Pick the child with the highest UCT value. `None` when there are no
/// children.
fn select_child<M: TwoPlayerMove, R: Rng>(
    node: &UctNode<M>,
    options: &MonteCarloOptions,
    rng: &mut R,
) -> Option<usize> {
    let parent_visits = node.num_visits();
    let mut best: Option<usize> = None;
    let mut best_value = f64::NEG_INFINITY;
    for (i, child) in node.children().iter().enumerate() {
        let value = child.uct_value(options.explore_exploit_ratio, parent_visits, rng);
        if value > best_value {
            best_value = value;
            best = Some(i);
        }
    }
    best
}

/// Play out the game randomly from the position after `last_move` on an
/// independent copy of the board. Each step picks uniformly among the best
/// few generated moves; if no terminal is reached within the look-ahead
/// budget, the playout is scored by the position's worth.
fn play_random_game<S: Searchable, R: Rng>(
    searchable: &S,
    last_move: &S::Move,
    options: &MonteCarloOptions,
    rng: &mut R,
) -> bool {
    let mut game = searchable.copy();
    let mut current = last_move.clone();

    for _ in 0..options.random_look_ahead {
        if game.done(&current) {
            break;
        }
        let moves = game.generate_moves(&current);
        if moves.is_empty() {
            // `current` ended the game with no reply possible; score it the
            // same way every other terminal is scored.
            break;
        }
        let top = options.top_moves_to_consider.max(1).min(moves.len());
        let pick = rng.gen_range(0..top);
        let mv = moves[pick].clone();
        game.make_move(&mv);
        current = mv;
    }

    game.worth(&current) > 0
}
