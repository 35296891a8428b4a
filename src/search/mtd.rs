//! The MTD(f) search driver.
//!
//! Memory-enhanced Test Driver: instead of one full-window search, a
//! sequence of null-window probes run through the memory-enhanced negascout,
//! each answering "is the true value above or below this guess". Each probe
//! tightens a `[lower, upper]` bracket around the true value; the loop ends
//! when the bracket closes. Probes revisit mostly the same positions, so the
//! shared transposition table makes later probes nearly free.

use super::memory::{self, BruteAlgorithm};
use super::{SearchContext, SearchResult};
use crate::searchable::Searchable;
use crate::window::SearchWindow;
use crate::INFINITY;
use log::debug;

/// Run MTD(f) from an initial guess of 0.
pub(crate) fn search<S: Searchable>(
    searchable: &mut S,
    last_move: &S::Move,
    depth: i32,
    ctx: &mut SearchContext<'_, S::Move>,
) -> SearchResult<S::Move> {
    search_with_guess(searchable, last_move, depth, 0, ctx)
}

fn search_with_guess<S: Searchable>(
    searchable: &mut S,
    last_move: &S::Move,
    depth: i32,
    first_guess: crate::Value,
    ctx: &mut SearchContext<'_, S::Move>,
) -> SearchResult<S::Move> {
    let mut guess = first_guess;
    let mut lower = -INFINITY;
    let mut upper = INFINITY;
    let mut result = SearchResult::leaf(guess);

    while lower < upper {
        // Probe just above the bracket floor when the guess sits on it,
        // otherwise just below the guess.
        let beta = if guess == lower { guess + 1 } else { guess };
        debug!("mtd probe: guess={} window=[{}, {}]", guess, beta - 1, beta);

        result = memory::search(
            searchable,
            last_move,
            depth,
            SearchWindow::null_window(beta),
            BruteAlgorithm::NegaScout,
            ctx,
        );
        guess = result.value;

        if ctx.controller.is_interrupted() {
            break;
        }

        if guess < beta {
            upper = guess;
        } else {
            lower = guess;
        }
    }

    result
}
