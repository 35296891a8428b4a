//! The move contract shared by all strategies.
//!
//! Concrete move types are owned by the game collaborator; the strategies
//! only need to know a move's raw static evaluation and which player made it.

use crate::Value;
use std::fmt;

/// A transition in a two-player game.
///
/// `value` is the raw static evaluation of the position after the move, from
/// player one's perspective. Strategies never mutate moves; backed-up tree
/// values travel through [`crate::search::SearchResult`] instead.
pub trait TwoPlayerMove: Clone + fmt::Debug {
    /// Raw static evaluation of the move, from player one's perspective.
    fn value(&self) -> Value;

    /// True if player one made this move.
    fn is_player_one(&self) -> bool;
}
