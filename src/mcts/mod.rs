//! Monte Carlo tree search.
//!
//! The UCT strategy and its statistics tree. Unlike the deterministic
//! strategies this family never calls the collaborator's static evaluation
//! on interior positions; values come from random playout outcomes
//! aggregated per node, and exploration is balanced against exploitation by
//! the UCT formula in [`node`].

pub mod node;
pub mod uct;

pub use self::node::UctNode;
