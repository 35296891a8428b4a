//! Observational hook for tree visualization.
//!
//! Purely diagnostic: listeners must have zero effect on the chosen move or
//! on pruning decisions, and when no listener is installed the strategies do
//! no extra work at all.

use crate::window::SearchWindow;
use crate::Value;

/// Receives node expansion and pruning events during a search.
pub trait GameTreeListener<M> {
    /// A move is about to be searched at `depth` under `window`.
    fn node_expanded(&mut self, mv: &M, window: SearchWindow, depth: i32);

    /// The remaining sibling moves were cut off because `value` fell outside
    /// `window`.
    fn nodes_pruned(&mut self, moves: &[M], value: Value, window: SearchWindow);
}

/// Listener that records every event; handy in tests and debugging tools.
#[derive(Debug, Default)]
pub struct CollectingListener<M> {
    pub expanded: Vec<(M, SearchWindow, i32)>,
    pub pruned: Vec<(Vec<M>, Value, SearchWindow)>,
}

impl<M> CollectingListener<M> {
    pub fn new() -> Self {
        CollectingListener {
            expanded: Vec::new(),
            pruned: Vec::new(),
        }
    }
}

impl<M: Clone> GameTreeListener<M> for CollectingListener<M> {
    fn node_expanded(&mut self, mv: &M, window: SearchWindow, depth: i32) {
        self.expanded.push((mv.clone(), window, depth));
    }

    fn nodes_pruned(&mut self, moves: &[M], value: Value, window: SearchWindow) {
        self.pruned.push((moves.to_vec(), value, window));
    }
}
