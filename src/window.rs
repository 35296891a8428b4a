//! Alpha/beta search window.
//!
//! A window is the half-open interval of values still interesting to the
//! search at one node. It narrows monotonically while descending one branch
//! and is sign-flipped between plies by the negamax family.

use crate::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable alpha (lower) / beta (upper) bound pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchWindow {
    pub alpha: Value,
    pub beta: Value,
}

impl SearchWindow {
    pub fn new(alpha: Value, beta: Value) -> Self {
        SearchWindow { alpha, beta }
    }

    /// The widest possible window.
    pub fn open() -> Self {
        SearchWindow::new(-crate::INFINITY, crate::INFINITY)
    }

    /// A null (zero-width) probe window around `g`: `(g-1, g)`.
    /// Used by MTD(f) to test whether the true value is above or below `g`.
    pub fn null_window(g: Value) -> Self {
        SearchWindow::new(g - 1, g)
    }

    /// Midpoint of the window, rounded toward alpha.
    pub fn mid_point(&self) -> Value {
        // Sum first; both bounds fit comfortably in i32 (|bound| <= INFINITY).
        (self.alpha + self.beta) / 2
    }

    /// The window seen by the opponent one ply down: `(-beta, -alpha)`.
    pub fn negate_and_swap(&self) -> Self {
        SearchWindow::new(-self.beta, -self.alpha)
    }

    /// True if `value` falls strictly inside the window.
    pub fn contains(&self, value: Value) -> bool {
        self.alpha < value && value < self.beta
    }
}

impl fmt::Display for SearchWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.alpha, self.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negate_and_swap_flips_and_mirrors() {
        let w = SearchWindow::new(-3, 10);
        assert_eq!(w.negate_and_swap(), SearchWindow::new(-10, 3));
    }

    #[test]
    fn negate_and_swap_is_an_involution() {
        let w = SearchWindow::new(-50, 7);
        assert_eq!(w.negate_and_swap().negate_and_swap(), w);
    }

    #[test]
    fn mid_point_of_open_window_is_zero() {
        assert_eq!(SearchWindow::open().mid_point(), 0);
    }

    #[test]
    fn null_window_has_unit_width() {
        let w = SearchWindow::null_window(42);
        assert_eq!(w.beta - w.alpha, 1);
        assert!(!w.contains(42));
    }
}
