//! The UCT statistics tree.
//!
//! Each node records the move that created it plus visit and win counts;
//! values are win rates in [0, 1], not game-specific evaluations. The tree
//! is plain owned children, no back edges.

use crate::move_types::TwoPlayerMove;
use rand::Rng;

/// Large base value handed to unvisited children so each gets tried once
/// before any UCT comparison matters; the random tail breaks ties.
const UNVISITED_BONUS: f64 = 1000.0;

/// How much to favor exploitation over exploration in the UCT denominator.
const DENOM_FACTOR: f64 = 5.0;

/// One node in the UCT statistics tree.
#[derive(Debug, Clone)]
pub struct UctNode<M> {
    /// The move that produced this position; the root holds the opponent's
    /// last move.
    pub mv: M,
    num_visits: u32,
    num_wins: f64,
    children: Vec<UctNode<M>>,
    best_child: Option<usize>,
}

impl<M: TwoPlayerMove> UctNode<M> {
    pub fn new(mv: M) -> Self {
        UctNode {
            mv,
            num_visits: 0,
            num_wins: 0.0,
            children: Vec::new(),
            best_child: None,
        }
    }

    pub fn num_visits(&self) -> u32 {
        self.num_visits
    }

    pub fn increment_visits(&mut self) {
        self.num_visits += 1;
    }

    /// Credit this node with the playout outcome: a win when the winning
    /// side is the side that made this node's move.
    pub fn update_win(&mut self, player_one_won: bool) {
        if player_one_won == self.mv.is_player_one() {
            self.num_wins += 1.0;
        }
    }

    /// Fraction of playouts through this node won by the side that made its
    /// move; 0 when never visited.
    pub fn win_rate(&self) -> f64 {
        if self.num_visits == 0 {
            0.0
        } else {
            self.num_wins / f64::from(self.num_visits)
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[UctNode<M>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [UctNode<M>] {
        &mut self.children
    }

    /// Expand this node with one child per candidate move.
    pub fn add_children(&mut self, moves: Vec<M>) {
        self.children = moves.into_iter().map(UctNode::new).collect();
    }

    /// Upper confidence bound for selecting this child under `parent_visits`
    /// total visits at the parent.
    ///
    /// Unvisited children get a huge randomized value so all of them are
    /// tried (in random order) before the statistics take over.
    pub fn uct_value<R: Rng>(
        &self,
        explore_exploit_ratio: f64,
        parent_visits: u32,
        rng: &mut R,
    ) -> f64 {
        if self.num_visits == 0 {
            return UNVISITED_BONUS + UNVISITED_BONUS * rng.gen::<f64>();
        }
        let parent_visits = f64::from(parent_visits.max(1));
        let exploration =
            (parent_visits.ln() / (DENOM_FACTOR * f64::from(self.num_visits))).sqrt();
        self.win_rate() + explore_exploit_ratio * exploration
    }

    /// Remember which child currently has the best win rate. Ties keep the
    /// earlier child.
    pub fn set_best_child(&mut self) {
        let mut best: Option<usize> = None;
        let mut best_rate = f64::NEG_INFINITY;
        for (i, child) in self.children.iter().enumerate() {
            if child.win_rate() > best_rate {
                best_rate = child.win_rate();
                best = Some(i);
            }
        }
        self.best_child = best;
    }

    pub fn best_child(&self) -> Option<&UctNode<M>> {
        self.best_child.and_then(|i| self.children.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone, PartialEq)]
    struct TestMove {
        id: u32,
        player_one: bool,
    }

    impl TwoPlayerMove for TestMove {
        fn value(&self) -> crate::Value {
            0
        }
        fn is_player_one(&self) -> bool {
            self.player_one
        }
    }

    fn node_with(visits: u32, wins: f64) -> UctNode<TestMove> {
        let mut node = UctNode::new(TestMove {
            id: 0,
            player_one: true,
        });
        node.num_visits = visits;
        node.num_wins = wins;
        node
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn uct_value_one_visit_small_parent() {
        let node = node_with(1, 0.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_close(node.uct_value(1.0, 2, &mut rng), 0.3723297411);
    }

    #[test]
    fn uct_value_one_visit_large_parent() {
        let node = node_with(1, 0.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_close(node.uct_value(1.0, 32, &mut rng), 0.83255461);
    }

    #[test]
    fn uct_value_well_visited() {
        let node = node_with(10, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_close(node.uct_value(1.0, 32, &mut rng), 0.3632769);
    }

    #[test]
    fn uct_value_scales_with_ratio() {
        let node = node_with(1, 0.0);
        let mut rng = StdRng::seed_from_u64(1);
        let base = node.uct_value(1.0, 32, &mut rng);
        let doubled = node.uct_value(2.0, 32, &mut rng);
        assert_close(doubled, 2.0 * base);
    }

    #[test]
    fn unvisited_child_dominates() {
        let unvisited = node_with(0, 0.0);
        let visited = node_with(1, 1.0);
        let mut rng = StdRng::seed_from_u64(7);
        let u = unvisited.uct_value(1.0, 100, &mut rng);
        let v = visited.uct_value(1.0, 100, &mut rng);
        assert!(u >= 1000.0, "unvisited bonus missing: {u}");
        assert!(u > v, "unvisited child must outrank any visited child");
    }

    #[test]
    fn update_win_credits_mover() {
        let mut node = UctNode::new(TestMove {
            id: 3,
            player_one: false,
        });
        node.increment_visits();
        node.update_win(false);
        assert_close(node.win_rate(), 1.0);
        node.increment_visits();
        node.update_win(true);
        assert_close(node.win_rate(), 0.5);
    }

    #[test]
    fn best_child_is_max_win_rate_first_on_tie() {
        let mut root = UctNode::new(TestMove {
            id: 0,
            player_one: false,
        });
        root.add_children(vec![
            TestMove {
                id: 1,
                player_one: true,
            },
            TestMove {
                id: 2,
                player_one: true,
            },
            TestMove {
                id: 3,
                player_one: true,
            },
        ]);
        root.children_mut()[0].num_visits = 4;
        root.children_mut()[0].num_wins = 2.0;
        root.children_mut()[1].num_visits = 2;
        root.children_mut()[1].num_wins = 1.0;
        root.children_mut()[2].num_visits = 10;
        root.children_mut()[2].num_wins = 3.0;
        root.set_best_child();
        let best = root.best_child().map(|c| c.mv.id);
        assert_eq!(
            best,
            Some(1),
            "tied win rates resolve to the earliest child, not the most visited"
        );
    }
}
