//! Shared fixtures for the strategy test suite.
//!
//! Two deliberately tiny games: a fixed two-ply tree with a hand-built leaf
//! table (known minimax value, no search needed to verify), and Nim, whose
//! perfect play is arithmetic (leave a multiple of four) so deep searches
//! have a checkable answer.

// Each test binary uses a different slice of these fixtures.
#![allow(dead_code)]

use goshawk::{
    MonteCarloOptions, SearchOptions, Searchable, TwoPlayerMove, Value, WINNING_VALUE,
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Move in either fixture game; `value` is the static evaluation of the
/// position the move creates, from player one's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestMove {
    pub id: usize,
    pub player_one: bool,
    pub value: Value,
}

impl TwoPlayerMove for TestMove {
    fn value(&self) -> Value {
        self.value
    }

    fn is_player_one(&self) -> bool {
        self.player_one
    }
}

/// A two-ply game tree with branching factor three and a fixed table of
/// leaf evaluations. Player one moves first; the true minimax value is
/// `max_i min_j leaf[i][j]`.
#[derive(Debug, Clone)]
pub struct TableGame {
    leaf: [[Value; 3]; 3],
    path: Vec<usize>,
}

impl TableGame {
    pub fn new(leaf: [[Value; 3]; 3]) -> Self {
        TableGame {
            leaf,
            path: Vec::new(),
        }
    }

    /// The opponent move that roots the search; player one responds to it.
    pub fn root_move() -> TestMove {
        TestMove {
            id: 99,
            player_one: false,
            value: 0,
        }
    }

    /// `max_i min_j leaf[i][j]` and the maximizing first-ply id.
    pub fn expected(&self) -> (usize, Value) {
        let mut best = (0, Value::MIN);
        for (i, row) in self.leaf.iter().enumerate() {
            let low = *row.iter().min().unwrap();
            if low > best.1 {
                best = (i, low);
            }
        }
        best
    }
}

impl Searchable for TableGame {
    type Move = TestMove;

    fn generate_moves(&mut self, _last_move: &TestMove) -> Vec<TestMove> {
        match self.path.len() {
            0 => (0..3)
                .map(|i| TestMove {
                    id: i,
                    player_one: true,
                    value: *self.leaf[i].iter().max().unwrap(),
                })
                .collect(),
            1 => {
                let i = self.path[0];
                (0..3)
                    .map(|j| TestMove {
                        id: j,
                        player_one: false,
                        value: self.leaf[i][j],
                    })
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    fn generate_urgent_moves(&mut self, _last_move: &TestMove) -> Vec<TestMove> {
        Vec::new()
    }

    fn make_move(&mut self, mv: &TestMove) {
        self.path.push(mv.id);
    }

    fn undo_move(&mut self, mv: &TestMove) {
        let popped = self.path.pop();
        assert_eq!(popped, Some(mv.id), "undo out of order");
    }

    fn done(&self, _last_move: &TestMove) -> bool {
        self.path.len() >= 2
    }

    fn in_jeopardy(&self, _last_move: &TestMove) -> bool {
        false
    }

    fn hash_key(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        for &id in &self.path {
            h ^= id as u64 + 1;
            h = h.wrapping_mul(0x0000_0100_0000_01b3);
        }
        h ^ self.path.len() as u64
    }

    fn worth(&self, last_move: &TestMove) -> Value {
        last_move.value()
    }

    fn search_options(&self) -> SearchOptions {
        SearchOptions {
            look_ahead: 2,
            quiescence: false,
            ..SearchOptions::default()
        }
    }
}

/// Nim: remove one to three stones, taking the last stone wins. Perfect
/// play leaves the opponent a multiple of four.
#[derive(Debug, Clone)]
pub struct NimGame {
    pile: u32,
    player_one_to_move: bool,
    options: SearchOptions,
}

impl NimGame {
    /// Player one to move on a pile of `pile` stones.
    pub fn new(pile: u32) -> Self {
        NimGame {
            pile,
            player_one_to_move: true,
            options: SearchOptions {
                // Deep enough to play any small pile out to the end.
                look_ahead: 12,
                quiescence: false,
                ..SearchOptions::default()
            },
        }
    }

    pub fn with_monte_carlo(pile: u32, monte_carlo: MonteCarloOptions) -> Self {
        let mut game = NimGame::new(pile);
        game.options.monte_carlo = monte_carlo;
        game
    }

    pub fn root_move() -> TestMove {
        TestMove {
            id: 0,
            player_one: false,
            value: 0,
        }
    }

    fn move_value(pile_after: u32, mover_is_player_one: bool) -> Value {
        let sign = if mover_is_player_one { 1 } else { -1 };
        if pile_after == 0 {
            sign * WINNING_VALUE
        } else if pile_after % 4 == 0 {
            sign * 10
        } else {
            -sign * 10
        }
    }
}

impl Searchable for NimGame {
    type Move = TestMove;

    /// Moves sorted best-first for the player making them; `id` is the
    /// number of stones taken.
    fn generate_moves(&mut self, _last_move: &TestMove) -> Vec<TestMove> {
        let mover = self.player_one_to_move;
        let mut moves: Vec<TestMove> = (1..=self.pile.min(3))
            .map(|take| TestMove {
                id: take as usize,
                player_one: mover,
                value: NimGame::move_value(self.pile - take, mover),
            })
            .collect();
        if mover {
            moves.sort_by_key(|m| -m.value);
        } else {
            moves.sort_by_key(|m| m.value);
        }
        moves
    }

    fn generate_urgent_moves(&mut self, _last_move: &TestMove) -> Vec<TestMove> {
        Vec::new()
    }

    fn make_move(&mut self, mv: &TestMove) {
        self.pile -= mv.id as u32;
        self.player_one_to_move = !mv.player_one;
    }

    fn undo_move(&mut self, mv: &TestMove) {
        self.pile += mv.id as u32;
        self.player_one_to_move = mv.player_one;
    }

    fn done(&self, _last_move: &TestMove) -> bool {
        self.pile == 0
    }

    fn in_jeopardy(&self, _last_move: &TestMove) -> bool {
        false
    }

    fn hash_key(&self) -> u64 {
        (u64::from(self.pile) << 1) | u64::from(self.player_one_to_move)
    }

    fn worth(&self, last_move: &TestMove) -> Value {
        if self.pile == 0 {
            if last_move.is_player_one() {
                WINNING_VALUE
            } else {
                -WINNING_VALUE
            }
        } else {
            NimGame::move_value(self.pile, last_move.is_player_one())
        }
    }

    fn search_options(&self) -> SearchOptions {
        self.options.clone()
    }
}
