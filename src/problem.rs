//! The transition function of the game.
//!
//! [`GameProblem`] enumerates legal actions, validates placements against
//! the occupancy, suicide and positional superko rules, and produces the
//! next [`BoardState`]. Input snapshots are never modified.

use std::fmt;

use tracing::trace;

use crate::board::{Board, Point, parse_point, point_name};
use crate::error::{CoordError, MoveError};
use crate::state::{BoardState, GameConfig};

/// A move: place a stone or pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Place(Point),
    Pass,
}

impl Action {
    /// Parse `"pass"` or a Go coordinate such as `"D4"`.
    pub fn parse(s: &str, size: usize) -> Result<Self, CoordError> {
        if s.trim().eq_ignore_ascii_case("pass") {
            return Ok(Action::Pass);
        }
        parse_point(s, size).map(Action::Place)
    }

    /// Go notation for this action on a board of the given size.
    pub fn name(&self, size: usize) -> String {
        match *self {
            Action::Place(p) => point_name(p, size),
            Action::Pass => "pass".into(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place((row, col)) => write!(f, "({row}, {col})"),
            Action::Pass => write!(f, "pass"),
        }
    }
}

/// Rule engine for one game configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GameProblem {
    config: GameConfig,
}

impl GameProblem {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// The starting snapshot: empty board, Black to move.
    pub fn initial_state(&self) -> BoardState {
        BoardState::new(self.config)
    }

    /// Every legal placement in row-major order; empty once the game is over.
    pub fn actions(&self, state: &BoardState) -> Vec<Action> {
        if state.is_game_over() {
            return Vec::new();
        }
        state
            .board()
            .points()
            .filter(|&p| state.get(p).is_none() && self.is_valid_move(state, p))
            .map(Action::Place)
            .collect()
    }

    /// True if the player to move may place a stone at `p`.
    pub fn is_valid_move(&self, state: &BoardState, p: Point) -> bool {
        self.placement(state, p).is_ok()
    }

    /// Like [`is_valid_move`](Self::is_valid_move) but reports the rule that
    /// forbids the placement, and rejects any move once the game is over.
    pub fn check_move(&self, state: &BoardState, p: Point) -> Result<(), MoveError> {
        if state.is_game_over() {
            return Err(MoveError::GameOver);
        }
        self.placement(state, p).map(|_| ())
    }

    /// Play `p` on a scratch copy of the board.
    ///
    /// Returns the resulting board and the number of stones captured.
    fn placement(&self, state: &BoardState, p: Point) -> Result<(Board, usize), MoveError> {
        let board = state.board();
        if !board.in_bounds(p) {
            return Err(MoveError::OutOfBounds(p));
        }
        if board.get(p).is_some() {
            return Err(MoveError::Occupied(p));
        }

        let me = state.current_player();
        let mut scratch = board.clone();
        scratch.set(p, Some(me));
        let captured = scratch.remove_dead_groups(p, me.opponent()).len();

        if captured == 0 && scratch.liberties(p) == 0 {
            return Err(MoveError::Suicide(p));
        }
        if state.has_seen(&scratch) {
            return Err(MoveError::Superko(p));
        }
        Ok((scratch, captured))
    }

    /// Apply `action` to `state`, returning the successor snapshot.
    ///
    /// Placements are not validated; pass only actions approved by
    /// [`is_valid_move`](Self::is_valid_move) or [`actions`](Self::actions).
    pub fn result(&self, state: &BoardState, action: Action) -> BoardState {
        let mut next = state.clone();
        let me = state.current_player();

        match action {
            Action::Pass => {
                if state.last_move_was_pass() {
                    trace!(player = %me, "second consecutive pass, game over");
                    next.game_over = true;
                }
                next.last_move_was_pass = true;
            }
            Action::Place(p) => {
                next.board.set(p, Some(me));
                next.last_move_was_pass = false;
                let captured = next.board.remove_dead_groups(p, me.opponent());
                next.captures.add(me, captured.len() as u32);
                next.history.insert(next.board.clone());
            }
        }

        next.to_move = me.opponent();
        next
    }

    /// Validate `action`, then apply it.
    pub fn try_result(&self, state: &BoardState, action: Action) -> Result<BoardState, MoveError> {
        if state.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if let Action::Place(p) = action {
            self.placement(state, p)?;
        }
        Ok(self.result(state, action))
    }

    #[inline]
    pub fn is_terminal(&self, state: &BoardState) -> bool {
        state.is_game_over()
    }
}
