//! Immutable game snapshots.
//!
//! A [`BoardState`] is never mutated once handed out: the rule engine builds
//! every successor on a fresh copy. The superko history keeps one full board
//! per distinct position reached, so memory grows linearly with game length.

use rustc_hash::FxHashSet;

use crate::board::{Board, Point, Stone};
use crate::constants::{DEFAULT_BOARD_SIZE, DEFAULT_KOMI, MAX_BOARD_SIZE};
use crate::error::ConfigError;

/// Game construction parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub board_size: usize,
    pub komi: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            komi: DEFAULT_KOMI,
        }
    }
}

impl GameConfig {
    pub fn new(board_size: usize, komi: f64) -> Result<Self, ConfigError> {
        if board_size == 0 || board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardSize {
                size: board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if !komi.is_finite() {
            return Err(ConfigError::Komi(komi));
        }
        Ok(Self { board_size, komi })
    }
}

/// Stones captured by each color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    /// Stones captured *by* `color`.
    #[inline]
    pub fn by(&self, color: Stone) -> u32 {
        match color {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, color: Stone, n: u32) {
        match color {
            Stone::Black => self.black += n,
            Stone::White => self.white += n,
        }
    }
}

/// A complete game snapshot.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub(crate) board: Board,
    pub(crate) komi: f64,
    pub(crate) to_move: Stone,
    pub(crate) captures: Captures,
    /// Every position seen so far, including the current one.
    pub(crate) history: FxHashSet<Board>,
    pub(crate) last_move_was_pass: bool,
    pub(crate) game_over: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl BoardState {
    /// Empty board, Black to move.
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.board_size);
        let mut history = FxHashSet::default();
        history.insert(board.clone());
        Self {
            board,
            komi: config.komi,
            to_move: Stone::Black,
            captures: Captures::default(),
            history,
            last_move_was_pass: false,
            game_over: false,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn komi(&self) -> f64 {
        self.komi
    }

    #[inline]
    pub fn get(&self, p: Point) -> Option<Stone> {
        self.board.get(p)
    }

    /// Player to move.
    #[inline]
    pub fn current_player(&self) -> Stone {
        self.to_move
    }

    #[inline]
    pub fn captures(&self) -> Captures {
        self.captures
    }

    /// Number of distinct positions seen, the current one included.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// True if `board` already occurred in this game.
    #[inline]
    pub fn has_seen(&self, board: &Board) -> bool {
        self.history.contains(board)
    }

    #[inline]
    pub fn last_move_was_pass(&self) -> bool {
        self.last_move_was_pass
    }

    /// Set once two passes happen in a row.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = BoardState::default();
        assert_eq!(state.size(), DEFAULT_BOARD_SIZE);
        assert_eq!(state.komi(), DEFAULT_KOMI);
        assert_eq!(state.current_player(), Stone::Black);
        assert_eq!(state.captures(), Captures::default());
        assert_eq!(state.history_len(), 1);
        assert!(state.has_seen(state.board()));
        assert!(!state.last_move_was_pass());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_config_validation() {
        assert!(GameConfig::new(9, 6.5).is_ok());
        assert!(GameConfig::new(19, 0.0).is_ok());
        assert_eq!(
            GameConfig::new(0, 6.5),
            Err(ConfigError::BoardSize { size: 0, max: MAX_BOARD_SIZE })
        );
        assert!(GameConfig::new(MAX_BOARD_SIZE + 1, 6.5).is_err());
        assert!(matches!(GameConfig::new(9, f64::NAN), Err(ConfigError::Komi(_))));
    }

    #[test]
    fn test_captures_by_color() {
        let mut c = Captures::default();
        c.add(Stone::White, 3);
        c.add(Stone::Black, 1);
        c.add(Stone::White, 2);
        assert_eq!(c.by(Stone::Black), 1);
        assert_eq!(c.by(Stone::White), 5);
    }
}
