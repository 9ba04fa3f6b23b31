use thiserror::Error;

use crate::board::Point;

/// Reason a placement is rejected by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move: {0:?} is off the board")]
    OutOfBounds(Point),
    #[error("illegal move: {0:?} is not empty")]
    Occupied(Point),
    #[error("illegal move: {0:?} is suicide")]
    Suicide(Point),
    #[error("illegal move: {0:?} repeats an earlier position")]
    Superko(Point),
    #[error("illegal move: the game is over")]
    GameOver,
}

/// Invalid construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("board size must be between 1 and {max} (got {size})")]
    BoardSize { size: usize, max: usize },
    #[error("komi must be finite (got {0})")]
    Komi(f64),
    #[error("search depth must be at least 1")]
    ZeroDepth,
}

/// Failure to parse a coordinate such as `"D4"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("malformed coordinate {0:?}")]
    Malformed(String),
    #[error("coordinate {coord:?} is off a {size}x{size} board")]
    OffBoard { coord: String, size: usize },
}
