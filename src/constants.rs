//! Default configuration values for the rule engine and the search agent.
//!
//! Every value here is only a default: board size, komi and search depth are
//! passed explicitly when a [`GameConfig`](crate::state::GameConfig) or a
//! [`SearchConfig`](crate::search::SearchConfig) is constructed.
//!
//! # Board Size Configuration
//!
//! The default board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! ```sh
//! cargo build                                              # 9x9 (default)
//! cargo build --no-default-features --features board13x13  # 13x13
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
#[cfg(feature = "board9x9")]
pub const DEFAULT_BOARD_SIZE: usize = 9;

#[cfg(feature = "board13x13")]
pub const DEFAULT_BOARD_SIZE: usize = 13;

#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Largest board accepted by [`GameConfig::new`](crate::state::GameConfig::new).
/// Go notation runs out of column letters past 25.
pub const MAX_BOARD_SIZE: usize = 25;

// =============================================================================
// Scoring
// =============================================================================

/// Komi (compensation points added to White's total only).
pub const DEFAULT_KOMI: f64 = 6.5;

// =============================================================================
// Search Parameters
// =============================================================================

/// Depth limit for a search agent built with an arbitrary evaluator.
pub const DEFAULT_DEPTH: u32 = 3;

/// Depth limit for the capture/liberty evaluator.
pub const TUNED_DEPTH: u32 = 2;

/// After an opponent pass, the agent passes unless its best line beats the
/// static value of the current position by more than this margin.
pub const PASS_MARGIN: f64 = 0.5;

// =============================================================================
// Heuristic Weights
// =============================================================================

/// Weight of each captured stone.
pub const CAPTURE_WEIGHT: f64 = 10.0;

/// Weight of each stone on the board.
pub const STONE_WEIGHT: f64 = 1.0;

/// Weight of each liberty, counted once per stone of the owning group.
pub const LIBERTY_WEIGHT: f64 = 0.2;
