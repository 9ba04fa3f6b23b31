//! Goban-Minimax: a Go rule engine with an alpha-beta search agent.
//!
//! The crate enforces the rules of Go on an NxN board (captures, suicide,
//! positional superko, double-pass game end, territory scoring) and plays
//! it with a depth-limited minimax search.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size, komi, search depths and weights
//! - [`board`] - Grid representation and rule primitives (groups, liberties, captures)
//! - [`state`] - Immutable game snapshots
//! - [`scoring`] - Dead-stone marking and territory scoring
//! - [`problem`] - Legal actions and the transition function
//! - [`eval`] - Static position evaluators
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use goban_minimax::board::Stone;
//! use goban_minimax::problem::{Action, GameProblem};
//! use goban_minimax::search::SearchAgent;
//!
//! let problem = GameProblem::default();
//! let state = problem.initial_state();
//!
//! // Black opens on the center point
//! let state = problem.result(&state, Action::Place((4, 4)));
//!
//! // Ask a White agent for a reply
//! let agent = SearchAgent::tuned(problem, Stone::White);
//! let reply = agent.get_best_move(&state);
//! assert!(matches!(reply, Action::Place(p) if problem.is_valid_move(&state, p)));
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod eval;
pub mod problem;
pub mod scoring;
pub mod search;
pub mod state;

pub use board::{Board, Point, Stone};
pub use error::{ConfigError, CoordError, MoveError};
pub use eval::{CaptureLibertyEvaluator, Evaluator, ZeroEvaluator};
pub use problem::{Action, GameProblem};
pub use scoring::{DeadStones, ScoreResult};
pub use search::{SearchAgent, SearchConfig, SearchOutcome};
pub use state::{BoardState, Captures, GameConfig};
