//! Depth-limited minimax with alpha-beta pruning.
//!
//! The agent always plays the MAX role at the root; the evaluator scores
//! leaves from the agent's assigned color. Moves are tried in the row-major
//! order produced by [`GameProblem::actions`], and a move only replaces the
//! current best on a strict improvement, so ties go to the first move found.
//!
//! An optional time limit turns the search into an interruptible one: every
//! node checks the deadline, and an expired search falls back to the best
//! root move whose subtree was fully evaluated.

use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::board::Stone;
use crate::constants::{DEFAULT_DEPTH, PASS_MARGIN, TUNED_DEPTH};
use crate::error::ConfigError;
use crate::eval::{CaptureLibertyEvaluator, Evaluator};
use crate::problem::{Action, GameProblem};
use crate::state::BoardState;

/// Search parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    pub depth: u32,
    /// Color the agent plays; the evaluator scores from this side.
    pub color: Stone,
    pub time_limit: Option<Duration>,
}

impl SearchConfig {
    /// Generic defaults: depth [`DEFAULT_DEPTH`], no time limit.
    pub fn new(color: Stone) -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            color,
            time_limit: None,
        }
    }

    /// Defaults for the capture/liberty evaluator: depth [`TUNED_DEPTH`].
    pub fn tuned(color: Stone) -> Self {
        Self {
            depth: TUNED_DEPTH,
            ..Self::new(color)
        }
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// What a search decided and how much work it took.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOutcome {
    /// `Pass` both when nothing is legal and when passing is preferred.
    pub action: Action,
    /// Minimax value of the chosen root move, if one was searched.
    pub value: Option<f64>,
    pub nodes: u64,
    pub cutoffs: u64,
    pub timed_out: bool,
}

/// Minimax agent over a [`GameProblem`].
pub struct SearchAgent<E = CaptureLibertyEvaluator> {
    problem: GameProblem,
    config: SearchConfig,
    evaluator: E,
}

impl SearchAgent<CaptureLibertyEvaluator> {
    /// Capture/liberty evaluator at depth [`TUNED_DEPTH`].
    pub fn tuned(problem: GameProblem, color: Stone) -> Self {
        Self {
            problem,
            config: SearchConfig::tuned(color),
            evaluator: CaptureLibertyEvaluator::default(),
        }
    }
}

impl<E: Evaluator> SearchAgent<E> {
    pub fn new(problem: GameProblem, config: SearchConfig, evaluator: E) -> Result<Self, ConfigError> {
        if config.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(Self {
            problem,
            config,
            evaluator,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn problem(&self) -> &GameProblem {
        &self.problem
    }

    /// Static value of `state` for the agent's color.
    pub fn heuristic(&self, state: &BoardState) -> f64 {
        self.evaluator.evaluate(state, self.config.color)
    }

    /// Best action for the player to move in `state`.
    pub fn get_best_move(&self, state: &BoardState) -> Action {
        self.search(state).action
    }

    /// Run the search and report statistics along with the chosen action.
    pub fn search(&self, state: &BoardState) -> SearchOutcome {
        let mut outcome = SearchOutcome {
            action: Action::Pass,
            value: None,
            nodes: 0,
            cutoffs: 0,
            timed_out: false,
        };

        // Fixed opening, only while the center is playable
        let c = state.size() / 2;
        if state.board().is_empty()
            && !self.problem.is_terminal(state)
            && self.problem.is_valid_move(state, (c, c))
        {
            outcome.action = Action::Place((c, c));
            debug!(action = %outcome.action, "opening on the center point");
            return outcome;
        }

        let moves = self.problem.actions(state);
        let Some(&first) = moves.first() else {
            debug!("no legal placement, passing");
            return outcome;
        };

        let mut search = Search {
            agent: self,
            deadline: self.config.time_limit.map(|d| Instant::now() + d),
            nodes: 0,
            cutoffs: 0,
        };

        let current_value = self.heuristic(state);
        let mut best_value = f64::NEG_INFINITY;
        let mut best_move = None;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut timed_out = false;

        for mv in moves {
            let child = self.problem.result(state, mv);
            let Some(v) = search.min_value(&child, self.config.depth - 1, alpha, beta) else {
                timed_out = true;
                break;
            };
            if v > best_value {
                best_value = v;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_value);
        }

        outcome.nodes = search.nodes;
        outcome.cutoffs = search.cutoffs;
        outcome.timed_out = timed_out;

        outcome.action = match best_move {
            Some(mv) => {
                outcome.value = Some(best_value);
                if state.last_move_was_pass() && best_value <= current_value + PASS_MARGIN {
                    trace!(
                        best = best_value,
                        current = current_value,
                        "opponent passed and nothing gains enough, passing"
                    );
                    Action::Pass
                } else {
                    mv
                }
            }
            None if timed_out => first,
            None => Action::Pass,
        };

        if timed_out {
            warn!(
                nodes = outcome.nodes,
                action = %outcome.action,
                "search deadline expired"
            );
        }
        debug!(
            player = %state.current_player(),
            action = %outcome.action,
            value = ?outcome.value,
            nodes = outcome.nodes,
            cutoffs = outcome.cutoffs,
            "search finished"
        );
        outcome
    }
}

/// Per-call search context.
struct Search<'a, E> {
    agent: &'a SearchAgent<E>,
    deadline: Option<Instant>,
    nodes: u64,
    cutoffs: u64,
}

impl<E: Evaluator> Search<'_, E> {
    /// Count the node; `None` once the deadline has passed.
    fn enter(&mut self) -> Option<()> {
        self.nodes += 1;
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => None,
            _ => Some(()),
        }
    }

    fn max_value(&mut self, state: &BoardState, depth: u32, mut alpha: f64, beta: f64) -> Option<f64> {
        self.enter()?;
        let agent = self.agent;
        let problem = &agent.problem;
        if depth == 0 || problem.is_terminal(state) {
            return Some(agent.heuristic(state));
        }
        let moves = problem.actions(state);
        if moves.is_empty() {
            return Some(agent.heuristic(state));
        }

        let mut v = f64::NEG_INFINITY;
        for mv in moves {
            let child = problem.result(state, mv);
            v = v.max(self.min_value(&child, depth - 1, alpha, beta)?);
            if v >= beta {
                self.cutoffs += 1;
                return Some(v);
            }
            alpha = alpha.max(v);
        }
        Some(v)
    }

    fn min_value(&mut self, state: &BoardState, depth: u32, alpha: f64, mut beta: f64) -> Option<f64> {
        self.enter()?;
        let agent = self.agent;
        let problem = &agent.problem;
        if depth == 0 || problem.is_terminal(state) {
            return Some(agent.heuristic(state));
        }
        let moves = problem.actions(state);
        if moves.is_empty() {
            return Some(agent.heuristic(state));
        }

        let mut v = f64::INFINITY;
        for mv in moves {
            let child = problem.result(state, mv);
            v = v.min(self.max_value(&child, depth - 1, alpha, beta)?);
            if v <= alpha {
                self.cutoffs += 1;
                return Some(v);
            }
            beta = beta.min(v);
        }
        Some(v)
    }
}
