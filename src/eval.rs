//! Position evaluation

use crate::board::Stone;
use crate::constants::{CAPTURE_WEIGHT, LIBERTY_WEIGHT, STONE_WEIGHT};
use crate::state::BoardState;

/// Static evaluation used at the leaves of the search.
///
/// Values are from `perspective`'s point of view: higher is better for that color.
pub trait Evaluator {
    fn evaluate(&self, state: &BoardState, perspective: Stone) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&BoardState, Stone) -> f64,
{
    fn evaluate(&self, state: &BoardState, perspective: Stone) -> f64 {
        self(state, perspective)
    }
}

/// Rates every position 0. Search degenerates to "first legal move".
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroEvaluator;

impl Evaluator for ZeroEvaluator {
    fn evaluate(&self, _state: &BoardState, _perspective: Stone) -> f64 {
        0.0
    }
}

/// Material, stone count and liberties, Black minus White.
///
/// Liberties are summed per stone: a stone in a group with `L` liberties
/// contributes `L`, so a k-stone group contributes `k * L`.
#[derive(Clone, Copy, Debug)]
pub struct CaptureLibertyEvaluator {
    pub capture_weight: f64,
    pub stone_weight: f64,
    pub liberty_weight: f64,
}

impl Default for CaptureLibertyEvaluator {
    fn default() -> Self {
        Self {
            capture_weight: CAPTURE_WEIGHT,
            stone_weight: STONE_WEIGHT,
            liberty_weight: LIBERTY_WEIGHT,
        }
    }
}

impl CaptureLibertyEvaluator {
    /// Evaluation from Black's side.
    pub fn black_advantage(&self, state: &BoardState) -> f64 {
        let captures = state.captures();
        let mut stones = 0i64;
        let mut liberties = 0i64;

        for group in state.board().groups() {
            let n = group.stones.len() as i64;
            let sign = match group.color {
                Stone::Black => 1,
                Stone::White => -1,
            };
            stones += sign * n;
            liberties += sign * n * group.liberties as i64;
        }

        self.capture_weight * (f64::from(captures.black) - f64::from(captures.white))
            + self.stone_weight * stones as f64
            + self.liberty_weight * liberties as f64
    }
}

impl Evaluator for CaptureLibertyEvaluator {
    fn evaluate(&self, state: &BoardState, perspective: Stone) -> f64 {
        let v = self.black_advantage(state);
        match perspective {
            Stone::Black => v,
            Stone::White => -v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{Action, GameProblem};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_empty_board_is_even() {
        let state = BoardState::default();
        let eval = CaptureLibertyEvaluator::default();
        assert_eq!(eval.evaluate(&state, Stone::Black), 0.0);
        assert_eq!(ZeroEvaluator.evaluate(&state, Stone::White), 0.0);
    }

    #[test]
    fn test_single_stone() {
        let problem = GameProblem::default();
        let s = problem.result(&problem.initial_state(), Action::Place((4, 4)));
        let eval = CaptureLibertyEvaluator::default();
        // 1 stone + 0.2 * 4 liberties
        assert!((eval.evaluate(&s, Stone::Black) - 1.8).abs() < EPS);
        assert!((eval.evaluate(&s, Stone::White) + 1.8).abs() < EPS);
    }

    #[test]
    fn test_liberties_counted_per_stone() {
        let problem = GameProblem::default();
        let mut s = problem.initial_state();
        for a in [Action::Place((4, 4)), Action::Pass, Action::Place((4, 5))] {
            s = problem.result(&s, a);
        }
        // 2 stones, shared 6 liberties counted once per stone: 2 + 0.2 * 12
        let v = CaptureLibertyEvaluator::default().black_advantage(&s);
        assert!((v - 4.4).abs() < EPS, "got {v}");
    }

    #[test]
    fn test_captures_dominate() {
        let problem = GameProblem::default();
        let mut s = problem.initial_state();
        for a in [Action::Place((0, 1)), Action::Place((0, 0)), Action::Place((1, 0))] {
            s = problem.result(&s, a);
        }
        assert_eq!(s.captures().black, 1);
        // 10 for the capture, 2 stones with 3 liberties each
        let v = CaptureLibertyEvaluator::default().black_advantage(&s);
        assert!((v - (10.0 + 2.0 + 0.2 * 6.0)).abs() < EPS, "got {v}");
    }

    #[test]
    fn test_closure_evaluator() {
        let f = |state: &BoardState, _: Stone| state.history_len() as f64;
        assert_eq!(f.evaluate(&BoardState::default(), Stone::Black), 1.0);
    }
}
