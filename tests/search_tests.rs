//! Integration tests for the minimax agent.

use goban_minimax::{
    Action, BoardState, CaptureLibertyEvaluator, GameConfig, GameProblem, SearchAgent,
    SearchConfig, Stone, ZeroEvaluator,
};

fn setup(problem: &GameProblem, moves: &[&str]) -> BoardState {
    let mut state = problem.initial_state();
    for mv in moves {
        let action = Action::parse(mv, state.size()).expect("bad coordinate in test");
        state = match problem.try_result(&state, action) {
            Ok(next) => next,
            Err(e) => panic!("setup move {mv} rejected: {e}"),
        };
    }
    state
}

fn small_problem() -> GameProblem {
    GameProblem::new(GameConfig::new(5, 6.5).unwrap())
}

// =============================================================================
// Move choice
// =============================================================================

#[test]
fn test_depth_one_takes_the_capture_black() {
    let problem = GameProblem::default();
    // White A1 is in atari; only A2 captures it
    let state = setup(&problem, &["B1", "A1"]);
    let config = SearchConfig::tuned(Stone::Black).with_depth(1);
    let agent = SearchAgent::new(problem, config, CaptureLibertyEvaluator::default()).unwrap();
    assert_eq!(agent.get_best_move(&state), Action::parse("A2", 9).unwrap());
}

#[test]
fn test_depth_one_takes_the_capture_white() {
    let problem = GameProblem::default();
    // Black A1 is in atari after White B1
    let state = setup(&problem, &["A1", "B1", "E5"]);
    let config = SearchConfig::tuned(Stone::White).with_depth(1);
    let agent = SearchAgent::new(problem, config, CaptureLibertyEvaluator::default()).unwrap();
    let outcome = agent.search(&state);
    assert_eq!(outcome.action, Action::parse("A2", 9).unwrap());
    assert!(outcome.value.unwrap() > 10.0);
}

#[test]
fn test_custom_evaluator_steers_search() {
    let problem = small_problem();
    let state = setup(&problem, &["A1"]);
    // Only cares about owning the center point
    let wants_center = |s: &BoardState, me: Stone| {
        if s.get((2, 2)) == Some(me) { 1.0 } else { 0.0 }
    };
    let config = SearchConfig::new(Stone::White).with_depth(1);
    let agent = SearchAgent::new(problem, config, wants_center).unwrap();
    assert_eq!(agent.get_best_move(&state), Action::Place((2, 2)));
}

#[test]
fn test_answers_pass_with_pass() {
    let problem = small_problem();
    let state = setup(&problem, &["C3", "pass"]);
    let config = SearchConfig::new(Stone::Black).with_depth(1);
    let agent = SearchAgent::new(problem, config, ZeroEvaluator).unwrap();

    let action = agent.get_best_move(&state);
    assert_eq!(action, Action::Pass);
    let state = problem.result(&state, action);
    assert!(problem.is_terminal(&state));
}

#[test]
fn test_search_is_deterministic() {
    let problem = small_problem();
    let state = setup(&problem, &["C3", "B3", "C2"]);
    let agent = SearchAgent::tuned(problem, Stone::White);
    assert_eq!(agent.search(&state), agent.search(&state));
}

// =============================================================================
// Full games
// =============================================================================

#[test]
fn test_agents_only_play_legal_moves() {
    let problem = small_problem();
    let black = SearchAgent::tuned(problem, Stone::Black);
    let white = SearchAgent::tuned(problem, Stone::White);
    let mut state = problem.initial_state();

    for _ in 0..40 {
        if problem.is_terminal(&state) {
            break;
        }
        let agent = match state.current_player() {
            Stone::Black => &black,
            Stone::White => &white,
        };
        let action = agent.get_best_move(&state);
        if let Action::Place(p) = action {
            assert!(problem.is_valid_move(&state, p), "agent chose illegal {p:?}");
        }
        state = problem.result(&state, action);
    }
}

#[test]
fn test_agent_legal_from_random_positions() {
    let problem = small_problem();

    for seed in 0..8 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut state = problem.initial_state();
        for _ in 0..rng.usize(4..14) {
            let actions = problem.actions(&state);
            if actions.is_empty() {
                break;
            }
            state = problem.result(&state, actions[rng.usize(..actions.len())]);
        }

        let agent = SearchAgent::tuned(problem, state.current_player());
        match agent.get_best_move(&state) {
            Action::Place(p) => assert!(problem.is_valid_move(&state, p)),
            Action::Pass => assert!(
                problem.actions(&state).is_empty() || state.last_move_was_pass(),
                "seed {seed}: pass without a reason"
            ),
        }
    }
}
