//! Goban-Minimax: command-line driver.
//!
//! ## Usage
//!
//! - `goban-minimax` - Show a demo
//! - `goban-minimax selfplay` - Play a full game between two engine players
//! - `goban-minimax demo` - Run the short demo
//!
//! Set `RUST_LOG=debug` to see every search decision.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use goban_minimax::constants::{DEFAULT_BOARD_SIZE, DEFAULT_KOMI};
use goban_minimax::{
    Action, BoardState, CaptureLibertyEvaluator, DeadStones, GameConfig, GameProblem,
    SearchAgent, SearchConfig, Stone,
};

/// Goban-Minimax: a Go rule engine with an alpha-beta search agent
#[derive(Parser)]
#[command(name = "goban-minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a complete game between two players and print the score
    Selfplay {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, default_value_t = DEFAULT_KOMI)]
        komi: f64,
        #[arg(long, value_enum, default_value = "minimax")]
        black: PlayerKind,
        #[arg(long, value_enum, default_value = "minimax")]
        white: PlayerKind,
        /// Search depth for minimax players (default: tuned depth)
        #[arg(long)]
        depth: Option<u32>,
        /// Per-move time limit for minimax players, in milliseconds
        #[arg(long)]
        time_limit_ms: Option<u64>,
        /// Seed for random players
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Stop after this many moves even if nobody passed twice
        #[arg(long, default_value_t = 300)]
        max_moves: usize,
    },
    /// Run a simple demo of the engine
    Demo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    Minimax,
    Random,
}

enum Player {
    Minimax(SearchAgent<CaptureLibertyEvaluator>),
    Random(fastrand::Rng),
}

impl Player {
    fn build(
        kind: PlayerKind,
        problem: GameProblem,
        color: Stone,
        depth: Option<u32>,
        time_limit: Option<Duration>,
        seed: u64,
    ) -> Result<Self> {
        Ok(match kind {
            PlayerKind::Minimax => {
                let mut config = SearchConfig::tuned(color);
                if let Some(d) = depth {
                    config = config.with_depth(d);
                }
                if let Some(t) = time_limit {
                    config = config.with_time_limit(t);
                }
                let agent = SearchAgent::new(problem, config, CaptureLibertyEvaluator::default())
                    .with_context(|| format!("invalid search settings for {color}"))?;
                Player::Minimax(agent)
            }
            PlayerKind::Random => Player::Random(fastrand::Rng::with_seed(seed)),
        })
    }

    fn choose(&mut self, problem: &GameProblem, state: &BoardState) -> Action {
        match self {
            Player::Minimax(agent) => agent.get_best_move(state),
            Player::Random(rng) => {
                let actions = problem.actions(state);
                if actions.is_empty() {
                    Action::Pass
                } else {
                    actions[rng.usize(..actions.len())]
                }
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay {
            size,
            komi,
            black,
            white,
            depth,
            time_limit_ms,
            seed,
            max_moves,
        }) => {
            let config = GameConfig::new(size, komi).context("invalid game settings")?;
            let problem = GameProblem::new(config);
            let time_limit = time_limit_ms.map(Duration::from_millis);
            let mut black = Player::build(black, problem, Stone::Black, depth, time_limit, seed)?;
            let mut white = Player::build(
                white,
                problem,
                Stone::White,
                depth,
                time_limit,
                seed.wrapping_add(1),
            )?;
            selfplay(&problem, &mut black, &mut white, max_moves)
        }
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn selfplay(
    problem: &GameProblem,
    black: &mut Player,
    white: &mut Player,
    max_moves: usize,
) -> Result<()> {
    let mut state = problem.initial_state();
    let size = state.size();
    let mut moves = 0;

    while !problem.is_terminal(&state) && moves < max_moves {
        let mover = state.current_player();
        let player = match mover {
            Stone::Black => &mut *black,
            Stone::White => &mut *white,
        };
        let action = player.choose(problem, &state);
        state = problem
            .try_result(&state, action)
            .with_context(|| format!("{mover} chose an illegal move {}", action.name(size)))?;
        moves += 1;
        let name = action.name(size);
        info!(move_number = moves, player = %mover, action = %name, "played");
    }

    let score = state.score(&DeadStones::new());
    println!("{}", state.board());
    println!(
        "Captures: Black {}  White {}",
        state.captures().black,
        state.captures().white
    );
    println!(
        "Territory: Black {}  White {}",
        score.black_territory.len(),
        score.white_territory.len()
    );
    println!(
        "Score: Black {}  White {} (komi {})",
        score.black,
        score.white,
        state.komi()
    );
    match score.winner {
        Some(winner) => println!("Winner: {winner}"),
        None => println!("Result: tie"),
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Goban-Minimax: Go rule engine with alpha-beta search\n");

    let problem = GameProblem::default();
    let mut state = problem.initial_state();

    println!("=== Rules Demo ===");
    for name in ["C3", "C4", "D4", "B4", "pass", "C5", "D5"] {
        let action = Action::parse(name, state.size())?;
        state = problem
            .try_result(&state, action)
            .with_context(|| format!("demo move {name} rejected"))?;
    }
    println!("{}", state.board());
    println!("Captures so far: {:?}", state.captures());

    println!("=== Search Demo ===");
    let agent = SearchAgent::tuned(problem, state.current_player());
    let outcome = agent.search(&state);
    println!(
        "{} plays {} (value {:?}, {} nodes, {} cutoffs)",
        state.current_player(),
        outcome.action.name(state.size()),
        outcome.value,
        outcome.nodes,
        outcome.cutoffs
    );
    Ok(())
}
