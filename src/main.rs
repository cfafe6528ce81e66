//! Self-play binary: one seeded game of MCTS (Light) against the capture-path
//! engine (Dark) from the default setup.
//!
//! Settings come from `shrimp_chess.toml` and `SHRIMP_CHESS_*` environment
//! variables; `RUST_LOG` overrides the configured log level.

use std::error::Error;

use shrimp_chess::engines::engine_capture_path::CapturePathEngine;
use shrimp_chess::engines::engine_mcts::MctsEngine;
use shrimp_chess::engines::engine_trait::Engine;
use shrimp_chess::game_state::game_state::GameState;
use shrimp_chess::search::board_scoring::PieceValues;
use shrimp_chess::utils::config_loader::load_config;
use shrimp_chess::utils::engine_match_harness::play_engine_match;
use shrimp_chess::utils::render_game_state::{render_game_state, render_position_summary};
use tracing::info;

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    init_tracing(&config.log_level);

    let seed = config.match_.seed;
    let mut light = MctsEngine::new(config.search.clone(), seed);
    let mut dark = CapturePathEngine::with_piece_values(
        PieceValues::STANDARD,
        config.capture.clone(),
        seed.wrapping_add(1),
    );

    let start = GameState::new_game();
    println!("{}\n", render_game_state(&start));
    info!(
        seed,
        simulations = config.search.num_simulations,
        capture_depth = config.capture.depth,
        "starting self-play"
    );

    let mut result = play_engine_match(&mut light, &mut dark, start, &config.match_)?;

    println!("{}", result.header(light.name(), dark.name()));
    println!("moves: {}", result.played_moves.join(" "));
    println!("{}", render_game_state(&result.final_state));
    println!("{}", render_position_summary(&mut result.final_state));

    Ok(())
}
