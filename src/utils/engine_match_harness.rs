//! Head-to-head engine match harness for local self-play.
//!
//! Runs two `Engine` implementations against each other from a given start
//! position, validating every returned move against the legal move list.

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Deserialize;
use std::time::Instant;
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, SearchParams};
use crate::game_state::chess_types::{Color, GameStatus};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, draw_counter_expired};
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    LightWinCheckmate,
    DarkWinCheckmate,
    DrawStalemate,
    DrawMoveCounter,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            MatchOutcome::LightWinCheckmate => Some(Color::Light),
            MatchOutcome::DarkWinCheckmate => Some(Color::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    Draw(MatchOutcome),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub seed: u64,
    pub final_state: GameState,
    pub played_moves: Vec<String>,
    pub light_move_count: u32,
    pub dark_move_count: u32,
    pub light_total_time_ns: u128,
    pub dark_total_time_ns: u128,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl MatchResult {
    /// One-line record header: engines, timestamps, outcome and ply count.
    pub fn header(&self, light_name: &str, dark_name: &str) -> String {
        let elapsed = self.finished_at - self.started_at;
        format!(
            "[{}] light=\"{}\" dark=\"{}\" seed={} outcome={:?} plies={} duration_ms={}",
            self.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
            light_name,
            dark_name,
            self.seed,
            self.outcome,
            self.played_moves.len(),
            elapsed.num_milliseconds()
        )
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 4,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={}",
            self.games, self.player1_wins, self.player2_wins, self.draws
        )
    }
}

/// Play one match from `start_state`.
///
/// `engine_light` moves for Light, `engine_dark` for Dark. An engine that
/// returns no move while moves exist, or a move not in the legal list, ends
/// the match with an error.
pub fn play_engine_match(
    engine_light: &mut dyn Engine,
    engine_dark: &mut dyn Engine,
    start_state: GameState,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    engine_light.new_game();
    engine_dark.new_game();

    let started_at = Utc::now();
    let mut state = start_state;
    let params = SearchParams::default();
    let mut played_moves = Vec::<String>::new();
    let mut light_move_count = 0u32;
    let mut dark_move_count = 0u32;
    let mut light_total_time_ns = 0u128;
    let mut dark_total_time_ns = 0u128;

    let outcome = loop {
        let legal_moves = generate_legal_moves(&mut state);
        match state.status() {
            GameStatus::Checkmate => {
                break match state.side_to_move {
                    Color::Light => MatchOutcome::DarkWinCheckmate,
                    Color::Dark => MatchOutcome::LightWinCheckmate,
                };
            }
            GameStatus::Stalemate if draw_counter_expired(&state) => {
                break MatchOutcome::DrawMoveCounter;
            }
            GameStatus::Stalemate => break MatchOutcome::DrawStalemate,
            GameStatus::Ongoing => {}
        }
        if played_moves.len() >= usize::from(config.max_plies) {
            break MatchOutcome::DrawMaxPlies;
        }

        let mover = state.side_to_move;
        let started = Instant::now();
        let out = match mover {
            Color::Light => engine_light.choose_move(&state, &params)?,
            Color::Dark => engine_dark.choose_move(&state, &params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                light_move_count = light_move_count.saturating_add(1);
                light_total_time_ns = light_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                dark_move_count = dark_move_count.saturating_add(1);
                dark_total_time_ns = dark_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out
            .best_move
            .ok_or_else(|| format!("{mover:?} engine returned no move"))?;
        // Replay the generator's copy so the flags match this exact state.
        let legal = legal_moves
            .iter()
            .find(|mv| **mv == chosen)
            .copied()
            .ok_or_else(|| format!("engine returned illegal move {}", chosen.chess_notation()))?;

        debug!(ply = played_moves.len(), side = ?mover, mv = %legal, "move played");
        played_moves.push(legal.chess_notation());
        apply_move(&mut state, &legal);
    };

    let finished_at = Utc::now();
    info!(
        outcome = ?outcome,
        plies = played_moves.len(),
        seed = config.seed,
        "match finished"
    );

    Ok(MatchResult {
        outcome,
        seed: config.seed,
        final_state: state,
        played_moves,
        light_move_count,
        dark_move_count,
        light_total_time_ns,
        dark_total_time_ns,
        started_at,
        finished_at,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    start_state: &GameState,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_light = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory(seed);
        let mut player2 = player2_factory(seed);
        let per_game = MatchConfig {
            seed,
            ..config.per_game.clone()
        };

        let result = if player1_is_light {
            play_engine_match(
                player1.as_mut(),
                player2.as_mut(),
                start_state.clone(),
                &per_game,
            )?
        } else {
            play_engine_match(
                player2.as_mut(),
                player1.as_mut(),
                start_state.clone(),
                &per_game,
            )?
        };

        let mapped = match result.outcome.winner() {
            Some(color) => {
                let player1_won = (color == Color::Light) == player1_is_light;
                let player = if player1_won {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinCheckmate { player, color }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::Draw(result.outcome)
            }
        };
        stats.outcomes.push(mapped);

        info!(
            game = i + 1,
            games = config.games,
            seed,
            result = ?mapped,
            "series game finished"
        );
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_capture_path::{CaptureConfig, CapturePathEngine};
    use crate::engines::engine_mcts::MctsEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::EngineOutput;
    use crate::game_state::chess_types::{CastleRights, PieceKind};
    use crate::search::board_scoring::PieceValues;
    use crate::search::mcts_config::MctsConfig;

    struct SilentEngine;

    impl Engine for SilentEngine {
        fn name(&self) -> &str {
            "silent"
        }

        fn choose_move(
            &mut self,
            _game_state: &GameState,
            _params: &SearchParams,
        ) -> Result<EngineOutput, String> {
            Ok(EngineOutput::default())
        }
    }

    #[test]
    fn random_vs_random_runs_to_an_outcome() {
        let mut light = RandomEngine::new(1);
        let mut dark = RandomEngine::new(2);
        let config = MatchConfig {
            max_plies: 60,
            seed: 1,
        };
        let result = play_engine_match(&mut light, &mut dark, GameState::new_game(), &config)
            .expect("match should run");

        assert_eq!(
            result.played_moves.len() as u32,
            result.light_move_count + result.dark_move_count
        );
        assert!(result.played_moves.len() <= 60);
        assert!(result.finished_at >= result.started_at);
        assert!(result.header("a", "b").contains("light=\"a\""));
    }

    #[test]
    fn mcts_vs_capture_path_plays_legal_moves() {
        let mut light = MctsEngine::new(MctsConfig::for_testing().with_simulations(16), 3);
        let mut dark = CapturePathEngine::with_piece_values(
            PieceValues::STANDARD,
            CaptureConfig { depth: 1 },
            3,
        );
        let config = MatchConfig {
            max_plies: 10,
            seed: 3,
        };
        let result = play_engine_match(&mut light, &mut dark, GameState::new_game(), &config)
            .expect("match should run");
        assert!(!result.played_moves.is_empty());
    }

    #[test]
    fn engine_without_a_move_is_an_error() {
        let mut light = SilentEngine;
        let mut dark = RandomEngine::new(0);
        let err = play_engine_match(
            &mut light,
            &mut dark,
            GameState::new_game(),
            &MatchConfig::default(),
        )
        .expect_err("silent engine should fail the match");
        assert!(err.contains("no move"));
    }

    #[test]
    fn already_mated_start_is_reported_without_moves() {
        let game = GameState::from_placements(
            &[
                (0, 7, Color::Dark, PieceKind::King),
                (1, 6, Color::Dark, PieceKind::Pawn),
                (1, 7, Color::Dark, PieceKind::Pawn),
                (0, 0, Color::Light, PieceKind::Rook),
                (7, 4, Color::Light, PieceKind::King),
            ],
            Color::Dark,
            CastleRights::NONE,
        )
        .expect("test setup should be valid");

        let mut light = RandomEngine::new(0);
        let mut dark = RandomEngine::new(0);
        let result = play_engine_match(&mut light, &mut dark, game, &MatchConfig::default())
            .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::LightWinCheckmate);
        assert!(result.played_moves.is_empty());
    }

    #[test]
    fn series_counts_every_game() {
        let stats = play_engine_match_series(
            |seed| Box::new(RandomEngine::new(seed)),
            |seed| Box::new(RandomEngine::new(seed + 100)),
            &GameState::new_game(),
            MatchSeriesConfig {
                games: 3,
                base_seed: 777,
                per_game: MatchConfig {
                    max_plies: 20,
                    seed: 0,
                },
            },
        )
        .expect("series should run");

        assert_eq!(stats.games, 3);
        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 3);
    }
}
