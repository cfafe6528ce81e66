//! Monte-Carlo Tree Search engine.
//!
//! Wraps `search::mcts` behind the `Engine` trait. The engine owns a seeded
//! RNG so repeated games with the same seed replay identically.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::game_state::GameState;
use crate::search::mcts::run_mcts;
use crate::search::mcts_config::MctsConfig;

pub struct MctsEngine {
    config: MctsConfig,
    seed: u64,
    rng: StdRng,
}

impl MctsEngine {
    pub fn new(config: MctsConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

impl Engine for MctsEngine {
    fn name(&self) -> &str {
        "ShrimpChess MCTS"
    }

    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, String> {
        let config = match params.simulations {
            Some(n) => self.config.clone().with_simulations(n),
            None => self.config.clone(),
        };

        let result = run_mcts(game_state, &config, &mut self.rng).map_err(|e| e.to_string())?;

        let mut out = EngineOutput {
            best_move: result.best_move,
            info_lines: Vec::with_capacity(result.policy.len() + 1),
        };
        out.info_lines.push(format!(
            "info string mcts simulations {} nodes {} depth {} value {:.3}",
            result.iterations,
            result.stats.total_nodes,
            result.stats.max_depth,
            result.root_value
        ));
        for (mv, probability) in &result.policy {
            out.info_lines.push(format!(
                "info string mcts policy {} {:.3}",
                mv.chess_notation(),
                probability
            ));
        }

        debug!(
            best = ?out.best_move.map(|mv| mv.chess_notation()),
            iterations = result.iterations,
            "mcts engine chose move"
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_a_move_and_policy_lines() {
        let mut engine = MctsEngine::new(MctsConfig::for_testing(), 4);
        let out = engine
            .choose_move(&GameState::new_game(), &SearchParams::default())
            .expect("search should run");
        assert!(out.best_move.is_some());
        assert_eq!(out.info_lines.len(), 1 + 5);
    }

    #[test]
    fn invalid_override_surfaces_as_error() {
        let mut engine = MctsEngine::new(MctsConfig::for_testing(), 4);
        let params = SearchParams {
            simulations: Some(0),
            ..SearchParams::default()
        };
        let err = engine
            .choose_move(&GameState::new_game(), &params)
            .expect_err("zero simulations should be rejected");
        assert!(err.contains("num_simulations"));
    }

    #[test]
    fn new_game_replays_the_same_choice() {
        let game = GameState::standard();
        let params = SearchParams::default();
        let mut engine = MctsEngine::new(MctsConfig::for_testing(), 99);
        let first = engine.choose_move(&game, &params).expect("ok").best_move;
        engine.new_game();
        let second = engine.choose_move(&game, &params).expect("ok").best_move;
        assert_eq!(first, second);
    }
}
