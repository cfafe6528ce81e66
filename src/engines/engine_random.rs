//! Uniform random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics
//! and as a baseline opponent in self-play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "ShrimpChess Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &SearchParams,
    ) -> Result<EngineOutput, String> {
        let mut probe = game_state.clone();
        let legal_moves = generate_legal_moves(&mut probe);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or("failed to choose a random move")?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move_from_default_setup() {
        let game = GameState::new_game();
        let mut probe = game.clone();
        let legal = generate_legal_moves(&mut probe);

        let mut engine = RandomEngine::new(9);
        let out = engine
            .choose_move(&game, &SearchParams::default())
            .expect("random engine should not fail");
        let best = out.best_move.expect("default setup has moves");
        assert!(legal.contains(&best));
    }

    #[test]
    fn same_seed_same_choice() {
        let game = GameState::standard();
        let mut a = RandomEngine::new(123);
        let mut b = RandomEngine::new(123);
        let params = SearchParams::default();
        for _ in 0..5 {
            let ma = a.choose_move(&game, &params).expect("ok").best_move;
            let mb = b.choose_move(&game, &params).expect("ok").best_move;
            assert_eq!(ma, mb);
        }
    }
}
