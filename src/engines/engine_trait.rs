//! Engine abstraction layer used by the match harness and the binary.
//!
//! Defines common input parameters and output payloads so different move
//! selectors can be swapped behind a single trait interface.

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

/// Per-call overrides. Unset fields fall back to the engine's own config.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub simulations: Option<u32>,
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, String>;
}
