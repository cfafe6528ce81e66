use crate::game_state::chess_rules::DIAGONAL_DIRECTIONS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, pin_direction};
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let pin = pin_direction(&game_state.pins, from);
    generate_sliding_moves(game_state, from, &DIAGONAL_DIRECTIONS, pin, out);
}
