use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::pin_direction;
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    // No knight jump stays on a pin ray.
    if pin_direction(&game_state.pins, from).is_some() {
        return;
    }

    let side = game_state.side_to_move;
    for &(d_row, d_col) in KNIGHT_OFFSETS.iter() {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match game_state.piece_at(to) {
            Some(piece) if piece.color == side => {}
            _ => out.push(Move::new(from, to, &game_state.board)),
        }
    }
}
