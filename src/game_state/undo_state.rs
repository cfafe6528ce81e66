use crate::game_state::chess_types::Square;
use crate::moves::chess_move::Move;

/// Single undo record pushed by `apply_move` and popped by `undo_move`.
///
/// Castling rights live in their own history stack on the game state.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: Move,
    pub prev_en_passant_square: Option<Square>,
    pub prev_draw_counter: u16,
}
