use crate::game_state::chess_rules::ORTHOGONAL_DIRECTIONS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, pin_direction};
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let pin = pin_direction(&game_state.pins, from);
    generate_sliding_moves(game_state, from, &ORTHOGONAL_DIRECTIONS, pin, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_stops_on_capture_and_before_own_piece() {
        let game = GameState::from_placements(
            &[
                (7, 0, Color::Light, PieceKind::Rook),
                (7, 4, Color::Light, PieceKind::King),
                (4, 0, Color::Dark, PieceKind::Knight),
                (0, 7, Color::Dark, PieceKind::King),
            ],
            Color::Light,
            CastleRights::NONE,
        )
        .expect("test setup should be valid");

        let mut moves = Vec::new();
        generate_rook_moves(&game, Square::new(7, 0), &mut moves);

        // a2, a3, a4(capture) up the file; b1, c1, d1 along the rank.
        assert_eq!(moves.len(), 6);
        assert!(moves.iter().any(|mv| mv.end == Square::new(4, 0) && mv.is_capture()));
        assert!(!moves.iter().any(|mv| mv.end == Square::new(7, 4)));
    }
}
