use crate::game_state::chess_rules::KING_OFFSETS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::chess_move::Move;

/// King steps that do not land on an attacked square, plus castling.
///
/// Each destination is tested by rescanning from that square with the king's
/// current square treated as vacated.
pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;

    for &(d_row, d_col) in KING_OFFSETS.iter() {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if matches!(game_state.piece_at(to), Some(piece) if piece.color == side) {
            continue;
        }
        if !is_square_attacked(game_state, to, side) {
            out.push(Move::new(from, to, &game_state.board));
        }
    }

    generate_castle_moves(game_state, from, out);
}

fn generate_castle_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    // Cannot castle out of check.
    if game_state.in_check {
        return;
    }

    let side = game_state.side_to_move;
    let row = side.back_row();
    if king_from != Square::new(row, 4) {
        return;
    }

    let rights = game_state.castle_rights;
    if rights.kingside(side)
        && has_home_rook(game_state, Square::new(row, 7))
        && squares_empty(game_state, row, &[5, 6])
        && squares_safe(game_state, row, &[5, 6])
    {
        out.push(Move::castle(king_from, Square::new(row, 6), &game_state.board));
    }

    if rights.queenside(side)
        && has_home_rook(game_state, Square::new(row, 0))
        && squares_empty(game_state, row, &[1, 2, 3])
        && squares_safe(game_state, row, &[3, 2])
    {
        out.push(Move::castle(king_from, Square::new(row, 2), &game_state.board));
    }
}

fn has_home_rook(game_state: &GameState, square: Square) -> bool {
    matches!(
        game_state.piece_at(square),
        Some(piece) if piece.is(game_state.side_to_move, PieceKind::Rook)
    )
}

fn squares_empty(game_state: &GameState, row: u8, cols: &[u8]) -> bool {
    cols.iter()
        .all(|&col| game_state.piece_at(Square::new(row, col)).is_none())
}

fn squares_safe(game_state: &GameState, row: u8, cols: &[u8]) -> bool {
    let side = game_state.side_to_move;
    cols.iter()
        .all(|&col| !is_square_attacked(game_state, Square::new(row, col), side))
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::game_state::chess_types::*;
    use crate::moves::chess_move::Move;

    fn castle_targets(extra: &[(u8, u8, Color, PieceKind)]) -> Vec<String> {
        let mut placements = vec![
            (7, 4, Color::Light, PieceKind::King),
            (7, 0, Color::Light, PieceKind::Rook),
            (7, 7, Color::Light, PieceKind::Rook),
            (0, 4, Color::Dark, PieceKind::King),
        ];
        placements.extend_from_slice(extra);
        let game = GameState::from_placements(&placements, Color::Light, CastleRights::ALL)
            .expect("test setup should be valid");

        let mut moves: Vec<Move> = Vec::new();
        generate_king_moves(&game, Square::new(7, 4), &mut moves);
        moves
            .iter()
            .filter(|mv| mv.is_castle)
            .map(|mv| mv.end.name())
            .collect()
    }

    #[test]
    fn both_castles_available_on_clear_rank() {
        assert_eq!(castle_targets(&[]), vec!["g1", "c1"]);
    }

    #[test]
    fn attacked_transit_square_forbids_that_side_only() {
        // Dark rook on f8 covers f1.
        assert_eq!(
            castle_targets(&[(0, 5, Color::Dark, PieceKind::Rook)]),
            vec!["c1"]
        );
    }

    #[test]
    fn attacked_b1_does_not_forbid_queenside() {
        assert_eq!(
            castle_targets(&[(0, 1, Color::Dark, PieceKind::Rook)]),
            vec!["g1", "c1"]
        );
    }

    #[test]
    fn blocked_queenside_path_forbids_castle() {
        assert_eq!(
            castle_targets(&[(7, 1, Color::Light, PieceKind::Knight)]),
            vec!["g1"]
        );
    }

    #[test]
    fn king_cannot_step_along_the_checking_ray() {
        let mut game = GameState::from_placements(
            &[
                (4, 4, Color::Light, PieceKind::King),
                (4, 0, Color::Dark, PieceKind::Rook),
                (0, 7, Color::Dark, PieceKind::King),
            ],
            Color::Light,
            CastleRights::NONE,
        )
        .expect("test setup should be valid");
        game.in_check = true;

        let mut moves = Vec::new();
        generate_king_moves(&game, Square::new(4, 4), &mut moves);
        assert!(!moves.iter().any(|mv| mv.end == Square::new(4, 5)));
        assert!(!moves.iter().any(|mv| mv.end == Square::new(4, 3)));
        assert_eq!(moves.len(), 6);
    }

    #[test]
    fn no_castling_while_in_check() {
        let mut game = GameState::from_placements(
            &[
                (7, 4, Color::Light, PieceKind::King),
                (7, 7, Color::Light, PieceKind::Rook),
                (0, 4, Color::Dark, PieceKind::Rook),
                (0, 0, Color::Dark, PieceKind::King),
            ],
            Color::Light,
            CastleRights::ALL,
        )
        .expect("test setup should be valid");

        let moves = generate_legal_moves(&mut game);
        assert!(game.in_check);
        assert!(!moves.is_empty());
        assert!(!moves.iter().any(|mv| mv.is_castle));
    }
}
