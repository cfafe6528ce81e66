use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::scan_board;
use crate::move_generation::legal_move_shared::{along_pin, pin_direction};
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let step = side.pawn_direction();
    let pin = pin_direction(&game_state.pins, from);

    let Some(one_step) = from.offset(step, 0) else {
        return;
    };

    if game_state.piece_at(one_step).is_none() && along_pin(pin, (step, 0)) {
        out.push(pawn_move(game_state, from, one_step));

        if from.row == side.pawn_home_row() {
            if let Some(two_step) = from.offset(2 * step, 0) {
                if game_state.piece_at(two_step).is_none() {
                    out.push(Move::new(from, two_step, &game_state.board));
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(step, d_col) else {
            continue;
        };
        if !along_pin(pin, (step, d_col)) {
            continue;
        }

        match game_state.piece_at(target) {
            Some(piece) if piece.color != side => out.push(pawn_move(game_state, from, target)),
            None if game_state.en_passant_square == Some(target) => {
                let mv = Move::en_passant(from, target, &game_state.board);
                if !en_passant_exposes_king(game_state, &mv) {
                    out.push(mv);
                }
            }
            _ => {}
        }
    }
}

fn pawn_move(game_state: &GameState, from: Square, to: Square) -> Move {
    if to.row == game_state.side_to_move.promotion_row() {
        Move::promotion(from, to, &game_state.board)
    } else {
        Move::new(from, to, &game_state.board)
    }
}

/// En-passant empties two squares on the capturing rank, which the pin scan
/// cannot see. Replay the capture on a scratch board and rescan.
fn en_passant_exposes_king(game_state: &GameState, mv: &Move) -> bool {
    let mut board = game_state.board;
    let victim = mv.en_passant_victim();
    board[mv.start.row as usize][mv.start.col as usize] = None;
    board[victim.row as usize][victim.col as usize] = None;
    board[mv.end.row as usize][mv.end.col as usize] = Some(mv.piece_moved);

    let side = game_state.side_to_move;
    scan_board(&board, game_state.king_square(side), side).in_check
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_rules::Placement;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_checks::detect_checks_and_pins;
    use crate::moves::chess_move::Move;

    fn pawn_moves(placements: &[Placement], ep: Option<Square>, from: Square) -> Vec<Move> {
        let mut game = GameState::from_placements(placements, Color::Light, CastleRights::NONE)
            .expect("test setup should be valid");
        game.en_passant_square = ep;
        game.pins = detect_checks_and_pins(&game).pins;
        let mut moves = Vec::new();
        generate_pawn_moves(&game, from, &mut moves);
        moves
    }

    #[test]
    fn home_row_pawn_has_single_and_double_advance() {
        let game = GameState::standard();
        let mut moves = Vec::new();
        generate_pawn_moves(&game, Square::new(6, 4), &mut moves);
        let ends: Vec<String> = moves.iter().map(|mv| mv.end.name()).collect();
        assert_eq!(ends, vec!["e3", "e4"]);
    }

    #[test]
    fn last_row_advance_and_capture_are_promotions() {
        let moves = pawn_moves(
            &[
                (7, 4, Color::Light, PieceKind::King),
                (0, 0, Color::Dark, PieceKind::King),
                (1, 6, Color::Light, PieceKind::Pawn),
                (0, 7, Color::Dark, PieceKind::Knight),
            ],
            None,
            Square::new(1, 6),
        );
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.is_promotion));
    }

    #[test]
    fn en_passant_requires_matching_target() {
        let placements = [
            (7, 4, Color::Light, PieceKind::King),
            (0, 0, Color::Dark, PieceKind::King),
            (3, 4, Color::Light, PieceKind::Pawn),
            (3, 5, Color::Dark, PieceKind::Pawn),
        ];
        let with_target = pawn_moves(&placements, Some(Square::new(2, 5)), Square::new(3, 4));
        assert!(with_target
            .iter()
            .any(|mv| mv.is_en_passant && mv.end == Square::new(2, 5)));

        let without = pawn_moves(&placements, None, Square::new(3, 4));
        assert!(!without.iter().any(|mv| mv.is_en_passant));
    }

    #[test]
    fn en_passant_that_uncovers_rank_attack_is_rejected() {
        // King a5, light pawn b5, dark pawn c5 (just double-pushed), rook h5.
        let moves = pawn_moves(
            &[
                (3, 0, Color::Light, PieceKind::King),
                (3, 1, Color::Light, PieceKind::Pawn),
                (3, 2, Color::Dark, PieceKind::Pawn),
                (3, 7, Color::Dark, PieceKind::Rook),
                (0, 7, Color::Dark, PieceKind::King),
            ],
            Some(Square::new(2, 2)),
            Square::new(3, 1),
        );
        assert!(!moves.iter().any(|mv| mv.is_en_passant));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn vertically_pinned_pawn_cannot_capture() {
        let moves = pawn_moves(
            &[
                (7, 4, Color::Light, PieceKind::King),
                (6, 4, Color::Light, PieceKind::Pawn),
                (5, 3, Color::Dark, PieceKind::Knight),
                (0, 4, Color::Dark, PieceKind::Rook),
                (0, 0, Color::Dark, PieceKind::King),
            ],
            None,
            Square::new(6, 4),
        );
        assert!(moves.iter().all(|mv| mv.end.col == 4));
        assert_eq!(moves.len(), 2);
    }
}
