//! Full legal move generation pipeline.
//!
//! Recomputes checks and pins for the side to move, runs the per-piece
//! generators, filters candidates against the current check, and records the
//! terminal flags on the game state.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::draw_counter_expired;
use crate::move_generation::legal_move_checks::{detect_checks_and_pins, Check};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Legal moves for the side to move.
///
/// Updates `in_check`, `pins`, `checks`, `checkmate` and `stalemate`. A draw
/// counter at the limit sets `stalemate` even when moves remain; those moves
/// are still returned.
pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<Move> {
    let scan = detect_checks_and_pins(game_state);
    game_state.in_check = scan.in_check;
    game_state.pins = scan.pins;
    game_state.checks = scan.checks;

    let side = game_state.side_to_move;
    let king = game_state.king_square(side);
    let mut moves = Vec::with_capacity(64);

    match game_state.checks.len() {
        0 => generate_all_candidate_moves(game_state, &mut moves),
        1 => {
            generate_all_candidate_moves(game_state, &mut moves);
            let check = game_state.checks[0];
            let valid_squares = check_resolution_squares(game_state, king, check);
            moves.retain(|mv| {
                mv.piece_moved.kind == PieceKind::King
                    || valid_squares.contains(&mv.end)
                    || (mv.is_en_passant && mv.en_passant_victim() == check.square)
            });
        }
        // Double check: only the king can move.
        _ => generate_king_moves(game_state, king, &mut moves),
    }

    game_state.checkmate = moves.is_empty() && game_state.in_check;
    game_state.stalemate =
        (moves.is_empty() && !game_state.in_check) || draw_counter_expired(game_state);

    moves
}

/// Status of the side to move, computed with a fresh legal-move query.
pub fn game_status(game_state: &mut GameState) -> GameStatus {
    generate_legal_moves(game_state);
    game_state.status()
}

fn generate_all_candidate_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square::new(row, col);
            let Some(piece) = game_state.piece_at(from) else {
                continue;
            };
            if piece.color != side {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(game_state, from, out),
                PieceKind::Knight => generate_knight_moves(game_state, from, out),
                PieceKind::Bishop => generate_bishop_moves(game_state, from, out),
                PieceKind::Rook => generate_rook_moves(game_state, from, out),
                PieceKind::Queen => generate_queen_moves(game_state, from, out),
                PieceKind::King => generate_king_moves(game_state, from, out),
            }
        }
    }
}

/// Squares a non-king move may land on to answer a single check: the
/// checker's square for a knight, otherwise every square from the king along
/// the check direction up to and including the checker.
fn check_resolution_squares(game_state: &GameState, king: Square, check: Check) -> Vec<Square> {
    let checker_is_knight = matches!(
        game_state.piece_at(check.square),
        Some(piece) if piece.kind == PieceKind::Knight
    );
    if checker_is_knight {
        return vec![check.square];
    }

    let mut squares = Vec::with_capacity(7);
    let mut current = king;
    while let Some(next) = current.offset(check.direction.0, check.direction.1) {
        squares.push(next);
        if next == check.square {
            break;
        }
        current = next;
    }
    squares
}
