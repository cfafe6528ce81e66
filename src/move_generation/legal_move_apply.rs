//! In-place move application and reversal.
//!
//! `apply_move` trusts its input: the move must come from
//! `generate_legal_moves` for the exact same state. `undo_move` reverses the
//! most recent apply using the undo record and the castling-rights history.

use crate::game_state::chess_rules::DRAW_COUNTER_LIMIT;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub fn apply_move(game_state: &mut GameState, mv: &Move) {
    let mover = mv.mover();

    game_state.set_piece(mv.start, None);
    let placed = if mv.is_promotion {
        Piece::new(mover, PieceKind::Queen)
    } else {
        mv.piece_moved
    };
    game_state.set_piece(mv.end, Some(placed));

    if mv.is_en_passant {
        game_state.set_piece(mv.en_passant_victim(), None);
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(mv);
        let rook = game_state.piece_at(rook_from);
        game_state.set_piece(rook_from, None);
        game_state.set_piece(rook_to, rook);
    }

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = mv.end;
    }

    let undo = UndoState {
        mv: *mv,
        prev_en_passant_square: game_state.en_passant_square,
        prev_draw_counter: game_state.draw_counter,
    };

    game_state.en_passant_square = if mv.is_double_pawn_push() {
        Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
    } else {
        None
    };

    update_castle_rights(&mut game_state.castle_rights, mv);
    game_state
        .castle_rights_history
        .push(game_state.castle_rights);

    if mv.piece_moved.kind == PieceKind::Pawn || mv.is_capture() {
        game_state.draw_counter = 0;
    } else {
        game_state.draw_counter = game_state.draw_counter.saturating_add(1);
    }

    game_state.side_to_move = mover.opposite();
    game_state.move_history.push(undo);
}

/// Reverse the most recent `apply_move`.
///
/// Returns `None` and leaves the state untouched when there is nothing to
/// undo.
pub fn undo_move(game_state: &mut GameState) -> Option<Move> {
    let undo = game_state.move_history.pop()?;
    let mv = undo.mv;

    game_state.set_piece(mv.start, Some(mv.piece_moved));
    if mv.is_en_passant {
        game_state.set_piece(mv.end, None);
        game_state.set_piece(mv.en_passant_victim(), mv.piece_captured);
    } else {
        game_state.set_piece(mv.end, mv.piece_captured);
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(&mv);
        let rook = game_state.piece_at(rook_to);
        game_state.set_piece(rook_to, None);
        game_state.set_piece(rook_from, rook);
    }

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_squares[mv.mover().index()] = mv.start;
    }

    game_state.castle_rights_history.pop();
    if let Some(rights) = game_state.castle_rights_history.last() {
        game_state.castle_rights = *rights;
    }

    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.draw_counter = undo.prev_draw_counter;
    game_state.side_to_move = mv.mover();

    Some(mv)
}

/// Whether the draw counter alone ends the game.
#[inline]
pub fn draw_counter_expired(game_state: &GameState) -> bool {
    game_state.draw_counter >= DRAW_COUNTER_LIMIT
}

/// Rook origin and destination for a castling king move.
pub(crate) fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.start.row;
    if mv.end.col > mv.start.col {
        (Square::new(row, 7), Square::new(row, mv.end.col - 1))
    } else {
        (Square::new(row, 0), Square::new(row, mv.end.col + 1))
    }
}

fn update_castle_rights(rights: &mut CastleRights, mv: &Move) {
    let mover = mv.mover();
    match mv.piece_moved.kind {
        PieceKind::King => rights.clear_color(mover),
        PieceKind::Rook => rights.clear_rook_corner(mover, mv.start),
        _ => {}
    }

    if let Some(captured) = mv.piece_captured {
        if captured.kind == PieceKind::Rook {
            rights.clear_rook_corner(captured.color, mv.end);
        }
    }
}
