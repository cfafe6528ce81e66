//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the
//! self-play binary.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 (rank 8) is printed first, matching the board array layout.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for (row, cells) in game_state.board.iter().enumerate() {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Some(piece) => out.push(piece_to_unicode(*piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Side to move, check/terminal flags and the legal moves in coordinate
/// notation. Runs a legal-move query on `game_state`.
pub fn render_position_summary(game_state: &mut GameState) -> String {
    let moves = generate_legal_moves(game_state);
    let mut names: Vec<String> = moves.iter().map(|mv| mv.chess_notation()).collect();
    names.sort();

    format!(
        "side={:?} in_check={} status={:?} draw_counter={} legal_moves[{}]={}",
        game_state.side_to_move,
        game_state.in_check,
        game_state.status(),
        game_state.draw_counter,
        names.len(),
        names.join(" ")
    )
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
