//! Canonical chess-rule constants.
//!
//! Direction tables, the half-move draw threshold, and the piece layouts used
//! to initialize a [`GameState`](crate::game_state::game_state::GameState).

use crate::game_state::chess_types::{Color, Direction, PieceKind};

/// Half-move counter value at which the game is drawn.
pub const DRAW_COUNTER_LIMIT: u16 = 100;

/// The first four entries are orthogonal, the last four diagonal.
pub const RAY_DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

pub const KING_OFFSETS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A piece placement `(row, col, color, kind)`.
pub type Placement = (u8, u8, Color, PieceKind);

/// Default engine setup: light king on e1 against dark king d8 and rooks on
/// b8 and h8. Light moves first and nobody may castle.
pub const DEFAULT_SETUP: &[Placement] = &[
    (0, 1, Color::Dark, PieceKind::Rook),
    (0, 3, Color::Dark, PieceKind::King),
    (0, 7, Color::Dark, PieceKind::Rook),
    (7, 4, Color::Light, PieceKind::King),
];

/// Legal-move count of [`DEFAULT_SETUP`] for the side to move.
pub const DEFAULT_SETUP_LEGAL_MOVES: usize = 5;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard chess starting position.
pub fn standard_setup() -> Vec<Placement> {
    let mut placements = Vec::with_capacity(32);
    for (col, kind) in BACK_RANK.iter().enumerate() {
        let col = col as u8;
        placements.push((0, col, Color::Dark, *kind));
        placements.push((1, col, Color::Dark, PieceKind::Pawn));
        placements.push((6, col, Color::Light, PieceKind::Pawn));
        placements.push((7, col, Color::Light, *kind));
    }
    placements
}
