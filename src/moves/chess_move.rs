//! Move value type.
//!
//! A `Move` records its start and end squares plus a snapshot of the moving
//! and captured pieces taken from the board when the move is built. Equality
//! and hashing only consider the two squares.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};

/// Fixed 5-field wire record:
/// `[start_index, end_index, en_passant, promotion, castle]`.
pub type EncodedMove = [u8; 5];

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_promotion: bool,
    pub is_castle: bool,
}

impl Move {
    /// Build a plain move, reading both pieces from `board`.
    ///
    /// Panics if `start` is empty; generators only call this for occupied
    /// squares.
    pub fn new(start: Square, end: Square, board: &Board) -> Self {
        let piece_moved = board[start.row as usize][start.col as usize]
            .unwrap_or_else(|| panic!("no piece on move start square {}", start.name()));
        Self {
            start,
            end,
            piece_moved,
            piece_captured: board[end.row as usize][end.col as usize],
            is_en_passant: false,
            is_promotion: false,
            is_castle: false,
        }
    }

    pub fn promotion(start: Square, end: Square, board: &Board) -> Self {
        Self {
            is_promotion: true,
            ..Self::new(start, end, board)
        }
    }

    /// En-passant capture. The captured piece is synthesized as the
    /// opposite-color pawn because the end square is empty.
    pub fn en_passant(start: Square, end: Square, board: &Board) -> Self {
        let mv = Self::new(start, end, board);
        Self {
            piece_captured: Some(Piece::new(mv.piece_moved.color.opposite(), PieceKind::Pawn)),
            is_en_passant: true,
            ..mv
        }
    }

    pub fn castle(start: Square, end: Square, board: &Board) -> Self {
        Self {
            is_castle: true,
            ..Self::new(start, end, board)
        }
    }

    #[inline]
    pub fn mover(&self) -> Color {
        self.piece_moved.color
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_victim(&self) -> Square {
        Square::new(self.start.row, self.end.col)
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.start.row.abs_diff(self.end.row) == 2
    }

    pub fn encode(&self) -> EncodedMove {
        [
            self.start.index(),
            self.end.index(),
            self.is_en_passant as u8,
            self.is_promotion as u8,
            self.is_castle as u8,
        ]
    }

    /// Coordinate notation such as `e2e4`.
    pub fn chess_notation(&self) -> String {
        format!("{}{}", self.start.name(), self.end.name())
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.chess_notation())
    }
}
