//! Primitive chess types shared by the game state, move generation and search.
//!
//! Squares use `(row, col)` coordinates where row 0 is the dark back rank
//! (rank 8) and row 7 is the light back rank (rank 1).

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a single pawn advance.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }
}

/// Board coordinate. Callers guarantee `row < 8` and `col < 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Flat index `row * 8 + col` in `0..64`.
    #[inline]
    pub const fn index(self) -> u8 {
        self.row * 8 + self.col
    }

    #[inline]
    pub const fn from_index(index: u8) -> Self {
        Self {
            row: index / 8,
            col: index % 8,
        }
    }

    /// Step by `(d_row, d_col)`, returning `None` when leaving the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Coordinate name such as `e4`.
    pub fn name(self) -> String {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        format!("{file}{rank}")
    }
}

/// 8x8 grid indexed `[row][col]`; `None` marks an empty square.
pub type Board = [[Option<Piece>; 8]; 8];

pub const EMPTY_BOARD: Board = [[None; 8]; 8];

/// A ray or jump direction `(d_row, d_col)`.
pub type Direction = (i8, i8);

#[inline]
pub const fn negate(direction: Direction) -> Direction {
    (-direction.0, -direction.1)
}

/// Four independent castling rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastleRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl CastleRights {
    pub const NONE: CastleRights = CastleRights {
        light_kingside: false,
        light_queenside: false,
        dark_kingside: false,
        dark_queenside: false,
    };

    pub const ALL: CastleRights = CastleRights {
        light_kingside: true,
        light_queenside: true,
        dark_kingside: true,
        dark_queenside: true,
    };

    #[inline]
    pub fn kingside(self, color: Color) -> bool {
        match color {
            Color::Light => self.light_kingside,
            Color::Dark => self.dark_kingside,
        }
    }

    #[inline]
    pub fn queenside(self, color: Color) -> bool {
        match color {
            Color::Light => self.light_queenside,
            Color::Dark => self.dark_queenside,
        }
    }

    pub fn clear_color(&mut self, color: Color) {
        match color {
            Color::Light => {
                self.light_kingside = false;
                self.light_queenside = false;
            }
            Color::Dark => {
                self.dark_kingside = false;
                self.dark_queenside = false;
            }
        }
    }

    /// Revoke the right tied to a rook home corner, if `square` is one.
    pub fn clear_rook_corner(&mut self, color: Color, square: Square) {
        if square.row != color.back_row() {
            return;
        }
        match (color, square.col) {
            (Color::Light, 0) => self.light_queenside = false,
            (Color::Light, 7) => self.light_kingside = false,
            (Color::Dark, 0) => self.dark_queenside = false,
            (Color::Dark, 7) => self.dark_kingside = false,
            _ => {}
        }
    }
}

/// Playing status derived by the most recent legal-move query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Game value for the side to move: mated is -1, anything else 0.
    #[inline]
    pub fn terminal_value(self) -> f64 {
        match self {
            GameStatus::Checkmate => -1.0,
            GameStatus::Stalemate | GameStatus::Ongoing => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_index_roundtrip_and_names() {
        let e1 = Square::new(7, 4);
        assert_eq!(e1.index(), 60);
        assert_eq!(Square::from_index(60), e1);
        assert_eq!(e1.name(), "e1");
        assert_eq!(Square::new(0, 0).name(), "a8");
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::new(0, 0).offset(-1, 0), None);
        assert_eq!(Square::new(0, 0).offset(1, 1), Some(Square::new(1, 1)));
        assert_eq!(Square::new(7, 7).offset(0, 1), None);
    }

    #[test]
    fn rook_corner_only_clears_matching_right() {
        let mut rights = CastleRights::ALL;
        rights.clear_rook_corner(Color::Light, Square::new(7, 7));
        assert!(!rights.light_kingside);
        assert!(rights.light_queenside);
        rights.clear_rook_corner(Color::Dark, Square::new(7, 0));
        assert!(rights.dark_queenside);
    }
}
