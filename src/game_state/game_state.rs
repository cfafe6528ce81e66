//! Core mutable board state.
//!
//! `GameState` is the central model for the engine. It stores the 8x8 board,
//! side to move, castling rights with their history, the en-passant target,
//! the half-move draw counter, cached king squares, and the flags derived by
//! the most recent legal-move query. Mutation goes through `apply_move` /
//! `undo_move` in `move_generation::legal_move_apply`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{standard_setup, Placement, DEFAULT_SETUP};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{Check, Pin};

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,

    // --- Make/unmake stacks ---
    pub move_history: Vec<UndoState>,
    pub castle_rights: CastleRights,
    /// Bottom entry holds the initial rights; one entry per applied move.
    pub castle_rights_history: Vec<CastleRights>,

    pub en_passant_square: Option<Square>,
    pub draw_counter: u16,

    /// Indexed by `Color::index()`.
    pub king_squares: [Square; 2],

    // --- Derived by the last legal-move query ---
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_placements(DEFAULT_SETUP, Color::Light, CastleRights::NONE)
            .expect("default setup should always be valid")
    }
}

impl GameState {
    /// Engine default setup: two kings and two dark rooks.
    #[inline]
    pub fn new_game() -> Self {
        Self::default()
    }

    /// Standard chess starting position with all castling rights.
    pub fn standard() -> Self {
        Self::from_placements(&standard_setup(), Color::Light, CastleRights::ALL)
            .expect("standard setup should always be valid")
    }

    /// Build a position from piece placements.
    ///
    /// Castling rights are taken as given; callers only grant rights whose
    /// king and rook stand on their home squares.
    pub fn from_placements(
        placements: &[Placement],
        side_to_move: Color,
        castle_rights: CastleRights,
    ) -> Result<Self, ChessErrors> {
        let mut board = EMPTY_BOARD;
        let mut kings: [Vec<Square>; 2] = [Vec::new(), Vec::new()];

        for &(row, col, color, kind) in placements {
            if row >= 8 || col >= 8 {
                return Err(ChessErrors::InvalidFileOrRank(row, col));
            }
            let cell = &mut board[row as usize][col as usize];
            if cell.is_some() {
                return Err(ChessErrors::SquareOccupiedTwice(Square::new(row, col)));
            }
            *cell = Some(Piece::new(color, kind));
            if kind == PieceKind::King {
                kings[color.index()].push(Square::new(row, col));
            }
        }

        for color in [Color::Light, Color::Dark] {
            let found = kings[color.index()].len();
            if found != 1 {
                return Err(ChessErrors::KingCountMismatch { color, found });
            }
        }

        Ok(Self {
            board,
            side_to_move,
            move_history: Vec::new(),
            castle_rights,
            castle_rights_history: vec![castle_rights],
            en_passant_square: None,
            draw_counter: 0,
            king_squares: [kings[0][0], kings[1][0]],
            in_check: false,
            checkmate: false,
            stalemate: false,
            pins: Vec::new(),
            checks: Vec::new(),
        })
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.move_history.len()
    }

    /// Status derived by the most recent legal-move query.
    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate
        } else if self.stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::Ongoing
        }
    }

    /// Signed piece codes for external consumers: light pawn 1, knight 2,
    /// bishop 3, rook 4, queen 5, king 6; dark pieces negated; empty 0.
    pub fn encode_board(&self) -> [[i8; 8]; 8] {
        let mut out = [[0i8; 8]; 8];
        for (row, cells) in self.board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(piece) = cell {
                    let code = piece.kind.index() as i8 + 1;
                    out[row][col] = match piece.color {
                        Color::Light => code,
                        Color::Dark => -code,
                    };
                }
            }
        }
        out
    }

    /// Board, side, rights, en-passant target, draw counter and king cache.
    /// Histories and derived flags are excluded.
    pub fn same_position(&self, other: &GameState) -> bool {
        self.board == other.board
            && self.side_to_move == other.side_to_move
            && self.castle_rights == other.castle_rights
            && self.en_passant_square == other.en_passant_square
            && self.draw_counter == other.draw_counter
            && self.king_squares == other.king_squares
    }
}
