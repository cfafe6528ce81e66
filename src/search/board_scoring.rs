//! Static material evaluation.
//!
//! Scores are material sums from the perspective of the side to move. The
//! piece-value table is passed explicitly so callers can tune it without
//! touching the search code.

use crate::game_state::chess_types::*;

/// Centipawn value per piece kind. The king value stands in for "unbounded"
/// so any line that wins a king dominates every material sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceValues {
    pub pawn: i64,
    pub knight: i64,
    pub bishop: i64,
    pub rook: i64,
    pub queen: i64,
    pub king: i64,
}

impl PieceValues {
    pub const STANDARD: PieceValues = PieceValues {
        pawn: 100,
        knight: 300,
        bishop: 300,
        rook: 500,
        queen: 900,
        king: 2_000_000,
    };

    #[inline]
    pub const fn value(&self, kind: PieceKind) -> i64 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }
}

impl Default for PieceValues {
    fn default() -> Self {
        Self::STANDARD
    }
}

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer {
    pub values: PieceValues,
}

impl MaterialScorer {
    pub const fn new(values: PieceValues) -> Self {
        Self { values }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i64 {
        evaluate_material(game_state, &self.values)
    }
}

/// Light material minus dark material, negated when dark is to move.
pub fn evaluate_material(game_state: &GameState, values: &PieceValues) -> i64 {
    let mut light_minus_dark = 0i64;
    for piece in game_state.board.iter().flatten().flatten() {
        let value = values.value(piece.kind);
        match piece.color {
            Color::Light => light_minus_dark += value,
            Color::Dark => light_minus_dark -= value,
        }
    }

    match game_state.side_to_move {
        Color::Light => light_minus_dark,
        Color::Dark => -light_minus_dark,
    }
}
