//! Perft node counting over apply/undo.
//!
//! Walks the legal move tree to a fixed depth on a single board, undoing every
//! move after its subtree is counted. Used to validate the generator against
//! published reference counts.

use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let moves = generate_legal_moves(game_state);
    let mut total = PerftCounts::default();

    for mv in &moves {
        if depth == 1 {
            total.nodes += 1;
            total.captures += mv.is_capture() as u64;
            total.en_passant += mv.is_en_passant as u64;
            total.castles += mv.is_castle as u64;
            total.promotions += mv.is_promotion as u64;
            continue;
        }

        apply_move(game_state, mv);
        total.merge(perft(game_state, depth - 1));
        undo_move(game_state);
    }

    total
}

/// Per-root-move node counts, sorted by move notation.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = generate_legal_moves(game_state);
    let mut out = Vec::with_capacity(moves.len());
    for mv in &moves {
        apply_move(game_state, mv);
        out.push((mv.chess_notation(), perft(game_state, depth - 1).nodes));
        undo_move(game_state);
    }
    out.sort();
    out
}
