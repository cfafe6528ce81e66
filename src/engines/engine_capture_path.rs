//! Depth-limited "capture path" engine.
//!
//! Enumerates every move sequence up to a fixed depth on one working board,
//! applying each move before recursing and undoing it afterwards. Each move
//! on a path is credited with the static score, from the engine's side, of the
//! position it was played from, and the engine plays the first move of the
//! path with the largest total. Both sides' moves are chosen to maximise that
//! total, so the result is the most optimistic line rather than a minimax
//! value. This differs from the usual capture-path rule, which scores each
//! step from the side to move there; summed that way, a depth-two search
//! prefers lines that lose material. A best total of exactly zero carries no
//! information, so the engine then picks uniformly among the root moves.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, PieceValues};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Plies enumerated below the root.
    pub depth: u8,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self { depth: 2 }
    }
}

/// Best path found below a node: summed score and the moves from that node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturePath {
    pub total: i64,
    pub moves: Vec<Move>,
}

pub struct CapturePathEngine<S: BoardScorer> {
    scorer: S,
    config: CaptureConfig,
    seed: u64,
    rng: StdRng,
    nodes_visited: u64,
}

impl CapturePathEngine<MaterialScorer> {
    pub fn with_piece_values(values: PieceValues, config: CaptureConfig, seed: u64) -> Self {
        Self::new(MaterialScorer::new(values), config, seed)
    }
}

impl<S: BoardScorer> CapturePathEngine<S> {
    pub fn new(scorer: S, config: CaptureConfig, seed: u64) -> Self {
        Self {
            scorer,
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
            nodes_visited: 0,
        }
    }

    /// Best path from `game_state` down to `depth` plies, scored for `side`.
    ///
    /// The board is restored before returning; every applied move is undone on
    /// the way back up.
    pub fn best_path(
        &mut self,
        game_state: &mut GameState,
        side: Color,
        depth: u8,
    ) -> CapturePath {
        if depth == 0 {
            return CapturePath::default();
        }

        let moves = generate_legal_moves(game_state);
        if moves.is_empty() {
            return CapturePath::default();
        }

        // Every sibling is scored from the same pre-move position.
        let mut score = self.scorer.score(game_state);
        if game_state.side_to_move != side {
            score = -score;
        }
        let mut best: Option<CapturePath> = None;

        for mv in &moves {
            self.nodes_visited += 1;
            apply_move(game_state, mv);
            let below = self.best_path(game_state, side, depth - 1);
            undo_move(game_state);

            let total = below.total + score;
            if best.as_ref().map_or(true, |b| total > b.total) {
                let mut path = Vec::with_capacity(below.moves.len() + 1);
                path.push(*mv);
                path.extend(below.moves);
                best = Some(CapturePath { total, moves: path });
            }
        }

        best.unwrap_or_default()
    }
}

impl<S: BoardScorer> Engine for CapturePathEngine<S> {
    fn name(&self) -> &str {
        "ShrimpChess CapturePath"
    }

    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, String> {
        let depth = params.depth.unwrap_or(self.config.depth).max(1);
        let mut board = game_state.clone();
        let root_moves = generate_legal_moves(&mut board);

        let mut out = EngineOutput::default();
        if root_moves.is_empty() {
            out.info_lines
                .push("info string capture_path no legal moves".to_owned());
            return Ok(out);
        }

        self.nodes_visited = 0;
        let path = self.best_path(&mut board, game_state.side_to_move, depth);

        let best_move = if path.total == 0 {
            root_moves.as_slice().choose(&mut self.rng).copied()
        } else {
            path.moves.first().copied()
        };

        let line: Vec<String> = path.moves.iter().map(Move::chess_notation).collect();
        out.info_lines.push(format!(
            "info string capture_path depth {} nodes {} total {} path {}",
            depth,
            self.nodes_visited,
            path.total,
            line.join(" ")
        ));
        debug!(
            depth,
            nodes = self.nodes_visited,
            total = path.total,
            best = ?best_move.map(|mv| mv.chess_notation()),
            "capture path engine chose move"
        );

        out.best_move = best_move;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    fn engine(depth: u8) -> CapturePathEngine<MaterialScorer> {
        CapturePathEngine::with_piece_values(PieceValues::STANDARD, CaptureConfig { depth }, 1)
    }

    #[test]
    fn search_restores_the_board() {
        let mut game = GameState::standard();
        let before = game.clone();
        engine(2).best_path(&mut game, Color::Light, 2);
        assert!(game.same_position(&before));
        assert!(game.move_history.is_empty());
        assert_eq!(game.castle_rights_history.len(), 1);
    }

    #[test]
    fn depth_two_path_prefers_winning_the_queen() {
        // Light rook can take the undefended dark queen on a5.
        let game = GameState::from_placements(
            &[
                (7, 4, Color::Light, PieceKind::King),
                (7, 0, Color::Light, PieceKind::Rook),
                (3, 0, Color::Dark, PieceKind::Queen),
                (0, 7, Color::Dark, PieceKind::King),
            ],
            Color::Light,
            CastleRights::NONE,
        )
        .expect("test setup should be valid");

        let out = engine(2)
            .choose_move(&game, &SearchParams::default())
            .expect("engine should run");
        let best = out.best_move.expect("position has moves");
        assert_eq!(best.chess_notation(), "a1a5");
    }

    #[test]
    fn path_is_scored_for_the_engine_side() {
        // Dark to move: the queen-for-rook balance counts in dark's favour.
        let mut game = GameState::from_placements(
            &[
                (7, 4, Color::Light, PieceKind::King),
                (7, 0, Color::Light, PieceKind::Rook),
                (3, 0, Color::Dark, PieceKind::Queen),
                (0, 7, Color::Dark, PieceKind::King),
            ],
            Color::Dark,
            CastleRights::NONE,
        )
        .expect("test setup should be valid");

        let path = engine(1).best_path(&mut game, Color::Dark, 1);
        assert_eq!(path.total, 400);
        assert_eq!(path.moves.len(), 1);
    }

    #[test]
    fn zero_total_falls_back_to_a_root_move() {
        let game = GameState::standard();
        let mut probe = game.clone();
        let legal = generate_legal_moves(&mut probe);

        let out = engine(1)
            .choose_move(&game, &SearchParams::default())
            .expect("engine should run");
        let best = out.best_move.expect("position has moves");
        assert!(legal.contains(&best));
    }
}
