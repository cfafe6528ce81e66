//! Crate root module declarations for the Shrimp Chess engine project.
//!
//! This file exposes the legality engine (game state, moves, move generation),
//! the search layer (material scoring and Monte-Carlo Tree Search), the engine
//! front-ends, and utility helpers so binaries, tests, and benches can import
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod mcts;
    pub mod mcts_config;
    pub mod mcts_node;
    pub mod mcts_tree;
}

pub mod engines {
    pub mod engine_capture_path;
    pub mod engine_mcts;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_diagram;
    pub mod config_loader;
    pub mod engine_match_harness;
    pub mod render_game_state;
}
