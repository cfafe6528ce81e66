//! Errors used throughout the chess engine.
//!
//! Rule-contract violations inside the legality engine (foreign moves,
//! over-undo, off-board coordinates) are not reported here; callers guarantee
//! them. These variants cover inputs that arrive from outside the engine:
//! board setups, configuration files and environment overrides.

use std::path::PathBuf;

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Error)]
pub enum ChessErrors {
    /// A setup must hold exactly one king per color.
    #[error("setup has {found} {color:?} kings, expected exactly one")]
    KingCountMismatch { color: Color, found: usize },

    #[error("setup places two pieces on {}", .0.name())]
    SquareOccupiedTwice(Square),

    #[error("invalid coordinates ({0}, {1})")]
    InvalidFileOrRank(u8, u8),

    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
