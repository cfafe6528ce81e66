//! Piece placements from an eight-line text diagram.
//!
//! Each line is one row, row 0 (rank 8) first. `PNBRQK` are light pieces,
//! `pnbrqk` dark pieces and `.` an empty square.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::Placement;
use crate::game_state::chess_types::*;

pub fn parse_diagram(rows: &[&str; 8]) -> Result<Vec<Placement>, ChessErrors> {
    let mut placements = Vec::new();

    for (row, line) in rows.iter().enumerate() {
        let row = row as u8;
        if line.chars().count() != 8 {
            return Err(ChessErrors::InvalidDiagram(format!(
                "row {} has {} squares, expected 8",
                row,
                line.chars().count()
            )));
        }

        for (col, symbol) in line.chars().enumerate() {
            if symbol == '.' {
                continue;
            }
            let color = if symbol.is_ascii_uppercase() {
                Color::Light
            } else {
                Color::Dark
            };
            let kind = match symbol.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                other => {
                    return Err(ChessErrors::InvalidDiagram(format!(
                        "unknown piece symbol '{}' at row {} col {}",
                        other, row, col
                    )))
                }
            };
            placements.push((row, col as u8, color, kind));
        }
    }

    Ok(placements)
}

/// Build a `GameState` straight from a diagram.
pub fn game_from_diagram(
    rows: &[&str; 8],
    side_to_move: Color,
    castle_rights: CastleRights,
) -> Result<GameState, ChessErrors> {
    GameState::from_placements(&parse_diagram(rows)?, side_to_move, castle_rights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_diagram_matches_standard_setup() {
        let game = game_from_diagram(
            &[
                "rnbqkbnr", "pppppppp", "........", "........", "........", "........",
                "PPPPPPPP", "RNBQKBNR",
            ],
            Color::Light,
            CastleRights::ALL,
        )
        .expect("diagram should parse");
        assert!(game.same_position(&GameState::standard()));
    }

    #[test]
    fn bad_symbol_is_reported() {
        let result = parse_diagram(&[
            "....k...", "........", "........", "...x....", "........", "........",
            "........", "....K...",
        ]);
        assert!(matches!(result, Err(ChessErrors::InvalidDiagram(_))));
    }
}
