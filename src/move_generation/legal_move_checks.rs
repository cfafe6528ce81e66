//! Check and pin detection.
//!
//! Walks the eight rays and the eight knight jumps outward from a defended
//! square. The first own piece on a ray is a pin candidate; an enemy piece
//! that attacks along that ray becomes a check (no candidate) or a pin (one
//! candidate). The defender's own king is transparent so a tentatively
//! relocated king is evaluated as if it had already left its square.

use crate::game_state::chess_rules::{KNIGHT_OFFSETS, RAY_DIRECTIONS};
use crate::game_state::chess_types::*;

/// A square reached along a direction from the defended square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayHit {
    pub square: Square,
    pub direction: Direction,
}

/// Pinned own piece and the direction from the king toward it.
pub type Pin = RayHit;

/// Checking enemy piece and the direction from the king toward it.
pub type Check = RayHit;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckScan {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

/// Checks and pins against the side to move's king.
pub fn detect_checks_and_pins(game_state: &GameState) -> CheckScan {
    let side = game_state.side_to_move;
    scan_board(&game_state.board, game_state.king_square(side), side)
}

/// Whether `defender`'s king would be attacked standing on `square`.
#[inline]
pub fn is_square_attacked(game_state: &GameState, square: Square, defender: Color) -> bool {
    scan_board(&game_state.board, square, defender).in_check
}

pub fn scan_board(board: &Board, origin: Square, defender: Color) -> CheckScan {
    let mut scan = CheckScan::default();

    for (ray_index, &direction) in RAY_DIRECTIONS.iter().enumerate() {
        let orthogonal = ray_index < 4;
        let mut pin_candidate: Option<Square> = None;
        let mut current = origin;

        for distance in 1..8 {
            let Some(next) = current.offset(direction.0, direction.1) else {
                break;
            };
            current = next;

            let Some(piece) = board[next.row as usize][next.col as usize] else {
                continue;
            };

            if piece.color == defender {
                if piece.kind == PieceKind::King {
                    continue;
                }
                if pin_candidate.is_some() {
                    break;
                }
                pin_candidate = Some(next);
                continue;
            }

            if attacks_along_ray(piece, orthogonal, distance, direction) {
                match pin_candidate {
                    None => {
                        scan.in_check = true;
                        scan.checks.push(RayHit {
                            square: next,
                            direction,
                        });
                    }
                    Some(square) => scan.pins.push(RayHit { square, direction }),
                }
            }
            break;
        }
    }

    for &(d_row, d_col) in KNIGHT_OFFSETS.iter() {
        let Some(target) = origin.offset(d_row, d_col) else {
            continue;
        };
        if let Some(piece) = board[target.row as usize][target.col as usize] {
            if piece.color != defender && piece.kind == PieceKind::Knight {
                scan.in_check = true;
                scan.checks.push(RayHit {
                    square: target,
                    direction: (d_row, d_col),
                });
            }
        }
    }

    scan
}

/// `direction` points from the defended square toward `attacker`.
fn attacks_along_ray(attacker: Piece, orthogonal: bool, distance: usize, direction: Direction) -> bool {
    match attacker.kind {
        PieceKind::Rook => orthogonal,
        PieceKind::Bishop => !orthogonal,
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        // A pawn captures toward its advance direction, so it must sit one
        // row behind the defended square from its own point of view.
        PieceKind::Pawn => {
            distance == 1 && !orthogonal && direction.0 == -attacker.color.pawn_direction()
        }
        PieceKind::Knight => false,
    }
}
