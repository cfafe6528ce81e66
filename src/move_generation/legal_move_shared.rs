use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::Pin;
use crate::moves::chess_move::Move;

/// Pin direction of the piece on `square`, if it is pinned.
#[inline]
pub fn pin_direction(pins: &[Pin], square: Square) -> Option<Direction> {
    pins.iter()
        .find(|pin| pin.square == square)
        .map(|pin| pin.direction)
}

/// A pinned piece may only travel along its pin axis, in either sense.
#[inline]
pub fn along_pin(pin: Option<Direction>, direction: Direction) -> bool {
    match pin {
        None => true,
        Some(pin) => pin == direction || pin == negate(direction),
    }
}

/// Ray-walk from `from`, adding quiet moves until blocked. An enemy-occupied
/// square is included as a capture and ends the ray.
pub fn generate_sliding_moves(
    game_state: &GameState,
    from: Square,
    directions: &[Direction],
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move;

    for &direction in directions {
        if !along_pin(pin, direction) {
            continue;
        }

        let mut current = from;
        while let Some(next) = current.offset(direction.0, direction.1) {
            match game_state.piece_at(next) {
                None => out.push(Move::new(from, next, &game_state.board)),
                Some(piece) if piece.color != side => {
                    out.push(Move::new(from, next, &game_state.board));
                    break;
                }
                Some(_) => break,
            }
            current = next;
        }
    }
}
