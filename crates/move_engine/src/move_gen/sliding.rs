//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction, walk square by square from the source:
//! 1. Empty square: add it and keep walking
//! 2. Opposing piece: add it (capture) and stop
//! 3. Own piece: stop without adding it
//! 4. Board edge: stop
//!
//! At most 4 rays of at most 7 steps per piece kind (8 rays for the queen).

use crate::board::Board;
use crate::square::Square;
use crate::square_set::SquareSet;
use crate::types::Side;

/// Orthogonal `(d_row, d_col)` directions: right, left, down, up
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal `(d_row, d_col)` directions
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(super) fn rook_targets(board: &Board, from: Square, side: Side, targets: &mut SquareSet) {
    ray_targets(board, from, side, &ROOK_DIRECTIONS, targets);
}

pub(super) fn bishop_targets(board: &Board, from: Square, side: Side, targets: &mut SquareSet) {
    ray_targets(board, from, side, &BISHOP_DIRECTIONS, targets);
}

/// Union of rook and bishop rays
pub(super) fn queen_targets(board: &Board, from: Square, side: Side, targets: &mut SquareSet) {
    ray_targets(board, from, side, &ROOK_DIRECTIONS, targets);
    ray_targets(board, from, side, &BISHOP_DIRECTIONS, targets);
}

fn ray_targets(
    board: &Board,
    from: Square,
    side: Side,
    directions: &[(i8, i8)],
    targets: &mut SquareSet,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;

        while let Some(next) = current.offset(d_row, d_col) {
            match board.side_at(next) {
                None => {
                    targets.insert(next);
                    current = next;
                }
                Some(occupant) => {
                    if occupant != side {
                        targets.insert(next);
                    }
                    break;
                }
            }
        }
    }
}
