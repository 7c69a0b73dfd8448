//! Knight move generation
//!
//! Knights jump in an L-shape: two squares in one direction and one square
//! perpendicular. They ignore pieces in between, may land on any empty or
//! opposing square, and have at most 8 destinations.

use crate::board::Board;
use crate::square::Square;
use crate::square_set::SquareSet;
use crate::types::Side;

/// `(d_row, d_col)` jumps of a knight
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(super) fn knight_targets(board: &Board, from: Square, side: Side, targets: &mut SquareSet) {
    super::step_targets(board, from, side, &KNIGHT_OFFSETS, targets);
}
