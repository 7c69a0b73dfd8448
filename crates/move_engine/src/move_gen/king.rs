//! King move generation
//!
//! One square in any of the eight directions. No castling and no check
//! detection, so the king may step onto an attacked square.

use crate::board::Board;
use crate::square::Square;
use crate::square_set::SquareSet;
use crate::types::Side;

/// `(d_row, d_col)` steps of a king
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(super) fn king_targets(board: &Board, from: Square, side: Side, targets: &mut SquareSet) {
    super::step_targets(board, from, side, &KING_OFFSETS, targets);
}
