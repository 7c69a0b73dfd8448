//! Pawn move generation
//!
//! ## Pawn Movement Rules
//!
//! - One step forward onto an empty square
//! - Two steps forward only from the starting row, with both squares empty
//! - One step diagonally forward only when an opposing piece stands there
//!
//! Forward is toward row 0 for light and toward row 7 for dark. There is no
//! en-passant and no promotion: a pawn on the far row simply has no forward
//! squares.

use crate::board::Board;
use crate::square::Square;
use crate::square_set::SquareSet;
use crate::types::Side;

pub(super) fn pawn_targets(board: &Board, from: Square, side: Side, targets: &mut SquareSet) {
    let forward = side.forward();

    if let Some(single) = from.offset(forward, 0) {
        if board.is_empty(single) {
            targets.insert(single);

            if from.row() == side.pawn_row() {
                if let Some(double) = single.offset(forward, 0) {
                    if board.is_empty(double) {
                        targets.insert(double);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(diagonal) = from.offset(forward, d_col) else {
            continue;
        };
        if board.side_at(diagonal) == Some(side.opposite()) {
            targets.insert(diagonal);
        }
    }
}
