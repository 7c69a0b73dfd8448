//! Reachable-square generation
//!
//! Pure functions from a [`Board`] and a source square to the set of squares
//! the piece standing there may move to under the basic movement rules.
//!
//! ## Rules covered
//!
//! - Pawn pushes (single, and double from the starting row) and diagonal captures
//! - Knight and king single jumps
//! - Rook, bishop and queen rays that stop at the first occupied square
//!
//! ## Rules deliberately absent
//!
//! No check detection, castling, en-passant or promotion. Generation does not
//! consult whose turn it is and does not filter moves that leave the mover's
//! own king attacked, so a king may be "captured".

mod king;
mod knight;
mod pawn;
mod sliding;


pub use king::KING_OFFSETS;
pub use knight::KNIGHT_OFFSETS;
pub use sliding::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

use crate::board::Board;
use crate::square::Square;
use crate::square_set::SquareSet;
use crate::types::{PieceKind, Side};

/// Squares the piece on `from` may move to
///
/// Returns an empty set when `from` is empty. The source square is never part
/// of the result and every member is on the board.
///
/// ```
/// use move_engine::{compute_reachable_squares, Board, Square};
///
/// let board = Board::starting();
/// let reachable = compute_reachable_squares(&board, Square::new(7, 1));
/// assert!(reachable.contains(Square::new(5, 0)));
/// assert!(reachable.contains(Square::new(5, 2)));
/// assert_eq!(reachable.len(), 2);
/// ```
pub fn compute_reachable_squares(board: &Board, from: Square) -> SquareSet {
    let mut targets = SquareSet::new();

    let Some(piece) = board.piece_at(from) else {
        return targets;
    };

    match piece.kind {
        PieceKind::Pawn => pawn::pawn_targets(board, from, piece.side, &mut targets),
        PieceKind::Knight => knight::knight_targets(board, from, piece.side, &mut targets),
        PieceKind::King => king::king_targets(board, from, piece.side, &mut targets),
        PieceKind::Rook => sliding::rook_targets(board, from, piece.side, &mut targets),
        PieceKind::Bishop => sliding::bishop_targets(board, from, piece.side, &mut targets),
        PieceKind::Queen => sliding::queen_targets(board, from, piece.side, &mut targets),
    }

    targets
}

/// Exact membership test of `target` in a reachable set
#[inline]
pub fn is_reachable(reachable: &SquareSet, target: Square) -> bool {
    reachable.contains(target)
}

/// Add each on-board `from + offset` not held by a piece of `side`
///
/// Shared by the knight and king, which jump to fixed offsets and can capture
/// on the landing square.
fn step_targets(
    board: &Board,
    from: Square,
    side: Side,
    offsets: &[(i8, i8)],
    targets: &mut SquareSet,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.side_at(to) != Some(side) {
            targets.insert(to);
        }
    }
}
