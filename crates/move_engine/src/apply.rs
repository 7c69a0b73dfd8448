//! Move application
//!
//! Produces the configuration that follows a confirmed move. The input board
//! is borrowed and never modified, so callers can keep the previous snapshot.

use crate::board::Board;
use crate::square::Square;

/// Move the piece on `from` to `to` and return the resulting configuration
///
/// No validation happens here: the caller checks `to` against
/// [`compute_reachable_squares`](crate::compute_reachable_squares) first.
/// Whatever stood on `to` is replaced (an implicit capture); read it from the
/// input board beforehand if it matters. The moved piece keeps its identity
/// and has its `has_moved` flag set.
///
/// If `from` is empty the input configuration is returned unchanged.
///
/// ```
/// use move_engine::{apply_move, Board, Square};
///
/// let before = Board::starting();
/// let after = apply_move(&before, Square::new(6, 4), Square::new(4, 4));
///
/// assert!(before.piece_at(Square::new(4, 4)).is_none());
/// assert!(after.piece_at(Square::new(4, 4)).unwrap().has_moved);
/// ```
pub fn apply_move(board: &Board, from: Square, to: Square) -> Board {
    let mut next = *board;

    let Some(piece) = next.remove(from) else {
        return next;
    };
    next.place(to, piece.moved());

    next
}
