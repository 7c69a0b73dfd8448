//! Public API for the move engine
//!
//! The four operations a presentation layer needs. All of them are pure,
//! terminate after touching at most the 64 cells of one board, and never
//! return an error.

use crate::board::Board;

pub use crate::apply::apply_move;
pub use crate::move_gen::{compute_reachable_squares, is_reachable};

/// Standard starting configuration
pub fn create_starting_configuration() -> Board {
    Board::starting()
}
