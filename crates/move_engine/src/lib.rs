//! Board model and move engine for the boardsim move simulator
//!
//! # Module Structure
//!
//! - `types` - Sides, piece kinds and piece identity
//! - `square` - On-board coordinates and algebraic notation
//! - `square_set` - 64-bit set of squares used for reachable sets
//! - `board` - The 8x8 configuration and the starting position
//! - `move_gen` - Reachable squares per piece kind
//! - `apply` - Non-destructive move application
//! - `api` - The four entry points used by the interaction layer
//!
//! Everything here is pure data and pure functions: no I/O, no logging, no
//! shared state.

pub mod api;
pub mod apply;
pub mod board;
pub mod error;
pub mod move_gen;
pub mod square;
pub mod square_set;
pub mod types;

pub use api::{apply_move, compute_reachable_squares, create_starting_configuration, is_reachable};
pub use board::{Board, BACK_RANK};
pub use error::{EngineError, EngineResult};
pub use square::{Square, BOARD_SIZE};
pub use square_set::SquareSet;
pub use types::{Piece, PieceId, PieceKind, Side};
