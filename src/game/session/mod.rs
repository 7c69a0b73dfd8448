//! Session state for one interactive game
//!
//! Everything the controller owns lives in [`SessionState`]: the current
//! board, whose turn it is, the selection and the capture history. The state
//! is replaced wholesale on every accepted click by [`transition`].

pub mod captured;
pub mod selection;
pub mod transition;
pub mod turn;

pub use captured::{piece_value, CapturedPieces};
pub use selection::Selection;
pub use transition::{transition, ClickOutcome, Transition};
pub use turn::CurrentTurn;

use move_engine::{create_starting_configuration, Board, Side, Square};
use serde::Serialize;

/// The most recent move, kept for highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
}

/// Complete state of an interactive session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub board: Board,
    pub turn: CurrentTurn,
    pub selection: Selection,
    pub captured: CapturedPieces,
    pub last_move: Option<LastMove>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Starting configuration, light to move, nothing selected
    pub fn new() -> Self {
        Self::from_board(create_starting_configuration(), Side::Light)
    }

    /// Session over an arbitrary configuration
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            turn: CurrentTurn {
                side: side_to_move,
                move_number: 1,
            },
            selection: Selection::default(),
            captured: CapturedPieces::default(),
            last_move: None,
        }
    }

    pub fn side_to_move(&self) -> Side {
        self.turn.side
    }
}
