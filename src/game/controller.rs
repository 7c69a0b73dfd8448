//! Interaction controller
//!
//! Owns the single mutable [`SessionState`] and feeds clicks through
//! [`transition`]. Presentation code only reads from it.

use move_engine::{Board, Side, Square, SquareSet};
use tracing::{debug, info};

use crate::game::session::{
    transition, CapturedPieces, ClickOutcome, CurrentTurn, LastMove, SessionState,
};

/// Drives a session from click events
#[derive(Debug, Clone, Default)]
pub struct Controller {
    state: SessionState,
}

impl Controller {
    /// New session at the starting configuration
    pub fn new() -> Self {
        Self {
            state: SessionState::new(),
        }
    }

    /// Controller over an existing state, mostly for tests and replays
    pub fn with_state(state: SessionState) -> Self {
        Self { state }
    }

    /// Handle a click on `square`
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        debug!("[INPUT] Clicked square {} ({}, {})", square, square.row(), square.col());

        let next = transition(&self.state, square);
        log_outcome(&next.outcome, next.state.turn);
        self.state = next.state;
        next.outcome
    }

    /// Start over from the starting configuration
    pub fn reset(&mut self) {
        info!("[SESSION] New game");
        self.state = SessionState::new();
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn side_to_move(&self) -> Side {
        self.state.side_to_move()
    }

    pub fn turn(&self) -> CurrentTurn {
        self.state.turn
    }

    pub fn selected(&self) -> Option<Square> {
        self.state.selection.selected
    }

    pub fn reachable(&self) -> SquareSet {
        self.state.selection.reachable
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.state.captured
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.state.last_move
    }
}

fn log_outcome(outcome: &ClickOutcome, turn: CurrentTurn) {
    match outcome {
        ClickOutcome::Selected { square, reachable } => {
            debug!("[INPUT] Selected {} with {} reachable squares", square, reachable);
        }
        ClickOutcome::Reselected {
            from,
            square,
            reachable,
        } => {
            debug!(
                "[INPUT] Switched selection {} -> {} with {} reachable squares",
                from, square, reachable
            );
        }
        ClickOutcome::Deselected { square } => {
            debug!("[INPUT] Deselected {}", square);
        }
        ClickOutcome::Moved {
            from,
            to,
            piece,
            captured,
        } => {
            match captured {
                Some(taken) => info!(
                    "[SESSION] {} {} -> {} captures {}",
                    piece.id, from, to, taken.id
                ),
                None => info!("[SESSION] {} {} -> {}", piece.id, from, to),
            }
            debug!(
                "[SESSION] {} to move, move {}",
                turn.side, turn.move_number
            );
        }
        ClickOutcome::Ignored { square } => {
            debug!("[INPUT] Ignored click on {}", square);
        }
    }
}
