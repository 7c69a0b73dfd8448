//! Click handling as a pure function
//!
//! [`transition`] maps the current session state and a clicked square to the
//! next state. It never mutates its input, so every step can be replayed or
//! inspected in isolation.
//!
//! # Rules
//!
//! | State          | Clicked square                 | Result                       |
//! |----------------|--------------------------------|------------------------------|
//! | No selection   | piece of the side to move      | `Selected`                   |
//! | No selection   | empty or opponent piece        | `Ignored`                    |
//! | Selected(P)    | P                              | `Deselected`                 |
//! | Selected(P)    | other piece of the side to move| `Reselected`                 |
//! | Selected(P)    | reachable square               | `Moved`, turn passes         |
//! | Selected(P)    | anything else                  | `Ignored`, selection kept    |

use move_engine::{apply_move, compute_reachable_squares, is_reachable, Piece, Square};
use serde::Serialize;

use super::{LastMove, SessionState};

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClickOutcome {
    /// A piece was selected from an empty selection
    Selected { square: Square, reachable: usize },
    /// The selection moved to another piece of the same side
    Reselected {
        from: Square,
        square: Square,
        reachable: usize,
    },
    /// The selected square was clicked again
    Deselected { square: Square },
    /// A move was made and the turn passed
    Moved {
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
    },
    /// The click had no effect
    Ignored { square: Square },
}

impl ClickOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, ClickOutcome::Ignored { .. })
    }
}

/// Next state plus what happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub outcome: ClickOutcome,
}

/// Apply one click to a session state
pub fn transition(state: &SessionState, square: Square) -> Transition {
    let side = state.side_to_move();
    let own_piece_clicked = state.board.side_at(square) == Some(side);

    let Some(selected) = state.selection.selected else {
        if !own_piece_clicked {
            return ignored(state, square);
        }
        let reachable = compute_reachable_squares(&state.board, square);
        let mut next = state.clone();
        next.selection.select(square, reachable);
        return Transition {
            state: next,
            outcome: ClickOutcome::Selected {
                square,
                reachable: reachable.len(),
            },
        };
    };

    if square == selected {
        let mut next = state.clone();
        next.selection.clear();
        return Transition {
            state: next,
            outcome: ClickOutcome::Deselected { square },
        };
    }

    if own_piece_clicked {
        let reachable = compute_reachable_squares(&state.board, square);
        let mut next = state.clone();
        next.selection.select(square, reachable);
        return Transition {
            state: next,
            outcome: ClickOutcome::Reselected {
                from: selected,
                square,
                reachable: reachable.len(),
            },
        };
    }

    if !is_reachable(&state.selection.reachable, square) {
        return ignored(state, square);
    }

    // A selection always sits on a piece of the side to move
    let Some(&piece) = state.board.piece_at(selected) else {
        return ignored(state, square);
    };

    let captured = state.board.piece_at(square).copied();
    let mut next = state.clone();
    if let Some(taken) = captured {
        next.captured.push(taken);
    }
    next.board = apply_move(&state.board, selected, square);
    next.turn.switch();
    next.selection.clear();
    next.last_move = Some(LastMove {
        from: selected,
        to: square,
    });

    Transition {
        state: next,
        outcome: ClickOutcome::Moved {
            from: selected,
            to: square,
            piece,
            captured,
        },
    }
}

fn ignored(state: &SessionState, square: Square) -> Transition {
    Transition {
        state: state.clone(),
        outcome: ClickOutcome::Ignored { square },
    }
}
