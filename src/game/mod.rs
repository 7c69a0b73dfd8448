//! Game session module
//!
//! # Architecture
//!
//! - [`session`] - Session state and the pure click transition
//! - [`controller`] - Owns the state and logs every outcome

pub mod controller;
pub mod session;

pub use controller::Controller;
pub use session::{
    transition, CapturedPieces, ClickOutcome, CurrentTurn, LastMove, Selection, SessionState,
    Transition,
};
