//! Interactive board move simulator
//!
//! The board model and move rules live in the `move_engine` crate. This crate
//! adds the interactive layer on top:
//!
//! - [`game`] - Session state, the click state machine and its controller
//! - [`rendering`] - Text and JSON presentation
//! - [`input`] - Parsing of terminal input lines
//! - [`core`] - Display settings, the settings file and error types

pub mod core;
pub mod game;
pub mod input;
pub mod rendering;

pub use crate::core::{CoreError, CoreResult, DisplaySettings};
pub use game::{ClickOutcome, Controller, SessionState};
