//! Error types for the move engine
//!
//! The four core operations never fail. Errors only come from converting
//! untrusted input (raw coordinates, algebraic text) into a [`Square`].
//!
//! [`Square`]: crate::square::Square

use thiserror::Error;

/// Errors that can occur when building engine values from external input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Row or column outside the 8x8 grid
    #[error("Invalid square: ({row}, {col}) is off the board (must be 0-7)")]
    InvalidSquare { row: u8, col: u8 },

    /// Text that is not a square in algebraic notation
    #[error("Invalid algebraic square: {input:?} (expected a file a-h followed by a rank 1-8)")]
    InvalidAlgebraic { input: String },
}

/// Result type alias for move engine conversions
pub type EngineResult<T> = Result<T, EngineError>;
