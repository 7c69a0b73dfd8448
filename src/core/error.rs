//! Error types for core module
//!
//! Provides custom error types for settings loading and for turning a line of
//! user input into a command. None of these reach the move engine: invalid
//! input is reported to the user and never turned into a click.

use move_engine::EngineError;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings deserialization or view serialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Board theme name not recognised
    #[error("Unknown board theme: {name:?} (expected classic, blue or forest)")]
    UnknownTheme { name: String },

    /// Piece style name not recognised
    #[error("Unknown piece style: {name:?} (expected standard, modern or minimalist)")]
    UnknownPieceStyle { name: String },

    /// Input line that is neither a square nor a known command
    #[error("Unknown command: {input:?} (type `help` for a list of commands)")]
    UnknownCommand { input: String },

    /// Square text or coordinates that do not name a board square
    #[error(transparent)]
    InvalidSquare(#[from] EngineError),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
