//! Presentation of a session
//!
//! - [`text_board`] - Terminal rendering with optional ANSI colors
//! - [`view`] - JSON snapshot for external presenters
//! - [`glyphs`] - Piece symbol lookup shared by both

pub mod ansi;
pub mod glyphs;
pub mod text_board;
pub mod view;

pub use glyphs::{glyph_for, piece_glyph, piece_letter};
pub use text_board::render_text;
pub use view::{BoardView, PieceView, SquareView};
