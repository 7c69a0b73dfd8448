//! Core module - Settings and shared error types
//!
//! # Module Structure
//!
//! - `error` - [`CoreError`] and the [`CoreResult`] alias
//! - `settings` - [`DisplaySettings`], [`BoardTheme`] and [`PieceStyle`]
//! - `settings_file` - Read-only loading of `settings.json`
//!
//! Settings are cosmetic only. Nothing in here influences which moves are
//! reachable or how the session advances.

pub mod error;
pub mod settings;
pub mod settings_file;

pub use error::{CoreError, CoreResult};
pub use settings::{BoardTheme, DisplaySettings, PieceStyle, Rgb};
pub use settings_file::{load_settings, read_settings, settings_path};
