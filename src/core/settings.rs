//! Display settings
//!
//! User preferences for how the board is drawn. Loaded from `settings.json`
//! (see [`crate::core::settings_file`]) and overridden by command-line flags
//! and in-session `theme` / `style` commands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::CoreError;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Board visual themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardTheme {
    #[default]
    Classic,
    Blue,
    Forest,
}

impl BoardTheme {
    pub const ALL: [BoardTheme; 3] = [BoardTheme::Classic, BoardTheme::Blue, BoardTheme::Forest];

    pub fn name(&self) -> &'static str {
        match self {
            BoardTheme::Classic => "classic",
            BoardTheme::Blue => "blue",
            BoardTheme::Forest => "forest",
        }
    }

    /// Returns (light_square_color, dark_square_color)
    pub fn colors(&self) -> (Rgb, Rgb) {
        match self {
            BoardTheme::Classic => (
                Rgb(240, 217, 181), // Cream
                Rgb(181, 136, 99),  // Walnut
            ),
            BoardTheme::Blue => (
                Rgb(222, 227, 230), // Ice
                Rgb(140, 162, 173), // Steel blue
            ),
            BoardTheme::Forest => (
                Rgb(235, 236, 208), // Pale moss
                Rgb(119, 149, 86),  // Fern
            ),
        }
    }
}

impl fmt::Display for BoardTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardTheme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        BoardTheme::ALL
            .into_iter()
            .find(|theme| theme.name() == name)
            .ok_or_else(|| CoreError::UnknownTheme {
                name: s.trim().to_string(),
            })
    }
}

/// How piece glyphs are drawn
///
/// - `Standard` - Unicode chess symbols
/// - `Modern` - Unicode chess symbols in bold
/// - `Minimalist` - ASCII letters, uppercase for light and lowercase for dark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceStyle {
    #[default]
    Standard,
    Modern,
    Minimalist,
}

impl PieceStyle {
    pub const ALL: [PieceStyle; 3] = [
        PieceStyle::Standard,
        PieceStyle::Modern,
        PieceStyle::Minimalist,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PieceStyle::Standard => "standard",
            PieceStyle::Modern => "modern",
            PieceStyle::Minimalist => "minimalist",
        }
    }
}

impl fmt::Display for PieceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        PieceStyle::ALL
            .into_iter()
            .find(|style| style.name() == name)
            .ok_or_else(|| CoreError::UnknownPieceStyle {
                name: s.trim().to_string(),
            })
    }
}

/// Settings that change how the board looks, never how it plays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Square colors
    pub board_theme: BoardTheme,

    /// Glyph set for pieces
    pub piece_style: PieceStyle,

    /// Whether to mark reachable squares of the selected piece
    pub show_hints: bool,

    /// Emit ANSI color escapes
    pub use_color: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            board_theme: BoardTheme::Classic,
            piece_style: PieceStyle::Standard,
            show_hints: true,
            use_color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_str() {
        assert_eq!("blue".parse::<BoardTheme>().unwrap(), BoardTheme::Blue);
        assert_eq!(" Forest ".parse::<BoardTheme>().unwrap(), BoardTheme::Forest);
        assert!(matches!(
            "neon".parse::<BoardTheme>(),
            Err(CoreError::UnknownTheme { name }) if name == "neon"
        ));
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!(
            "MINIMALIST".parse::<PieceStyle>().unwrap(),
            PieceStyle::Minimalist
        );
        assert!("fancy".parse::<PieceStyle>().is_err());
    }

    #[test]
    fn test_theme_colors_differ() {
        //! Light and dark squares must be distinguishable in every theme
        for theme in BoardTheme::ALL {
            let (light, dark) = theme.colors();
            assert_ne!(light, dark, "{theme} uses the same color twice");
        }
    }

    #[test]
    fn test_partial_settings_json_uses_defaults() {
        let settings: DisplaySettings =
            serde_json::from_str(r#"{ "board_theme": "forest" }"#).unwrap();
        assert_eq!(settings.board_theme, BoardTheme::Forest);
        assert_eq!(settings.piece_style, PieceStyle::Standard);
        assert!(settings.show_hints);
        assert!(settings.use_color);
    }
}
