//! ANSI escape helpers for 24-bit terminals

use crate::core::settings::Rgb;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Selected square
pub const SELECTED_BG: Rgb = Rgb(246, 246, 105);
/// Reachable square holding an opponent piece
pub const CAPTURE_BG: Rgb = Rgb(214, 96, 86);
/// Squares of the most recent move
pub const LAST_MOVE_BG: Rgb = Rgb(205, 210, 106);
/// Piece and marker ink
pub const INK: Rgb = Rgb(24, 24, 24);

pub fn bg(Rgb(r, g, b): Rgb) -> String {
    format!("\x1b[48;2;{r};{g};{b}m")
}

pub fn fg(Rgb(r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

/// Wrap `text` in a background and ink color
pub fn paint(text: &str, background: Rgb, bold: bool) -> String {
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}{}", bg(background), fg(INK), weight, text, RESET)
}
