//! Terminal board renderer
//!
//! Draws a [`SessionState`] as text: a turn banner, the board from rank 8 at
//! the top down to rank 1, file letters underneath, and the capture history.
//!
//! Each cell is three characters wide. Without colors the markers alone carry
//! the selection state:
//!
//! ```text
//!  [♙]  selected piece
//!   ·   reachable empty square
//!  (♟)  reachable opponent piece
//! ```
//!
//! With colors the same cells also get a highlight background, and the two
//! squares of the last move are tinted.

use std::fmt::Write;

use move_engine::{Side, Square, BOARD_SIZE};

use crate::core::settings::{DisplaySettings, PieceStyle, Rgb};
use crate::game::session::SessionState;
use crate::rendering::ansi;
use crate::rendering::glyphs::glyph_for;

const REACHABLE_DOT: char = '·';

/// How one square should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Plain,
    Selected,
    Reachable,
    Capture,
    LastMove,
}

/// Render the whole session as a multi-line string
pub fn render_text(state: &SessionState, settings: &DisplaySettings) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} to move (move {})",
        side_label(state.side_to_move()),
        state.turn.move_number
    );
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let _ = write!(out, "{} ", BOARD_SIZE - row);
        for col in 0..BOARD_SIZE {
            out.push_str(&render_cell(state, settings, Square::new(row, col)));
        }
        let _ = writeln!(out, " {}", BOARD_SIZE - row);
    }
    out.push_str(&file_labels());
    out.push('\n');

    out.push_str(&render_captures(state, settings.piece_style));
    out
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Light => "Light",
        Side::Dark => "Dark",
    }
}

fn file_labels() -> String {
    let files: String = (b'a'..=b'h')
        .map(|file| format!(" {} ", file as char))
        .collect();
    format!("  {files}\n")
}

fn marker_for(state: &SessionState, settings: &DisplaySettings, square: Square) -> Marker {
    let selection = &state.selection;

    if selection.is_selected_square(square) {
        return Marker::Selected;
    }
    if settings.show_hints && selection.reachable.contains(square) {
        return if state.board.is_empty(square) {
            Marker::Reachable
        } else {
            Marker::Capture
        };
    }
    match state.last_move {
        Some(last) if last.from == square || last.to == square => Marker::LastMove,
        _ => Marker::Plain,
    }
}

fn render_cell(state: &SessionState, settings: &DisplaySettings, square: Square) -> String {
    let marker = marker_for(state, settings, square);
    let glyph = state
        .board
        .piece_at(square)
        .map(|piece| glyph_for(piece, settings.piece_style));

    let text = match (marker, glyph) {
        (Marker::Selected, Some(g)) => format!("[{g}]"),
        (Marker::Capture, Some(g)) => format!("({g})"),
        (Marker::Reachable, None) => format!(" {REACHABLE_DOT} "),
        (_, Some(g)) => format!(" {g} "),
        (_, None) => "   ".to_string(),
    };

    if !settings.use_color {
        return text;
    }

    let (light, dark) = settings.board_theme.colors();
    let square_color = if (square.row() + square.col()).is_multiple_of(2) {
        light
    } else {
        dark
    };
    let background: Rgb = match marker {
        Marker::Selected => ansi::SELECTED_BG,
        Marker::Capture => ansi::CAPTURE_BG,
        Marker::LastMove => ansi::LAST_MOVE_BG,
        Marker::Plain | Marker::Reachable => square_color,
    };
    let bold = settings.piece_style == PieceStyle::Modern && glyph.is_some();

    ansi::paint(&text, background, bold)
}

fn render_captures(state: &SessionState, style: PieceStyle) -> String {
    let mut out = String::new();

    for side in Side::ALL {
        let glyphs: Vec<String> = state
            .captured
            .by_side(side)
            .map(|piece| glyph_for(piece, style).to_string())
            .collect();
        let listed = if glyphs.is_empty() {
            "-".to_string()
        } else {
            glyphs.join(" ")
        };
        let _ = writeln!(out, "Captured {}: {}", side, listed);
    }

    let balance = state.captured.material_advantage();
    if balance != 0 {
        let leader = if balance > 0 { Side::Light } else { Side::Dark };
        let _ = writeln!(out, "Material: {} +{}", leader, balance.abs());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::session::transition;

    fn plain() -> DisplaySettings {
        DisplaySettings {
            use_color: false,
            ..DisplaySettings::default()
        }
    }

    fn board_lines(rendered: &str) -> Vec<&str> {
        rendered
            .lines()
            .filter(|line| line.starts_with(|c: char| c.is_ascii_digit()))
            .collect()
    }

    #[test]
    fn test_starting_board_layout() {
        let rendered = render_text(&SessionState::new(), &plain());

        assert!(rendered.starts_with("Light to move (move 1)"));
        let lines = board_lines(&rendered);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "8  ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜  8");
        assert_eq!(lines[6], "2  ♙  ♙  ♙  ♙  ♙  ♙  ♙  ♙  2");
        assert!(lines[7].starts_with("1  ♖"));
        assert!(rendered.contains("  a  b  c  d  e  f  g  h \n"));
    }

    #[test]
    fn test_minimalist_style_uses_letters() {
        let settings = DisplaySettings {
            piece_style: PieceStyle::Minimalist,
            ..plain()
        };
        let rendered = render_text(&SessionState::new(), &settings);
        let lines = board_lines(&rendered);

        assert_eq!(lines[0], "8  r  n  b  q  k  b  n  r  8");
        assert_eq!(lines[7], "1  R  N  B  Q  K  B  N  R  1");
    }

    #[test]
    fn test_selection_and_hints_are_marked() {
        let state = transition(&SessionState::new(), Square::new(6, 4)).state;
        let rendered = render_text(&state, &plain());
        let lines = board_lines(&rendered);

        assert!(lines[6].contains("[♙]"), "Selected pawn should be bracketed");
        assert!(lines[5].contains(" · "), "e3 should be marked reachable");
        assert!(lines[4].contains(" · "), "e4 should be marked reachable");
    }

    #[test]
    fn test_hints_can_be_hidden() {
        let state = transition(&SessionState::new(), Square::new(6, 4)).state;
        let settings = DisplaySettings {
            show_hints: false,
            ..plain()
        };
        let rendered = render_text(&state, &settings);

        assert!(rendered.contains("[♙]"));
        assert!(!rendered.contains(REACHABLE_DOT));
    }

    #[test]
    fn test_capture_targets_and_history() {
        let mut state = SessionState::new();
        for (row, col) in [(6, 4), (4, 4), (1, 3), (3, 3), (4, 4)] {
            state = transition(&state, Square::new(row, col)).state;
        }
        let rendered = render_text(&state, &plain());
        assert!(rendered.contains("(♟)"), "d5 pawn should be shown as a capture");

        state = transition(&state, Square::new(3, 3)).state;
        let rendered = render_text(&state, &plain());
        assert!(rendered.starts_with("Dark to move (move 2)"));
        assert!(rendered.contains("Captured dark: ♟"));
        assert!(rendered.contains("Captured light: -"));
        assert!(rendered.contains("Material: light +1"));
    }

    #[test]
    fn test_no_color_has_no_escapes() {
        let rendered = render_text(&SessionState::new(), &plain());
        assert!(!rendered.contains('\x1b'));
    }

    #[test]
    fn test_color_uses_theme_backgrounds() {
        let settings = DisplaySettings::default();
        let rendered = render_text(&SessionState::new(), &settings);
        let (light, dark) = settings.board_theme.colors();
        let lines = board_lines(&rendered);

        assert!(
            lines[0].starts_with(&format!("8 {}", ansi::bg(light))),
            "a8 is a light square"
        );
        assert!(
            lines[7].starts_with(&format!("1 {}", ansi::bg(dark))),
            "a1 is a dark square"
        );
        assert!(rendered.contains(ansi::RESET));
    }
}
