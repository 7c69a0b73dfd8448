//! Serializable board snapshot
//!
//! [`BoardView`] carries everything a presenter needs to draw the current
//! session without linking against the engine types: glyphs are resolved,
//! squares are given in both coordinate forms, and captures are grouped.

use move_engine::{Piece, PieceKind, Side, Square, BOARD_SIZE};
use serde::Serialize;

use crate::core::error::CoreResult;
use crate::core::settings::DisplaySettings;
use crate::game::session::SessionState;
use crate::rendering::glyphs::glyph_for;

/// A square as `{ "row": 6, "col": 4, "name": "e2" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SquareView {
    pub row: u8,
    pub col: u8,
    pub name: String,
}

impl From<Square> for SquareView {
    fn from(square: Square) -> Self {
        Self {
            row: square.row(),
            col: square.col(),
            name: square.to_algebraic(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub id: String,
    pub kind: PieceKind,
    pub side: Side,
    pub glyph: char,
    pub has_moved: bool,
}

impl PieceView {
    fn new(piece: &Piece, settings: &DisplaySettings) -> Self {
        Self {
            id: piece.id.to_string(),
            kind: piece.kind,
            side: piece.side,
            glyph: glyph_for(piece, settings.piece_style),
            has_moved: piece.has_moved,
        }
    }
}

/// Snapshot of a session for external presenters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub side_to_move: Side,
    pub move_number: u32,
    /// Row-major, row 0 is rank 8
    pub cells: Vec<Vec<Option<PieceView>>>,
    pub selected: Option<SquareView>,
    pub reachable: Vec<SquareView>,
    pub last_move: Option<(SquareView, SquareView)>,
    pub captured_light: Vec<PieceView>,
    pub captured_dark: Vec<PieceView>,
    pub material_advantage: i32,
}

impl BoardView {
    pub fn new(state: &SessionState, settings: &DisplaySettings) -> Self {
        let cells: Vec<Vec<Option<PieceView>>> = (0..BOARD_SIZE)
            .map(|row| {
                state
                    .board
                    .row(row)
                    .iter()
                    .map(|cell| cell.as_ref().map(|piece| PieceView::new(piece, settings)))
                    .collect::<Vec<_>>()
            })
            .collect();

        let captured = |side: Side| -> Vec<PieceView> {
            state
                .captured
                .by_side(side)
                .map(|piece| PieceView::new(piece, settings))
                .collect()
        };

        Self {
            side_to_move: state.side_to_move(),
            move_number: state.turn.move_number,
            cells,
            selected: state.selection.selected.map(SquareView::from),
            reachable: state.selection.reachable.iter().map(SquareView::from).collect(),
            last_move: state
                .last_move
                .map(|last| (SquareView::from(last.from), SquareView::from(last.to))),
            captured_light: captured(Side::Light),
            captured_dark: captured(Side::Dark),
            material_advantage: state.captured.material_advantage(),
        }
    }

    /// Single-line JSON
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
