//! Capture history
//!
//! Every piece taken during the session, in the order it was taken. The
//! board view groups them by the side that lost them.
//!
//! # Material Values
//!
//! Measured in pawns:
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0
//!
//! Kings carry no value but can still be taken, since check is not modelled.
//!
//! # Material Advantage
//!
//! Positive means light is ahead, negative means dark is ahead. If light took
//! a rook and a pawn (5 + 1) and dark took a knight (3), the balance is +3.

use move_engine::{Piece, PieceKind, Side};
use serde::Serialize;

/// Ordered list of captured pieces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CapturedPieces {
    pieces: Vec<Piece>,
}

impl CapturedPieces {
    /// Record a piece that was just taken
    pub fn push(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    /// All captured pieces, oldest first
    pub fn all(&self) -> &[Piece] {
        &self.pieces
    }

    /// Captured pieces that belonged to `side`, oldest first
    pub fn by_side(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |piece| piece.side == side)
    }

    /// Material balance in pawns
    ///
    /// Light's score is the value of the dark pieces it took, and the other
    /// way round.
    pub fn material_advantage(&self) -> i32 {
        let taken_by = |side: Side| -> i32 {
            self.by_side(side.opposite())
                .map(|piece| piece_value(piece.kind))
                .sum()
        };
        taken_by(Side::Light) - taken_by(Side::Dark)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
    }
}

/// Material value of a piece kind in pawns
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}
