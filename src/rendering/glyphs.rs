//! Piece glyph lookup

use move_engine::{Piece, PieceKind, Side};

use crate::core::settings::PieceStyle;

/// Unicode chess symbol for a piece
pub fn piece_glyph(kind: PieceKind, side: Side) -> char {
    match (side, kind) {
        (Side::Light, PieceKind::King) => '♔',
        (Side::Light, PieceKind::Queen) => '♕',
        (Side::Light, PieceKind::Rook) => '♖',
        (Side::Light, PieceKind::Bishop) => '♗',
        (Side::Light, PieceKind::Knight) => '♘',
        (Side::Light, PieceKind::Pawn) => '♙',
        (Side::Dark, PieceKind::King) => '♚',
        (Side::Dark, PieceKind::Queen) => '♛',
        (Side::Dark, PieceKind::Rook) => '♜',
        (Side::Dark, PieceKind::Bishop) => '♝',
        (Side::Dark, PieceKind::Knight) => '♞',
        (Side::Dark, PieceKind::Pawn) => '♟',
    }
}

/// ASCII letter for a piece: uppercase for light, lowercase for dark
pub fn piece_letter(kind: PieceKind, side: Side) -> char {
    let letter = match kind {
        PieceKind::King => 'K',
        PieceKind::Queen => 'Q',
        PieceKind::Rook => 'R',
        PieceKind::Bishop => 'B',
        PieceKind::Knight => 'N',
        PieceKind::Pawn => 'P',
    };
    match side {
        Side::Light => letter,
        Side::Dark => letter.to_ascii_lowercase(),
    }
}

/// Character used for `piece` under `style`
///
/// `Modern` shares the Unicode set with `Standard`; the text renderer adds
/// the bold attribute when colors are on.
pub fn glyph_for(piece: &Piece, style: PieceStyle) -> char {
    match style {
        PieceStyle::Standard | PieceStyle::Modern => piece_glyph(piece.kind, piece.side),
        PieceStyle::Minimalist => piece_letter(piece.kind, piece.side),
    }
}
