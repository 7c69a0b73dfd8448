//! Piece and side definitions for the board model
//!
//! Pieces are small `Copy` values. A piece's identity is its [`PieceId`],
//! which is fixed when the starting configuration is built and survives every
//! move; only the location and the `has_moved` flag change.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One of the two players
///
/// Light starts on the bottom two rows (6 and 7) and moves toward row 0.
/// Dark starts on the top two rows (0 and 1) and moves toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Light, Side::Dark];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Row delta of a single pawn step for this side
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Light => -1,
            Side::Dark => 1,
        }
    }

    /// Row this side's pawns start on (the only row a double step is allowed from)
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Side::Light => 6,
            Side::Dark => 1,
        }
    }

    /// Row holding this side's rook/knight/bishop/queen/king at game start
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Side::Light => 7,
            Side::Dark => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Side::Light => "light",
            Side::Dark => "dark",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind (side is stored separately on [`Piece`])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Rook, bishop and queen move along rays until blocked
    pub const fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable identity of a piece within one game
///
/// Derived from the side, kind and the column the piece started on. No two
/// pieces of the standard starting configuration share all three, so the id
/// is unique within a game. Rendered as `light-pawn-4`, `dark-knight-6`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    pub side: Side,
    pub kind: PieceKind,
    pub home_col: u8,
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.side, self.kind, self.home_col)
    }
}

#[cfg(feature = "serde")]
impl Serialize for PieceId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub id: PieceId,
    /// Set once the piece has moved. Kept for API stability; no rule reads it.
    pub has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece whose identity is anchored to `home_col`
    pub const fn new(kind: PieceKind, side: Side, home_col: u8) -> Self {
        Piece {
            kind,
            side,
            id: PieceId {
                side,
                kind,
                home_col,
            },
            has_moved: false,
        }
    }

    /// Same piece after it has been moved at least once
    #[inline]
    pub const fn moved(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }

    #[inline]
    pub fn is_opponent_of(&self, side: Side) -> bool {
        self.side != side
    }
}
