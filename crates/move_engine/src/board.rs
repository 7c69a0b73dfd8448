//! Board configuration
//!
//! A [`Board`] is an owned 8x8 grid of `Option<Piece>`. It is `Copy`, so two
//! configurations never share a cell: every "after" state is a separate value
//! from its "before" state, and keeping old boards around needs no defensive
//! cloning.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::square::{Square, BOARD_SIZE};
use crate::types::{Piece, PieceKind, Side};

/// Back rank from file a to file h
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Full snapshot of piece placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Grid with no pieces
    pub const fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Standard starting configuration
    ///
    /// Dark fills rows 0 (back rank) and 1 (pawns); light fills rows 6
    /// (pawns) and 7 (back rank). Each back rank reads rook, knight, bishop,
    /// queen, king, bishop, knight, rook from column 0 to 7.
    pub fn starting() -> Self {
        let mut board = Board::empty();

        for side in Side::ALL {
            for col in 0..BOARD_SIZE {
                board.place(
                    Square::new(side.pawn_row(), col),
                    Piece::new(PieceKind::Pawn, side, col),
                );
                board.place(
                    Square::new(side.back_row(), col),
                    Piece::new(BACK_RANK[col as usize], side, col),
                );
            }
        }

        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.cells[square.row() as usize][square.col() as usize].as_ref()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Side of the piece on `square`, if any
    #[inline]
    pub fn side_at(&self, square: Square) -> Option<Side> {
        self.piece_at(square).map(|piece| piece.side)
    }

    /// Put `piece` on `square`, returning whatever was there before
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].replace(piece)
    }

    /// Empty `square`, returning the piece that stood there
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].take()
    }

    /// Builder form of [`Board::place`] for setting up positions
    ///
    /// ```
    /// use move_engine::{Board, Piece, PieceKind, Side, Square};
    ///
    /// let board = Board::empty()
    ///     .with_piece(Square::new(4, 4), Piece::new(PieceKind::Rook, Side::Light, 0))
    ///     .with_piece(Square::new(4, 6), Piece::new(PieceKind::Pawn, Side::Dark, 6));
    /// assert_eq!(board.piece_count(), 2);
    /// ```
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.place(square, piece);
        self
    }

    /// Occupied squares and their pieces, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Number of pieces belonging to `side`
    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, piece)| piece.side == side).count()
    }

    /// Total number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn is_clear(&self) -> bool {
        self.piece_count() == 0
    }

    /// Row of cells, for renderers that walk the grid top to bottom
    pub fn row(&self, row: u8) -> &[Option<Piece>; BOARD_SIZE as usize] {
        &self.cells[row as usize]
    }
}
