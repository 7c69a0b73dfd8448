//! Board coordinates
//!
//! A [`Square`] is a `(row, col)` pair with both halves in `0..8`. Row 0 is
//! the top edge of the visual board (rank 8) and row 7 the bottom edge
//! (rank 1); column 0 is file `a`. The fields are private so a `Square` is
//! always on the board: offset arithmetic goes through [`Square::offset`],
//! which returns `None` instead of leaving the grid.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// Width and height of the grid
pub const BOARD_SIZE: u8 = 8;

/// One cell of the 8x8 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square from in-range coordinates
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more. Use [`Square::try_new`] for
    /// coordinates that come from outside the program.
    ///
    /// # Examples
    ///
    /// ```
    /// use move_engine::Square;
    ///
    /// let e2 = Square::new(6, 4);
    /// assert_eq!(e2.to_algebraic(), "e2");
    /// ```
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "square coordinates must be in 0..8"
        );
        Square { row, col }
    }

    /// Create a square, rejecting off-board coordinates
    pub fn try_new(row: u8, col: u8) -> EngineResult<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Square { row, col })
        } else {
            Err(EngineError::InvalidSquare { row, col })
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index in `0..64`
    #[inline]
    pub const fn index(self) -> u8 {
        self.row * BOARD_SIZE + self.col
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Square {
                row: index / BOARD_SIZE,
                col: index % BOARD_SIZE,
            })
        } else {
            None
        }
    }

    /// Square displaced by `(d_row, d_col)`, or `None` if that leaves the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        let on_board = 0..BOARD_SIZE as i8;

        if on_board.contains(&row) && on_board.contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// File letter (`'a'..='h'`)
    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank number as printed on the board (`1..=8`, 8 at row 0)
    pub fn rank_number(self) -> u8 {
        BOARD_SIZE - self.row
    }

    /// Parse algebraic notation such as `"e2"`
    ///
    /// ```
    /// use move_engine::Square;
    ///
    /// let square = Square::from_algebraic("e2").unwrap();
    /// assert_eq!((square.row(), square.col()), (6, 4));
    /// assert!(Square::from_algebraic("i9").is_err());
    /// ```
    pub fn from_algebraic(input: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidAlgebraic {
            input: input.to_string(),
        };

        let mut chars = input.trim().chars();
        let file = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
        let rank = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }

        if !('a'..='h').contains(&file) {
            return Err(invalid());
        }
        let rank = rank
            .to_digit(10)
            .filter(|rank| (1..=8).contains(rank))
            .ok_or_else(invalid)? as u8;

        Ok(Square {
            row: BOARD_SIZE - rank,
            col: file as u8 - b'a',
        })
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_number())
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(|index| Square {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_number())
    }
}

impl FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = EngineError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::try_new(row, col)
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.row, square.col)
    }
}
