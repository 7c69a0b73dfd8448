//! Side-to-move tracking
//!
//! Light always moves first. A full move is one light turn followed by one
//! dark turn, so the move number only advances when dark hands the turn back.

use move_engine::Side;
use serde::Serialize;

/// Whose turn it is and which full move is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentTurn {
    /// Side allowed to select and move
    pub side: Side,
    /// Full move number, starting at 1
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self {
            side: Side::Light,
            move_number: 1,
        }
    }
}

impl CurrentTurn {
    /// Hand the turn to the other side
    ///
    /// ```rust,ignore
    /// let mut turn = CurrentTurn::default(); // Light, move 1
    /// turn.switch();                         // Dark, move 1
    /// turn.switch();                         // Light, move 2
    /// ```
    pub fn switch(&mut self) {
        if self.side == Side::Dark {
            self.move_number += 1;
        }
        self.side = self.side.opposite();
    }
}
