//! Current selection and its reachable squares

use move_engine::{Square, SquareSet};
use serde::Serialize;

/// The selected square, if any, and the squares its piece can reach
///
/// `reachable` is always empty while nothing is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub selected: Option<Square>,
    pub reachable: SquareSet,
}

impl Selection {
    pub fn select(&mut self, square: Square, reachable: SquareSet) {
        self.selected = Some(square);
        self.reachable = reachable;
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.reachable.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_selected_square(&self, square: Square) -> bool {
        self.selected == Some(square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_reachable_squares() {
        let mut selection = Selection::default();
        let reachable: SquareSet = [Square::new(5, 4), Square::new(4, 4)].into_iter().collect();
        selection.select(Square::new(6, 4), reachable);

        assert!(selection.is_selected());
        assert!(selection.is_selected_square(Square::new(6, 4)));
        assert_eq!(selection.reachable.len(), 2);

        selection.clear();
        assert!(!selection.is_selected());
        assert!(selection.reachable.is_empty());
    }
}
