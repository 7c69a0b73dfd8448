//! # SquareSet - Reachable squares as a 64-bit set
//!
//! Each bit of the inner `u64` stands for one square, using the row-major
//! index from [`Square::index`]: bit 0 is `a8` (row 0, col 0) and bit 63 is
//! `h1` (row 7, col 7).
//!
//! Because membership is a single bit, a square can never appear twice, and
//! iteration walks set bits from low to high, which yields squares in
//! row-major order.
//!
//! Common operations:
//! - **Insert**: `bits |= 1 << index`
//! - **Remove**: `bits &= !(1 << index)`
//! - **Contains**: `bits & (1 << index) != 0`
//! - **Len**: `bits.count_ones()` (hardware POPCNT)

use std::fmt;

use crate::square::Square;

#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    pub const fn new() -> Self {
        SquareSet(0)
    }

    /// Raw bitboard
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1 << square.index();
    }

    #[inline]
    pub fn remove(&mut self, square: Square) {
        self.0 &= !(1 << square.index());
    }

    #[inline]
    pub const fn contains(&self, square: Square) -> bool {
        (self.0 & (1 << square.index())) != 0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    #[inline]
    pub const fn union(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 | other.0)
    }

    /// Squares in row-major order
    pub fn iter(&self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

/// Iterator over the squares of a [`SquareSet`], lowest index first
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        // clear lowest set bit
        self.0 &= self.0 - 1;
        Square::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl IntoIterator for &SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Square> for SquareSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for square in iter {
            self.insert(square);
        }
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SquareSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_contains_remove() {
        let mut set = SquareSet::new();
        let e4 = Square::new(4, 4);

        assert!(!set.contains(e4));
        set.insert(e4);
        assert!(set.contains(e4));
        assert_eq!(set.len(), 1);

        set.remove(e4);
        assert!(!set.contains(e4));
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_is_idempotent() {
        //! A square can only be a member once
        let mut set = SquareSet::new();
        set.insert(Square::new(3, 3));
        set.insert(Square::new(3, 3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_corner_bits() {
        let set: SquareSet = [Square::new(0, 0), Square::new(7, 7)].into_iter().collect();
        assert_eq!(set.bits(), 1 | (1 << 63));
    }

    #[test]
    fn test_iter_is_row_major() {
        let set: SquareSet = [Square::new(5, 0), Square::new(0, 7), Square::new(5, 2)]
            .into_iter()
            .collect();

        let squares: Vec<_> = set.iter().collect();
        assert_eq!(
            squares,
            vec![Square::new(0, 7), Square::new(5, 0), Square::new(5, 2)]
        );
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn test_union_and_clear() {
        let a: SquareSet = [Square::new(1, 1)].into_iter().collect();
        let b: SquareSet = [Square::new(2, 2)].into_iter().collect();
        let mut both = a.union(b);
        assert_eq!(both.len(), 2);

        both.clear();
        assert_eq!(both, SquareSet::EMPTY);
    }
}
