//! Linear cell keys: [`CellKey`] and the [`CellIndex`] that maps to them.

use std::fmt;

use crate::geom::Cell;

/// A linear key for a cell, `row * cols + col`.
///
/// Keys index the flat per-cell arrays used by the search engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey(pub usize);

impl CellKey {
    /// The underlying index.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Bijection between in-range cells and [`CellKey`]s for a fixed column count.
///
/// Only in-range cells (`0 <= row`, `0 <= col < cols`) have a defined key;
/// encoding anything else yields an unspecified value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellIndex {
    cols: i32,
}

impl CellIndex {
    /// Create an index for rows of `cols` cells.
    #[inline]
    pub const fn new(cols: i32) -> Self {
        debug_assert!(cols > 0);
        Self { cols }
    }

    /// Number of columns per row.
    #[inline]
    pub const fn cols(self) -> i32 {
        self.cols
    }

    /// `encode(r, c) = r * cols + c`.
    #[inline]
    pub const fn encode(self, cell: Cell) -> CellKey {
        CellKey((cell.row * self.cols + cell.col) as usize)
    }

    /// `decode(key) = (key / cols, key % cols)`.
    #[inline]
    pub const fn decode(self, key: CellKey) -> Cell {
        let cols = self.cols as usize;
        Cell::new((key.0 / cols) as i32, (key.0 % cols) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_inverts_encode() {
        for cols in 1..=7 {
            let index = CellIndex::new(cols);
            for row in 0..5 {
                for col in 0..cols {
                    let c = Cell::new(row, col);
                    assert_eq!(index.decode(index.encode(c)), c, "cols={cols}");
                }
            }
        }
    }

    #[test]
    fn keys_are_dense_and_row_major() {
        let index = CellIndex::new(3);
        assert_eq!(index.encode(Cell::new(0, 0)), CellKey(0));
        assert_eq!(index.encode(Cell::new(0, 2)), CellKey(2));
        assert_eq!(index.encode(Cell::new(1, 0)), CellKey(3));
        assert_eq!(index.encode(Cell::new(2, 2)), CellKey(8));
        assert_eq!(index.decode(CellKey(5)), Cell::new(1, 2));
    }

    #[test]
    fn single_column() {
        let index = CellIndex::new(1);
        assert_eq!(index.encode(Cell::new(4, 0)), CellKey(4));
        assert_eq!(index.decode(CellKey(4)), Cell::new(4, 0));
    }
}
