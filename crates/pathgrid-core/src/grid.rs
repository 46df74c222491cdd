//! The passability [`Grid`] searched by the engine.
//!
//! A grid is built once per request from a flat obstacle marker string and
//! is read-only afterwards, except for the generators that lay out
//! obstacles before handing it over.

use std::fmt;

use crate::geom::Cell;
use crate::index::{CellIndex, CellKey};

/// Marker character for a blocked cell. Every other character is passable.
pub const BLOCKED: char = '1';

/// Marker written by [`Grid::to_markers`] for a passable cell.
const OPEN: char = '0';

/// A `rows × cols` matrix of passable/blocked cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cols: i32,
    passable: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell passable.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        let len = Self::checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            passable: vec![true; len],
        })
    }

    /// Build a grid from obstacle markers.
    ///
    /// Character `i` of `markers` describes cell `(i / cols, i % cols)`: it is
    /// blocked iff it equals [`BLOCKED`]. Cells past the end of `markers` are
    /// passable and characters past `rows * cols` are ignored.
    pub fn build(markers: &str, rows: i32, cols: i32) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;
        for (slot, ch) in grid.passable.iter_mut().zip(markers.chars()) {
            *slot = ch != BLOCKED;
        }
        Ok(grid)
    }

    fn checked_len(rows: i32, cols: i32) -> Result<usize, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        // Keys are computed as `row * cols + col` in i32.
        let len = i64::from(rows) * i64::from(cols);
        if len > i64::from(i32::MAX) {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(len as usize)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.passable.len()
    }

    /// Always `false`: dimensions are validated on construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passable.is_empty()
    }

    /// The key scheme for this grid's column count.
    #[inline]
    pub fn index(&self) -> CellIndex {
        CellIndex::new(self.cols)
    }

    /// Whether `c` lies inside the grid rectangle, regardless of obstacles.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Whether `c` lies inside the grid and is passable.
    #[inline]
    pub fn in_bounds(&self, c: Cell) -> bool {
        self.key(c).is_some_and(|k| self.passable[k.get()])
    }

    /// Whether `c` lies inside the grid and is blocked.
    #[inline]
    pub fn is_blocked(&self, c: Cell) -> bool {
        self.key(c).is_some_and(|k| !self.passable[k.get()])
    }

    /// Key of `c`, or `None` if it lies outside the grid.
    #[inline]
    pub fn key(&self, c: Cell) -> Option<CellKey> {
        self.contains(c).then(|| self.index().encode(c))
    }

    /// Fail with [`GridError::OutOfBounds`] unless `c` lies inside the grid.
    pub fn check(&self, c: Cell) -> Result<CellKey, GridError> {
        self.key(c).ok_or(GridError::OutOfBounds {
            cell: c,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Fail unless `c` lies inside the grid and is passable.
    pub fn check_passable(&self, c: Cell) -> Result<CellKey, GridError> {
        let k = self.check(c)?;
        if !self.passable[k.get()] {
            return Err(GridError::Blocked { cell: c });
        }
        Ok(k)
    }

    /// Mark `c` as blocked (`true`) or passable (`false`).
    pub fn set_blocked(&mut self, c: Cell, blocked: bool) -> Result<(), GridError> {
        let k = self.check(c)?;
        self.passable[k.get()] = !blocked;
        Ok(())
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        self.passable.iter().filter(|&&p| p).count()
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let index = self.index();
        (0..self.len()).map(move |i| index.decode(CellKey(i)))
    }

    /// Encode the layout back into a `'0'`/`'1'` marker string of length
    /// `rows * cols`, the inverse of [`build`](Self::build).
    pub fn to_markers(&self) -> String {
        self.passable
            .iter()
            .map(|&p| if p { OPEN } else { BLOCKED })
            .collect()
    }
}

impl fmt::Display for Grid {
    /// One line per row, `#` for blocked cells and `.` for passable ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.passable.chunks(self.cols as usize) {
            let line: String = row.iter().map(|&p| if p { '.' } else { '#' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Errors caused by invalid grid dimensions or coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rows or columns are not positive, or there are more than
    /// `i32::MAX` cells.
    InvalidDimensions { rows: i32, cols: i32 },
    /// A coordinate lies outside the grid rectangle.
    OutOfBounds { cell: Cell, rows: i32, cols: i32 },
    /// A cell that has to be passable is blocked.
    Blocked { cell: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            Self::OutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} is outside the {rows}x{cols} grid")
            }
            Self::Blocked { cell } => write!(f, "cell {cell} is blocked"),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_marks_only_ones() {
        let g = Grid::build("010x00001", 3, 3).unwrap();
        assert!(g.is_blocked(Cell::new(0, 1)));
        assert!(g.is_blocked(Cell::new(2, 2)));
        assert!(g.in_bounds(Cell::new(1, 0)), "'x' is passable");
        assert_eq!(g.passable_count(), 7);
    }

    #[test]
    fn short_markers_default_to_passable() {
        let g = Grid::build("11", 2, 3).unwrap();
        assert!(g.is_blocked(Cell::new(0, 0)));
        assert!(g.is_blocked(Cell::new(0, 1)));
        assert_eq!(g.passable_count(), 4);

        let empty = Grid::build("", 2, 2).unwrap();
        assert_eq!(empty.passable_count(), 4);
    }

    #[test]
    fn long_markers_are_truncated() {
        let g = Grid::build("0001111", 1, 3).unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.passable_count(), 3);
    }

    #[test]
    fn in_bounds_rejects_outside_and_blocked() {
        let g = Grid::build("0100", 2, 2).unwrap();
        assert!(g.in_bounds(Cell::new(0, 0)));
        assert!(!g.in_bounds(Cell::new(0, 1)));
        assert!(!g.in_bounds(Cell::new(-1, 0)));
        assert!(!g.in_bounds(Cell::new(0, 2)));
        assert!(!g.in_bounds(Cell::new(2, 0)));
        assert!(g.contains(Cell::new(0, 1)));
    }

    #[test]
    fn invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 3),
            Err(GridError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert!(Grid::build("", 3, -1).is_err());
    }

    #[test]
    fn check_reports_out_of_bounds() {
        let g = Grid::new(2, 2).unwrap();
        assert_eq!(g.check(Cell::new(1, 1)), Ok(CellKey(3)));
        let err = g.check(Cell::new(2, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                cell: Cell::new(2, 0),
                rows: 2,
                cols: 2
            }
        );
        assert_eq!(err.to_string(), "cell (2, 0) is outside the 2x2 grid");
    }

    #[test]
    fn too_many_cells_for_keys() {
        assert_eq!(
            Grid::new(65_536, 65_536),
            Err(GridError::InvalidDimensions {
                rows: 65_536,
                cols: 65_536
            })
        );
        assert!(Grid::new(i32::MAX, 2).is_err());
    }

    #[test]
    fn check_passable_rejects_blocked() {
        let g = Grid::build("10", 1, 2).unwrap();
        assert_eq!(g.check_passable(Cell::new(0, 1)), Ok(CellKey(1)));
        let err = g.check_passable(Cell::new(0, 0)).unwrap_err();
        assert_eq!(err, GridError::Blocked { cell: Cell::new(0, 0) });
        assert_eq!(err.to_string(), "cell (0, 0) is blocked");
        assert!(matches!(
            g.check_passable(Cell::new(3, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn markers_round_trip() {
        let markers = "0110010000";
        let g = Grid::build(markers, 2, 5).unwrap();
        assert_eq!(g.to_markers(), markers);
        assert_eq!(Grid::build(&g.to_markers(), 2, 5).unwrap(), g);
    }

    #[test]
    fn set_blocked_and_display() {
        let mut g = Grid::new(2, 3).unwrap();
        g.set_blocked(Cell::new(1, 2), true).unwrap();
        assert!(g.set_blocked(Cell::new(5, 5), true).is_err());
        assert_eq!(g.to_string(), "...\n..#\n");
        g.set_blocked(Cell::new(1, 2), false).unwrap();
        assert_eq!(g.passable_count(), 6);
    }

    #[test]
    fn cells_iterates_row_major() {
        let g = Grid::new(2, 2).unwrap();
        let cells: Vec<Cell> = g.cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1)
            ]
        );
    }
}
