use pathgrid_core::{Cell, CellIndex, CellKey, Grid};

use crate::algorithm::Algorithm;
use crate::state::SearchState;
use crate::traits::AstarPather;

/// Runs the search algorithms over one grid rectangle.
///
/// A `Searcher` only knows the grid's shape; passability and costs come
/// from the [`Pather`](crate::Pather) handed to each search. Every search
/// allocates its own [`SearchState`], so nothing leaks between runs apart
/// from a scratch neighbor buffer.
#[derive(Debug)]
pub struct Searcher {
    pub(crate) index: CellIndex,
    pub(crate) rows: i32,
    pub(crate) len: usize,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Cell>,
}

impl Searcher {
    /// Create a searcher for the shape of `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            index: grid.index(),
            rows: grid.rows(),
            len: grid.len(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Run `algorithm` from `start` toward `goal`.
    pub fn run<P: AstarPather>(
        &mut self,
        algorithm: Algorithm,
        pather: &P,
        start: Cell,
        goal: Cell,
    ) -> SearchState {
        match algorithm {
            Algorithm::Bfs => self.bfs(pather, start, goal),
            Algorithm::Dijkstra => self.dijkstra(pather, start, goal),
            Algorithm::Astar => self.astar(pather, start, goal),
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a cell to its key. Returns `None` if out of range.
    #[inline]
    pub(crate) fn key(&self, c: Cell) -> Option<CellKey> {
        if c.row < 0 || c.row >= self.rows || c.col < 0 || c.col >= self.index.cols() {
            return None;
        }
        Some(self.index.encode(c))
    }

    /// Convert a key back to a cell.
    #[inline]
    pub(crate) fn cell(&self, key: CellKey) -> Cell {
        self.index.decode(key)
    }
}
