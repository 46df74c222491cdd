use pathgrid_core::Cell;

/// The product of one search: expansion order plus the reconstructed path.
///
/// With the `serde` feature this serialises as
/// `{"visited": [[r, c], ...], "path": [[r, c], ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells in expansion order. A* may list a cell more than once.
    pub visited: Vec<Cell>,
    /// Cells after the start through the goal; empty if the goal was not
    /// reached or equals the start.
    pub path: Vec<Cell>,
}

impl SearchResult {
    /// Package an expansion order and a path.
    pub fn new(visited: Vec<Cell>, path: Vec<Cell>) -> Self {
        Self { visited, path }
    }

    /// Whether the search reached `goal`.
    ///
    /// Every search stops right after expanding the goal, so this also holds
    /// when start and goal coincide and the path is empty.
    pub fn reached(&self, goal: Cell) -> bool {
        self.visited.last() == Some(&goal)
    }

    /// Number of steps along the path.
    pub fn cost(&self) -> usize {
        self.path.len()
    }
}
