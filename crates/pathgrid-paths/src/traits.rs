use pathgrid_core::{Cell, Grid};

use crate::distance::manhattan;

/// Source of moves for the breadth-first search.
pub trait Pather {
    /// Push the cells reachable in one step from `c` onto `buf`, which the
    /// searcher has already cleared. Their order decides ties between equal
    /// priorities, so grid pathers list them up, left, down, right.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Adds step costs for uniform-cost search.
pub trait WeightedPather: Pather {
    /// Price of the step `from -> to` between neighbors, at least 1.
    fn cost(&self, from: Cell, to: Cell) -> i32;
}

/// Adds the remaining-distance guess that orders the A* frontier.
pub trait AstarPather: WeightedPather {
    /// Lower bound on the cost of reaching `to` from `from`. Overestimating
    /// breaks the shortest-path guarantee.
    fn estimate(&self, from: Cell, to: Cell) -> i32;
}

/// A grid is searched 4-way (up, left, down, right) over passable cells,
/// with unit step cost and the Manhattan heuristic.
impl Pather for Grid {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend(c.neighbors_4().into_iter().filter(|&n| self.in_bounds(n)));
    }
}

impl WeightedPather for Grid {
    fn cost(&self, _from: Cell, _to: Cell) -> i32 {
        1
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}
