use log::trace;
use pathgrid_core::Cell;

use crate::frontier::Frontier;
use crate::searcher::Searcher;
use crate::state::SearchState;
use crate::traits::WeightedPather;

impl Searcher {
    /// Uniform-cost (Dijkstra) search from `start`, stopping once `goal` is
    /// popped.
    ///
    /// Entries whose cost has since been improved are discarded on pop
    /// without being recorded as visited. A neighbor is relaxed only on a
    /// strict cost improvement.
    pub fn dijkstra<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: Cell,
        goal: Cell,
    ) -> SearchState {
        let mut state = SearchState::new(self.index, self.len);
        let Some(si) = self.key(start) else {
            return state;
        };
        let goal_idx = self.key(goal);

        let mut open = Frontier::new();
        state.costs[si.get()] = 0;
        open.push(si, 0, 0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.key;
            // Skip stale entries.
            if current.g > state.costs[ci.get()] {
                trace!("dijkstra: discarding stale entry {ci} at cost {}", current.g);
                continue;
            }

            let cp = self.cell(ci);
            state.visited.push(cp);
            if Some(ci) == goal_idx {
                break;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.key(np) else {
                    continue;
                };
                let tentative = current.g + pather.cost(cp, np);
                if tentative >= state.costs[ni.get()] {
                    continue;
                }
                state.costs[ni.get()] = tentative;
                state.parents.link(ni, ci);
                open.push(ni, tentative, tentative);
            }
        }

        self.nbuf = nbuf;
        state
    }
}

#[cfg(test)]
mod tests {
    use pathgrid_core::{CellKey, Grid};

    use super::*;
    use crate::traits::Pather;

    fn c(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    #[test]
    fn open_3x3_matches_breadth_first_order() {
        let g = Grid::new(3, 3).unwrap();
        let mut s = Searcher::new(&g);
        let uniform = s.dijkstra(&g, c(0, 0), c(2, 2));
        let bfs = s.bfs(&g, c(0, 0), c(2, 2));
        assert_eq!(uniform.visited(), bfs.visited());
        assert_eq!(uniform.parents(), bfs.parents());
    }

    /// Moving right along row 0 costs 5, every other step costs 1.
    struct TopRowToll<'a>(&'a Grid);

    impl Pather for TopRowToll<'_> {
        fn neighbors(&self, p: Cell, buf: &mut Vec<Cell>) {
            self.0.neighbors(p, buf);
        }
    }

    impl WeightedPather for TopRowToll<'_> {
        fn cost(&self, from: Cell, to: Cell) -> i32 {
            if from.row == 0 && to.col > from.col { 5 } else { 1 }
        }
    }

    #[test]
    fn stale_entries_are_not_visited() {
        // 2x2: (0,1) is first pushed at cost 5 from (0,0), then improved to
        // 3 via (1,0) -> (1,1) -> up. Its cost-5 entry must be skipped.
        let g = Grid::new(2, 2).unwrap();
        let pather = TopRowToll(&g);
        let state = Searcher::new(&g).dijkstra(&pather, c(0, 0), c(9, 9));
        assert_eq!(state.visited(), &[c(0, 0), c(1, 0), c(1, 1), c(0, 1)]);
        assert_eq!(state.cost_at(c(0, 1)), 3);
        assert_eq!(state.parents().get(CellKey(1)), Some(CellKey(3)));
    }

    #[test]
    fn blocked_cells_are_never_expanded() {
        // .#.
        // .#.
        // ...
        let g = Grid::build("010010000", 3, 3).unwrap();
        let state = Searcher::new(&g).dijkstra(&g, c(0, 0), c(0, 2));
        assert!(!state.visited().contains(&c(0, 1)));
        assert!(!state.visited().contains(&c(1, 1)));
        assert_eq!(state.visited().last(), Some(&c(0, 2)));
        assert_eq!(state.cost_at(c(0, 2)), 6);
    }
}
