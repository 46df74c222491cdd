use std::collections::VecDeque;

use pathgrid_core::Cell;

use crate::searcher::Searcher;
use crate::state::SearchState;
use crate::traits::Pather;

impl Searcher {
    /// Breadth-first search from `start`, stopping once `goal` is dequeued.
    ///
    /// Each step has cost 1. Cells are marked seen when enqueued, so none is
    /// queued twice, and appended to the visited order when dequeued. If the
    /// goal is unreachable the whole component of `start` is expanded.
    pub fn bfs<P: Pather>(&mut self, pather: &P, start: Cell, goal: Cell) -> SearchState {
        let mut state = SearchState::new(self.index, self.len);
        let Some(si) = self.key(start) else {
            return state;
        };
        let goal_idx = self.key(goal);

        let mut seen = vec![false; self.len];
        let mut queue = VecDeque::new();
        seen[si.get()] = true;
        state.costs[si.get()] = 0;
        queue.push_back(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            let cp = self.cell(ci);
            state.visited.push(cp);
            if Some(ci) == goal_idx {
                break;
            }
            let next_dist = state.costs[ci.get()] + 1;

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.key(np) else {
                    continue;
                };
                if seen[ni.get()] {
                    continue;
                }
                seen[ni.get()] = true;
                state.costs[ni.get()] = next_dist;
                state.parents.link(ni, ci);
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        state
    }
}
