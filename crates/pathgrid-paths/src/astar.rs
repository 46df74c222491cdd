use log::trace;
use pathgrid_core::Cell;

use crate::frontier::Frontier;
use crate::searcher::Searcher;
use crate::state::SearchState;
use crate::traits::AstarPather;

impl Searcher {
    /// A* search from `start`, stopping once `goal` is popped.
    ///
    /// The frontier is ordered by `f = g + estimate(cell, goal)`. Popped
    /// entries are recorded as visited without a staleness check, so a cell
    /// pushed several times with improving `g` can appear more than once in
    /// [`SearchState::visited`]. Relaxation always starts from the best
    /// recorded `g`, so a repeated expansion never changes costs or parents.
    pub fn astar<P: AstarPather>(&mut self, pather: &P, start: Cell, goal: Cell) -> SearchState {
        let mut state = SearchState::new(self.index, self.len);
        let Some(si) = self.key(start) else {
            return state;
        };
        let goal_idx = self.key(goal);

        let mut open = Frontier::new();
        state.costs[si.get()] = 0;
        open.push(si, pather.estimate(start, goal), 0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.key;
            let cp = self.cell(ci);
            let current_g = state.costs[ci.get()];
            if current.g > current_g {
                trace!("astar: re-expanding {cp} from a superseded entry");
            }

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
                let tentative_g = current_g + pather.cost(cp, np);
                if tentative_g >= state.costs[ni.get()] {
                    continue;
                }
                state.costs[ni.get()] = tentative_g;
                state.parents.link(ni, ci);
                open.push(ni, tentative_g + pather.estimate(np, goal), tentative_g);
            }
        }

        self.nbuf = nbuf;
        state
    }
}
