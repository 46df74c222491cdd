//! Request entry points: the typed [`find_path`] and the wire-level
//! [`run_search`].

use log::debug;
use pathgrid_core::{Cell, Grid};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::reconstruct::reconstruct;
use crate::result::SearchResult;
use crate::searcher::Searcher;

/// Search `grid` from `start` to `goal` with `algorithm`.
///
/// Both endpoints must lie inside the grid and the start must be passable.
/// A blocked goal is never reached, which yields an empty path.
pub fn find_path(
    grid: &Grid,
    algorithm: Algorithm,
    start: Cell,
    goal: Cell,
) -> Result<SearchResult, SearchError> {
    grid.check_passable(start)?;
    grid.check(goal)?;

    let state = Searcher::new(grid).run(algorithm, grid, start, goal);
    let path = reconstruct(goal, state.parents(), state.index())?;
    debug!(
        "{algorithm} {start} -> {goal} on {}x{}: expanded {}, path length {}",
        grid.rows(),
        grid.cols(),
        state.visited().len(),
        path.len()
    );
    Ok(SearchResult::new(state.into_visited(), path))
}

/// Wire-level entry point for host bridges.
///
/// `algorithm` is matched by name with the A* fallback of
/// [`Algorithm::from_name`]; `obstacles` is parsed by [`Grid::build`].
#[allow(clippy::too_many_arguments)]
pub fn run_search(
    algorithm: &str,
    start_row: i32,
    start_col: i32,
    end_row: i32,
    end_col: i32,
    obstacles: &str,
    rows: i32,
    cols: i32,
) -> Result<SearchResult, SearchError> {
    let grid = Grid::build(obstacles, rows, cols)?;
    find_path(
        &grid,
        Algorithm::from_name(algorithm),
        Cell::new(start_row, start_col),
        Cell::new(end_row, end_col),
    )
}
