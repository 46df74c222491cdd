//! Backward path reconstruction from parent links.

use log::error;
use pathgrid_core::{Cell, CellIndex};

use crate::error::SearchError;
use crate::state::ParentMap;

/// Walk `parents` backward from `goal` and return the path in forward order.
///
/// The walk stops at the first cell without a parent. Since the start cell
/// never has one, the path runs from the cell *after* the start through the
/// goal; it is empty when the goal was not reached or equals the start.
///
/// Revisiting a cell means the links form a cycle, which the engines never
/// produce; it is reported as [`SearchError::InternalInconsistency`].
pub fn reconstruct(
    goal: Cell,
    parents: &ParentMap,
    index: CellIndex,
) -> Result<Vec<Cell>, SearchError> {
    let mut path = Vec::new();
    if goal.row < 0 || goal.col < 0 || goal.col >= index.cols() {
        return Ok(path);
    }

    let mut walked = vec![false; parents.len()];
    let mut key = index.encode(goal);
    while let Some(parent) = parents.get(key) {
        let cell = index.decode(key);
        if std::mem::replace(&mut walked[key.get()], true) {
            error!("parent links cycle through {cell} while reconstructing toward {goal}");
            return Err(SearchError::InternalInconsistency { cell });
        }
        path.push(cell);
        key = parent;
    }

    path.reverse();
    Ok(path)
}
