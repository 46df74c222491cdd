//! **pathgrid-core**: grid model and cell indexing.
//!
//! This crate provides the foundational types shared by the *pathgrid*
//! crates: the [`Cell`] coordinate, the linear [`CellKey`] scheme behind
//! [`CellIndex`], and the passability [`Grid`] built from an obstacle
//! marker string.

pub mod geom;
pub mod grid;
pub mod index;

pub use geom::Cell;
pub use grid::{BLOCKED, Grid, GridError};
pub use index::{CellIndex, CellKey};
