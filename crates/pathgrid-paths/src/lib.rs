//! Grid search for pathgrid.
//!
//! Three interchangeable strategies run over a [`Grid`](pathgrid_core::Grid)
//! from a start cell toward a goal, each recording the order in which cells
//! are expanded and the parent links that lead back to the start:
//!
//! - **BFS** unweighted search ([`Searcher::bfs`])
//! - **Dijkstra** uniform-cost search ([`Searcher::dijkstra`])
//! - **A\*** heuristic search with the Manhattan estimate ([`Searcher::astar`])
//!
//! Neighbors are always expanded up, left, down, right, and equal-priority
//! frontier entries pop in insertion order, so every run is reproducible.
//! [`reconstruct`] turns parent links into a path and [`find_path`] /
//! [`run_search`] package everything into a [`SearchResult`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`Grid`](pathgrid_core::Grid) implements all three.

mod algorithm;
mod astar;
mod bfs;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod reconstruct;
mod result;
mod search;
mod searcher;
mod state;
mod traits;

pub use algorithm::Algorithm;
pub use distance::manhattan;
pub use error::SearchError;
pub use reconstruct::reconstruct;
pub use result::SearchResult;
pub use search::{find_path, run_search};
pub use searcher::Searcher;
pub use state::{ParentMap, SearchState, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
