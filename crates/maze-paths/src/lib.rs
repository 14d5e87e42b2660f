//! Minimum-cost pathfinding over weighted maze grids.
//!
//! Every cell of a [`CostGrid`](maze_core::CostGrid) holds the cost of
//! entering it and zero marks a wall. This crate searches the implicit
//! 4-connected graph over such a grid:
//!
//! - **Shortest path** between two cells ([`find_path`], [`PathRange::find_path`])
//! - **Distance maps** from one source ([`PathRange::distance_map`])
//!
//! Both run Dijkstra's algorithm with lazy deletion over a binary heap.
//! [`PathRange`] owns the working tables, so repeated queries over the same
//! range reuse their allocations.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | passability, neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | entering costs |
//!
//! [`GridGraph`] implements both over a `CostGrid`.

mod dijkstra;
mod graph;
mod path;
mod pathrange;
mod search;
mod traits;

pub use graph::GridGraph;
pub use path::Path;
pub use pathrange::{PathNode, PathRange, SearchStats, UNREACHABLE};
pub use search::find_path;
pub use traits::{Pather, WeightedPather};
