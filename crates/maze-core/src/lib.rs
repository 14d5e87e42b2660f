//! **maze-core** — core types for weighted maze grids.
//!
//! This crate provides the data model shared by the *maze* crates:
//! `(row, col)` geometry primitives and an immutable cost grid in which
//! every cell holds the cost of entering it and zero marks a wall.

pub mod geom;
pub mod grid;

pub use geom::{Coord, Range};
pub use grid::{Cell, CostGrid};

/// Errors raised while building a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}
