//! [`GridGraph`]: the implicit graph over a [`CostGrid`].
//!
//! Vertices are passable cells, edges join 4-adjacent passable cells, and
//! the weight of an edge is the cost of the cell it enters.

use maze_core::{Coord, CostGrid};

use crate::traits::{Pather, WeightedPather};

/// Read-only adapter exposing a [`CostGrid`] to the search algorithms.
#[derive(Debug, Clone, Copy)]
pub struct GridGraph<'a> {
    grid: &'a CostGrid,
}

impl<'a> GridGraph<'a> {
    /// Wrap a grid.
    pub fn new(grid: &'a CostGrid) -> Self {
        Self { grid }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &'a CostGrid {
        self.grid
    }

    /// Whether `p` is in bounds and its cost is nonzero.
    #[inline]
    pub fn is_passable(&self, p: Coord) -> bool {
        self.grid.is_passable(p)
    }

    /// The stored cost of `p`. Walls and out-of-bounds cells report 0.
    #[inline]
    pub fn cost_of(&self, p: Coord) -> u64 {
        self.grid.at(p).map_or(0, |c| u64::from(c.cost()))
    }
}

impl Pather for GridGraph<'_> {
    #[inline]
    fn passable(&self, p: Coord) -> bool {
        self.is_passable(p)
    }

    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_passable(n)));
    }
}

impl WeightedPather for GridGraph<'_> {
    #[inline]
    fn cost(&self, _from: Coord, to: Coord) -> u64 {
        self.cost_of(to)
    }

    #[inline]
    fn start_cost(&self, start: Coord) -> u64 {
        self.cost_of(start)
    }
}
