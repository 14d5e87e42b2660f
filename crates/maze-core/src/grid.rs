//! A cost grid for weighted maze representation.
//!
//! [`Cell`] is a newtype over `u32` holding the cost of entering a cell;
//! a cost of zero marks a wall. [`CostGrid`] is an immutable row-major
//! matrix of cells. It has no interior mutability, so a single grid can be
//! shared between threads running independent searches.

use crate::geom::{Coord, Range};
use crate::GridError;

/// A maze cell: the cost of entering it. `Cell(0)` is a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub u32);

impl Cell {
    /// The impassable cell.
    pub const WALL: Cell = Cell(0);

    /// The cost of entering this cell.
    pub const fn cost(self) -> u32 {
        self.0
    }

    /// Whether this cell can never be entered.
    pub const fn is_wall(self) -> bool {
        self.0 == 0
    }

    /// Whether this cell can be entered.
    pub const fn is_passable(self) -> bool {
        self.0 != 0
    }
}

/// A rectangular matrix of [`Cell`] costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl CostGrid {
    /// Create a new grid filled with walls.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![Cell::WALL; rows * cols],
            rows,
            cols,
        }
    }

    /// Build a grid from a list of rows of raw costs.
    ///
    /// Every row must have the same length as the first one. An empty list,
    /// or rows of zero length, produce a grid with no cells.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().copied().map(Cell));
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Return this grid with the cell at `c` replaced. Out-of-bounds
    /// coordinates leave the grid unchanged.
    pub fn with_cell(mut self, c: Coord, cell: Cell) -> Self {
        if let Some(i) = self.index(c) {
            self.cells[i] = cell;
        }
        self
    }

    /// The bounding range of this grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.rows, self.cols)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies within the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds().contains(c)
    }

    /// Row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols + c.col as usize)
    }

    /// Get the cell at a coordinate, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is in bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Cell::is_passable)
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Coord, Cell) -> bool) -> usize {
        self.iter().filter(|&(c, cell)| f(c, cell)).count()
    }

    /// Iterate over `(Coord, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// The raw costs, one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.0).collect())
            .collect()
    }
}
