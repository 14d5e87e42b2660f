use maze_core::{Coord, CostGrid};

/// An ordered start→finish sequence of 4-adjacent cells and its total cost.
///
/// The cost counts every cell on the path, the start cell included. A path
/// always holds at least one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPath"))]
pub struct Path {
    steps: Vec<Coord>,
    cost: u64,
}

/// Unchecked wire form of [`Path`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPath {
    steps: Vec<Coord>,
    cost: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPath> for Path {
    type Error = &'static str;

    fn try_from(raw: RawPath) -> Result<Self, Self::Error> {
        if raw.steps.is_empty() {
            return Err("path must contain at least one step");
        }
        Ok(Self {
            steps: raw.steps,
            cost: raw.cost,
        })
    }
}

impl Path {
    pub(crate) fn new(steps: Vec<Coord>, cost: u64) -> Self {
        debug_assert!(!steps.is_empty());
        Self { steps, cost }
    }

    /// The cells of the path, start first.
    pub fn steps(&self) -> &[Coord] {
        &self.steps
    }

    /// Consume the path, returning its cells.
    pub fn into_steps(self) -> Vec<Coord> {
        self.steps
    }

    /// Total cost as computed by the search.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Number of cells on the path (both endpoints included).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// The first cell.
    pub fn start(&self) -> Coord {
        self.steps[0]
    }

    /// The last cell.
    pub fn finish(&self) -> Coord {
        self.steps[self.steps.len() - 1]
    }

    /// Whether every consecutive pair of cells is 4-adjacent.
    pub fn is_connected(&self) -> bool {
        self.steps.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Recompute the cost of the path against `grid`.
    ///
    /// Returns `None` if any cell is out of bounds or a wall.
    pub fn total_cost(&self, grid: &CostGrid) -> Option<u64> {
        self.steps.iter().try_fold(0u64, |acc, &p| {
            let cell = grid.at(p).filter(|c| c.is_passable())?;
            Some(acc + u64::from(cell.cost()))
        })
    }
}
