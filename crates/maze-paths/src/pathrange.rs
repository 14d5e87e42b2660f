use maze_core::{Coord, Range};

/// A position with an associated accumulated cost, returned from
/// distance-map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Coord,
    pub cost: u64,
}

/// Counters describing the work done by the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Entries inserted into the frontier.
    pub pushed: usize,
    /// Entries removed from the frontier, stale ones included.
    pub popped: usize,
    /// Popped entries discarded because a cheaper path superseded them.
    pub stale: usize,
    /// Successful relaxations (distance improvements).
    pub relaxed: usize,
}

// ---------------------------------------------------------------------------
// Internal per-cell label and frontier entry
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) dist: u64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            dist: UNREACHABLE,
            parent: NO_PARENT,
            generation: 0,
        }
    }
}

pub(crate) const NO_PARENT: usize = usize::MAX;

/// Frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest priority first and, among equal priorities, the oldest entry.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) priority: u64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel distance meaning "not reached". Larger than any real path cost.
pub const UNREACHABLE: u64 = u64::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Working tables for searches over a grid rectangle.
///
/// `PathRange` owns the distance/predecessor labels, the frontier buffer and
/// the neighbor scratch buffer. Labels are invalidated lazily by bumping a
/// generation counter, so running many searches over the same range reuses
/// the allocations and never observes state from a previous call.
///
/// A `PathRange` is per-caller working state; share the grid, not this.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) stats: SearchStats,
    // distance-map output
    pub(crate) map: Vec<u64>,
    pub(crate) map_results: Vec<PathNode>,
    // scratch buffers
    pub(crate) settled: Vec<usize>,
    pub(crate) nbuf: Vec<Coord>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.cols().max(0) as usize,
            nodes: vec![Node::default(); len],
            generation: 0,
            stats: SearchStats::default(),
            map: vec![UNREACHABLE; len],
            map_results: Vec::new(),
            settled: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reallocating tables as needed.
    ///
    /// If the new size fits within existing capacity only the generation is
    /// bumped; otherwise the tables are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.cols().max(0) as usize;
        self.map_results.clear();
        self.map.clear();
        self.map.resize(new_len, UNREACHABLE);

        if new_len <= self.nodes.len() {
            self.next_generation();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Counters for the most recent search.
    #[inline]
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    // -----------------------------------------------------------------------
    // Generation / label helpers
    // -----------------------------------------------------------------------

    /// Start a new search generation, invalidating every label.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old labels could alias the new generation.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
        self.generation
    }

    /// Current distance label of `idx`, `UNREACHABLE` if untouched this generation.
    #[inline]
    pub(crate) fn dist(&self, idx: usize) -> u64 {
        let n = &self.nodes[idx];
        if n.generation == self.generation {
            n.dist
        } else {
            UNREACHABLE
        }
    }

    /// Overwrite the label of `idx` for the current generation.
    #[inline]
    pub(crate) fn label(&mut self, idx: usize, dist: u64, parent: usize) {
        let generation = self.generation;
        let n = &mut self.nodes[idx];
        n.dist = dist;
        n.parent = parent;
        n.generation = generation;
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Coord` to a flat row-major index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Coord) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let row = (p.row - self.rng.min.row) as usize;
        let col = (p.col - self.rng.min.col) as usize;
        Some(row * self.width + col)
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        let row = (idx / self.width) as i32 + self.rng.min.row;
        let col = (idx % self.width) as i32 + self.rng.min.col;
        Coord::new(row, col)
    }
}
