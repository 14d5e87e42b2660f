use maze_core::Coord;

/// Minimal pathfinding interface — passability and neighbor enumeration.
pub trait Pather {
    /// Whether `p` can be entered at all (in bounds and not a wall).
    fn passable(&self, p: Coord) -> bool;

    /// Append the enterable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling. Order must be deterministic.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);
}

/// Pather with non-negative entering costs.
pub trait WeightedPather: Pather {
    /// Cost of stepping from `from` into adjacent `to`.
    fn cost(&self, from: Coord, to: Coord) -> u64;

    /// Cost charged for standing on the start cell before the first step.
    fn start_cost(&self, start: Coord) -> u64;
}
