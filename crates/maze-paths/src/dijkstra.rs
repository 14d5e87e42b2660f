use maze_core::Coord;

use crate::PathRange;
use crate::pathrange::{PathNode, UNREACHABLE};
use crate::traits::WeightedPather;

impl PathRange {
    /// Compute the cheapest cost from `source` to every reachable cell.
    ///
    /// Costs follow the same convention as [`find_path`](PathRange::find_path):
    /// the source's own cost is charged. Returns the reached cells in the
    /// order they were finalized (non-decreasing cost). A wall or
    /// out-of-range source reaches nothing.
    pub fn distance_map<P: WeightedPather>(&mut self, pather: &P, source: Coord) -> &[PathNode] {
        for v in self.map.iter_mut() {
            *v = UNREACHABLE;
        }
        self.map_results.clear();
        self.stats = Default::default();

        let Some(si) = self.idx(source).filter(|_| pather.passable(source)) else {
            return &self.map_results;
        };
        self.run(pather, si, None);

        for k in 0..self.settled.len() {
            let i = self.settled[k];
            let cost = self.dist(i);
            self.map[i] = cost;
            self.map_results.push(PathNode {
                pos: self.coord(i),
                cost,
            });
        }
        log::debug!(
            "distance_map from {source}: {} cells reached",
            self.map_results.len()
        );
        &self.map_results
    }

    /// Query the cost at a specific cell from the last
    /// [`distance_map`](PathRange::distance_map) call.
    ///
    /// Returns [`UNREACHABLE`] if the cell is outside the range or was not
    /// reached.
    pub fn distance_at(&self, p: Coord) -> u64 {
        match self.idx(p) {
            Some(i) => self.map[i],
            None => UNREACHABLE,
        }
    }
}
