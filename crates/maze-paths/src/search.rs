//! Minimum-cost path search between two cells.
//!
//! Dijkstra's algorithm specialised to non-negative grid weights, with lazy
//! deletion: improved distances push a fresh frontier entry and superseded
//! entries are skipped when popped.

use std::collections::BinaryHeap;

use log::{debug, trace};
use maze_core::{Coord, CostGrid};

use crate::graph::GridGraph;
use crate::path::Path;
use crate::pathrange::{NO_PARENT, NodeRef, PathRange, SearchStats, UNREACHABLE};
use crate::traits::WeightedPather;

/// Find the cheapest 4-directional path from `start` to `finish`.
///
/// The cost of a path is the sum of the costs of every cell on it, the start
/// cell included. Returns `None` when no path exists: either endpoint is a
/// wall or out of bounds, the grid is empty, or the two cells lie in
/// disconnected regions.
pub fn find_path(grid: &CostGrid, start: Coord, finish: Coord) -> Option<Path> {
    let mut pr = PathRange::new(grid.bounds());
    pr.find_path(&GridGraph::new(grid), start, finish)
}

impl PathRange {
    /// Find the cheapest path from `start` to `finish` using `pather`.
    ///
    /// Returns the full path (including both endpoints) and its cost, or
    /// `None` if `finish` cannot be reached.
    pub fn find_path<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: Coord,
        finish: Coord,
    ) -> Option<Path> {
        self.stats = SearchStats::default();
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(finish)) else {
            debug!("find_path {start} -> {finish}: endpoint outside {}", self.rng);
            return None;
        };
        if !pather.passable(start) || !pather.passable(finish) {
            debug!("find_path {start} -> {finish}: endpoint is a wall");
            return None;
        }

        self.run(pather, start_idx, Some(goal_idx));

        let cost = self.dist(goal_idx);
        let stats = self.stats;
        if cost == UNREACHABLE {
            debug!(
                "find_path {start} -> {finish}: unreachable after {} pops",
                stats.popped
            );
            return None;
        }

        let mut steps = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            steps.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }
        steps.reverse();

        debug!(
            "find_path {start} -> {finish}: cost {cost}, {} steps, {} pops ({} stale), {} pushes",
            steps.len(),
            stats.popped,
            stats.stale,
            stats.pushed
        );
        Some(Path::new(steps, cost))
    }

    /// Run the label-correcting loop from `start_idx`.
    ///
    /// Stops as soon as `goal` is popped with a current label, or when the
    /// frontier is exhausted. Every index popped with a current label is
    /// appended to `self.settled` in pop order.
    pub(crate) fn run<P: WeightedPather>(
        &mut self,
        pather: &P,
        start_idx: usize,
        goal: Option<usize>,
    ) {
        self.next_generation();
        self.stats = SearchStats::default();
        self.settled.clear();

        let start = self.coord(start_idx);
        self.label(start_idx, pather.start_cost(start), NO_PARENT);

        let mut seq = 0u64;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            priority: self.dist(start_idx),
            seq,
        });
        self.stats.pushed += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            self.stats.popped += 1;
            let ci = current.idx;
            let current_dist = self.dist(ci);

            // Skip stale entries.
            if current.priority > current_dist {
                self.stats.stale += 1;
                trace!("stale entry for {} ({} > {})", self.coord(ci), current.priority, current_dist);
                continue;
            }
            self.settled.push(ci);

            if Some(ci) == goal {
                break;
            }

            let cp = self.coord(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let candidate = current_dist.saturating_add(pather.cost(cp, np));
                if candidate >= self.dist(ni) {
                    continue;
                }
                self.label(ni, candidate, ci);
                self.stats.relaxed += 1;
                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    priority: candidate,
                    seq,
                });
                self.stats.pushed += 1;
            }
        }

        self.nbuf = nbuf;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn grid(rows: &[&[u32]]) -> CostGrid {
        CostGrid::from_rows(rows).unwrap()
    }

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    /// Exhaustive oracle: cheapest simple path by depth-first enumeration.
    fn brute_force_cost(g: &CostGrid, start: Coord, finish: Coord) -> Option<u64> {
        fn dfs(
            g: &CostGrid,
            at: Coord,
            finish: Coord,
            acc: u64,
            seen: &mut Vec<bool>,
            best: &mut Option<u64>,
        ) {
            if best.is_some_and(|b| acc >= b) && at != finish {
                return;
            }
            if at == finish {
                *best = Some(best.map_or(acc, |b| b.min(acc)));
                return;
            }
            for n in at.neighbors_4() {
                let Some(i) = g.index(n) else { continue };
                if seen[i] || !g.is_passable(n) {
                    continue;
                }
                seen[i] = true;
                let cost = u64::from(g.at(n).unwrap().cost());
                dfs(g, n, finish, acc + cost, seen, best);
                seen[i] = false;
            }
        }

        if !g.is_passable(start) || !g.is_passable(finish) {
            return None;
        }
        let mut seen = vec![false; g.rows() * g.cols()];
        seen[g.index(start).unwrap()] = true;
        let mut best = None;
        dfs(g, start, finish, u64::from(g.at(start).unwrap().cost()), &mut seen, &mut best);
        best
    }

    fn assert_valid(g: &CostGrid, path: &Path, start: Coord, finish: Coord) {
        assert_eq!(path.start(), start);
        assert_eq!(path.finish(), finish);
        assert!(path.is_connected(), "not adjacency-connected: {:?}", path.steps());
        assert!(path.steps().iter().all(|&p| g.is_passable(p)), "path enters a wall");
        assert_eq!(path.total_cost(g), Some(path.cost()));
    }

    #[test]
    fn scenario_unique_optimum() {
        let g = grid(&[&[1, 2, 0], &[2, 0, 1], &[9, 1, 0]]);
        let path = find_path(&g, c(0, 0), c(2, 1)).unwrap();
        assert_eq!(path.steps(), &[c(0, 0), c(1, 0), c(2, 0), c(2, 1)]);
        assert_eq!(path.cost(), 13);
    }

    #[test]
    fn scenario_wall_band_is_unreachable() {
        let g = grid(&[&[1, 0, 1], &[0, 0, 0], &[1, 0, 1]]);
        assert_eq!(find_path(&g, c(0, 0), c(2, 2)), None);
    }

    #[test]
    fn wall_endpoints_are_unreachable() {
        let g = grid(&[&[0, 1], &[1, 1]]);
        assert_eq!(find_path(&g, c(0, 0), c(1, 1)), None);

        let g = grid(&[&[1, 1], &[1, 0]]);
        assert_eq!(find_path(&g, c(0, 0), c(1, 1)), None);
    }

    #[test]
    fn wall_endpoint_checked_before_search() {
        let g = grid(&[&[1, 1], &[1, 0]]);
        let mut pr = PathRange::new(g.bounds());
        assert_eq!(pr.find_path(&GridGraph::new(&g), c(0, 0), c(1, 1)), None);
        assert_eq!(pr.last_stats(), SearchStats::default());
    }

    #[test]
    fn out_of_bounds_endpoint_is_unreachable() {
        let g = grid(&[&[1, 1], &[1, 1]]);
        assert_eq!(find_path(&g, c(0, 0), c(2, 0)), None);
        assert_eq!(find_path(&g, c(-1, 0), c(1, 1)), None);
    }

    #[test]
    fn start_equals_finish() {
        let g = grid(&[&[4, 1], &[1, 1]]);
        let path = find_path(&g, c(0, 0), c(0, 0)).unwrap();
        assert_eq!(path.steps(), &[c(0, 0)]);
        assert_eq!(path.cost(), 4);

        let g = grid(&[&[7]]);
        let path = find_path(&g, c(0, 0), c(0, 0)).unwrap();
        assert_eq!(path.steps(), &[c(0, 0)]);
        assert_eq!(path.cost(), 7);
    }

    #[test]
    fn start_equals_finish_on_wall() {
        let g = grid(&[&[0]]);
        assert_eq!(find_path(&g, c(0, 0), c(0, 0)), None);
    }

    #[test]
    fn empty_grid_is_unreachable() {
        let g = CostGrid::new(0, 0);
        assert_eq!(find_path(&g, c(0, 0), c(0, 0)), None);
        let g = CostGrid::new(3, 0);
        assert_eq!(find_path(&g, c(0, 0), c(0, 0)), None);
    }

    #[test]
    fn detour_beats_expensive_shortcut() {
        let g = grid(&[&[1, 9, 1], &[1, 1, 1]]);
        let path = find_path(&g, c(0, 0), c(0, 2)).unwrap();
        assert_eq!(path.steps(), &[c(0, 0), c(1, 0), c(1, 1), c(1, 2), c(0, 2)]);
        assert_eq!(path.cost(), 5);
    }

    #[test]
    fn equal_cost_paths_are_valid_and_minimal() {
        let g = grid(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
        let path = find_path(&g, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(path.cost(), 5);
        assert_eq!(path.len(), 5);
        assert_valid(&g, &path, c(0, 0), c(2, 2));
    }

    #[test]
    fn ties_resolve_deterministically() {
        let g = grid(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
        let first = find_path(&g, c(0, 0), c(2, 2)).unwrap();
        for _ in 0..5 {
            assert_eq!(find_path(&g, c(0, 0), c(2, 2)).unwrap(), first);
        }
    }

    /// Directed graph with per-edge costs laid out on a small grid.
    struct EdgeList(Vec<(Coord, Coord, u64)>);

    impl crate::traits::Pather for EdgeList {
        fn passable(&self, _p: Coord) -> bool {
            true
        }

        fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
            buf.extend(self.0.iter().filter(|e| e.0 == p).map(|e| e.1));
        }
    }

    impl WeightedPather for EdgeList {
        fn cost(&self, from: Coord, to: Coord) -> u64 {
            self.0
                .iter()
                .find(|e| e.0 == from && e.1 == to)
                .map_or(UNREACHABLE, |e| e.2)
        }

        fn start_cost(&self, _start: Coord) -> u64 {
            0
        }
    }

    #[test]
    fn stale_entries_are_discarded() {
        // a b e
        // c d f
        // b is pushed at 10 from a, then improved to 3 via c, d.
        let (a, b, e) = (c(0, 0), c(0, 1), c(0, 2));
        let (cc, d, f) = (c(1, 0), c(1, 1), c(1, 2));
        let graph = EdgeList(vec![
            (a, b, 10),
            (a, cc, 1),
            (cc, d, 1),
            (d, b, 1),
            (d, f, 1),
            (b, e, 20),
        ]);
        let mut pr = PathRange::new(maze_core::Range::with_size(2, 3));
        let path = pr.find_path(&graph, a, e).unwrap();
        assert_eq!(path.steps(), &[a, cc, d, b, e]);
        assert_eq!(path.cost(), 23);

        let stats = pr.last_stats();
        assert_eq!(stats.stale, 1, "{stats:?}");
        assert_eq!(stats.pushed, stats.relaxed + 1);
        assert_eq!(stats.popped, 7);
    }

    #[test]
    fn entering_costs_never_produce_stale_entries() {
        let g = grid(&[&[1, 9, 1], &[1, 1, 1], &[1, 1, 1]]);
        let mut pr = PathRange::new(g.bounds());
        let path = pr.find_path(&GridGraph::new(&g), c(0, 0), c(0, 2)).unwrap();
        assert_eq!(path.cost(), 5);
        assert_eq!(pr.last_stats().stale, 0);
    }

    #[test]
    fn early_exit_leaves_far_cells_unsettled() {
        let g = CostGrid::from_rows(&vec![vec![1u32; 50]; 50]).unwrap();
        let mut pr = PathRange::new(g.bounds());
        let path = pr.find_path(&GridGraph::new(&g), c(0, 0), c(0, 1)).unwrap();
        assert_eq!(path.cost(), 2);
        assert!(pr.settled.len() < 10, "settled {} cells", pr.settled.len());
    }

    #[test]
    fn reused_range_does_not_leak_state() {
        let open = grid(&[&[1, 1, 1], &[1, 1, 1]]);
        let walled = grid(&[&[1, 0, 1], &[1, 0, 1]]);
        let mut pr = PathRange::new(open.bounds());
        assert!(pr.find_path(&GridGraph::new(&open), c(0, 0), c(0, 2)).is_some());
        assert_eq!(pr.find_path(&GridGraph::new(&walled), c(0, 0), c(0, 2)), None);
        assert!(pr.find_path(&GridGraph::new(&open), c(1, 2), c(0, 0)).is_some());
    }

    #[test]
    fn concurrent_searches_share_one_grid() {
        let g = grid(&[&[1, 2, 0], &[2, 0, 1], &[9, 1, 0]]);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| find_path(&g, c(0, 0), c(2, 1)).map(|p| p.cost())))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), Some(13));
            }
        });
    }

    #[test]
    fn matches_exhaustive_oracle_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..300 {
            let rows = rng.random_range(1..=4usize);
            let cols = rng.random_range(1..=4usize);
            let cells: Vec<Vec<u32>> = (0..rows)
                .map(|_| {
                    (0..cols)
                        .map(|_| if rng.random_bool(0.25) { 0 } else { rng.random_range(1..=9) })
                        .collect()
                })
                .collect();
            let g = CostGrid::from_rows(&cells).unwrap();
            let start = c(rng.random_range(0..rows as i32), rng.random_range(0..cols as i32));
            let finish = c(rng.random_range(0..rows as i32), rng.random_range(0..cols as i32));

            let expected = brute_force_cost(&g, start, finish);
            let found = find_path(&g, start, finish);
            assert_eq!(
                found.as_ref().map(Path::cost),
                expected,
                "grid {cells:?} {start} -> {finish}"
            );
            if let Some(path) = found {
                assert_valid(&g, &path, start, finish);
            }
        }
    }
}
