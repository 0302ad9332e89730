use covert_core::Point;

use crate::pathfinder::{PathNode, Pathfinder, UNREACHABLE};
use crate::traits::Pather;

impl Pathfinder {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist` or at the configured bounds; without bounds, `max_dist` is
    /// the only limit on an open plane. Sources outside the bounds are
    /// ignored. Returns a slice of all reached nodes in discovery order.
    pub fn bfs_map<P: Pather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_dist: i32,
    ) -> &[PathNode] {
        // Reset.
        self.bfs_map.clear();
        self.bfs_queue.clear();
        self.bfs_results.clear();

        for &src in sources {
            if !self.config.in_bounds(src) || self.bfs_map.contains_key(&src) {
                continue;
            }
            self.bfs_map.insert(src, 0);
            self.bfs_queue.push_back(src);
            self.bfs_results.push(PathNode { pos: src, cost: 0 });
        }

        while let Some(cp) = self.bfs_queue.pop_front() {
            let Some(&current_dist) = self.bfs_map.get(&cp) else {
                continue;
            };
            let nd = current_dist + 1;
            if nd > max_dist {
                continue;
            }

            self.collect_neighbors(pather, cp);
            let nbuf = std::mem::take(&mut self.nbuf);

            for &np in nbuf.iter() {
                if self.bfs_map.contains_key(&np) {
                    continue;
                }
                self.bfs_map.insert(np, nd);
                self.bfs_queue.push_back(np);
                self.bfs_results.push(PathNode { pos: np, cost: nd });
            }

            self.nbuf = nbuf;
        }

        log::debug!(
            "bfs: {} sources reached {} cells",
            sources.len(),
            self.bfs_results.len()
        );
        &self.bfs_results
    }

    /// Query the BFS distance at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point was not reached by the last
    /// `bfs_map` call.
    pub fn bfs_at(&self, p: Point) -> i32 {
        self.bfs_map.get(&p).copied().unwrap_or(UNREACHABLE)
    }
}
