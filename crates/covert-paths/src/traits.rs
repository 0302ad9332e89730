use covert_core::{Direction, Point};

/// Minimal pathfinding interface: answers passability and enumerates
/// neighbours.
pub trait Pather {
    /// Whether a route may step onto `p`. Must be defined for every point.
    fn passable(&self, p: Point) -> bool;

    /// Append passable neighbours of `p` into `buf`. The caller clears `buf`
    /// before calling.
    ///
    /// Neighbours must be 4-adjacent to `p`. The default yields them in
    /// [`Direction::SEARCH_ORDER`], which fixes the tie order of searches,
    /// and skips moves that would leave the `i32` plane.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for dir in Direction::SEARCH_ORDER {
            match p.checked_step(dir) {
                Some(n) if self.passable(n) => buf.push(n),
                _ => {}
            }
        }
    }
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}
