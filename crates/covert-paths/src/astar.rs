use std::collections::hash_map::Entry;

use covert_core::{Direction, Point};

use crate::config::BlockedStart;
use crate::pathfinder::{Node, NodeRef, Pathfinder};
use crate::route::Route;
use crate::traits::AstarPather;

impl Pathfinder {
    /// Compute a shortest route from `from` to `to` using A*.
    ///
    /// Returns `Some` with an empty route when `from == to`, `Some` with the
    /// moves of a minimum-cost route when the goal is reachable, and `None`
    /// when it is not: the goal is impassable, the start is impassable under
    /// [`BlockedStart::Reject`], or the frontier runs dry.
    ///
    /// The frontier pops the lowest `f = g + h` first, then the lowest `h`,
    /// then the node that entered the frontier earliest, so the result is
    /// fully determined by the pather and the endpoints.
    pub fn find_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Route> {
        if from == to {
            log::debug!("astar: {from} is already the goal");
            return Some(Route::default());
        }
        if !self.admits(pather, to) {
            log::debug!("astar: goal {to} is blocked");
            return None;
        }
        if !self.config.in_bounds(from) {
            log::debug!("astar: start {from} is outside the search bounds");
            return None;
        }
        if !pather.passable(from) {
            match self.config.blocked_start {
                BlockedStart::Reject => {
                    log::debug!("astar: start {from} is blocked, rejecting");
                    return None;
                }
                BlockedStart::Allow => {
                    log::debug!("astar: start {from} is blocked, searching anyway");
                }
            }
        }

        self.nodes.clear();
        self.open.clear();
        self.next_seq = 0;

        // Initialise the start node.
        let h = pather.estimate(from, to);
        self.nodes.insert(
            from,
            Node {
                g: 0,
                h,
                parent: None,
                dir: None,
                seq: self.next_seq,
                open: true,
            },
        );
        self.open.push(NodeRef {
            pos: from,
            f: h,
            h,
            seq: self.next_seq,
        });
        self.next_seq += 1;

        let mut expansions = 0usize;

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };

            // Skip stale entries: closed, or superseded by a cheaper update.
            let Some(node) = self.nodes.get_mut(&current.pos) else {
                continue;
            };
            if !node.open || node.f() != current.f {
                continue;
            }
            node.open = false;

            if current.pos == to {
                break 'search true;
            }

            let current_g = node.g;
            expansions += 1;
            log::trace!(
                "astar: expand {} (g={}, h={})",
                current.pos,
                current_g,
                current.h
            );

            self.collect_neighbors(pather, current.pos);
            let nbuf = std::mem::take(&mut self.nbuf);

            for &np in nbuf.iter() {
                let Some(dir) = Direction::between(current.pos, np) else {
                    continue;
                };
                let tentative_g = current_g.saturating_add(pather.cost(current.pos, np));

                match self.nodes.entry(np) {
                    Entry::Occupied(mut e) => {
                        let n = e.get_mut();
                        // Closed, or no improvement on the recorded cost.
                        if !n.open || tentative_g >= n.g {
                            continue;
                        }
                        n.g = tentative_g;
                        n.parent = Some(current.pos);
                        n.dir = Some(dir);
                        // Keep the original sequence number: an updated node
                        // holds its place in the frontier's FIFO order.
                        self.open.push(NodeRef {
                            pos: np,
                            f: n.f(),
                            h: n.h,
                            seq: n.seq,
                        });
                    }
                    Entry::Vacant(e) => {
                        let h = pather.estimate(np, to);
                        let seq = self.next_seq;
                        self.next_seq += 1;
                        e.insert(Node {
                            g: tentative_g,
                            h,
                            parent: Some(current.pos),
                            dir: Some(dir),
                            seq,
                            open: true,
                        });
                        self.open.push(NodeRef {
                            pos: np,
                            f: tentative_g.saturating_add(h),
                            h,
                            seq,
                        });
                    }
                }
            }

            self.nbuf = nbuf;
        };

        if !found {
            log::debug!("astar: {from} -> {to}: no route after {expansions} expansions");
            return None;
        }

        // Reconstruct the route by walking predecessors back to the start.
        let mut moves = Vec::new();
        let mut cur = to;
        while let Some(node) = self.nodes.get(&cur) {
            let (Some(parent), Some(dir)) = (node.parent, node.dir) else {
                break;
            };
            moves.push(dir);
            cur = parent;
        }
        moves.reverse();

        log::debug!(
            "astar: {from} -> {to}: route of {} moves after {expansions} expansions",
            moves.len()
        );
        Some(Route::new(moves))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use covert_core::Range;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::config::SearchConfig;
    use crate::distance::manhattan;
    use crate::traits::{Pather, WeightedPather};
    use crate::UNREACHABLE;

    #[derive(Default)]
    struct Walls {
        walls: HashSet<Point>,
    }

    impl Walls {
        fn new(walls: impl IntoIterator<Item = (i32, i32)>) -> Self {
            Self {
                walls: walls.into_iter().map(Point::from).collect(),
            }
        }
    }

    impl Pather for Walls {
        fn passable(&self, p: Point) -> bool {
            !self.walls.contains(&p)
        }
    }

    impl WeightedPather for Walls {
        fn cost(&self, _from: Point, _to: Point) -> i32 {
            1
        }
    }

    impl AstarPather for Walls {
        fn estimate(&self, from: Point, to: Point) -> i32 {
            manhattan(from, to)
        }
    }

    fn assert_valid(walls: &Walls, route: &Route, from: Point, to: Point) {
        assert_eq!(route.destination(from), to);
        for p in route.points(from) {
            assert!(walls.passable(p), "route steps onto blocked cell {p}");
        }
    }

    #[test]
    fn same_start_and_goal_is_empty_route() {
        let mut pf = Pathfinder::new();
        let p = Point::new(3, -7);
        assert_eq!(pf.find_path(&Walls::default(), p, p), Some(Route::default()));
        // Even when the cell is blocked.
        let walls = Walls::new([(3, -7)]);
        assert_eq!(pf.find_path(&walls, p, p), Some(Route::default()));
    }

    #[test]
    fn open_field_route_is_manhattan_length() {
        let mut pf = Pathfinder::new();
        let open = Walls::default();
        let pairs = [
            ((0, 0), (4, 4)),
            ((-3, 2), (5, -6)),
            ((10, 0), (0, 0)),
            ((0, 0), (0, 1)),
            ((-100, -100), (100, 100)),
        ];
        for (a, b) in pairs {
            let (a, b) = (Point::from(a), Point::from(b));
            let route = pf.find_path(&open, a, b).expect("open field is connected");
            assert_eq!(route.len() as i32, manhattan(a, b));
            assert_valid(&open, &route, a, b);
        }
    }

    #[test]
    fn tie_break_is_deterministic() {
        let mut pf = Pathfinder::new();
        let open = Walls::default();
        let route = pf.find_path(&open, Point::new(0, 0), Point::new(2, 1)).unwrap();
        assert_eq!(route.to_string(), "EES");
        let again = pf.find_path(&open, Point::new(0, 0), Point::new(2, 1)).unwrap();
        assert_eq!(route, again);
    }

    #[test]
    fn detours_around_wall() {
        let mut pf = Pathfinder::new();
        let walls = Walls::new((0..=5).map(|y| (1, y)));
        let (a, b) = (Point::new(0, 0), Point::new(5, 0));
        let route = pf.find_path(&walls, a, b).unwrap();
        assert_eq!(route.len(), 7);
        assert_valid(&walls, &route, a, b);
    }

    #[test]
    fn routes_along_the_edge_of_the_plane() {
        let mut pf = Pathfinder::new();
        let west = Point::new(i32::MIN, 0);
        let route = pf
            .find_path(&Walls::default(), west, Point::new(i32::MIN + 1, 0))
            .expect("adjacent cells");
        assert_eq!(route.to_string(), "E");

        // East of the start is off the plane, south is walled.
        let walls = Walls::new([(i32::MAX, 1)]);
        let (from, to) = (Point::new(i32::MAX, 0), Point::new(i32::MAX, 2));
        let route = pf.find_path(&walls, from, to).expect("detour on the west side");
        assert_eq!(route.to_string(), "WSSE");
        assert_valid(&walls, &route, from, to);
    }

    #[test]
    fn blocked_goal_has_no_route() {
        let mut pf = Pathfinder::new();
        let walls = Walls::new([(4, 4)]);
        assert_eq!(pf.find_path(&walls, Point::new(0, 0), Point::new(4, 4)), None);
    }

    #[test]
    fn enclosed_start_exhausts_frontier() {
        let mut pf = Pathfinder::new();
        // Ring around (0, 0).
        let walls = Walls::new([(-1, 0), (1, 0), (0, -1), (0, 1)]);
        assert_eq!(pf.find_path(&walls, Point::new(0, 0), Point::new(5, 5)), None);
    }

    #[test]
    fn enclosed_goal_needs_bounds() {
        // Ring around (5, 5); the start region is unbounded without a window.
        let walls = Walls::new([(4, 5), (6, 5), (5, 4), (5, 6)]);
        let cfg = SearchConfig::new().with_bounds(Range::new(-2, -2, 12, 12));
        let mut pf = Pathfinder::with_config(cfg);
        assert_eq!(pf.find_path(&walls, Point::new(0, 0), Point::new(5, 5)), None);
    }

    #[test]
    fn goal_outside_bounds_has_no_route() {
        let cfg = SearchConfig::new().with_bounds(Range::new(0, 0, 5, 5));
        let mut pf = Pathfinder::with_config(cfg);
        let open = Walls::default();
        assert_eq!(pf.find_path(&open, Point::new(0, 0), Point::new(5, 0)), None);
        assert_eq!(pf.find_path(&open, Point::new(-1, 0), Point::new(2, 0)), None);
        assert!(pf.find_path(&open, Point::new(0, 0), Point::new(4, 0)).is_some());
    }

    #[test]
    fn blocked_start_policies() {
        let walls = Walls::new([(0, 0)]);
        let (a, b) = (Point::new(0, 0), Point::new(2, 0));

        let mut reject = Pathfinder::new();
        assert_eq!(reject.find_path(&walls, a, b), None);

        let cfg = SearchConfig::new().with_blocked_start(BlockedStart::Allow);
        let mut allow = Pathfinder::with_config(cfg);
        let route = allow.find_path(&walls, a, b).unwrap();
        assert_eq!(route.to_string(), "EE");
    }

    #[test]
    fn bounded_route_stays_inside() {
        let bounds = Range::new(0, 0, 3, 8);
        // Wall across the window with a gap at x = 2.
        let walls = Walls::new([(0, 4), (1, 4)]);
        let mut pf = Pathfinder::with_config(SearchConfig::new().with_bounds(bounds));
        let (a, b) = (Point::new(0, 0), Point::new(0, 7));
        let route = pf.find_path(&walls, a, b).unwrap();
        assert_valid(&walls, &route, a, b);
        assert!(route.points(a).all(|p| bounds.contains(p)));
        assert_eq!(route.len(), 11);
    }

    #[test]
    fn matches_bfs_on_random_instances() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Range::new(0, 0, 12, 12);
        let cfg = SearchConfig::new().with_bounds(bounds);
        let mut astar = Pathfinder::with_config(cfg);
        let mut bfs = Pathfinder::with_config(cfg);

        for _ in 0..200 {
            let walls = Walls {
                walls: bounds.iter().filter(|_| rng.random_bool(0.3)).collect(),
            };
            let a = Point::new(rng.random_range(0..12), rng.random_range(0..12));
            let b = Point::new(rng.random_range(0..12), rng.random_range(0..12));
            if !walls.passable(a) || !walls.passable(b) {
                continue;
            }

            bfs.bfs_map(&walls, &[a], i32::MAX - 1);
            let expected = bfs.bfs_at(b);

            match astar.find_path(&walls, a, b) {
                Some(route) => {
                    assert_eq!(route.len() as i32, expected, "{a} -> {b}");
                    assert!(route.len() as i32 >= manhattan(a, b));
                    assert_valid(&walls, &route, a, b);
                }
                None => assert_eq!(expected, UNREACHABLE, "{a} -> {b}"),
            }
        }
    }

    #[test]
    fn queries_do_not_leak_state() {
        let walls = Walls::new([(2, 2), (2, 3), (3, 2)]);
        let queries = [
            (Point::new(0, 0), Point::new(4, 4)),
            (Point::new(4, 4), Point::new(-2, 1)),
            (Point::new(1, 5), Point::new(6, 0)),
        ];
        let mut reused = Pathfinder::new();
        for (a, b) in queries {
            let fresh = Pathfinder::new().find_path(&walls, a, b);
            assert_eq!(reused.find_path(&walls, a, b), fresh);
        }
    }
}
