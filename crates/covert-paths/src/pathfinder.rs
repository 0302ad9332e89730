use std::collections::{BinaryHeap, HashMap, VecDeque};

use covert_core::{Direction, Point};

use crate::config::SearchConfig;
use crate::traits::Pather;

/// A position with an associated cost, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel value meaning "unreachable" in BFS maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Internal node for A* searches
// ---------------------------------------------------------------------------

/// Search state for one visited cell. The cell itself is the map key.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: Option<Point>,
    /// Move that led here from `parent`.
    pub(crate) dir: Option<Direction>,
    /// Order of first insertion into the frontier.
    pub(crate) seq: u32,
    pub(crate) open: bool,
}

impl Node {
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g.saturating_add(self.h)
    }
}

/// Frontier entry, ordered by `(f, h, seq)` for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) pos: Point,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) seq: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first.
        (other.f, other.h, other.seq).cmp(&(self.f, self.h, self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Central coordinator for searches on the unbounded grid.
///
/// `Pathfinder` owns the search bookkeeping (node map, frontier heap, BFS
/// queue, neighbour scratch buffer) so that repeated queries reuse their
/// allocations. Every query starts by clearing that state: nothing carries
/// over from one call to the next.
#[derive(Debug, Default)]
pub struct Pathfinder {
    pub(crate) config: SearchConfig,
    // A* state
    pub(crate) nodes: HashMap<Point, Node>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) next_seq: u32,
    // BFS state
    pub(crate) bfs_map: HashMap<Point, i32>,
    pub(crate) bfs_queue: VecDeque<Point>,
    pub(crate) bfs_results: Vec<PathNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Pathfinder {
    /// Create a pathfinder with the default [`SearchConfig`].
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Create a pathfinder with the given configuration.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            nbuf: Vec::with_capacity(4),
            ..Self::default()
        }
    }

    /// Replace the configuration for subsequent queries.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Whether a search may stand on `p`: inside the bounds and passable.
    #[inline]
    pub(crate) fn admits<P: Pather>(&self, pather: &P, p: Point) -> bool {
        self.config.in_bounds(p) && pather.passable(p)
    }

    /// Fill `self.nbuf` with the admissible neighbours of `p`.
    pub(crate) fn collect_neighbors<P: Pather>(&mut self, pather: &P, p: Point) {
        self.nbuf.clear();
        pather.neighbors(p, &mut self.nbuf);
        if self.config.bounds.is_some() {
            let cfg = self.config;
            self.nbuf.retain(|&n| cfg.in_bounds(n));
        }
    }
}
