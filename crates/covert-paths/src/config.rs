//! Search configuration.

use covert_core::{Point, Range};

/// What a search does when its start cell is itself impassable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockedStart {
    /// Report "no path" without searching. This is the default: an agent
    /// standing inside an obstacle's coverage is already compromised.
    #[default]
    Reject,
    /// Search from the occupied start as if it were free. Only the cells
    /// after the first move have to be passable.
    Allow,
}

/// Configuration for a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Policy for an impassable start cell.
    pub blocked_start: BlockedStart,
    /// Optional window the search may not leave. Cells outside it are
    /// treated as impassable. `None` searches the unbounded plane, in which
    /// case a free goal walled off from the start region is never proven
    /// unreachable.
    pub bounds: Option<Range>,
}

impl SearchConfig {
    /// Default configuration: reject blocked starts, unbounded search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the blocked-start policy.
    pub fn with_blocked_start(mut self, policy: BlockedStart) -> Self {
        self.blocked_start = policy;
        self
    }

    /// Restrict searches to `bounds`.
    pub fn with_bounds(mut self, bounds: Range) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Whether `p` lies inside the configured bounds (always true when
    /// unbounded).
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.is_none_or(|r| r.contains(p))
    }
}
