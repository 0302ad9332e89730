//! [`ObstacleField`]: the ordered obstacle set a mission is planned against.

use covert_core::{Direction, Point, Range};
use covert_paths::{
    AstarPather, Pathfinder, Pather, Route, SearchConfig, WeightedPather, manhattan,
};

use crate::obstacle::Obstacle;

/// Glyph used for cells no obstacle covers.
pub const FREE_GLYPH: char = '.';

/// Outcome of a safe-direction query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafeDirections {
    /// The queried cell is itself covered by an obstacle.
    Compromised,
    /// The cell is free; these neighbouring moves are free too, in
    /// [`Direction::REPORT_ORDER`]. Empty when the agent is boxed in.
    Open(Vec<Direction>),
}

impl SafeDirections {
    pub fn is_compromised(&self) -> bool {
        matches!(self, SafeDirections::Compromised)
    }

    /// The safe moves; empty when compromised or boxed in.
    pub fn directions(&self) -> &[Direction] {
        match self {
            SafeDirections::Compromised => &[],
            SafeDirections::Open(dirs) => dirs,
        }
    }
}

/// An insertion-ordered collection of obstacles.
///
/// The field only grows: obstacles are added while a scenario is assembled
/// and are never edited or removed. Searches borrow the field immutably, so
/// it cannot change while a query runs.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    /// Create an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an obstacle.
    pub fn push(&mut self, obstacle: impl Into<Obstacle>) {
        self.obstacles.push(obstacle.into());
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Obstacles in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    /// Whether any obstacle covers `p`.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.obstacles.iter().any(|o| o.occupies(p))
    }

    /// The first obstacle, in insertion order, that covers `p`.
    pub fn blocker(&self, p: Point) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.occupies(p))
    }

    /// Which single moves from `p` land on a free cell. A move off the `i32`
    /// plane is never safe.
    pub fn safe_directions(&self, p: Point) -> SafeDirections {
        if self.is_blocked(p) {
            return SafeDirections::Compromised;
        }
        SafeDirections::Open(
            Direction::REPORT_ORDER
                .into_iter()
                .filter(|&dir| p.checked_step(dir).is_some_and(|n| !self.is_blocked(n)))
                .collect(),
        )
    }

    /// Map glyph for cell `p`: the first covering obstacle's glyph, or
    /// [`FREE_GLYPH`].
    pub fn glyph_at(&self, p: Point) -> char {
        self.blocker(p).map_or(FREE_GLYPH, Obstacle::glyph)
    }

    /// Render `window` as text, one line per row from north to south. Lines
    /// are separated by `'\n'` with no trailing newline.
    pub fn render(&self, window: Range) -> String {
        let mut out = String::with_capacity(window.len() + window.height().max(0) as usize);
        for cell in window {
            if cell.x == window.min.x && cell.y > window.min.y {
                out.push('\n');
            }
            out.push(self.glyph_at(cell));
        }
        out
    }

    /// Shortest safe route from `from` to `to` with the default
    /// [`SearchConfig`].
    pub fn find_path(&self, from: Point, to: Point) -> Option<Route> {
        self.find_path_with(SearchConfig::default(), from, to)
    }

    /// Shortest safe route from `from` to `to` under `config`.
    pub fn find_path_with(
        &self,
        config: SearchConfig,
        from: Point,
        to: Point,
    ) -> Option<Route> {
        Pathfinder::with_config(config).find_path(self, from, to)
    }
}

impl Pather for ObstacleField {
    #[inline]
    fn passable(&self, p: Point) -> bool {
        !self.is_blocked(p)
    }
}

impl WeightedPather for ObstacleField {
    #[inline]
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl AstarPather for ObstacleField {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

impl<O: Into<Obstacle>> FromIterator<O> for ObstacleField {
    fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
        Self {
            obstacles: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<O: Into<Obstacle>> Extend<O> for ObstacleField {
    fn extend<I: IntoIterator<Item = O>>(&mut self, iter: I) {
        self.obstacles.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a ObstacleField {
    type Item = &'a Obstacle;
    type IntoIter = std::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.obstacles.iter()
    }
}
