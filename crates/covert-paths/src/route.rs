use std::fmt;

use covert_core::{Direction, Point};

/// A sequence of cardinal moves, ordered from start to goal.
///
/// An empty route is a success: the start already is the goal. "No route"
/// is expressed as `None` by the search functions, never as an empty route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Route {
    moves: Vec<Direction>,
}

impl Route {
    /// Create a route from an ordered list of moves.
    pub fn new(moves: Vec<Direction>) -> Self {
        Self { moves }
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the route has no moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The moves, front to back.
    #[inline]
    pub fn directions(&self) -> &[Direction] {
        &self.moves
    }

    /// Cells entered by each move when walking the route from `start`.
    /// `start` itself is not yielded.
    pub fn points(&self, start: Point) -> impl Iterator<Item = Point> + '_ {
        self.moves.iter().scan(start, |p, &dir| {
            *p = p.step(dir);
            Some(*p)
        })
    }

    /// The cell reached after walking the whole route from `start`.
    pub fn destination(&self, start: Point) -> Point {
        self.moves.iter().fold(start, |p, &dir| p.step(dir))
    }
}

impl From<Vec<Direction>> for Route {
    fn from(moves: Vec<Direction>) -> Self {
        Self::new(moves)
    }
}

impl FromIterator<Direction> for Route {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Direction;
    type IntoIter = std::slice::Iter<'a, Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Concatenated direction letters, e.g. `"EESN"`.
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dir in &self.moves {
            write!(f, "{}", dir.as_char())?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_serializes_as_list() {
        let r = Route::new(vec![Direction::North, Direction::West]);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"["North","West"]"#);
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
