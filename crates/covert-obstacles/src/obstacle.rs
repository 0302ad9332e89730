//! The closed set of obstacle variants and their occupancy rules.
//!
//! Every variant answers one question, [`Obstacle::occupies`], for any
//! integer cell. The rules are boundary-exact: fence endpoints are part of
//! the fence, a sensor covers cells at exactly its range, and a camera's
//! cone includes its diagonal edges.

use covert_core::{Direction, Point};

use crate::error::ObstacleError;

/// A guard standing on a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guard {
    pos: Point,
}

impl Guard {
    pub fn new(pos: Point) -> Self {
        Self { pos }
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn occupies(&self, p: Point) -> bool {
        self.pos == p
    }
}

/// An axis-aligned fence covering every cell between its endpoints,
/// endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawFence")
)]
pub struct Fence {
    start: Point,
    end: Point,
}

impl Fence {
    /// Create a fence from `start` to `end`.
    ///
    /// The endpoints must lie on the same row or column and must differ.
    pub fn new(start: Point, end: Point) -> Result<Self, ObstacleError> {
        if start == end {
            return Err(ObstacleError::DegenerateFence { at: start });
        }
        if start.x != end.x && start.y != end.y {
            return Err(ObstacleError::DiagonalFence { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether the fence runs north-south.
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    pub fn occupies(&self, p: Point) -> bool {
        if self.is_vertical() {
            p.x == self.start.x
                && p.y >= self.start.y.min(self.end.y)
                && p.y <= self.start.y.max(self.end.y)
        } else {
            p.y == self.start.y
                && p.x >= self.start.x.min(self.end.x)
                && p.x <= self.start.x.max(self.end.x)
        }
    }

    /// Every cell of the fence, from the lower coordinate to the higher one.
    pub fn cells(&self) -> impl Iterator<Item = Point> + use<> {
        let (start, end) = (self.start, self.end);
        let vertical = self.is_vertical();
        let (lo, hi) = if vertical {
            (start.y.min(end.y), start.y.max(end.y))
        } else {
            (start.x.min(end.x), start.x.max(end.x))
        };
        (lo..=hi).map(move |v| {
            if vertical {
                Point::new(start.x, v)
            } else {
                Point::new(v, start.y)
            }
        })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFence {
    start: Point,
    end: Point,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFence> for Fence {
    type Error = ObstacleError;

    fn try_from(raw: RawFence) -> Result<Self, Self::Error> {
        Fence::new(raw.start, raw.end)
    }
}

/// A sensor covering every cell within a Euclidean radius of its center.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawSensor")
)]
pub struct Sensor {
    center: Point,
    range: f64,
}

impl Sensor {
    /// Create a sensor. `range` is a continuous radius and must be a
    /// positive finite number.
    pub fn new(center: Point, range: f64) -> Result<Self, ObstacleError> {
        if !range.is_finite() || range <= 0.0 {
            return Err(ObstacleError::InvalidRange(range));
        }
        Ok(Self { center, range })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn occupies(&self, p: Point) -> bool {
        let dx = f64::from(p.x) - f64::from(self.center.x);
        let dy = f64::from(p.y) - f64::from(self.center.y);
        (dx * dx + dy * dy).sqrt() <= self.range
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSensor {
    center: Point,
    range: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSensor> for Sensor {
    type Error = ObstacleError;

    fn try_from(raw: RawSensor) -> Result<Self, Self::Error> {
        Sensor::new(raw.center, raw.range)
    }
}

/// A camera watching a 90° cone (45° to each side) in the direction it
/// faces. It also covers its own cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    pos: Point,
    facing: Direction,
}

impl Camera {
    pub fn new(pos: Point, facing: Direction) -> Self {
        Self { pos, facing }
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn occupies(&self, p: Point) -> bool {
        // Widen so far-away cells cannot overflow.
        let dx = i64::from(p.x) - i64::from(self.pos.x);
        let dy = i64::from(p.y) - i64::from(self.pos.y);
        if dx == 0 && dy == 0 {
            return true;
        }
        match self.facing {
            Direction::North => dy < 0 && dx.abs() <= -dy,
            Direction::South => dy > 0 && dx.abs() <= dy,
            Direction::East => dx > 0 && dy.abs() <= dx,
            Direction::West => dx < 0 && dy.abs() <= -dx,
        }
    }
}

// ---------------------------------------------------------------------------
// Obstacle
// ---------------------------------------------------------------------------

/// Kind of an [`Obstacle`], without its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Guard,
    Fence,
    Sensor,
    Camera,
}

impl ObstacleKind {
    /// Map glyph for cells covered by this kind of obstacle.
    pub const fn glyph(self) -> char {
        match self {
            ObstacleKind::Guard => 'g',
            ObstacleKind::Fence => 'f',
            ObstacleKind::Sensor => 's',
            ObstacleKind::Camera => 'c',
        }
    }
}

/// Any static obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Obstacle {
    Guard(Guard),
    Fence(Fence),
    Sensor(Sensor),
    Camera(Camera),
}

impl Obstacle {
    /// Whether the obstacle covers cell `p`. Total and side-effect free.
    #[inline]
    pub fn occupies(&self, p: Point) -> bool {
        match self {
            Obstacle::Guard(g) => g.occupies(p),
            Obstacle::Fence(f) => f.occupies(p),
            Obstacle::Sensor(s) => s.occupies(p),
            Obstacle::Camera(c) => c.occupies(p),
        }
    }

    pub fn kind(&self) -> ObstacleKind {
        match self {
            Obstacle::Guard(_) => ObstacleKind::Guard,
            Obstacle::Fence(_) => ObstacleKind::Fence,
            Obstacle::Sensor(_) => ObstacleKind::Sensor,
            Obstacle::Camera(_) => ObstacleKind::Camera,
        }
    }

    /// Map glyph for cells covered by this obstacle.
    pub fn glyph(&self) -> char {
        self.kind().glyph()
    }
}

impl From<Guard> for Obstacle {
    fn from(g: Guard) -> Self {
        Obstacle::Guard(g)
    }
}

impl From<Fence> for Obstacle {
    fn from(f: Fence) -> Self {
        Obstacle::Fence(f)
    }
}

impl From<Sensor> for Obstacle {
    fn from(s: Sensor) -> Self {
        Obstacle::Sensor(s)
    }
}

impl From<Camera> for Obstacle {
    fn from(c: Camera) -> Self {
        Obstacle::Camera(c)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn obstacle_round_trip() {
        let obstacles: Vec<Obstacle> = vec![
            Guard::new(Point::new(1, 2)).into(),
            Fence::new(Point::new(0, 0), Point::new(4, 0)).unwrap().into(),
            Sensor::new(Point::new(-3, 3), 2.5).unwrap().into(),
            Camera::new(Point::new(5, 5), Direction::North).into(),
        ];
        let json = serde_json::to_string(&obstacles).unwrap();
        let back: Vec<Obstacle> = serde_json::from_str(&json).unwrap();
        assert_eq!(obstacles, back);
    }

    #[test]
    fn deserialize_validates_geometry() {
        let diagonal = r#"{"kind":"fence","start":{"x":0,"y":0},"end":{"x":2,"y":2}}"#;
        assert!(serde_json::from_str::<Obstacle>(diagonal).is_err());

        let negative = r#"{"kind":"sensor","center":{"x":0,"y":0},"range":-1.0}"#;
        assert!(serde_json::from_str::<Obstacle>(negative).is_err());

        let ok = r#"{"kind":"fence","start":{"x":0,"y":0},"end":{"x":0,"y":2}}"#;
        let fence = serde_json::from_str::<Obstacle>(ok).unwrap();
        assert_eq!(fence.kind(), ObstacleKind::Fence);
    }
}
