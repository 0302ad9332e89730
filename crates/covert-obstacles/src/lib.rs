//! Static obstacles and the field a mission is planned against.
//!
//! Four obstacle variants cover cells of the grid: a [`Guard`] its own cell,
//! a [`Fence`] an axis-aligned segment, a [`Sensor`] a Euclidean disc and a
//! [`Camera`] a widening cone. An [`ObstacleField`] aggregates them and
//! answers the agent's questions: is a cell blocked, which moves are safe,
//! what does the map look like, and what is the shortest safe route between
//! two cells.
//!
//! ```
//! use covert_core::Point;
//! use covert_obstacles::{Guard, ObstacleField};
//!
//! let mut field = ObstacleField::new();
//! field.push(Guard::new(Point::new(2, 2)));
//! let route = field.find_path(Point::new(0, 0), Point::new(4, 4)).unwrap();
//! assert_eq!(route.len(), 8);
//! ```

pub mod error;
pub mod field;
pub mod obstacle;

pub use error::ObstacleError;
pub use field::{FREE_GLYPH, ObstacleField, SafeDirections};
pub use obstacle::{Camera, Fence, Guard, Obstacle, ObstacleKind, Sensor};
