//! **covert-core**: grid geometry primitives shared by the *covert* crates.
//!
//! [`Point`] and [`Range`] describe cells and rectangular windows on an
//! unbounded integer plane; [`Direction`] names the four cardinal moves.

pub mod direction;
pub mod geom;

pub use direction::{Direction, ParseDirectionError};
pub use geom::{Point, Range, RangeIter};
