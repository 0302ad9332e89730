use std::fmt;

use covert_core::Point;

/// Errors that can occur when constructing an obstacle.
#[derive(Debug, Clone, PartialEq)]
pub enum ObstacleError {
    /// Fence endpoints share neither coordinate.
    DiagonalFence { start: Point, end: Point },
    /// Both fence endpoints are the same cell.
    DegenerateFence { at: Point },
    /// Sensor range is not a positive finite number.
    InvalidRange(f64),
}

impl fmt::Display for ObstacleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiagonalFence { start, end } => write!(
                f,
                "fence from {start} to {end} must be horizontal or vertical"
            ),
            Self::DegenerateFence { at } => {
                write!(f, "fence starts and ends at {at}: endpoints must differ")
            }
            Self::InvalidRange(r) => write!(f, "sensor range {r} must be a positive number"),
        }
    }
}

impl std::error::Error for ObstacleError {}
