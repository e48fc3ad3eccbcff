//! Contract violations reported by `Polygon::new` and the search entry points.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabelError {
    /// No rings at all; ring 0 must be the outer boundary.
    #[error("polygon has no rings")]
    EmptyPolygon,

    /// A ring needs at least two points to form an edge.
    #[error("ring {ring} has {points} point(s), need at least 2")]
    DegenerateRing { ring: usize, points: usize },

    /// NaN or infinite coordinate.
    #[error("ring {ring} has a non-finite coordinate at index {index}")]
    NonFiniteCoordinate { ring: usize, index: usize },

    /// Precision must be positive and finite or the search may not terminate.
    #[error("precision must be positive and finite, got {0}")]
    InvalidPrecision(f64),
}
