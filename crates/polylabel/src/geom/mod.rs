//! Geometry primitives for multi-ring polygons.
//!
//! Purpose
//! - Evaluate the signed distance from a point to a polygon boundary, which is
//!   the objective the search maximizes.
//! - Provide the outer-ring bounds and centroid used to seed the search.
//!
//! Conventions
//! - Rings are explicitly closed; an edge is a consecutive pair of points.
//! - Inside/outside is even-odd across all rings jointly, so a hole is just
//!   another ring. No winding checks.
//! - Exact float comparisons (`== 0.0`) mark degeneracies; no epsilons.

mod centroid;
mod distance;
mod types;

pub use centroid::centroid;
pub use distance::{contains, segment_distance_sq, signed_distance};
pub use types::{Bounds, Polygon};

#[cfg(test)]
mod tests;
