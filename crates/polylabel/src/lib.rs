//! Pole of inaccessibility for polygons with holes.
//!
//! Finds the interior point farthest from every boundary edge, to within a
//! caller-given precision. Typical use: placing one label inside an irregular
//! shape so it stays clear of the outline.
//!
//! Layout
//! - `geom`: signed point-to-polygon distance, even-odd containment, outer-ring
//!   bounds and centroid.
//! - `search`: branch-and-bound over square cells driven by a max-heap.
//! - `rand`: reproducible star-shaped sample polygons for tests and benches.
//!
//! API Policy
//! - `Polygon` is validated on construction; everything downstream assumes
//!   the contract holds and only rejects a bad precision.

pub mod error;
pub mod geom;
pub mod rand;
pub mod search;

pub use error::LabelError;
pub use geom::{centroid, contains, segment_distance_sq, signed_distance, Bounds, Polygon};
pub use search::{polylabel, polylabel_with_cfg, Cell, Label, QueueKey, SearchCfg, SearchStats};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{signed_distance, Bounds, Polygon};
    pub use crate::rand::{draw_star_polygon, HoleCfg, ReplayToken, StarCfg};
    pub use crate::search::{polylabel, polylabel_with_cfg, Label, QueueKey, SearchCfg};
    pub use crate::LabelError;
    pub use nalgebra::Vector2 as Vec2;
}
