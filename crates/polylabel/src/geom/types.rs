//! Polygon and bounding-box types.
//!
//! - `Polygon`: validated, explicitly closed rings; ring 0 is the outer boundary.
//! - `Bounds`: axis-aligned box of the outer ring.

use nalgebra::Vector2;

use crate::error::LabelError;

/// Polygon with optional holes.
///
/// Invariants (checked by `new`):
/// - At least one ring; ring 0 is the outer boundary, later rings are holes.
/// - Every ring had at least 2 input points and is closed (first == last).
/// - All coordinates are finite.
///
/// Hole winding and self-intersection are not checked. Inside/outside is the
/// even-odd rule over all rings together, so holes need no special casing.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    rings: Vec<Vec<Vector2<f64>>>,
}

impl Polygon {
    /// Validate and close the rings. An open ring gets its first point appended.
    pub fn new(rings: Vec<Vec<Vector2<f64>>>) -> Result<Self, LabelError> {
        if rings.is_empty() {
            return Err(LabelError::EmptyPolygon);
        }
        let mut closed = Vec::with_capacity(rings.len());
        for (ring_idx, mut ring) in rings.into_iter().enumerate() {
            if ring.len() < 2 {
                return Err(LabelError::DegenerateRing {
                    ring: ring_idx,
                    points: ring.len(),
                });
            }
            if let Some(index) = ring.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
                return Err(LabelError::NonFiniteCoordinate {
                    ring: ring_idx,
                    index,
                });
            }
            let first = ring[0];
            if ring[ring.len() - 1] != first {
                ring.push(first);
            }
            closed.push(ring);
        }
        Ok(Self { rings: closed })
    }

    /// Build from plain `[x, y]` pairs, the shape of the JSON serialized form.
    pub fn from_coords(rings: Vec<Vec<[f64; 2]>>) -> Result<Self, LabelError> {
        Self::new(
            rings
                .into_iter()
                .map(|ring| ring.into_iter().map(|[x, y]| Vector2::new(x, y)).collect())
                .collect(),
        )
    }

    /// Outer ring followed by holes; every ring is closed.
    #[inline]
    pub fn rings(&self) -> &[Vec<Vector2<f64>>] {
        &self.rings
    }

    #[inline]
    pub fn outer(&self) -> &[Vector2<f64>] {
        &self.rings[0]
    }

    #[inline]
    pub fn holes(&self) -> &[Vec<Vector2<f64>>] {
        &self.rings[1..]
    }

    /// Iterate over all edges `(a, b)` of all rings.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        self.rings
            .iter()
            .flat_map(|ring| ring.windows(2).map(|w| (w[0], w[1])))
    }

    /// Back to `[x, y]` pairs (inverse of `from_coords` up to ring closure).
    pub fn to_coords(&self) -> Vec<Vec<[f64; 2]>> {
        self.rings
            .iter()
            .map(|ring| ring.iter().map(|p| [p.x, p.y]).collect())
            .collect()
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds {
    /// Box of the outer ring only; holes never extend it.
    pub fn of_outer_ring(poly: &Polygon) -> Self {
        let outer = poly.outer();
        let mut min = outer[0];
        let mut max = outer[0];
        for p in outer {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(
            self.min.x + self.width() / 2.0,
            self.min.y + self.height() / 2.0,
        )
    }

    /// Zero width or zero height.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width().min(self.height()) == 0.0
    }
}
