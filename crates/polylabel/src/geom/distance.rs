//! Signed point-to-polygon distance and even-odd containment.

use nalgebra::Vector2;

use super::types::Polygon;

/// Squared distance from `p` to the segment `[a, b]`.
///
/// Projects onto the supporting line and clamps the parameter to `[0, 1]`.
/// A zero-length segment measures to `a`.
#[inline]
pub fn segment_distance_sq(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let mut q = a;
    let d = b - a;
    if d.x != 0.0 || d.y != 0.0 {
        let t = (p - a).dot(&d) / d.norm_squared();
        if t > 1.0 {
            q = b;
        } else if t > 0.0 {
            q += d * t;
        }
    }
    (p - q).norm_squared()
}

/// Horizontal-ray crossing test for a single edge.
#[inline]
fn crosses(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> bool {
    (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
}

/// Signed distance from `p` to the nearest edge of any ring.
///
/// Positive inside, negative outside. One pass over every edge of every ring,
/// one shared even-odd flag: holes flip parity on their own.
pub fn signed_distance(p: Vector2<f64>, poly: &Polygon) -> f64 {
    let mut inside = false;
    let mut min_sq = f64::INFINITY;
    for (a, b) in poly.edges() {
        if crosses(p, a, b) {
            inside = !inside;
        }
        min_sq = min_sq.min(segment_distance_sq(p, a, b));
    }
    let factor = if inside { 1.0 } else { -1.0 };
    factor * min_sq.sqrt()
}

/// Even-odd point-in-polygon classification across all rings.
pub fn contains(p: Vector2<f64>, poly: &Polygon) -> bool {
    poly.edges().filter(|&(a, b)| crosses(p, a, b)).count() % 2 == 1
}
