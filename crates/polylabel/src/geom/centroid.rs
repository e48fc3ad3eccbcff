//! Area centroid of the outer ring, the first seed of the search.

use nalgebra::Vector2;

use super::types::Polygon;

/// Area centroid of the outer ring, with the area accumulator as weight.
///
/// Accumulates `f = a.x*b.y - b.x*a.y` per edge and returns
/// `(Σ(a+b)f / Σ3f, Σ3f)`; the weight is six times the signed area.
/// A ring whose accumulator is exactly zero (collinear, self-cancelling)
/// falls back to its first vertex with weight `0.0`.
pub fn centroid(poly: &Polygon) -> (Vector2<f64>, f64) {
    let ring = poly.outer();
    let mut area = 0.0;
    let mut x = 0.0;
    let mut y = 0.0;
    for w in ring.windows(2) {
        let (a, b) = (w[0], w[1]);
        let f = a.x * b.y - b.x * a.y;
        x += (a.x + b.x) * f;
        y += (a.y + b.y) * f;
        area += f * 3.0;
    }
    if area == 0.0 {
        return (ring[0], 0.0);
    }
    (Vector2::new(x / area, y / area), area)
}
