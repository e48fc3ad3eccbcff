//! Random star-shaped polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic, parameterizable sample inputs for property tests and
//!   benchmarks of the search.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and connect the points in angle order. The result is
//!   star-shaped around the origin and usually non-convex.
//! - Optionally cut a regular `k`-gon hole centered at the origin, scaled to a
//!   fraction of the outer ring's clearance from the origin so it never touches
//!   the outline.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{segment_distance_sq, Polygon};

/// Vertex count distribution for the outer ring.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    // At least 4 keeps every angular gap below π, so the origin stays inside.
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(4),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(4);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Centered regular hole.
#[derive(Clone, Copy, Debug)]
pub struct HoleCfg {
    /// Number of hole vertices (at least 3).
    pub sides: usize,
    /// Hole circumradius as a fraction of the outer ring's distance to the origin.
    /// Clamped to (0, 0.95].
    pub radius_frac: f64,
}

impl Default for HoleCfg {
    fn default() -> Self {
        Self {
            sides: 6,
            radius_frac: 0.5,
        }
    }
}

/// Star sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
    pub hole: Option<HoleCfg>,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(16),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            random_phase: true,
            hole: None,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Next token in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw a closed star-shaped polygon around the origin, optionally with a hole.
///
/// Returns `None` only if the configuration produces non-finite coordinates
/// (e.g. an infinite `base_radius`).
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mut outer: Vec<Vector2<f64>> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    outer.push(outer[0]);

    let mut rings = vec![outer];
    if let Some(hole) = cfg.hole {
        let clearance = origin_clearance(&rings[0]);
        let hr = hole.radius_frac.clamp(1e-3, 0.95) * clearance;
        let k = hole.sides.max(3);
        let step = std::f64::consts::TAU / (k as f64);
        // Clockwise, opposite to the outer ring; parity does not depend on it.
        let mut ring: Vec<Vector2<f64>> = (0..k)
            .map(|i| {
                let th = -(i as f64) * step;
                Vector2::new(th.cos() * hr, th.sin() * hr)
            })
            .collect();
        ring.push(ring[0]);
        rings.push(ring);
    }
    Polygon::new(rings).ok()
}

/// Distance from the origin to the closest edge of a closed ring.
fn origin_clearance(ring: &[Vector2<f64>]) -> f64 {
    ring.windows(2)
        .map(|w| segment_distance_sq(Vector2::zeros(), w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{contains, signed_distance};

    #[test]
    fn reproducible_draw() {
        let cfg = StarCfg {
            hole: Some(HoleCfg::default()),
            ..StarCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_star_polygon(cfg, tok).expect("poly");
        let p2 = draw_star_polygon(cfg, tok).expect("poly");
        assert_eq!(p1, p2);
        let p3 = draw_star_polygon(cfg, tok.next()).expect("poly");
        assert_ne!(p1, p3);
    }

    #[test]
    fn vertex_count_respected() {
        let cfg = StarCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 9 },
            ..StarCfg::default()
        };
        let mut tok = ReplayToken { seed: 3, index: 0 };
        for _ in 0..50 {
            let p = draw_star_polygon(cfg, tok).unwrap();
            // Closed ring: one repeated point.
            let n = p.outer().len() - 1;
            assert!((5..=9).contains(&n), "n = {n}");
            assert_eq!(p.outer().first(), p.outer().last());
            tok = tok.next();
        }
        let tiny = StarCfg {
            vertex_count: VertexCount::Fixed(3),
            ..StarCfg::default()
        };
        let p = draw_star_polygon(tiny, tok).unwrap();
        assert_eq!(p.outer().len(), 5);
    }

    #[test]
    fn origin_inside_without_hole_and_hole_strictly_inside() {
        let plain = StarCfg::default();
        let holed = StarCfg {
            hole: Some(HoleCfg {
                sides: 8,
                radius_frac: 0.6,
            }),
            ..StarCfg::default()
        };
        let mut tok = ReplayToken { seed: 9, index: 0 };
        for _ in 0..50 {
            let p = draw_star_polygon(plain, tok).unwrap();
            assert!(contains(Vector2::zeros(), &p));

            let q = draw_star_polygon(holed, tok).unwrap();
            assert_eq!(q.holes().len(), 1);
            // The origin sits in the hole.
            assert!(signed_distance(Vector2::zeros(), &q) < 0.0);
            // Hole vertices lie strictly inside the outer ring.
            let outer_only = Polygon::new(vec![q.outer().to_vec()]).unwrap();
            for v in &q.holes()[0] {
                assert!(signed_distance(*v, &outer_only) > 0.0);
            }
            tok = tok.next();
        }
    }
}
