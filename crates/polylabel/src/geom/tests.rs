use super::*;
use crate::error::LabelError;
use nalgebra::{vector, Vector2};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn square(lo: f64, hi: f64) -> Vec<[f64; 2]> {
    vec![[lo, lo], [hi, lo], [hi, hi], [lo, hi], [lo, lo]]
}

fn square_with_hole() -> Polygon {
    Polygon::from_coords(vec![square(0.0, 10.0), square(4.0, 6.0)]).unwrap()
}

#[test]
fn segment_distance_clamps_to_endpoints() {
    let a = vector![-1.0, 0.0];
    let b = vector![1.0, 0.0];
    assert!((segment_distance_sq(vector![0.0, 1.0], a, b) - 1.0).abs() < 1e-12);
    assert!((segment_distance_sq(vector![3.0, 0.0], a, b) - 4.0).abs() < 1e-12);
    assert!((segment_distance_sq(vector![-2.0, 1.0], a, b) - 2.0).abs() < 1e-12);
}

#[test]
fn zero_length_segment_measures_to_its_point() {
    let a = vector![1.0, 1.0];
    let d = segment_distance_sq(vector![4.0, 5.0], a, a);
    assert!(d.is_finite());
    assert!((d - 25.0).abs() < 1e-12);
}

#[test]
fn signed_distance_square() {
    let p = Polygon::from_coords(vec![square(0.0, 10.0)]).unwrap();
    assert!((signed_distance(vector![5.0, 5.0], &p) - 5.0).abs() < 1e-12);
    assert!((signed_distance(vector![2.0, 3.0], &p) - 2.0).abs() < 1e-12);
    assert!((signed_distance(vector![-3.0, 5.0], &p) + 3.0).abs() < 1e-12);
    assert!((signed_distance(vector![15.0, 5.0], &p) + 5.0).abs() < 1e-12);
}

#[test]
fn hole_flips_parity() {
    let p = square_with_hole();
    // Center of the hole: outside, 1 away from the hole boundary.
    assert!((signed_distance(vector![5.0, 5.0], &p) + 1.0).abs() < 1e-12);
    assert!(!contains(vector![5.0, 5.0], &p));
    // Between outer wall and hole.
    assert!((signed_distance(vector![2.0, 5.0], &p) - 2.0).abs() < 1e-12);
    assert!((signed_distance(vector![1.0, 5.0], &p) - 1.0).abs() < 1e-12);
    assert!(contains(vector![1.0, 5.0], &p));
}

#[test]
fn contains_agrees_with_distance_sign_seeded() {
    let p = square_with_hole();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let q = Vector2::new(rng.gen_range(-2.0..12.0), rng.gen_range(-2.0..12.0));
        let d = signed_distance(q, &p);
        if d != 0.0 {
            assert_eq!(contains(q, &p), d > 0.0, "point {q:?} distance {d}");
        }
    }
}

#[test]
fn signed_distance_is_one_lipschitz() {
    let p = Polygon::from_coords(vec![
        vec![[0.0, 0.0], [8.0, 1.0], [6.0, 4.0], [9.0, 9.0], [1.0, 7.0], [0.0, 0.0]],
        vec![[3.0, 3.0], [4.0, 3.0], [4.0, 5.0], [3.0, 3.0]],
    ])
    .unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let a = Vector2::new(rng.gen_range(-1.0..10.0), rng.gen_range(-1.0..10.0));
        let b = a + Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        let lhs = (signed_distance(a, &p) - signed_distance(b, &p)).abs();
        assert!(lhs <= (a - b).norm() + 1e-9);
    }
}

#[test]
fn polygon_new_rejects_contract_violations() {
    assert_eq!(Polygon::new(vec![]), Err(LabelError::EmptyPolygon));
    assert_eq!(
        Polygon::from_coords(vec![vec![[1.0, 1.0]]]),
        Err(LabelError::DegenerateRing { ring: 0, points: 1 })
    );
    assert_eq!(
        Polygon::from_coords(vec![
            square(0.0, 1.0),
            vec![[0.2, 0.2], [0.4, 0.2], [f64::NAN, 0.4], [0.2, 0.2]],
        ]),
        Err(LabelError::NonFiniteCoordinate { ring: 1, index: 2 })
    );
}

#[test]
fn polygon_new_closes_open_rings() {
    let p = Polygon::from_coords(vec![vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]])
        .unwrap();
    assert_eq!(p.outer().len(), 5);
    assert_eq!(p.outer()[4], vector![0.0, 0.0]);
    assert_eq!(p.edges().count(), 4);
    // Already closed rings stay untouched.
    let q = Polygon::from_coords(vec![square(0.0, 2.0)]).unwrap();
    assert_eq!(q.outer().len(), 5);
    assert_eq!(q.to_coords(), vec![square(0.0, 2.0)]);
}

#[test]
fn bounds_ignore_holes() {
    // A "hole" sticking out of the outer ring must not widen the box.
    let p = Polygon::from_coords(vec![square(0.0, 4.0), square(3.0, 9.0)]).unwrap();
    let b = Bounds::of_outer_ring(&p);
    assert_eq!(b.min, vector![0.0, 0.0]);
    assert_eq!(b.max, vector![4.0, 4.0]);
    assert_eq!(b.center(), vector![2.0, 2.0]);
    assert!(!b.is_degenerate());

    let flat = Polygon::from_coords(vec![vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [0.0, 0.0]]])
        .unwrap();
    let fb = Bounds::of_outer_ring(&flat);
    assert_eq!(fb.height(), 0.0);
    assert!(fb.is_degenerate());
}

#[test]
fn centroid_rectangle_either_orientation() {
    let ccw = Polygon::from_coords(vec![vec![
        [0.0, 0.0],
        [4.0, 0.0],
        [4.0, 2.0],
        [0.0, 2.0],
        [0.0, 0.0],
    ]])
    .unwrap();
    let (c, w) = centroid(&ccw);
    assert_eq!(c, vector![2.0, 1.0]);
    assert!((w - 48.0).abs() < 1e-12);

    let cw = Polygon::from_coords(vec![vec![
        [0.0, 0.0],
        [0.0, 2.0],
        [4.0, 2.0],
        [4.0, 0.0],
        [0.0, 0.0],
    ]])
    .unwrap();
    let (c, w) = centroid(&cw);
    assert_eq!(c, vector![2.0, 1.0]);
    assert!((w + 48.0).abs() < 1e-12);
}

#[test]
fn centroid_zero_area_falls_back_to_first_vertex() {
    let collinear = Polygon::from_coords(vec![vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [0.0, 0.0]]])
        .unwrap();
    assert_eq!(centroid(&collinear), (vector![0.0, 0.0], 0.0));

    let self_touching = Polygon::from_coords(vec![vec![
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [1.0, 0.0],
        [0.0, 0.0],
    ]])
    .unwrap();
    assert_eq!(centroid(&self_touching), (vector![0.0, 0.0], 0.0));
}

#[test]
fn centroid_uses_outer_ring_only() {
    let p = square_with_hole();
    let (c, _) = centroid(&p);
    assert!((c - vector![5.0, 5.0]).norm() < 1e-12);
}
