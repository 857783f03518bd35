// Host-side tests for the procedural geometry generators.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/geometry.rs"]
mod geometry;

use geometry::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn blob_outline_is_closed_with_exact_op_count() {
    for point_count in [3usize, 5, 8, 12, 24] {
        let path = blob_outline(Vec2::new(10.0, -4.0), 30.0, point_count, 0.3, &mut rng())
            .expect("valid point count");
        assert_eq!(path.len(), point_count + 1);
        assert!(matches!(path[0], PathOp::Move { .. }));
        for op in &path[1..] {
            assert!(matches!(op, PathOp::Quad { .. }));
        }
        // last endpoint returns exactly to the first vertex
        assert_eq!(path[path.len() - 1].endpoint(), path[0].endpoint());
    }
}

#[test]
fn blob_outline_rejects_degenerate_point_counts() {
    for point_count in [0usize, 1, 2] {
        assert!(blob_outline(Vec2::ZERO, 30.0, point_count, 0.3, &mut rng()).is_err());
    }
}

#[test]
fn blob_outline_radii_stay_within_irregularity_band() {
    let center = Vec2::new(5.0, 5.0);
    let radius = 40.0;
    let irregularity = 0.25;
    let path = blob_outline(center, radius, 16, irregularity, &mut rng()).unwrap();
    for op in &path {
        let r = op.endpoint().distance(center);
        assert!(r >= radius * (1.0 - irregularity) - 1e-3);
        assert!(r <= radius * (1.0 + irregularity) + 1e-3);
    }
}

#[test]
fn wave_strand_reaches_both_anchors() {
    let from = Vec2::new(-300.0, -200.0);
    let to = Vec2::new(300.0, 200.0);
    let strand = wave_strand(from, to, 75.0, 1.5, 20, &mut rng());
    assert_eq!(strand.points.len(), 21);
    assert_eq!(strand.points[0], Vec2::ZERO);
    assert_eq!(strand.points[20], to - from);
}

#[test]
fn wave_strand_interior_points_are_displaced() {
    let strand = wave_strand(Vec2::ZERO, Vec2::new(400.0, 0.0), 60.0, 1.0, 20, &mut rng());
    // horizontal segment, so displacement shows up on the y axis
    let off_axis = strand.points.iter().filter(|p| p.y.abs() > 1.0).count();
    assert!(off_axis > 10);
}

#[test]
fn wave_strand_handles_coincident_endpoints() {
    let p = Vec2::new(12.0, 34.0);
    let strand = wave_strand(p, p, 75.0, 1.5, 20, &mut rng());
    assert_eq!(strand.points.len(), 21);
    for point in &strand.points {
        assert!(point.is_finite());
        assert_eq!(*point, Vec2::ZERO);
    }
    for [a, b] in &strand.branches {
        assert!(a.is_finite() && b.is_finite());
    }
}

#[test]
fn wave_strand_branch_counts_are_bounded() {
    for seed in 0..50u64 {
        let mut r = StdRng::seed_from_u64(seed);
        let strand = wave_strand(Vec2::ZERO, Vec2::new(100.0, 50.0), 50.0, 1.0, 20, &mut r);
        assert!((3..=6).contains(&strand.branches.len()));
    }
}

#[test]
fn radial_web_segment_counts() {
    let rings = 5;
    let spokes = 12;
    let segments = radial_web(Vec2::ZERO, 300.0, rings, spokes, 8.0, &mut rng()).unwrap();
    // one segment per spoke, plus `spokes` segments per ring
    assert_eq!(segments.len(), spokes + rings * spokes);
    for [a, b] in &segments[..spokes] {
        assert_eq!(*a, Vec2::ZERO);
        assert!((b.length() - 300.0).abs() < 1e-3);
    }
}

#[test]
fn radial_web_rejects_too_few_spokes() {
    assert!(radial_web(Vec2::ZERO, 300.0, 5, 2, 8.0, &mut rng()).is_err());
}

#[test]
fn radial_web_ring_jitter_is_bounded() {
    let max_radius = 200.0;
    let rings = 4;
    let spokes = 10;
    let jitter = 10.0;
    let segments = radial_web(Vec2::ZERO, max_radius, rings, spokes, jitter, &mut rng()).unwrap();
    for (n, [_, vertex]) in segments.iter().enumerate().skip(spokes) {
        let ring = (n - spokes) / spokes + 1;
        let nominal = max_radius / rings as f32 * ring as f32;
        assert!((vertex.length() - nominal).abs() <= jitter + 1e-3);
    }
}

#[test]
fn spiral_web_has_periodic_anchor_threads() {
    let turns = 2;
    let points_per_turn = 8;
    let web = spiral_web(Vec2::ZERO, 160.0, turns, points_per_turn, &mut rng());
    let total = turns * points_per_turn;
    assert_eq!(web.spiral.len(), total + 1);
    assert_eq!(
        web.anchors.len(),
        total / constants::SPIRAL_ANCHOR_INTERVAL + 1
    );
    for [start, _] in &web.anchors {
        assert_eq!(*start, Vec2::ZERO);
    }
    // spiral starts at the center and works outward
    assert_eq!(web.spiral[0], Vec2::ZERO);
    assert!(web.spiral[total].length() > web.spiral[total / 4].length());
}

#[test]
fn bezier_evaluators_hit_their_endpoints() {
    let p0 = Vec2::new(0.0, 0.0);
    let p1 = Vec2::new(10.0, 20.0);
    let p2 = Vec2::new(20.0, 0.0);
    let p3 = Vec2::new(30.0, -10.0);

    assert_eq!(quadratic_point(p0, p1, p2, 0.0), p0);
    assert_eq!(quadratic_point(p0, p1, p2, 1.0), p2);
    // midpoint of a quadratic: (p0 + 2*p1 + p2) / 4
    assert!(quadratic_point(p0, p1, p2, 0.5).distance((p0 + p1 * 2.0 + p2) / 4.0) < 1e-4);

    assert_eq!(cubic_point(p0, p1, p2, p3, 0.0), p0);
    assert_eq!(cubic_point(p0, p1, p2, p3, 1.0), p3);
}

#[test]
fn seeded_generation_is_deterministic() {
    let a = blob_outline(Vec2::ZERO, 30.0, 12, 0.3, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = blob_outline(Vec2::ZERO, 30.0, 12, 0.3, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);

    let s1 = wave_strand(
        Vec2::ZERO,
        Vec2::new(100.0, 0.0),
        50.0,
        1.5,
        20,
        &mut StdRng::seed_from_u64(5),
    );
    let s2 = wave_strand(
        Vec2::ZERO,
        Vec2::new(100.0, 0.0),
        50.0,
        1.5,
        20,
        &mut StdRng::seed_from_u64(5),
    );
    assert_eq!(s1.points, s2.points);
    assert_eq!(s1.branches, s2.branches);
}
