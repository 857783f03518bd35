//! Procedural generators for the organic shapes in the scene.
//!
//! All functions are pure aside from the injected random source, so tests
//! can seed an `StdRng` and assert exact output. Randomness is always
//! bounded; degenerate inputs (coincident strand endpoints) are guarded so
//! the output stays finite.

use crate::constants::SPIRAL_ANCHOR_INTERVAL;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// One step of a moveto/quadratic path, consumable by a path renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    Move { to: Vec2 },
    Quad { ctrl: Vec2, to: Vec2 },
}

impl PathOp {
    pub fn endpoint(&self) -> Vec2 {
        match *self {
            PathOp::Move { to } | PathOp::Quad { to, .. } => to,
        }
    }
}

#[inline]
fn polar(angle: f32, radius: f32) -> Vec2 {
    Vec2::new(angle.cos() * radius, angle.sin() * radius)
}

#[inline]
fn jittered(rng: &mut impl Rng, amount: f32) -> f32 {
    if amount > 0.0 {
        rng.gen_range(-amount..=amount)
    } else {
        0.0
    }
}

/// Radial spokes plus `ring_count` irregular concentric rings.
///
/// Each ring vertex sits at the nominal ring radius plus a bounded random
/// jitter. Returns plain line segments. `segment_count` below 3 is a
/// programmer error.
pub fn radial_web(
    center: Vec2,
    max_radius: f32,
    ring_count: usize,
    segment_count: usize,
    jitter: f32,
    rng: &mut impl Rng,
) -> anyhow::Result<Vec<[Vec2; 2]>> {
    anyhow::ensure!(
        segment_count >= 3,
        "radial web needs at least 3 segments, got {segment_count}"
    );
    let mut segments = Vec::with_capacity(segment_count * (ring_count + 1));

    for i in 0..segment_count {
        let angle = i as f32 / segment_count as f32 * TAU;
        segments.push([center, center + polar(angle, max_radius)]);
    }

    for r in 1..=ring_count {
        let nominal = max_radius / ring_count as f32 * r as f32;
        let mut prev = center + polar(0.0, nominal + jittered(rng, jitter));
        for i in 1..=segment_count {
            let angle = i as f32 / segment_count as f32 * TAU;
            let vertex = center + polar(angle, nominal + jittered(rng, jitter));
            segments.push([prev, vertex]);
            prev = vertex;
        }
    }
    Ok(segments)
}

/// A spiral polyline from the center outward with support threads.
#[derive(Clone, Debug)]
pub struct SpiralWeb {
    pub spiral: Vec<Vec2>,
    /// Return-to-center threads, one every [`SPIRAL_ANCHOR_INTERVAL`] points.
    pub anchors: Vec<[Vec2; 2]>,
}

pub fn spiral_web(
    center: Vec2,
    radius: f32,
    turns: usize,
    points_per_turn: usize,
    rng: &mut impl Rng,
) -> SpiralWeb {
    let total = (turns * points_per_turn).max(1);
    let mut spiral = Vec::with_capacity(total + 1);
    let mut anchors = Vec::new();
    for i in 0..=total {
        let angle = i as f32 / points_per_turn.max(1) as f32 * TAU;
        let progress = i as f32 / total as f32;
        let variation = rng.gen_range(0.9..=1.1);
        let point = center + polar(angle, radius * progress * variation);
        if i % SPIRAL_ANCHOR_INTERVAL == 0 {
            anchors.push([center, point]);
        }
        spiral.push(point);
    }
    SpiralWeb { spiral, anchors }
}

/// Closed irregular blob as a moveto + quadratic-curve path.
///
/// Exactly `point_count + 1` ops: one `Move` then `point_count` `Quad`s, the
/// last of which returns to the first vertex. Control points sit at the
/// angular midpoint of each wedge, pushed out 1.2x so the curve bellies
/// outward. `point_count` below 3 is a programmer error.
pub fn blob_outline(
    center: Vec2,
    radius: f32,
    point_count: usize,
    irregularity: f32,
    rng: &mut impl Rng,
) -> anyhow::Result<Vec<PathOp>> {
    anyhow::ensure!(
        point_count >= 3,
        "blob outline needs at least 3 points, got {point_count}"
    );
    let angle_step = TAU / point_count as f32;
    let mut path = Vec::with_capacity(point_count + 1);
    let first = center + polar(0.0, radius * (1.0 + jittered(rng, 1.0) * irregularity));
    path.push(PathOp::Move { to: first });
    for i in 1..=point_count {
        let angle = i as f32 * angle_step;
        let wobble = radius * (1.0 + jittered(rng, 1.0) * irregularity);
        let ctrl = center + polar(angle - angle_step * 0.5, wobble * 1.2);
        let to = if i == point_count {
            first // close the loop exactly
        } else {
            center + polar(angle, wobble)
        };
        path.push(PathOp::Quad { ctrl, to });
    }
    Ok(path)
}

/// A wavy strand between two points, as offsets relative to `from`.
#[derive(Clone, Debug)]
pub struct WaveStrand {
    /// `step_count + 1` samples; first is `(0, 0)`, last is `to - from`.
    pub points: Vec<Vec2>,
    /// Short decorative branches hanging off the strand.
    pub branches: Vec<[Vec2; 2]>,
}

/// Straight path from `from` to `to` displaced perpendicular to the segment
/// by `amplitude * sin(t * PI * frequency)`. Both endpoints are pinned so
/// the strand always reaches its anchors. Coincident endpoints degrade to
/// zero displacement rather than dividing by a zero length.
pub fn wave_strand(
    from: Vec2,
    to: Vec2,
    amplitude: f32,
    frequency: f32,
    step_count: usize,
    rng: &mut impl Rng,
) -> WaveStrand {
    let steps = step_count.max(1);
    let delta = to - from;
    let length = delta.length();
    let perp = if length > f32::EPSILON {
        Vec2::new(-delta.y, delta.x) / length
    } else {
        Vec2::ZERO
    };

    let mut points = Vec::with_capacity(steps + 1);
    for j in 0..=steps {
        let t = j as f32 / steps as f32;
        let wave = if j == 0 || j == steps {
            0.0
        } else {
            amplitude * (t * PI * frequency).sin()
        };
        points.push(delta * t + perp * wave);
    }

    let branch_count = rng.gen_range(3..=6);
    let mut branches = Vec::with_capacity(branch_count);
    for _ in 0..branch_count {
        let t = rng.gen_range(0.2..=0.8);
        let base = delta * t;
        let angle = rng.gen_range(0.0..TAU);
        let reach = rng.gen_range(20.0..=50.0);
        branches.push([base, base + polar(angle, reach)]);
    }

    WaveStrand { points, branches }
}

/// Point on a quadratic Bezier at `t` in [0, 1].
#[inline]
pub fn quadratic_point(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Point on a cubic Bezier at `t` in [0, 1].
#[inline]
pub fn cubic_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}
