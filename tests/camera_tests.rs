// Host-side tests for the pan/zoom/momentum camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/camera.rs"]
mod camera;
#[path = "../src/constants.rs"]
mod constants;

use camera::Camera;
use constants::*;
use glam::Vec2;

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

#[test]
fn starts_centered_at_initial_zoom() {
    let cam = Camera::new(VIEWPORT);
    assert_eq!(cam.zoom, INITIAL_ZOOM);
    assert_eq!(cam.offset, VIEWPORT * 0.5);
    assert_eq!(cam.momentum, Vec2::ZERO);
    assert!(!cam.dragging);
}

#[test]
fn drag_pans_directly_and_banks_momentum() {
    let mut cam = Camera::new(VIEWPORT);
    let start_offset = cam.offset;
    cam.begin_drag(Vec2::new(100.0, 100.0));
    cam.drag_to(Vec2::new(110.0, 105.0));
    assert_eq!(cam.offset, start_offset + Vec2::new(10.0, 5.0));
    assert_eq!(cam.momentum, Vec2::new(10.0, 5.0) * MOMENTUM_GAIN);
}

#[test]
fn begin_drag_zeroes_prior_momentum() {
    let mut cam = Camera::new(VIEWPORT);
    cam.momentum = Vec2::new(5.0, -3.0);
    cam.begin_drag(Vec2::ZERO);
    assert_eq!(cam.momentum, Vec2::ZERO);
}

#[test]
fn momentum_decays_geometrically_when_idle() {
    let mut cam = Camera::new(VIEWPORT);
    cam.momentum = Vec2::new(8.0, -4.0);
    let offset = cam.offset;
    cam.step_momentum();
    assert_eq!(cam.offset, offset + Vec2::new(8.0, -4.0));
    assert_eq!(cam.momentum, Vec2::new(8.0, -4.0) * MOMENTUM_DECAY);

    // repeated decay walks toward zero monotonically
    let mut prev = cam.momentum.length();
    for _ in 0..50 {
        cam.step_momentum();
        let len = cam.momentum.length();
        assert!(len <= prev);
        prev = len;
    }
}

#[test]
fn momentum_below_rest_threshold_is_inert() {
    let mut cam = Camera::new(VIEWPORT);
    cam.momentum = Vec2::splat(MOMENTUM_REST * 0.9);
    let offset = cam.offset;
    cam.step_momentum();
    assert!(!cam.coasting());
    assert_eq!(cam.offset, offset);
    assert_eq!(cam.momentum, Vec2::splat(MOMENTUM_REST * 0.9));
}

#[test]
fn momentum_is_frozen_while_dragging() {
    let mut cam = Camera::new(VIEWPORT);
    cam.begin_drag(Vec2::ZERO);
    cam.drag_to(Vec2::new(20.0, 0.0));
    let offset = cam.offset;
    cam.step_momentum();
    assert_eq!(cam.offset, offset);
}

#[test]
fn dragging_again_resets_momentum_to_new_delta() {
    let mut cam = Camera::new(VIEWPORT);
    cam.begin_drag(Vec2::ZERO);
    cam.drag_to(Vec2::new(30.0, 0.0));
    cam.end_drag();
    cam.step_momentum();
    cam.begin_drag(Vec2::new(50.0, 50.0));
    cam.drag_to(Vec2::new(52.0, 53.0));
    assert_eq!(cam.momentum, Vec2::new(2.0, 3.0) * MOMENTUM_GAIN);
}

#[test]
fn wheel_zoom_outside_bounds_is_a_strict_noop() {
    let mut cam = Camera::new(VIEWPORT);
    cam.zoom = 1.9;
    let before = cam.clone();
    // a huge zoom-in would land well past MAX_ZOOM
    assert!(!cam.wheel_zoom(-10_000.0, Vec2::new(100.0, 100.0)));
    assert_eq!(cam.zoom, before.zoom);
    assert_eq!(cam.offset, before.offset);

    cam.zoom = 0.11;
    // a huge zoom-out would land below MIN_ZOOM (or below zero)
    assert!(!cam.wheel_zoom(10_000.0, Vec2::new(100.0, 100.0)));
    assert_eq!(cam.zoom, 0.11);
    assert_eq!(cam.offset, before.offset);
}

#[test]
fn wheel_zoom_keeps_the_world_point_under_the_cursor() {
    let mut cam = Camera::new(VIEWPORT);
    cam.zoom = 0.5;
    cam.offset = Vec2::new(100.0, 50.0);
    let cursor = Vec2::new(300.0, 200.0);
    let world_before = cam.screen_to_world(cursor);

    assert!(cam.wheel_zoom(-200.0, cursor));
    assert!((cam.zoom - 0.55).abs() < 1e-6);
    let world_after = cam.screen_to_world(cursor);
    assert!(world_after.distance(world_before) < 1e-3);
}

#[test]
fn zoom_factor_follows_wheel_delta() {
    let mut cam = Camera::new(VIEWPORT);
    cam.zoom = 1.0;
    assert!(cam.wheel_zoom(200.0, VIEWPORT * 0.5));
    assert!((cam.zoom - (1.0 - 200.0 * ZOOM_SPEED)).abs() < 1e-6);
}

#[test]
fn recenter_only_moves_the_origin() {
    let mut cam = Camera::new(VIEWPORT);
    cam.zoom = 1.3;
    cam.momentum = Vec2::new(2.0, 2.0);
    cam.recenter(Vec2::new(800.0, 600.0));
    assert_eq!(cam.offset, Vec2::new(400.0, 300.0));
    assert_eq!(cam.zoom, 1.3);
    assert_eq!(cam.momentum, Vec2::new(2.0, 2.0));
}

#[test]
fn screen_world_roundtrip() {
    let mut cam = Camera::new(VIEWPORT);
    cam.zoom = 0.7;
    cam.offset = Vec2::new(12.0, -34.0);
    let p = Vec2::new(420.0, 77.0);
    assert!(cam.world_to_screen(cam.screen_to_world(p)).distance(p) < 1e-3);
}
