// Host-side tests for the polled tween scheduler.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/ambient.rs"]
mod ambient;
#[path = "../src/camera.rs"]
mod camera;
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/data.rs"]
mod data;
#[path = "../src/geometry.rs"]
mod geometry;
#[path = "../src/scene.rs"]
mod scene;
#[path = "../src/tween.rs"]
mod tween;

use scene::{DisplayList, DisplayNode};
use tween::{Channel, Ease, Repeat, Tween, Tweens};

fn arena_with_node() -> (DisplayList, usize) {
    let mut arena = DisplayList::new();
    let id = arena.alloc(DisplayNode::default());
    (arena, id)
}

#[test]
fn linear_yoyo_loop_returns_to_origin_each_cycle() {
    let (mut arena, id) = arena_with_node();
    let mut tweens = Tweens::new();
    tweens.schedule(Tween::new(
        id,
        Channel::Rotation,
        0.0,
        1.0,
        1.0,
        Repeat::Loop,
        true,
        Ease::Linear,
    ));

    tweens.tick(0.5, &mut arena);
    assert!((arena.node(id).unwrap().transform.rotation - 0.5).abs() < 1e-5);
    tweens.tick(0.5, &mut arena);
    assert!((arena.node(id).unwrap().transform.rotation - 1.0).abs() < 1e-5);
    tweens.tick(0.5, &mut arena);
    assert!((arena.node(id).unwrap().transform.rotation - 0.5).abs() < 1e-5);
    tweens.tick(0.5, &mut arena);
    assert!(arena.node(id).unwrap().transform.rotation.abs() < 1e-5);
    // loops forever
    assert_eq!(tweens.len(), 1);
}

#[test]
fn one_shot_clamps_at_target_and_is_dropped() {
    let (mut arena, id) = arena_with_node();
    let mut tweens = Tweens::new();
    tweens.schedule(Tween::new(
        id,
        Channel::ScaleUniform,
        1.0,
        1.2,
        0.3,
        Repeat::Once,
        false,
        Ease::CubicOut,
    ));

    tweens.tick(10.0, &mut arena);
    let scale = arena.node(id).unwrap().transform.scale;
    assert!((scale.x - 1.2).abs() < 1e-5);
    assert!((scale.y - 1.2).abs() < 1e-5);
    assert!(tweens.is_empty());
}

#[test]
fn retargeting_supersedes_the_prior_tween() {
    let (mut arena, id) = arena_with_node();
    let mut tweens = Tweens::new();
    tweens.schedule(Tween::new(
        id,
        Channel::Alpha,
        1.0,
        0.0,
        1.0,
        Repeat::Once,
        false,
        Ease::Linear,
    ));
    tweens.tick(0.25, &mut arena);

    tweens.schedule(Tween::new(
        id,
        Channel::Alpha,
        0.75,
        1.0,
        1.0,
        Repeat::Once,
        false,
        Ease::Linear,
    ));
    assert_eq!(tweens.len(), 1);
    tweens.tick(10.0, &mut arena);
    assert!((arena.node(id).unwrap().transform.alpha - 1.0).abs() < 1e-5);
}

#[test]
fn tweens_on_different_channels_coexist() {
    let (mut arena, id) = arena_with_node();
    let mut tweens = Tweens::new();
    for channel in [Channel::PositionX, Channel::PositionY, Channel::Rotation] {
        tweens.schedule(Tween::new(
            id,
            channel,
            0.0,
            2.0,
            1.0,
            Repeat::Once,
            false,
            Ease::Linear,
        ));
    }
    assert_eq!(tweens.len(), 3);
    tweens.tick(0.5, &mut arena);
    let t = arena.node(id).unwrap().transform;
    assert!((t.position.x - 1.0).abs() < 1e-5);
    assert!((t.position.y - 1.0).abs() < 1e-5);
    assert!((t.rotation - 1.0).abs() < 1e-5);
}

#[test]
fn cancel_targets_drops_every_tween_on_the_doomed_nodes() {
    let mut arena = DisplayList::new();
    let a = arena.alloc(DisplayNode::default());
    let b = arena.alloc(DisplayNode::default());
    let mut tweens = Tweens::new();
    for node in [a, b] {
        tweens.schedule(Tween::new(
            node,
            Channel::Alpha,
            1.0,
            0.0,
            1.0,
            Repeat::Loop,
            true,
            Ease::SineInOut,
        ));
    }
    tweens.cancel_targets(&[a]);
    assert_eq!(tweens.len(), 1);
    tweens.tick(0.5, &mut arena);
    // the surviving tween still writes; the cancelled one no longer does
    assert_eq!(arena.node(a).unwrap().transform.alpha, 1.0);
    assert!(arena.node(b).unwrap().transform.alpha < 1.0);
}

#[test]
fn easing_curves_are_anchored_and_bounded() {
    for ease in [Ease::Linear, Ease::SineInOut, Ease::CubicOut] {
        assert!(ease.apply(0.0).abs() < 1e-6);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v >= prev - 1e-6, "easing should be monotone");
            assert!((0.0..=1.0 + 1e-6).contains(&v));
            prev = v;
        }
    }
}

#[test]
fn tween_against_a_freed_node_is_harmless() {
    let mut arena = DisplayList::new();
    let parent = arena.alloc(DisplayNode::default());
    let child = arena.alloc(DisplayNode::default());
    arena.attach(parent, child);

    let mut tweens = Tweens::new();
    tweens.schedule(Tween::new(
        child,
        Channel::Alpha,
        1.0,
        0.0,
        1.0,
        Repeat::Loop,
        true,
        Ease::Linear,
    ));
    let removed = arena.clear_children(parent);
    assert_eq!(removed, vec![child]);

    // ticking before cancellation must not panic or resurrect the slot
    tweens.tick(0.5, &mut arena);
    tweens.cancel_targets(&removed);
    assert!(tweens.is_empty());
}
