//! Scene Builder: turns the company dataset and randomness into drawables.
//!
//! Ambient entities are populated once at startup. The network layer
//! (backdrops, strands, avatars) can be rebuilt at any time; rebuilding
//! clears the previous drawables and their tweens first and never touches
//! the ambient layer.

use crate::ambient::{AmbientEntity, AmbientKind};
use crate::constants::*;
use crate::data::CENTRAL_NODE_ID;
use crate::geometry::{self, PathOp};
use crate::scene::{Avatar, DisplayNode, Geom, Primitive, Scene, StrandSet};
use crate::tween::{Channel, Ease, Repeat, Tween};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::{PI, TAU};

const WEB_GRAY: u32 = 0xCCCCCC;
const FLY_BODY: u32 = 0x666666;
const FLY_WING: u32 = 0x888888;
const DEW_BLUE: u32 = 0xAADDFF;
const WHITE: u32 = 0xFFFFFF;

#[inline]
fn polar(angle: f32, radius: f32) -> Vec2 {
    Vec2::new(angle.cos() * radius, angle.sin() * radius)
}

#[inline]
fn scatter(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        (rng.gen::<f32>() - 0.5) * AMBIENT_FIELD_EXTENT,
        (rng.gen::<f32>() - 0.5) * AMBIENT_FIELD_EXTENT,
    )
}

/// Spawn the fixed ambient population: background webs under flies under
/// dewdrops, all attached to the scene's ambient layer.
pub fn populate_ambient(scene: &mut Scene, rng: &mut impl Rng) -> anyhow::Result<()> {
    for _ in 0..AMBIENT_WEB_COUNT {
        spawn_background_web(scene, rng)?;
    }
    for _ in 0..AMBIENT_FLY_COUNT {
        spawn_fly(scene, rng);
    }
    for _ in 0..AMBIENT_DEWDROP_COUNT {
        spawn_dewdrop(scene, rng);
    }
    Ok(())
}

fn spawn_background_web(scene: &mut Scene, rng: &mut impl Rng) -> anyhow::Result<()> {
    let position = scatter(rng);
    let size = rng.gen_range(200.0..=500.0);
    let alpha = rng.gen_range(0.2..=0.5);
    let segments = geometry::radial_web(
        Vec2::ZERO,
        size,
        BACKGROUND_WEB_RINGS,
        BACKGROUND_WEB_SEGMENTS,
        BACKGROUND_WEB_JITTER,
        rng,
    )?;

    let mut node = DisplayNode::at(position);
    node.primitives
        .push(Primitive::stroked(Geom::Segments(segments), 2.0, WEB_GRAY, alpha));
    let id = scene.arena.alloc(node);
    scene.arena.attach(scene.ambient_layer, id);
    scene.ambient.push(AmbientEntity {
        node: id,
        kind: AmbientKind::Web,
        base: position,
        phase: 0.0,
    });
    Ok(())
}

fn spawn_fly(scene: &mut Scene, rng: &mut impl Rng) {
    let position = scatter(rng);

    let mut body = DisplayNode::at(position);
    body.primitives.push(Primitive::filled(
        Geom::Ellipse {
            center: Vec2::ZERO,
            radius: Vec2::new(6.0, 4.0),
        },
        FLY_BODY,
        1.0,
    ));
    let body_id = scene.arena.alloc(body);

    let mut wings = DisplayNode::default();
    for side in [-1.0_f32, 1.0] {
        wings.primitives.push(Primitive::filled(
            Geom::Ellipse {
                center: Vec2::new(side * 8.0, 0.0),
                radius: Vec2::new(6.0, 4.0),
            },
            FLY_WING,
            0.5,
        ));
    }
    let wing_id = scene.arena.alloc(wings);
    scene.arena.attach(body_id, wing_id);
    scene.arena.attach(scene.ambient_layer, body_id);

    scene.ambient.push(AmbientEntity {
        node: body_id,
        kind: AmbientKind::Fly {
            velocity: Vec2::new(
                rng.gen_range(-FLY_SPEED_MAX..=FLY_SPEED_MAX),
                rng.gen_range(-FLY_SPEED_MAX..=FLY_SPEED_MAX),
            ),
            wing: wing_id,
        },
        base: position,
        phase: rng.gen_range(0.0..TAU),
    });
}

fn spawn_dewdrop(scene: &mut Scene, rng: &mut impl Rng) {
    let position = scatter(rng);
    let mut node = DisplayNode::at(position);
    node.primitives.push(Primitive::filled(
        Geom::Circle {
            center: Vec2::ZERO,
            radius: 4.0,
        },
        DEW_BLUE,
        0.6,
    ));
    // specular glint
    node.primitives.push(Primitive::filled(
        Geom::Circle {
            center: Vec2::new(-1.0, -1.0),
            radius: 1.0,
        },
        WHITE,
        0.4,
    ));
    node.transform.alpha = DEWDROP_BASE_ALPHA;
    let id = scene.arena.alloc(node);
    scene.arena.attach(scene.ambient_layer, id);
    scene.ambient.push(AmbientEntity {
        node: id,
        kind: AmbientKind::Dewdrop {
            base_alpha: DEWDROP_BASE_ALPHA,
        },
        base: position,
        phase: rng.gen_range(0.0..TAU),
    });
}

/// Rebuild the network layer from the registry. Idempotent: prior network
/// drawables and their tweens are discarded first; the ambient layer is
/// left alone.
pub fn update_network(scene: &mut Scene, rng: &mut impl Rng) -> anyhow::Result<()> {
    let removed = scene.arena.clear_children(scene.network_layer);
    scene.tweens.cancel_targets(&removed);
    scene.avatars.clear();
    scene.backdrops.clear();
    scene.strands.clear();
    scene.hovered = None;

    struct NodeSnapshot {
        position: Vec2,
        color: u32,
        size: f32,
        central: bool,
    }
    let nodes: Vec<NodeSnapshot> = scene
        .registry
        .iter()
        .map(|n| NodeSnapshot {
            position: n.position,
            color: n.color,
            size: n.size,
            central: n.id == CENTRAL_NODE_ID,
        })
        .collect();
    let connections: Vec<(usize, usize)> = scene.registry.connections().to_vec();

    for n in &nodes {
        let id = build_web_backdrop(scene, n.position, n.color, n.size, rng);
        scene.backdrops.push(id);
    }

    for &(a, b) in &connections {
        let set = build_strand_set(scene, nodes[a].position, nodes[b].position, nodes[a].color, rng);
        scene.strands.push(set);
    }

    for (index, n) in nodes.iter().enumerate() {
        let avatar = build_avatar(scene, index, n.position, n.color, n.size, n.central, rng)?;
        scene.avatars.push(avatar);
    }

    log::info!(
        "network rebuilt: {} avatars, {} backdrops, {} strand sets",
        scene.avatars.len(),
        scene.backdrops.len(),
        scene.strands.len()
    );
    Ok(())
}

/// Spiral web sitting behind a company node: the spiral and its anchor
/// threads, crossing threads through the hub, and a few random chords.
fn build_web_backdrop(
    scene: &mut Scene,
    position: Vec2,
    color: u32,
    size: f32,
    rng: &mut impl Rng,
) -> usize {
    let radius = size * BACKDROP_RADIUS_FACTOR;
    let web = geometry::spiral_web(
        Vec2::ZERO,
        radius,
        BACKDROP_SPIRAL_TURNS,
        BACKDROP_POINTS_PER_TURN,
        rng,
    );

    let mut node = DisplayNode::at(position);
    node.primitives
        .push(Primitive::stroked(Geom::Polyline(web.spiral), 2.0, color, 0.4));
    node.primitives
        .push(Primitive::stroked(Geom::Segments(web.anchors), 2.0, color, 0.4));

    let mut crossings = Vec::with_capacity(BACKDROP_CROSS_THREADS);
    for i in 0..BACKDROP_CROSS_THREADS {
        let angle = i as f32 / BACKDROP_CROSS_THREADS as f32 * TAU;
        crossings.push([polar(angle, radius * 0.3), polar(angle + PI, radius * 0.3)]);
    }
    node.primitives
        .push(Primitive::stroked(Geom::Segments(crossings), 2.0, color, 0.3));

    let mut chords = Vec::with_capacity(BACKDROP_RANDOM_CHORDS);
    for _ in 0..BACKDROP_RANDOM_CHORDS {
        let a = polar(rng.gen_range(0.0..TAU), rng.gen::<f32>() * radius * 0.8);
        let b = polar(rng.gen_range(0.0..TAU), rng.gen::<f32>() * radius * 0.8);
        chords.push([a, b]);
    }
    node.primitives
        .push(Primitive::stroked(Geom::Segments(chords), 1.0, color, 0.25));

    let id = scene.arena.alloc(node);
    scene.arena.attach(scene.network_layer, id);
    scene.tweens.schedule(Tween::new(
        id,
        Channel::Alpha,
        1.0,
        rng.gen_range(0.5..=0.8),
        rng.gen_range(2.0..=4.0),
        Repeat::Loop,
        true,
        Ease::SineInOut,
    ));
    id
}

/// 2-3 wavy strands between two connected nodes, each with decorative
/// branches and its own alpha pulse.
fn build_strand_set(
    scene: &mut Scene,
    from: Vec2,
    to: Vec2,
    color: u32,
    rng: &mut impl Rng,
) -> StrandSet {
    let root = scene.arena.alloc(DisplayNode::at(from));
    scene.arena.attach(scene.network_layer, root);

    let count = rng.gen_range(2..=3);
    let mut strands = SmallVec::new();
    for _ in 0..count {
        let amplitude = STRAND_AMPLITUDE_BASE + rng.gen::<f32>() * STRAND_AMPLITUDE_SPAN;
        let frequency = STRAND_FREQUENCY_BASE + rng.gen::<f32>() * STRAND_FREQUENCY_SPAN;
        let wave = geometry::wave_strand(from, to, amplitude, frequency, STRAND_STEPS, rng);

        let mut node = DisplayNode::default();
        node.primitives
            .push(Primitive::stroked(Geom::Polyline(wave.points), 1.0, color, 0.15));
        node.primitives
            .push(Primitive::stroked(Geom::Segments(wave.branches), 1.0, color, 0.15));
        let id = scene.arena.alloc(node);
        scene.arena.attach(root, id);

        scene.tweens.schedule(Tween::new(
            id,
            Channel::Alpha,
            1.0,
            rng.gen_range(0.1..=0.2),
            rng.gen_range(1.5..=3.5),
            Repeat::Loop,
            true,
            Ease::SineInOut,
        ));
        strands.push(id);
    }
    StrandSet { root, strands }
}

/// Creature avatar for a company node. The central node gets a long
/// segmented body and no wings or antennae; division nodes get a short
/// body, two wings and two antennae. Six legs either way. Every sub-part
/// oscillates on its own randomized period so the avatar never looks
/// mechanical.
fn build_avatar(
    scene: &mut Scene,
    node_index: usize,
    position: Vec2,
    color: u32,
    size: f32,
    central: bool,
    rng: &mut impl Rng,
) -> anyhow::Result<Avatar> {
    let root = scene.arena.alloc(DisplayNode::at(position));
    scene.arena.attach(scene.network_layer, root);

    let segment_count = if central {
        CENTRAL_SEGMENTS
    } else {
        DIVISION_SEGMENTS
    };
    let mut segments = Vec::with_capacity(segment_count);
    for i in 0..segment_count {
        let segment_size = size * (1.0 - i as f32 * SEGMENT_SIZE_FALLOFF);
        let outline = geometry::blob_outline(Vec2::ZERO, segment_size, 8, 0.2, rng)?;
        let mut node = DisplayNode::at(Vec2::new(0.0, i as f32 * size * SEGMENT_STACK_STEP));
        node.primitives
            .push(Primitive::filled(Geom::Path(outline.clone()), color, 0.2));
        node.primitives
            .push(Primitive::stroked(Geom::Path(outline), 2.0, color, 0.8));
        let id = scene.arena.alloc(node);
        scene.arena.attach(root, id);
        segments.push(id);
    }

    let mut wings = Vec::new();
    if !central {
        let wing_size = size * 1.5;
        for i in 0..2 {
            let mut points = Vec::with_capacity(14);
            points.push(Vec2::ZERO);
            for j in 0..=12 {
                let t = j as f32 / 12.0;
                let reach = wing_size * (t * PI).sin();
                points.push(polar(t * PI, reach));
            }
            let mut node = DisplayNode::at(Vec2::new(0.0, size * 0.3));
            node.transform.rotation = i as f32 * PI - PI / 2.0;
            node.primitives
                .push(Primitive::filled(Geom::Polygon(points.clone()), color, 0.1));
            node.primitives
                .push(Primitive::stroked(Geom::Polygon(points), 1.0, color, 0.4));
            let id = scene.arena.alloc(node);
            scene.arena.attach(root, id);

            let rest = i as f32 * PI - PI / 2.0;
            let beat = if i == 0 { 0.2 } else { -0.2 };
            scene.tweens.schedule(Tween::new(
                id,
                Channel::Rotation,
                rest,
                rest + beat,
                rng.gen_range(0.5..=1.0),
                Repeat::Loop,
                true,
                Ease::SineInOut,
            ));
            wings.push(id);
        }
    }

    let mut legs = Vec::with_capacity(AVATAR_LEG_COUNT);
    for i in 0..AVATAR_LEG_COUNT {
        let angle = i as f32 * PI / (AVATAR_LEG_COUNT as f32 / 2.0);
        let length = size * 1.2;
        let tip = polar(angle, length);
        let mut node = DisplayNode::at(Vec2::new(0.0, size * 0.3));
        node.primitives.push(Primitive::stroked(
            Geom::Polyline(vec![Vec2::ZERO, tip / 3.0, tip * (2.0 / 3.0), tip]),
            2.0,
            color,
            0.6,
        ));
        let id = scene.arena.alloc(node);
        scene.arena.attach(root, id);

        scene.tweens.schedule(Tween::new(
            id,
            Channel::Rotation,
            0.0,
            0.1,
            rng.gen_range(1.0..=2.0),
            Repeat::Loop,
            true,
            Ease::SineInOut,
        ));
        legs.push(id);
    }

    let mut antennae = Vec::new();
    if !central {
        for i in 0..2 {
            let angle = i as f32 * PI / 2.0 + PI / 4.0;
            let length = size * 1.3;
            let path = vec![
                PathOp::Move { to: Vec2::ZERO },
                PathOp::Quad {
                    ctrl: Vec2::new(
                        angle.cos() * length * 0.5,
                        angle.sin() * length * 0.5 - length * 0.5,
                    ),
                    to: Vec2::new(angle.cos() * length, -length),
                },
            ];
            let mut node = DisplayNode::at(Vec2::new(0.0, -size * 0.2));
            node.primitives
                .push(Primitive::stroked(Geom::Path(path), 1.0, color, 0.6));
            let id = scene.arena.alloc(node);
            scene.arena.attach(root, id);

            let sway = if i == 0 { 0.2 } else { -0.2 };
            scene.tweens.schedule(Tween::new(
                id,
                Channel::Rotation,
                0.0,
                sway,
                rng.gen_range(2.0..=3.0),
                Repeat::Loop,
                true,
                Ease::SineInOut,
            ));
            antennae.push(id);
        }
    }

    // idle bob on the whole avatar
    let bob_duration = rng.gen_range(2.0..=4.0);
    scene.tweens.schedule(Tween::new(
        root,
        Channel::PositionY,
        position.y,
        position.y + rng.gen_range(-5.0..=5.0),
        bob_duration,
        Repeat::Loop,
        true,
        Ease::SineInOut,
    ));
    scene.tweens.schedule(Tween::new(
        root,
        Channel::Rotation,
        0.0,
        rng.gen_range(-0.05..=0.05),
        bob_duration,
        Repeat::Loop,
        true,
        Ease::SineInOut,
    ));

    Ok(Avatar {
        root,
        node_index,
        hit_radius: size * AVATAR_HIT_FACTOR,
        segments,
        wings,
        antennae,
        legs,
    })
}
