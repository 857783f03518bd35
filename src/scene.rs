//! Display-node arena and the scene aggregate.
//!
//! The arena is a slot vector with a free list; drawables reference each
//! other by index. `Scene` owns everything mutable in the visualization:
//! the arena, the node registry, the camera, the ambient entities, and the
//! tween set, so subsystems receive one context instead of ambient globals.

use crate::ambient::AmbientEntity;
use crate::camera::Camera;
use crate::data::NodeRegistry;
use crate::geometry::PathOp;
use crate::tween::{Channel, Tweens};
use glam::Vec2;
use smallvec::SmallVec;

pub type NodeId = usize;

#[derive(Clone, Copy, Debug)]
pub struct Stroke {
    pub width: f32,
    pub color: u32,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Fill {
    pub color: u32,
    pub alpha: f32,
}

/// Drawable geometry in the owning node's local space.
#[derive(Clone, Debug)]
pub enum Geom {
    Segments(Vec<[Vec2; 2]>),
    Polyline(Vec<Vec2>),
    Polygon(Vec<Vec2>),
    Path(Vec<PathOp>),
    Circle { center: Vec2, radius: f32 },
    Ellipse { center: Vec2, radius: Vec2 },
}

#[derive(Clone, Debug)]
pub struct Primitive {
    pub stroke: Option<Stroke>,
    pub fill: Option<Fill>,
    pub geom: Geom,
}

impl Primitive {
    pub fn stroked(geom: Geom, width: f32, color: u32, alpha: f32) -> Self {
        Self {
            stroke: Some(Stroke { width, color, alpha }),
            fill: None,
            geom,
        }
    }

    pub fn filled(geom: Geom, color: u32, alpha: f32) -> Self {
        Self {
            stroke: None,
            fill: Some(Fill { color, alpha }),
            geom,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
    pub alpha: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            alpha: 1.0,
        }
    }
}

#[derive(Default)]
pub struct DisplayNode {
    pub transform: Transform,
    pub primitives: Vec<Primitive>,
    pub children: Vec<NodeId>,
}

impl DisplayNode {
    pub fn at(position: Vec2) -> Self {
        Self {
            transform: Transform {
                position,
                ..Transform::default()
            },
            ..Self::default()
        }
    }
}

/// Slot-vector arena for display nodes.
#[derive(Default)]
pub struct DisplayList {
    slots: Vec<Option<DisplayNode>>,
    free: Vec<NodeId>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, node: DisplayNode) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&DisplayNode> {
        self.slots.get(id).and_then(|s| s.as_ref())
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut DisplayNode> {
        self.slots.get_mut(id).and_then(|s| s.as_mut())
    }

    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(p) = self.node_mut(parent) {
            p.children.push(child);
        }
    }

    /// Number of live (non-freed) nodes.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Detach and free every child subtree of `parent`, returning the ids
    /// of all removed nodes so their tweens can be cancelled.
    pub fn clear_children(&mut self, parent: NodeId) -> Vec<NodeId> {
        let children = match self.node_mut(parent) {
            Some(p) => std::mem::take(&mut p.children),
            None => return Vec::new(),
        };
        let mut removed = Vec::new();
        let mut stack = children;
        while let Some(id) = stack.pop() {
            if let Some(node) = self.slots.get_mut(id).and_then(Option::take) {
                stack.extend(node.children);
                self.free.push(id);
                removed.push(id);
            }
        }
        removed
    }

    /// Tween write-back: set one animatable channel on a node.
    pub fn set_channel(&mut self, id: NodeId, channel: Channel, value: f32) {
        if let Some(node) = self.node_mut(id) {
            let t = &mut node.transform;
            match channel {
                Channel::PositionX => t.position.x = value,
                Channel::PositionY => t.position.y = value,
                Channel::Rotation => t.rotation = value,
                Channel::Alpha => t.alpha = value,
                Channel::ScaleUniform => t.scale = Vec2::splat(value),
            }
        }
    }
}

/// Drawable handles for one creature avatar, kept so hover hit-testing and
/// the network tests can reach the sub-parts.
pub struct Avatar {
    pub root: NodeId,
    pub node_index: usize,
    pub hit_radius: f32,
    pub segments: Vec<NodeId>,
    pub wings: Vec<NodeId>,
    pub antennae: Vec<NodeId>,
    pub legs: Vec<NodeId>,
}

/// The 2-3 wavy strand drawables built for one connection.
pub struct StrandSet {
    pub root: NodeId,
    pub strands: SmallVec<[NodeId; 3]>,
}

/// Everything the visualization owns.
pub struct Scene {
    pub arena: DisplayList,
    pub root: NodeId,
    pub ambient_layer: NodeId,
    pub network_layer: NodeId,
    pub registry: NodeRegistry,
    pub camera: Camera,
    pub ambient: Vec<AmbientEntity>,
    pub tweens: Tweens,
    pub avatars: Vec<Avatar>,
    pub backdrops: Vec<NodeId>,
    pub strands: Vec<StrandSet>,
    pub hovered: Option<usize>,
}

impl Scene {
    pub fn new(registry: NodeRegistry, viewport: Vec2) -> Self {
        let mut arena = DisplayList::new();
        let root = arena.alloc(DisplayNode::default());
        let ambient_layer = arena.alloc(DisplayNode::default());
        let network_layer = arena.alloc(DisplayNode::default());
        arena.attach(root, ambient_layer);
        arena.attach(root, network_layer);
        Self {
            arena,
            root,
            ambient_layer,
            network_layer,
            registry,
            camera: Camera::new(viewport),
            ambient: Vec::new(),
            tweens: Tweens::new(),
            avatars: Vec::new(),
            backdrops: Vec::new(),
            strands: Vec::new(),
            hovered: None,
        }
    }

    /// Topmost avatar whose hit circle contains the world-space point.
    pub fn avatar_at(&self, world: Vec2) -> Option<usize> {
        for (i, avatar) in self.avatars.iter().enumerate().rev() {
            if let Some(node) = self.arena.node(avatar.root) {
                if node.transform.position.distance(world) <= avatar.hit_radius {
                    return Some(i);
                }
            }
        }
        None
    }
}
