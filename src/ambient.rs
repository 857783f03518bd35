//! Free-floating decorative entities and their per-frame kinematics.
//!
//! The set is fixed at startup; every frame mutates transforms in place and
//! never adds or removes an entity.

use crate::constants::*;
use crate::scene::{DisplayList, NodeId};
use glam::Vec2;

/// Variant-specific state. Webs are static decoration; flies carry a
/// velocity and an independently rotating wing sub-part; dewdrops shimmer
/// around a base alpha.
pub enum AmbientKind {
    Web,
    Fly { velocity: Vec2, wing: NodeId },
    Dewdrop { base_alpha: f32 },
}

pub struct AmbientEntity {
    pub node: NodeId,
    pub kind: AmbientKind,
    /// Spawn point; fly reflection bounds are measured from here, per axis.
    pub base: Vec2,
    pub phase: f32,
}

/// Advance every ambient entity by one frame.
pub fn step_ambient(entities: &mut [AmbientEntity], arena: &mut DisplayList) {
    for entity in entities.iter_mut() {
        match &mut entity.kind {
            AmbientKind::Web => {}
            AmbientKind::Fly { velocity, wing } => {
                entity.phase += FLY_PHASE_STEP;
                if let Some(node) = arena.node_mut(entity.node) {
                    node.transform.position += *velocity;
                    node.transform.position +=
                        Vec2::new(entity.phase.sin(), entity.phase.cos()) * FLY_WOBBLE_AMPLITUDE;

                    // Each axis reflects against the entity's own spawn
                    // point, independently. The sign check makes the flip
                    // fire once per crossing instead of every frame the
                    // wobble keeps the fly outside the bound.
                    let drift = node.transform.position - entity.base;
                    if drift.x.abs() > FLY_BOUND && drift.x.signum() == velocity.x.signum() {
                        velocity.x = -velocity.x;
                    }
                    if drift.y.abs() > FLY_BOUND && drift.y.signum() == velocity.y.signum() {
                        velocity.y = -velocity.y;
                    }
                }
                if let Some(wing_node) = arena.node_mut(*wing) {
                    wing_node.transform.rotation =
                        (entity.phase * FLY_WING_RATE).sin() * FLY_WING_SWING;
                }
            }
            AmbientKind::Dewdrop { base_alpha } => {
                entity.phase += DEWDROP_PHASE_STEP;
                if let Some(node) = arena.node_mut(entity.node) {
                    node.transform.alpha = *base_alpha + entity.phase.sin() * DEWDROP_ALPHA_SWING;
                }
            }
        }
    }
}
