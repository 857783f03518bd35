//! Pan/zoom/momentum camera over the scene.
//!
//! The state machine is {Idle, Dragging, Coasting}: dragging applies pointer
//! deltas directly and banks momentum; once the pointer lifts, momentum
//! decays each frame until both components fall under the rest threshold.
//! No explicit Coasting flag is needed, the decay handles it.

use crate::constants::*;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct Camera {
    pub zoom: f32,
    /// Screen-space translation applied before zoom scaling.
    pub offset: Vec2,
    pub momentum: Vec2,
    pub dragging: bool,
    pub last_pointer: Option<Vec2>,
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            zoom: INITIAL_ZOOM,
            offset: viewport * 0.5,
            momentum: Vec2::ZERO,
            dragging: false,
            last_pointer: None,
        }
    }

    pub fn begin_drag(&mut self, pointer: Vec2) {
        self.dragging = true;
        self.last_pointer = Some(pointer);
        self.momentum = Vec2::ZERO;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.last_pointer = None;
    }

    /// Pointer moved while dragging: pan by the delta and bank momentum.
    pub fn drag_to(&mut self, pointer: Vec2) {
        if !self.dragging {
            return;
        }
        if let Some(last) = self.last_pointer {
            let delta = pointer - last;
            self.offset += delta;
            self.momentum = delta * MOMENTUM_GAIN;
        }
        self.last_pointer = Some(pointer);
    }

    pub fn coasting(&self) -> bool {
        !self.dragging
            && (self.momentum.x.abs() > MOMENTUM_REST || self.momentum.y.abs() > MOMENTUM_REST)
    }

    /// Once-per-frame momentum integration while the pointer is up.
    pub fn step_momentum(&mut self) {
        if self.coasting() {
            self.offset += self.momentum;
            self.momentum *= MOMENTUM_DECAY;
        }
    }

    /// Wheel zoom anchored at the cursor. The change is rejected outright
    /// (state untouched) when the resulting zoom leaves [MIN_ZOOM, MAX_ZOOM];
    /// otherwise the offset is recomputed so the world point under the
    /// cursor stays fixed on screen.
    pub fn wheel_zoom(&mut self, delta_y: f32, cursor: Vec2) -> bool {
        let factor = 1.0 - delta_y * ZOOM_SPEED;
        let new_zoom = self.zoom * factor;
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&new_zoom) {
            return false;
        }
        let world = (cursor - self.offset) / self.zoom;
        self.zoom = new_zoom;
        self.offset = cursor - world * new_zoom;
        true
    }

    /// Viewport resize: re-home the camera origin on the new center. Zoom
    /// and momentum are left alone.
    pub fn recenter(&mut self, viewport: Vec2) {
        self.offset = viewport * 0.5;
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.zoom
    }

    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world * self.zoom + self.offset
    }
}
