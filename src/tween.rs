//! Per-frame interpolation scheduler.
//!
//! Models the continuous oscillations in the scene as a set of active tasks
//! polled once per frame with elapsed time. Scheduling onto a (node, channel)
//! pair that is already animated supersedes the prior task, and network
//! teardown cancels every task aimed at a removed drawable.

use crate::scene::{DisplayList, NodeId};
use std::f32::consts::PI;

/// Property of a display node a tween writes to each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    PositionX,
    PositionY,
    Rotation,
    Alpha,
    ScaleUniform,
}

#[derive(Clone, Copy, Debug)]
pub enum Ease {
    Linear,
    SineInOut,
    CubicOut,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Ease::Linear => t,
            Ease::SineInOut => 0.5 - 0.5 * (PI * t).cos(),
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Repeat {
    /// Play once and drop.
    Once,
    /// Repeat forever.
    Loop,
}

#[derive(Clone, Debug)]
pub struct Tween {
    pub node: NodeId,
    pub channel: Channel,
    pub from: f32,
    pub to: f32,
    pub duration_sec: f32,
    pub repeat: Repeat,
    pub yoyo: bool,
    pub ease: Ease,
    elapsed: f32,
}

impl Tween {
    pub fn new(
        node: NodeId,
        channel: Channel,
        from: f32,
        to: f32,
        duration_sec: f32,
        repeat: Repeat,
        yoyo: bool,
        ease: Ease,
    ) -> Self {
        Self {
            node,
            channel,
            from,
            to,
            duration_sec: duration_sec.max(1e-3),
            repeat,
            yoyo,
            ease,
            elapsed: 0.0,
        }
    }

    fn finished(&self) -> bool {
        matches!(self.repeat, Repeat::Once) && self.elapsed >= self.duration_sec
    }

    /// Current interpolated value for this tween's elapsed time.
    fn value(&self) -> f32 {
        let d = self.duration_sec;
        let t = match self.repeat {
            Repeat::Once => (self.elapsed / d).clamp(0.0, 1.0),
            Repeat::Loop => {
                if self.yoyo {
                    let phase = self.elapsed % (2.0 * d) / d;
                    if phase <= 1.0 {
                        phase
                    } else {
                        2.0 - phase
                    }
                } else {
                    self.elapsed % d / d
                }
            }
        };
        self.from + (self.to - self.from) * self.ease.apply(t)
    }
}

/// The set of live tweens, polled once per frame.
#[derive(Default)]
pub struct Tweens {
    active: Vec<Tween>,
}

impl Tweens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Register a tween, superseding any active one on the same
    /// (node, channel) pair.
    pub fn schedule(&mut self, tween: Tween) {
        self.active
            .retain(|t| !(t.node == tween.node && t.channel == tween.channel));
        self.active.push(tween);
    }

    /// Drop every tween targeting one of the given nodes. Used when the
    /// network layer is torn down, so no task writes to a freed drawable.
    pub fn cancel_targets(&mut self, doomed: &[NodeId]) {
        self.active.retain(|t| !doomed.contains(&t.node));
    }

    /// Advance every tween by `dt_sec` and write the interpolated values
    /// into the display arena, then drop completed one-shots.
    pub fn tick(&mut self, dt_sec: f32, arena: &mut DisplayList) {
        for t in &mut self.active {
            t.elapsed += dt_sec;
            arena.set_channel(t.node, t.channel, t.value());
        }
        self.active.retain(|t| !t.finished());
    }
}
