//! Decorative drifting bodies and their movement commands
//!
//! Bodies live in the scene frame: origin at the bottom-left corner of the
//! screen, +x right, +y up, visible area `[0, width] × [0, height]`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable handle for a body, assigned at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Linear move from `from` to `to` over `duration` seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveCommand {
    pub from: Vec2,
    pub to: Vec2,
    pub duration: f32,
    pub elapsed: f32,
}

impl MoveCommand {
    pub fn new(from: Vec2, to: Vec2, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    /// Normalized progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn position(&self) -> Vec2 {
        self.from.lerp(self.to, self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advance by `dt` and return the new position
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.elapsed += dt.max(0.0);
        self.position()
    }
}

/// A background asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingBody {
    pub id: BodyId,
    pub position: Vec2,
    /// Unit direction of travel
    pub heading: Vec2,
    /// Bounding width/height
    pub size: Vec2,
    /// In-flight movement, if any
    pub motion: Option<MoveCommand>,
}

impl MovingBody {
    pub fn new(id: BodyId, position: Vec2, heading: Vec2, size: Vec2) -> Self {
        Self {
            id,
            position,
            heading: heading.normalize_or_zero(),
            size,
            motion: None,
        }
    }

    /// Cancel any in-flight move and drift `distance` along the heading
    pub fn drift(&mut self, distance: f32, duration: f32) {
        let target = self.position + self.heading * distance;
        self.motion = Some(MoveCommand::new(self.position, target, duration));
    }

    /// Advance the in-flight move. Returns true when it just completed.
    pub fn step(&mut self, dt: f32) -> bool {
        let Some(motion) = self.motion.as_mut() else {
            return false;
        };
        self.position = motion.advance(dt);
        if motion.is_finished() {
            self.motion = None;
            true
        } else {
            false
        }
    }
}
