//! Bird physics: vertical integration under constant gravity, with an
//! impulse (not an accumulation) on every flap.

use crate::config::WorldConfig;
use crate::consts::{FLAP_VELOCITY, GRAVITY};

#[derive(Clone, Copy, Debug)]
pub struct Bird {
    /// Horizontal position — fixed for the whole run.
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    /// Display-only tilt in degrees, derived from velocity each tick.
    pub rotation: f32,
}

impl Bird {
    pub fn new(cfg: &WorldConfig) -> Self {
        Self {
            x: cfg.width / 4.0,
            y: cfg.height / 2.0,
            velocity: 0.0,
            rotation: 0.0,
        }
    }

    /// Back to the vertical center, at rest. `x` never changes.
    pub fn reset(&mut self, cfg: &WorldConfig) {
        self.y = cfg.height / 2.0;
        self.velocity = 0.0;
        self.rotation = 0.0;
    }

    /// Replace (never add to) the current velocity with the flap impulse.
    pub fn flap(&mut self) {
        self.velocity = FLAP_VELOCITY;
    }

    /// One tick of physics. `y` is unbounded here; the bounds check is the
    /// caller's terminal condition.
    pub fn integrate(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
        self.rotation = (self.velocity * 3.0).clamp(-60.0, 60.0);
    }
}
