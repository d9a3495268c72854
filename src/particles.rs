//! Decorative particle pool: fixed capacity, first-free-slot activation,
//! in-place expiry. Spawning into a full pool is a silent no-op.

use rand::Rng;

use crate::Rgb;
use crate::consts::{MAX_PARTICLES, PARTICLE_DECAY};

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Remaining life, 1.0 → 0.0.
    pub life: f32,
    pub size: f32,
    pub color: Rgb,
    pub active: bool,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            life: 0.0,
            size: 2.0,
            color: Rgb(255, 255, 255),
            active: false,
        }
    }
}

pub struct ParticlePool {
    slots: [Particle; MAX_PARTICLES],
}

impl Default for ParticlePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticlePool {
    pub fn new() -> Self {
        Self {
            slots: [Particle::default(); MAX_PARTICLES],
        }
    }

    /// Activate the first free slot with full life, a small random velocity
    /// and a random size. Does nothing when every slot is live — no error,
    /// no eviction.
    pub fn spawn(&mut self, x: f32, y: f32, color: Rgb, rng: &mut impl Rng) {
        if let Some(slot) = self.slots.iter_mut().find(|p| !p.active) {
            *slot = Particle {
                x,
                y,
                vx: rng.gen_range(-2.0..2.0),
                vy: rng.gen_range(-2.0..2.0),
                life: 1.0,
                size: 2.0 + rng.gen_range(0..3) as f32,
                color,
                active: true,
            };
        }
    }

    /// One tick for every live particle: drift, light gravity, life drain,
    /// occasional horizontal jitter. Slots whose life runs out are freed in
    /// place; the pool is never compacted.
    pub fn update(&mut self, rng: &mut impl Rng) {
        for p in self.slots.iter_mut().filter(|p| p.active) {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += 0.1;
            p.life -= PARTICLE_DECAY;

            if rng.gen_ratio(1, 10) {
                p.vx += rng.gen_range(-0.2..0.2);
            }

            // Life decrements in f32 steps of 0.02 never land exactly on
            // zero; anything below half a step is spent.
            if p.life < PARTICLE_DECAY / 2.0 {
                p.active = false;
            }
        }
    }

    pub fn active(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter(|p| p.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }
}
