//! flappy-term — a Flappy Bird arcade game for the terminal.
//!
//! The simulation lives in this library and is completely decoupled from the
//! terminal: each tick produces an immutable [`snapshot::Snapshot`] that the
//! renderer (or a test) consumes. All randomness is injected, so every module
//! here runs headless and deterministic under a seeded RNG.

pub mod bird;
pub mod collision;
pub mod config;
pub mod particles;
pub mod pipes;
pub mod session;
pub mod snapshot;

pub use bird::Bird;
pub use config::{ConfigError, WorldConfig};
pub use particles::ParticlePool;
pub use pipes::PipeTrack;
pub use session::{Action, GameEvent, Screen, Session};
pub use snapshot::Snapshot;

/// Game tuning constants, in world units (the world is 800×600 with `y`
/// growing downward; one tick ≈ 16 ms).
pub mod consts {
    /// World dimensions.
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Height of the ground band at the bottom of the world; the bird dies
    /// on touching it.
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Bird half-extent — collision treats the bird as a square of this
    /// "radius".
    pub const BIRD_SIZE: f32 = 30.0;
    pub const GRAVITY: f32 = 0.25;
    pub const FLAP_VELOCITY: f32 = -5.0;

    pub const PIPE_WIDTH: f32 = 60.0;
    /// Vertical opening between the top and bottom halves of a pipe.
    pub const PIPE_GAP: f32 = 150.0;
    /// Horizontal distance between consecutive pipes.
    pub const PIPE_SPACING: f32 = 300.0;
    pub const PIPE_SPEED: f32 = 2.5;
    pub const MAX_PIPES: usize = 5;

    /// Gap centers stay at least this far from the top of the world...
    pub const GAP_MARGIN_TOP: f32 = 100.0;
    /// ...and at least this far from the bottom.
    pub const GAP_MARGIN_BOTTOM: f32 = 150.0;

    pub const MAX_PARTICLES: usize = 100;
    /// Life drained from every active particle per tick (life starts at 1.0).
    pub const PARTICLE_DECAY: f32 = 0.02;

    /// Score thresholds that trigger a celebration.
    pub const MILESTONES: [u32; 5] = [5, 10, 20, 40, 80];
    /// Celebration length in simulated seconds.
    pub const CELEBRATION_DURATION: f32 = 2.0;
    /// Celebration countdown per tick (the driver runs at ~60 Hz).
    pub const CELEBRATION_TICK: f32 = 0.016;
}

// ── Colors ──────────────────────────────────────────────────────────────────

/// 24-bit RGB color, shared by the particle system and the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend from `a` to `b`; `t_256` is the blend factor in 0..=256.
    pub const fn lerp(a: Rgb, b: Rgb, t_256: u16) -> Rgb {
        let t = t_256 as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }
}
