//! The per-tick render contract: everything a front end needs to draw one
//! frame, copied out of the session. The renderer never sees the live world.

use crate::Rgb;
use crate::consts::{CELEBRATION_DURATION, MAX_PIPES};
use crate::session::{Screen, Session};

#[derive(Clone, Copy, Debug)]
pub struct BirdPose {
    pub x: f32,
    pub y: f32,
    /// Tilt in degrees, negative = nose up.
    pub rotation: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct PipeView {
    pub x: f32,
    pub gap_y: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
    pub size: f32,
    pub life: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Celebration {
    /// Which milestone message to show (index into the milestone table).
    pub message_index: usize,
    /// Remaining fraction of the celebration, 1.0 → 0.0.
    pub fraction: f32,
}

/// One frame of renderable state.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub screen: Screen,
    pub menu_selection: usize,
    pub world_width: f32,
    pub world_height: f32,
    pub bird: BirdPose,
    pub pipes: [PipeView; MAX_PIPES],
    pub particles: Vec<ParticleView>,
    pub score: u32,
    pub high_score: u32,
    pub celebration: Option<Celebration>,
    /// Tick counter, for purely decorative animation (wings, clouds, grass).
    pub frame: u64,
}

impl Session {
    /// Project the current state into an immutable frame description.
    pub fn snapshot(&self) -> Snapshot {
        let pipes = self.track.pipes.map(|p| PipeView {
            x: p.x,
            gap_y: p.gap_y,
        });

        let particles = self
            .particles
            .active()
            .map(|p| ParticleView {
                x: p.x,
                y: p.y,
                color: p.color,
                size: p.size,
                life: p.life,
            })
            .collect();

        let celebration = self.celebrating.then(|| Celebration {
            message_index: self.milestone_index(),
            fraction: (self.celebration_timer / CELEBRATION_DURATION).clamp(0.0, 1.0),
        });

        Snapshot {
            screen: self.screen,
            menu_selection: self.menu_selection,
            world_width: self.config.width,
            world_height: self.config.height,
            bird: BirdPose {
                x: self.bird.x,
                y: self.bird.y,
                rotation: self.bird.rotation,
            },
            pipes,
            particles,
            score: self.score,
            high_score: self.high_score,
            celebration,
            frame: self.frame,
        }
    }
}
