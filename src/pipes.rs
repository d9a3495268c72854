//! The obstacle track: a fixed ring of pipes scrolling left, recycled in
//! place when they fall off the screen. Pipes are never allocated or dropped
//! after construction.

use rand::Rng;

use crate::config::WorldConfig;
use crate::consts::{MAX_PIPES, PIPE_SPACING, PIPE_SPEED, PIPE_WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct Pipe {
    /// Left edge of the pipe pair.
    pub x: f32,
    /// Vertical midpoint of the opening.
    pub gap_y: f32,
    /// Scoring latch — set when the bird passes, cleared on recycle.
    pub counted: bool,
}

pub struct PipeTrack {
    pub pipes: [Pipe; MAX_PIPES],
    spawn_x: f32,
    min_gap_y: f32,
    max_gap_y: f32,
}

impl PipeTrack {
    pub fn new(cfg: &WorldConfig, rng: &mut impl Rng) -> Self {
        let mut track = Self {
            pipes: [Pipe {
                x: 0.0,
                gap_y: 0.0,
                counted: false,
            }; MAX_PIPES],
            spawn_x: cfg.width,
            min_gap_y: cfg.min_gap_y(),
            max_gap_y: cfg.max_gap_y(),
        };
        track.reset(rng);
        track
    }

    /// Staggered initial layout: pipe `i` at `width + i * PIPE_SPACING`, each
    /// with a fresh gap and a cleared latch.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        for (i, pipe) in self.pipes.iter_mut().enumerate() {
            pipe.x = self.spawn_x + i as f32 * PIPE_SPACING;
            pipe.gap_y = rng.gen_range(self.min_gap_y..self.max_gap_y);
            pipe.counted = false;
        }
    }

    /// Scroll every pipe left by one tick's worth of travel.
    pub fn advance(&mut self) {
        for pipe in &mut self.pipes {
            pipe.x -= PIPE_SPEED;
        }
    }

    /// Latch and count pipes whose right edge has crossed behind the bird.
    /// Each pipe scores exactly once per recycle.
    pub fn check_pass(&mut self, bird_x: f32) -> u32 {
        let mut passed = 0;
        for pipe in &mut self.pipes {
            if !pipe.counted && pipe.x + PIPE_WIDTH < bird_x {
                pipe.counted = true;
                passed += 1;
            }
        }
        passed
    }

    /// Teleport pipes that left the screen to one spacing past the current
    /// rightmost pipe. The rightmost is re-read from the array as already
    /// mutated this pass, so when several pipes recycle in one tick the
    /// outcome depends on index order; with a single recycle per tick the
    /// spacing always comes out even.
    pub fn recycle(&mut self, rng: &mut impl Rng) {
        for i in 0..MAX_PIPES {
            if self.pipes[i].x + PIPE_WIDTH < 0.0 {
                let rightmost = self
                    .pipes
                    .iter()
                    .map(|p| p.x)
                    .fold(f32::NEG_INFINITY, f32::max);
                self.pipes[i].x = rightmost + PIPE_SPACING;
                self.pipes[i].gap_y = rng.gen_range(self.min_gap_y..self.max_gap_y);
                self.pipes[i].counted = false;
            }
        }
    }
}
