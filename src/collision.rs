//! Pure collision predicates — no side effects, no state.

use crate::bird::Bird;
use crate::config::WorldConfig;
use crate::consts::{BIRD_SIZE, GROUND_HEIGHT, PIPE_GAP, PIPE_WIDTH};
use crate::pipes::PipeTrack;

/// True when the bird's square footprint pokes outside the gap of any pipe
/// it horizontally overlaps.
pub fn hits_pipe(bird: &Bird, track: &PipeTrack) -> bool {
    for pipe in &track.pipes {
        let overlaps_x =
            pipe.x < bird.x + BIRD_SIZE && pipe.x + PIPE_WIDTH > bird.x - BIRD_SIZE;
        if !overlaps_x {
            continue;
        }
        let gap_top = pipe.gap_y - PIPE_GAP / 2.0;
        let gap_bottom = pipe.gap_y + PIPE_GAP / 2.0;
        if bird.y - BIRD_SIZE < gap_top || bird.y + BIRD_SIZE > gap_bottom {
            return true;
        }
    }
    false
}

/// True when the bird has left the sky: above the top of the world or into
/// the ground band. Not attributable to any pipe.
pub fn out_of_bounds(bird: &Bird, cfg: &WorldConfig) -> bool {
    bird.y < 0.0 || bird.y > cfg.height - GROUND_HEIGHT
}
