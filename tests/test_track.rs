use flappy_term::WorldConfig;
use flappy_term::consts::{MAX_PIPES, PIPE_SPACING, PIPE_SPEED, PIPE_WIDTH};
use flappy_term::pipes::{Pipe, PipeTrack};

use rand::SeedableRng;
use rand::rngs::StdRng;

fn cfg() -> WorldConfig {
    WorldConfig::default() // 800 × 600, gap centers legal in [100, 450)
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn new_track() -> PipeTrack {
    PipeTrack::new(&cfg(), &mut seeded_rng())
}

// ── Initial layout ────────────────────────────────────────────────────────────

#[test]
fn initial_layout_is_staggered_off_the_right_edge() {
    let track = new_track();
    for (i, pipe) in track.pipes.iter().enumerate() {
        assert_eq!(pipe.x, 800.0 + i as f32 * PIPE_SPACING);
        assert!(!pipe.counted);
    }
}

#[test]
fn initial_gaps_are_inside_the_legal_band() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let track = PipeTrack::new(&cfg(), &mut rng);
        for pipe in &track.pipes {
            assert!(pipe.gap_y >= 100.0 && pipe.gap_y <= 450.0);
        }
    }
}

#[test]
fn reset_restores_the_stagger() {
    let mut track = new_track();
    let mut rng = seeded_rng();
    for _ in 0..100 {
        track.advance();
    }
    track.pipes[2] = Pipe { x: -500.0, gap_y: 300.0, counted: true };
    track.reset(&mut rng);
    for (i, pipe) in track.pipes.iter().enumerate() {
        assert_eq!(pipe.x, 800.0 + i as f32 * PIPE_SPACING);
        assert!(!pipe.counted);
    }
}

// ── Advance ───────────────────────────────────────────────────────────────────

#[test]
fn advance_moves_every_pipe_left_by_one_step() {
    let mut track = new_track();
    let before: Vec<f32> = track.pipes.iter().map(|p| p.x).collect();
    track.advance();
    for (pipe, old_x) in track.pipes.iter().zip(before) {
        assert_eq!(pipe.x, old_x - PIPE_SPEED);
    }
}

// ── Pass detection ────────────────────────────────────────────────────────────

#[test]
fn pass_scores_once_and_latches() {
    let mut track = new_track();
    // Right edge 160 is behind the bird at 200.
    track.pipes[0] = Pipe { x: 100.0, gap_y: 300.0, counted: false };
    assert_eq!(track.check_pass(200.0), 1);
    assert!(track.pipes[0].counted);

    // The latch holds until a recycle: no double counting.
    assert_eq!(track.check_pass(200.0), 0);
}

#[test]
fn pipe_level_with_bird_does_not_score() {
    let mut track = new_track();
    // Right edge exactly at the bird: strictly-less-than, so no pass yet.
    track.pipes[0] = Pipe { x: 200.0 - PIPE_WIDTH, gap_y: 300.0, counted: false };
    assert_eq!(track.check_pass(200.0), 0);
    assert!(!track.pipes[0].counted);
}

#[test]
fn several_pipes_can_pass_in_one_check() {
    let mut track = new_track();
    track.pipes[0] = Pipe { x: 50.0, gap_y: 300.0, counted: false };
    track.pipes[1] = Pipe { x: 120.0, gap_y: 300.0, counted: false };
    assert_eq!(track.check_pass(200.0), 2);
}

// ── Recycle ───────────────────────────────────────────────────────────────────

#[test]
fn offscreen_pipe_recycles_past_the_rightmost() {
    let mut track = new_track();
    let mut rng = seeded_rng();
    track.pipes[0] = Pipe { x: -61.0, gap_y: 300.0, counted: true }; // right edge at -1
    track.pipes[1] = Pipe { x: 100.0, gap_y: 300.0, counted: false };
    track.pipes[2] = Pipe { x: 400.0, gap_y: 300.0, counted: false };
    track.pipes[3] = Pipe { x: 700.0, gap_y: 300.0, counted: false };
    track.pipes[4] = Pipe { x: 1000.0, gap_y: 300.0, counted: false };

    track.recycle(&mut rng);

    let p0 = track.pipes[0];
    assert_eq!(p0.x, 1000.0 + PIPE_SPACING);
    assert!(!p0.counted); // latch cleared, pipe can score again
    assert!(p0.gap_y >= 100.0 && p0.gap_y <= 450.0);
}

#[test]
fn pipe_still_partially_visible_does_not_recycle() {
    let mut track = new_track();
    let mut rng = seeded_rng();
    track.pipes[0] = Pipe { x: -59.0, gap_y: 123.0, counted: true }; // right edge at +1
    track.recycle(&mut rng);
    let p0 = track.pipes[0];
    assert_eq!(p0.x, -59.0);
    assert_eq!(p0.gap_y, 123.0);
    assert!(p0.counted);
}

#[test]
fn recycled_gaps_stay_inside_the_legal_band() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut track = PipeTrack::new(&cfg(), &mut rng);
        track.pipes[0] = Pipe { x: -100.0, gap_y: 300.0, counted: true };
        track.recycle(&mut rng);
        let gap = track.pipes[0].gap_y;
        assert!(gap >= 100.0 && gap <= 450.0, "seed {seed}: gap {gap}");
    }
}

#[test]
fn double_recycle_in_one_tick_chains_off_the_fresh_position() {
    let mut track = new_track();
    let mut rng = seeded_rng();
    // Two pipes off screen at once. Index order decides: pipe 0 jumps past
    // the current rightmost (1100), pipe 1 then past pipe 0's new position.
    track.pipes[0] = Pipe { x: -100.0, gap_y: 300.0, counted: true };
    track.pipes[1] = Pipe { x: -70.0, gap_y: 300.0, counted: true };
    track.pipes[2] = Pipe { x: 500.0, gap_y: 300.0, counted: false };
    track.pipes[3] = Pipe { x: 800.0, gap_y: 300.0, counted: false };
    track.pipes[4] = Pipe { x: 1100.0, gap_y: 300.0, counted: false };

    track.recycle(&mut rng);

    assert_eq!(track.pipes[0].x, 1400.0);
    assert_eq!(track.pipes[1].x, 1700.0);
}

#[test]
fn track_always_keeps_exactly_max_pipes() {
    let mut track = new_track();
    let mut rng = seeded_rng();
    for _ in 0..2000 {
        track.advance();
        track.check_pass(200.0);
        track.recycle(&mut rng);
        assert_eq!(track.pipes.len(), MAX_PIPES);
        // Nothing ever drifts off the left edge for more than one tick.
        for pipe in &track.pipes {
            assert!(pipe.x + PIPE_WIDTH >= -PIPE_SPEED);
        }
    }
}
