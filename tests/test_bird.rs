use flappy_term::WorldConfig;
use flappy_term::bird::Bird;
use flappy_term::collision;
use flappy_term::consts::{FLAP_VELOCITY, GRAVITY};
use flappy_term::pipes::{Pipe, PipeTrack};

use rand::SeedableRng;
use rand::rngs::StdRng;

fn cfg() -> WorldConfig {
    WorldConfig::default() // 800 × 600
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Physics ───────────────────────────────────────────────────────────────────

#[test]
fn bird_starts_centered() {
    let b = Bird::new(&cfg());
    assert_eq!(b.x, 200.0); // width / 4
    assert_eq!(b.y, 300.0); // height / 2
    assert_eq!(b.velocity, 0.0);
}

#[test]
fn gravity_accumulates_each_tick() {
    let mut b = Bird::new(&cfg());
    b.integrate();
    assert_eq!(b.velocity, GRAVITY);
    assert_eq!(b.y, 300.0 + GRAVITY);
    b.integrate();
    assert_eq!(b.velocity, 2.0 * GRAVITY);
}

#[test]
fn flap_replaces_velocity_instead_of_adding() {
    let mut b = Bird::new(&cfg());
    b.velocity = 12.5; // falling fast
    b.flap();
    assert_eq!(b.velocity, FLAP_VELOCITY);

    // Same impulse from an upward movement.
    b.velocity = -20.0;
    b.flap();
    assert_eq!(b.velocity, FLAP_VELOCITY);
}

#[test]
fn velocity_after_flap_tick_is_exactly_flap_plus_gravity() {
    let mut b = Bird::new(&cfg());
    b.velocity = 7.0;
    b.flap();
    b.integrate();
    assert_eq!(b.velocity, FLAP_VELOCITY + GRAVITY);
}

#[test]
fn x_never_changes() {
    let mut b = Bird::new(&cfg());
    for _ in 0..100 {
        b.integrate();
    }
    assert_eq!(b.x, 200.0);
}

#[test]
fn rotation_tracks_velocity_times_three() {
    let mut b = Bird::new(&cfg());
    b.velocity = 9.75; // integrate adds GRAVITY first: 10.0 * 3 = 30
    b.integrate();
    assert_eq!(b.rotation, 30.0);
}

#[test]
fn rotation_clamps_at_sixty_degrees() {
    let mut b = Bird::new(&cfg());
    b.velocity = 40.0;
    b.integrate();
    assert_eq!(b.rotation, 60.0);

    b.velocity = -40.0;
    b.integrate();
    assert_eq!(b.rotation, -60.0);
}

#[test]
fn reset_recenters_without_touching_x() {
    let mut b = Bird::new(&cfg());
    b.y = 17.0;
    b.velocity = 9.0;
    b.rotation = 27.0;
    b.reset(&cfg());
    assert_eq!(b.y, 300.0);
    assert_eq!(b.velocity, 0.0);
    assert_eq!(b.rotation, 0.0);
    assert_eq!(b.x, 200.0);
}

// ── Collision predicate ───────────────────────────────────────────────────────

/// Track with every pipe far off to the right, except pipe 0 which the test
/// positions explicitly.
fn track_with_pipe(x: f32, gap_y: f32) -> PipeTrack {
    let mut rng = seeded_rng();
    let mut track = PipeTrack::new(&cfg(), &mut rng);
    for i in 1..5 {
        track.pipes[i] = Pipe { x: 2000.0 + i as f32 * 300.0, gap_y: 300.0, counted: false };
    }
    track.pipes[0] = Pipe { x, gap_y, counted: false };
    track
}

#[test]
fn bird_inside_gap_does_not_collide() {
    let bird = Bird::new(&cfg()); // at (200, 300)
    // Pipe overlapping the bird horizontally, gap centered on the bird:
    // footprint 270..330 sits inside the 225..375 opening.
    let track = track_with_pipe(180.0, 300.0);
    assert!(!collision::hits_pipe(&bird, &track));
}

#[test]
fn bird_crossing_gap_top_collides() {
    let mut bird = Bird::new(&cfg());
    bird.y = 240.0; // footprint top 210 pokes above gap top 225
    let track = track_with_pipe(180.0, 300.0);
    assert!(collision::hits_pipe(&bird, &track));
}

#[test]
fn bird_crossing_gap_bottom_collides() {
    let mut bird = Bird::new(&cfg());
    bird.y = 360.0; // footprint bottom 390 pokes below gap bottom 375
    let track = track_with_pipe(180.0, 300.0);
    assert!(collision::hits_pipe(&bird, &track));
}

#[test]
fn no_collision_without_horizontal_overlap() {
    let mut bird = Bird::new(&cfg());
    bird.y = 50.0; // would collide with any overlapping pipe
    // Pipe left edge at 240 > bird right edge 230 — no overlap.
    let track = track_with_pipe(240.0, 300.0);
    assert!(!collision::hits_pipe(&bird, &track));
}

// ── Bounds ────────────────────────────────────────────────────────────────────

#[test]
fn above_world_is_out_of_bounds() {
    let mut bird = Bird::new(&cfg());
    bird.y = -0.5;
    assert!(collision::out_of_bounds(&bird, &cfg()));
}

#[test]
fn inside_ground_band_is_out_of_bounds() {
    let mut bird = Bird::new(&cfg());
    bird.y = 551.0; // ground band starts below 550 (height - 50)
    assert!(collision::out_of_bounds(&bird, &cfg()));
}

#[test]
fn sky_is_in_bounds() {
    let mut bird = Bird::new(&cfg());
    bird.y = 550.0; // exactly at the band edge — still flying
    assert!(!collision::out_of_bounds(&bird, &cfg()));
    bird.y = 0.0;
    assert!(!collision::out_of_bounds(&bird, &cfg()));
}
