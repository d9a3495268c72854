//! Game flow: the screen state machine, scoring, milestones, and the
//! per-tick update that drives every component. One `Session` owns the whole
//! world — there are no globals, and nothing here touches the terminal.

use rand::Rng;

use crate::Rgb;
use crate::bird::Bird;
use crate::collision;
use crate::config::{ConfigError, WorldConfig};
use crate::consts::{
    BIRD_SIZE, CELEBRATION_DURATION, CELEBRATION_TICK, MILESTONES,
};
use crate::particles::ParticlePool;
use crate::pipes::PipeTrack;

/// Which screen the game is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Instructions,
    Playing,
    GameOver,
}

/// Logical input, already mapped from whatever keys the front end reads.
/// Actions that make no sense on the current screen are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Confirm,
    Flap,
    Restart,
    Quit,
}

/// Things that happened during input handling or a tick, for the driver to
/// react to (sound, mostly). Purely informational — the simulation never
/// reads them back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Flap,
    Score,
    Milestone(u32),
    Hit,
}

const FLAP_COLOR: Rgb = Rgb(255, 255, 255);
const TRAIL_COLOR: Rgb = Rgb(255, 255, 204);
const HIT_COLOR: Rgb = Rgb(255, 0, 0);
const HIT_BURST: usize = 12;
const CELEBRATION_SPAWNS: usize = 50;
pub const CELEBRATION_COLORS: [Rgb; 5] = [
    Rgb(255, 0, 0),
    Rgb(0, 255, 0),
    Rgb(0, 0, 255),
    Rgb(255, 255, 0),
    Rgb(255, 0, 255),
];

/// Menu entries, top to bottom.
pub const MENU_ITEMS: [&str; 2] = ["New Game", "Exit"];

pub struct Session {
    pub config: WorldConfig,
    pub screen: Screen,
    /// 0 = New Game, 1 = Exit.
    pub menu_selection: usize,
    pub score: u32,
    /// Best score this process; survives every reset.
    pub high_score: u32,
    /// Highest milestone already celebrated this run.
    pub last_milestone: u32,
    pub celebrating: bool,
    pub celebration_timer: f32,
    /// Tick counter, for renderer animation only.
    pub frame: u64,
    pub bird: Bird,
    pub track: PipeTrack,
    pub particles: ParticlePool,
    events: Vec<GameEvent>,
}

impl Session {
    pub fn new(config: WorldConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            screen: Screen::Menu,
            menu_selection: 0,
            score: 0,
            high_score: 0,
            last_milestone: 0,
            celebrating: false,
            celebration_timer: 0.0,
            frame: 0,
            bird: Bird::new(&config),
            track: PipeTrack::new(&config, rng),
            particles: ParticlePool::new(),
            events: Vec::new(),
        })
    }

    /// Apply one input action. Input is handled synchronously between ticks;
    /// the last press wins. Returns `true` when the player asked to leave
    /// the program (Exit from the menu).
    pub fn handle_action(&mut self, action: Action, rng: &mut impl Rng) -> bool {
        match (self.screen, action) {
            (Screen::Menu, Action::Up) => self.menu_selection = 0,
            (Screen::Menu, Action::Down) => self.menu_selection = 1,
            (Screen::Menu, Action::Confirm) => {
                if self.menu_selection == 0 {
                    self.screen = Screen::Instructions;
                } else {
                    return true;
                }
            }
            (Screen::Instructions, Action::Confirm) => {
                self.reset_game(rng);
                self.screen = Screen::Playing;
            }
            (Screen::Playing, Action::Flap) => {
                self.bird.flap();
                self.particles
                    .spawn(self.bird.x, self.bird.y + BIRD_SIZE, FLAP_COLOR, rng);
                self.events.push(GameEvent::Flap);
            }
            (Screen::GameOver, Action::Restart) => {
                self.reset_game(rng);
                self.screen = Screen::Playing;
            }
            (Screen::GameOver, Action::Quit) => self.screen = Screen::Menu,
            _ => {}
        }
        false
    }

    /// Fresh run: bird back to center, score and milestones cleared, track
    /// restaggered. The high score is the one thing that survives.
    pub fn reset_game(&mut self, rng: &mut impl Rng) {
        self.bird.reset(&self.config);
        self.score = 0;
        self.last_milestone = 0;
        self.celebrating = false;
        self.celebration_timer = 0.0;
        self.track.reset(rng);
    }

    /// Advance the world by one tick. Only `Playing` moves the game; the
    /// particle pool animates on every screen.
    pub fn update(&mut self, rng: &mut impl Rng) {
        self.frame += 1;

        if self.screen == Screen::Playing {
            self.check_milestone(rng);

            if self.celebrating {
                self.celebration_timer -= CELEBRATION_TICK;
                if self.celebration_timer <= 0.0 {
                    self.celebrating = false;
                }
            }

            // Faint trail behind the bird, roughly every third tick.
            if rng.gen_ratio(1, 3) {
                self.particles
                    .spawn(self.bird.x - BIRD_SIZE, self.bird.y, TRAIL_COLOR, rng);
            }

            self.bird.integrate();

            self.track.advance();
            let passed = self.track.check_pass(self.bird.x);
            if passed > 0 {
                self.score += passed;
                if self.score > self.high_score {
                    self.high_score = self.score;
                }
                self.events.push(GameEvent::Score);
            }
            self.track.recycle(rng);

            if collision::hits_pipe(&self.bird, &self.track)
                || collision::out_of_bounds(&self.bird, &self.config)
            {
                for _ in 0..HIT_BURST {
                    self.particles
                        .spawn(self.bird.x, self.bird.y, HIT_COLOR, rng);
                }
                self.screen = Screen::GameOver;
                self.events.push(GameEvent::Hit);
            }
        }

        self.particles.update(rng);
    }

    /// Celebrate the score crossing 5/10/20/40/80, once per threshold per
    /// run. The check runs against the score banked on the previous tick, so
    /// the celebration starts one tick after the pass that earned it.
    fn check_milestone(&mut self, rng: &mut impl Rng) {
        if self.score > self.last_milestone && MILESTONES.contains(&self.score) {
            self.last_milestone = self.score;
            self.celebrating = true;
            self.celebration_timer = CELEBRATION_DURATION;
            for i in 0..CELEBRATION_SPAWNS {
                let color = CELEBRATION_COLORS[i % CELEBRATION_COLORS.len()];
                self.particles.spawn(self.bird.x, self.bird.y, color, rng);
            }
            self.events.push(GameEvent::Milestone(self.score));
        }
    }

    /// Index into the milestone table for the celebration currently showing.
    pub fn milestone_index(&self) -> usize {
        MILESTONES
            .iter()
            .position(|&m| m == self.last_milestone)
            .unwrap_or(0)
    }

    /// Drain the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
