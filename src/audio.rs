//! Synthesized sound effects, reacting to the session's event stream.
//!
//! Everything is generated at startup with fundsp and played fire-and-forget
//! through rodio. Built only with the `sound` feature; without it (or when
//! no audio device opens) every call is a silent no-op.

use flappy_term::GameEvent;

#[cfg(feature = "sound")]
mod backend {
    use flappy_term::GameEvent;
    use fundsp::prelude::*;
    use rodio::buffer::SamplesBuffer;
    use rodio::{OutputStream, OutputStreamBuilder, Sink};

    const SAMPLE_RATE: u32 = 44_100;

    /// Run a mono fundsp graph for `secs` and collect the samples.
    fn render(unit: &mut dyn AudioUnit, secs: f32) -> Vec<f32> {
        unit.set_sample_rate(SAMPLE_RATE as f64);
        let n = (SAMPLE_RATE as f32 * secs) as usize;
        (0..n).map(|_| unit.get_mono()).collect()
    }

    /// Short upward chirp for a wing beat.
    fn flap_samples() -> Vec<f32> {
        let freq = lfo(|t| lerp(380.0, 740.0, (t / 0.08).min(1.0)));
        let gain = lfo(|t| lerp(0.12, 0.0, (t / 0.1).min(1.0)));
        let mut sound = freq >> sine() * gain;
        render(&mut sound, 0.1)
    }

    /// Bright blip for a scored pipe.
    fn score_samples() -> Vec<f32> {
        let gain = lfo(|t| lerp(0.15, 0.0, (t / 0.09).min(1.0)));
        let mut sound = dc(880.0) >> sine() * gain;
        render(&mut sound, 0.09)
    }

    /// Three-note rise for a milestone.
    fn milestone_samples() -> Vec<f32> {
        let freq = lfo(|t| {
            if t < 0.11 {
                523.25
            } else if t < 0.22 {
                659.25
            } else {
                783.99
            }
        });
        let gain = lfo(|t| lerp(0.15, 0.0, (t / 0.38).min(1.0)));
        let mut sound = freq >> sine() * gain;
        render(&mut sound, 0.38)
    }

    /// Falling sawtooth sweep for the crash.
    fn hit_samples() -> Vec<f32> {
        let freq = lfo(|t| lerp(400.0, 80.0, (t / 0.4).min(1.0)));
        let gain = lfo(|t| lerp(0.15, 0.0, (t / 0.5).min(1.0)));
        let mut sound = freq >> saw() * gain;
        render(&mut sound, 0.5)
    }

    pub struct Audio {
        // Dropping the stream kills playback; keep it for the whole program.
        stream: Option<OutputStream>,
        flap: Vec<f32>,
        score: Vec<f32>,
        milestone: Vec<f32>,
        hit: Vec<f32>,
    }

    impl Audio {
        pub fn new() -> Self {
            Self {
                stream: OutputStreamBuilder::open_default_stream().ok(),
                flap: flap_samples(),
                score: score_samples(),
                milestone: milestone_samples(),
                hit: hit_samples(),
            }
        }

        pub fn play(&self, event: &GameEvent) {
            let Some(stream) = &self.stream else {
                return;
            };
            let samples = match event {
                GameEvent::Flap => &self.flap,
                GameEvent::Score => &self.score,
                GameEvent::Milestone(_) => &self.milestone,
                GameEvent::Hit => &self.hit,
            };
            let sink = Sink::connect_new(stream.mixer());
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples.clone()));
            sink.detach(); // Play in background
        }
    }
}

#[cfg(not(feature = "sound"))]
mod backend {
    use flappy_term::GameEvent;

    pub struct Audio;

    impl Audio {
        pub fn new() -> Self {
            Audio
        }

        pub fn play(&self, _event: &GameEvent) {}
    }
}

pub use backend::Audio;

impl Audio {
    /// Convenience: play everything the session reported this frame.
    pub fn play_all(&self, events: &[GameEvent]) {
        for ev in events {
            self.play(ev);
        }
    }
}
