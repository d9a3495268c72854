mod audio;
mod render;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, terminal,
};
use rand::thread_rng;

use flappy_term::{Action, Screen, Session, WorldConfig};

use audio::Audio;
use render::Renderer;

/// One simulation tick per frame, ~60 Hz.
const FRAME: Duration = Duration::from_millis(16);

/// Map a key to a logical action for the current screen. Unmapped keys are
/// ignored.
fn map_key(screen: Screen, code: KeyCode) -> Option<Action> {
    match screen {
        Screen::Menu => match code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Down),
            KeyCode::Enter => Some(Action::Confirm),
            _ => None,
        },
        Screen::Instructions => match code {
            KeyCode::Enter => Some(Action::Confirm),
            _ => None,
        },
        Screen::Playing => match code {
            KeyCode::Char(' ') | KeyCode::Up => Some(Action::Flap),
            _ => None,
        },
        Screen::GameOver => match code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            _ => None,
        },
    }
}

fn main() -> io::Result<()> {
    let mut rng = thread_rng();
    let mut session = Session::new(WorldConfig::default(), &mut rng)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
    )?;

    let cleanup = |out: &mut io::Stdout| -> io::Result<()> {
        execute!(
            out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        )?;
        terminal::disable_raw_mode()
    };

    let audio = Audio::new();
    let (cols, rows) = terminal::size()?;
    let mut renderer = Renderer::new(cols, rows);

    loop {
        let frame_start = Instant::now();

        // Input is applied immediately, between ticks; the last press wins.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => {
                    if kind == KeyEventKind::Release {
                        continue;
                    }
                    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                        cleanup(&mut out)?;
                        return Ok(());
                    }
                    if let Some(action) = map_key(session.screen, code) {
                        if session.handle_action(action, &mut rng) {
                            cleanup(&mut out)?;
                            return Ok(());
                        }
                    }
                }
                Event::Resize(c, r) => renderer.resize(c, r),
                _ => {}
            }
        }

        session.update(&mut rng);
        audio.play_all(&session.take_events());

        let snapshot = session.snapshot();
        renderer.draw(&mut out, &snapshot)?;

        // Frame pacing.
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}
