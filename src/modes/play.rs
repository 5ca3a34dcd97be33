use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::audio::SoundSink;
use crate::game::{Difficulty, GameConfig};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::score::SaveFile;
use crate::session::{GameSession, TickTimer};

pub struct PlayMode {
    session: GameSession,
    renderer: Renderer,
    input_handler: InputHandler,
    sound: Box<dyn SoundSink>,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(
        config: GameConfig,
        difficulty: Difficulty,
        save: SaveFile,
        sound: Box<dyn SoundSink>,
    ) -> Self {
        Self {
            session: GameSession::new(config, difficulty, save),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            sound,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Snake ticks at the state's current interval; the food drifts on
        // its own slower cadence in hard mode
        let mut snake_timer = TickTimer::new(self.session.tick_interval());
        let mut food_timer = TickTimer::new(self.session.food_tick_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Snake tick
                _ = snake_timer.tick() => {
                    self.session.advance()?;
                }

                // Hard-mode food tick; the session ignores it otherwise
                _ = food_timer.tick() => {
                    self.session.advance_food();
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.session);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            // Pick up speed-ups, resets and difficulty switches; a no-op
            // while the interval is unchanged
            snake_timer.reschedule(self.session.tick_interval());

            self.flush_sounds();

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.session.queue_direction(direction);
                }
                KeyAction::ToggleRunning => {
                    self.session.toggle_running();
                }
                KeyAction::Reset => {
                    self.session.reset();
                }
                KeyAction::ToggleMute => {
                    self.session.toggle_mute()?;
                }
                KeyAction::SetDifficulty(difficulty) => {
                    self.session.set_difficulty(difficulty);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn flush_sounds(&mut self) {
        let muted = self.session.is_muted();
        for event in self.session.take_events() {
            if !muted {
                self.sound.play(event);
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullSink;
    use crate::session::GamePhase;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::TempDir;

    fn play_mode() -> (PlayMode, TempDir) {
        let dir = TempDir::new().unwrap();
        let save = SaveFile::load(dir.path().join("save.json"));
        let mode = PlayMode::new(
            GameConfig::default(),
            Difficulty::Normal,
            save,
            Box::new(NullSink),
        );
        (mode, dir)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_initial_state() {
        let (mode, _dir) = play_mode();
        assert_eq!(mode.session.phase(), GamePhase::Idle);
        assert_eq!(mode.session.state().score, 0);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_quit_key_sets_flag() {
        let (mut mode, _dir) = play_mode();
        mode.handle_event(key(KeyCode::Char('q'))).unwrap();
        assert!(mode.should_quit);
    }

    #[test]
    fn test_space_starts_game() {
        let (mut mode, _dir) = play_mode();
        mode.handle_event(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(mode.session.phase(), GamePhase::Running);
    }

    #[test]
    fn test_difficulty_key_switches_mode() {
        let (mut mode, _dir) = play_mode();
        mode.handle_event(key(KeyCode::Char('2'))).unwrap();
        assert_eq!(mode.session.state().difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_key_release_ignored() {
        let (mut mode, _dir) = play_mode();
        let mut release = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        mode.handle_event(Event::Key(release)).unwrap();
        assert_eq!(mode.session.phase(), GamePhase::Idle);
    }
}
