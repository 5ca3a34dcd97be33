//! The lifecycle and mode controller
//!
//! Owns the phase machine around the pure engine: starting, pausing,
//! resuming, resetting, difficulty switching, high-score persistence and
//! sound-event emission. The driving event loop only ever talks to the
//! session, never to the engine directly.

use anyhow::Result;
use std::time::Duration;

use crate::audio::SoundEvent;
use crate::game::{Action, Difficulty, Direction, GameConfig, GameEngine, GameState, StepResult};
use crate::metrics::GameMetrics;
use crate::score::SaveFile;

/// Where the session is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fresh state, waiting for the player to start
    Idle,
    /// Ticks are being applied
    Running,
    /// Ticks are suspended, state retained
    Paused,
    /// Terminal collision happened, state frozen until reset
    GameOver,
}

/// One play session: engine, current state, phase and the peripherals
pub struct GameSession {
    engine: GameEngine,
    state: GameState,
    phase: GamePhase,
    metrics: GameMetrics,
    save: SaveFile,
    /// Difficulty selection; applied to the state on the next (re)init
    selected_difficulty: Difficulty,
    /// Latest accepted direction input, consumed at the next tick
    pending_direction: Option<Direction>,
    events: Vec<SoundEvent>,
}

impl GameSession {
    pub fn new(config: GameConfig, difficulty: Difficulty, save: SaveFile) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset(difficulty);

        Self {
            engine,
            state,
            phase: GamePhase::Idle,
            metrics: GameMetrics::new(),
            save,
            selected_difficulty: difficulty,
            pending_direction: None,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn high_score(&self) -> u32 {
        self.save.high_score()
    }

    pub fn is_muted(&self) -> bool {
        self.save.muted()
    }

    /// The difficulty currently selected, which may not yet be the one the
    /// in-flight game was started with
    pub fn selected_difficulty(&self) -> Difficulty {
        self.selected_difficulty
    }

    /// Current snake tick interval
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.state.tick_ms)
    }

    /// Hard-mode food drift interval
    pub fn food_tick_interval(&self) -> Duration {
        Duration::from_millis(self.engine.config().food_tick_ms)
    }

    /// Drain the sound events accumulated since the last call
    pub fn take_events(&mut self) -> Vec<SoundEvent> {
        std::mem::take(&mut self.events)
    }

    /// Record a steering input. Ignored outside Running and for
    /// 180-degree reversals; an accepted change emits a Move cue.
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.phase != GamePhase::Running {
            return;
        }
        if self.state.snake.direction.is_opposite(direction) {
            return;
        }
        self.pending_direction = Some(direction);
        self.events.push(SoundEvent::Move);
    }

    /// Start from idle, or toggle between running and paused. A finished
    /// game must be reset first.
    pub fn toggle_running(&mut self) {
        match self.phase {
            GamePhase::Idle => {
                self.phase = GamePhase::Running;
                self.metrics.on_game_start();
                self.events.push(SoundEvent::Button);
            }
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                self.metrics.on_pause();
                self.events.push(SoundEvent::Button);
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                self.metrics.on_resume();
                self.events.push(SoundEvent::Button);
            }
            GamePhase::GameOver => {}
        }
    }

    /// Back to a fresh idle state, from any phase
    pub fn reset(&mut self) {
        self.state = self.engine.reset(self.selected_difficulty);
        self.phase = GamePhase::Idle;
        self.pending_direction = None;
        self.metrics.on_reset();
        self.events.push(SoundEvent::Button);
    }

    /// Change the difficulty selection. Outside of a running game the state
    /// reinitializes immediately; mid-game only the selection updates and
    /// the new mode takes hold at the next reset.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.selected_difficulty == difficulty {
            return;
        }
        self.selected_difficulty = difficulty;

        if self.phase != GamePhase::Running {
            self.state = self.engine.reset(difficulty);
            self.phase = GamePhase::Idle;
            self.pending_direction = None;
            self.metrics.on_reset();
        }
    }

    /// Flip the persisted mute preference
    pub fn toggle_mute(&mut self) -> Result<()> {
        let muted = !self.save.muted();
        self.save.set_muted(muted)?;
        if !muted {
            self.events.push(SoundEvent::Button);
        }
        Ok(())
    }

    /// Apply one snake tick. Returns None outside Running.
    pub fn advance(&mut self) -> Result<Option<StepResult>> {
        if self.phase != GamePhase::Running {
            return Ok(None);
        }

        let action = self
            .pending_direction
            .take()
            .map(Action::Move)
            .unwrap_or(Action::Continue);

        let result = self.engine.step(&mut self.state, action);

        if result.info.ate_food {
            self.events.push(SoundEvent::Eat);
            self.save.record_score(self.state.score)?;
        }

        if result.terminated {
            self.phase = GamePhase::GameOver;
            self.metrics.on_game_over();
            self.events.push(SoundEvent::GameOver);
        }

        Ok(Some(result))
    }

    /// Apply one hard-mode food tick; a no-op outside Running or in
    /// normal mode
    pub fn advance_food(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.engine.food_step(&mut self.state);
    }
}
