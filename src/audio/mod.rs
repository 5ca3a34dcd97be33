//! Named sound events emitted by the game session
//!
//! The session only names what happened; whether anything is audible is up
//! to the sink the caller plugs in.

use std::io::Write;

/// Discrete sound cues produced by gameplay and UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    /// A direction change was accepted
    Move,
    /// The snake ate the food
    Eat,
    /// The game ended
    GameOver,
    /// A control was activated (start, pause, reset, mute)
    Button,
}

/// Receiver for sound events
pub trait SoundSink {
    fn play(&mut self, event: SoundEvent);
}

/// Sink that rings the terminal bell for every event
pub struct TerminalBell;

impl SoundSink for TerminalBell {
    fn play(&mut self, _event: SoundEvent) {
        // BEL is safe in raw mode; playback failure is not worth surfacing
        let mut stderr = std::io::stderr();
        let _ = stderr.write_all(b"\x07");
        let _ = stderr.flush();
    }
}

/// Sink that discards everything
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&mut self, _event: SoundEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(Vec<SoundEvent>);

    impl SoundSink for Recorder {
        fn play(&mut self, event: SoundEvent) {
            self.0.push(event);
        }
    }

    #[test]
    fn test_sink_receives_events() {
        let mut recorder = Recorder(Vec::new());
        recorder.play(SoundEvent::Move);
        recorder.play(SoundEvent::Eat);
        assert_eq!(recorder.0, vec![SoundEvent::Move, SoundEvent::Eat]);
    }

    #[test]
    fn test_null_sink_accepts_everything() {
        let mut sink = NullSink;
        sink.play(SoundEvent::GameOver);
        sink.play(SoundEvent::Button);
    }
}
