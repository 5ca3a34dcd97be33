use std::time::{Duration, Instant};

/// Per-session play statistics shown in the UI
///
/// The clock only advances while a game is actually running; pauses and the
/// idle/game-over screens do not count toward play time.
pub struct GameMetrics {
    segment_start: Instant,
    accumulated: Duration,
    ticking: bool,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            segment_start: Instant::now(),
            accumulated: Duration::ZERO,
            ticking: false,
            games_played: 0,
        }
    }

    /// Total play time of the current game
    pub fn elapsed(&self) -> Duration {
        if self.ticking {
            self.accumulated + self.segment_start.elapsed()
        } else {
            self.accumulated
        }
    }

    pub fn on_game_start(&mut self) {
        self.accumulated = Duration::ZERO;
        self.segment_start = Instant::now();
        self.ticking = true;
    }

    pub fn on_pause(&mut self) {
        if self.ticking {
            self.accumulated += self.segment_start.elapsed();
            self.ticking = false;
        }
    }

    pub fn on_resume(&mut self) {
        if !self.ticking {
            self.segment_start = Instant::now();
            self.ticking = true;
        }
    }

    pub fn on_game_over(&mut self) {
        self.on_pause();
        self.games_played += 1;
    }

    pub fn on_reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.ticking = false;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed().as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.accumulated = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.accumulated = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.accumulated = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_games_played_counter() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_start();
        metrics.on_game_over();
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_start();
        metrics.on_game_over();
        assert_eq!(metrics.games_played, 2);
    }

    #[test]
    fn test_clock_stops_while_paused() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(20));
        metrics.on_pause();

        let frozen = metrics.elapsed();
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(metrics.elapsed(), frozen);

        metrics.on_resume();
        std::thread::sleep(Duration::from_millis(5));
        assert!(metrics.elapsed() > frozen);
    }

    #[test]
    fn test_game_start_resets_clock() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(20));
        assert!(metrics.elapsed().as_millis() >= 20);

        metrics.on_game_start();
        assert!(metrics.elapsed().as_millis() < 20);
    }
}
