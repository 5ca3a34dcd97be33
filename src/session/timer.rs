use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval};

/// A repeating tick source with an explicitly mutable period
///
/// Speeding the game up is a `reschedule` call rather than an implicit
/// clear-and-recreate of a raw timer handle. The new period takes effect
/// after the currently scheduled tick boundary; the first tick of a fresh
/// or rescheduled timer fires one full period in the future, never
/// immediately.
pub struct TickTimer {
    interval: Interval,
    period: Duration,
}

impl TickTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            interval: Self::make(period),
            period,
        }
    }

    fn make(period: Duration) -> Interval {
        interval_at(Instant::now() + period, period)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Wait for the next tick
    pub async fn tick(&mut self) {
        self.interval.tick().await;
    }

    /// Change the period; a no-op if it is unchanged
    pub fn reschedule(&mut self, period: Duration) {
        if period != self.period {
            self.period = period;
            self.interval = Self::make(period);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_a_full_period() {
        let start = Instant::now();
        let mut timer = TickTimer::new(Duration::from_millis(100));

        timer.tick().await;
        assert_eq!(start.elapsed(), Duration::from_millis(100));

        timer.tick().await;
        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_changes_cadence() {
        let start = Instant::now();
        let mut timer = TickTimer::new(Duration::from_millis(100));

        timer.tick().await;
        timer.reschedule(Duration::from_millis(50));
        assert_eq!(timer.period(), Duration::from_millis(50));

        timer.tick().await;
        assert_eq!(start.elapsed(), Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_same_period_keeps_schedule() {
        let start = Instant::now();
        let mut timer = TickTimer::new(Duration::from_millis(100));

        timer.tick().await;
        timer.reschedule(Duration::from_millis(100));
        timer.tick().await;

        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }
}
