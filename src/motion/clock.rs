// SPDX-License-Identifier: MPL-2.0
//! Restartable, continuously-looping time source.

use std::time::{Duration, Instant};

/// Produces a normalized progress value in `[0, 1)` from wall-clock elapsed
/// time over a fixed period.
///
/// Deriving progress from elapsed time (instead of accumulating per-frame
/// deltas) keeps angular velocity constant under frame-rate variation and
/// keeps separately-owned clocks with the same period numerically identical
/// at any instant, so sibling orbit items stay synchronized without sharing
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopClock {
    started_at: Option<Instant>,
    period: Duration,
}

impl LoopClock {
    /// Creates a stopped clock with the given loop period.
    ///
    /// A zero period is clamped to one millisecond so progress stays defined.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            started_at: None,
            period: period.max(Duration::from_millis(1)),
        }
    }

    /// Starts the clock at `now`. No-op if already running, so a duplicate
    /// start can never reset the phase mid-cycle.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Stops the clock. Idempotent; safe before `start`.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Normalized progress at `now`, strictly in `[0, 1)`, or `None` when the
    /// clock is stopped. A tick arriving after `stop()` therefore has nothing
    /// to act on; the guard is the `Option` itself.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> Option<f64> {
        let started_at = self.started_at?;
        let elapsed = now.saturating_duration_since(started_at);
        let period_ms = self.period.as_secs_f64();
        let progress = (elapsed.as_secs_f64() / period_ms).fract();
        Some(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(20);

    #[test]
    fn stopped_clock_yields_no_progress() {
        let clock = LoopClock::new(PERIOD);
        assert!(!clock.is_running());
        assert_eq!(clock.progress_at(Instant::now()), None);
    }

    #[test]
    fn progress_is_elapsed_over_period() {
        let t0 = Instant::now();
        let mut clock = LoopClock::new(PERIOD);
        clock.start(t0);

        let progress = clock.progress_at(t0 + Duration::from_secs(5)).unwrap();
        assert!((progress - 0.25).abs() < 1e-9);
    }

    #[test]
    fn progress_stays_below_one() {
        let t0 = Instant::now();
        let mut clock = LoopClock::new(PERIOD);
        clock.start(t0);

        for secs in [0, 19, 20, 39, 40, 400] {
            let progress = clock.progress_at(t0 + Duration::from_secs(secs)).unwrap();
            assert!((0.0..1.0).contains(&progress), "progress {progress} at {secs}s");
        }
    }

    #[test]
    fn full_period_wraps_to_start() {
        let t0 = Instant::now();
        let mut clock = LoopClock::new(PERIOD);
        clock.start(t0);

        let at_start = clock.progress_at(t0 + Duration::from_millis(137)).unwrap();
        let one_revolution = clock.progress_at(t0 + Duration::from_millis(137) + PERIOD).unwrap();
        assert!((at_start - one_revolution).abs() < 1e-9);
    }

    #[test]
    fn start_is_noop_while_running() {
        let t0 = Instant::now();
        let mut clock = LoopClock::new(PERIOD);
        clock.start(t0);
        clock.start(t0 + Duration::from_secs(7));

        // Phase is still anchored at t0.
        let progress = clock.progress_at(t0 + Duration::from_secs(10)).unwrap();
        assert!((progress - 0.5).abs() < 1e-9);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut clock = LoopClock::new(PERIOD);
        clock.start(Instant::now());
        clock.stop();
        clock.stop();
        assert!(!clock.is_running());
        assert_eq!(clock.progress_at(Instant::now()), None);
    }

    #[test]
    fn stop_before_start_is_safe() {
        let mut clock = LoopClock::new(PERIOD);
        clock.stop();
        assert!(!clock.is_running());
    }

    #[test]
    fn restart_after_stop_rebases_phase() {
        let t0 = Instant::now();
        let mut clock = LoopClock::new(PERIOD);
        clock.start(t0);
        clock.stop();

        let t1 = t0 + Duration::from_secs(13);
        clock.start(t1);
        let progress = clock.progress_at(t1 + Duration::from_secs(5)).unwrap();
        assert!((progress - 0.25).abs() < 1e-9);
    }

    #[test]
    fn zero_period_is_clamped() {
        let clock = LoopClock::new(Duration::ZERO);
        assert_eq!(clock.period(), Duration::from_millis(1));
    }
}
