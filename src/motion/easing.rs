// SPDX-License-Identifier: MPL-2.0
//! One-shot entrance timelines with eased progress.

use std::time::{Duration, Instant};

/// Cubic ease-out: fast start, smooth settle.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inverse = 1.0 - t;
    1.0 - inverse * inverse * inverse
}

/// Where a one-shot entrance is in its timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntrancePhase {
    /// The delay has not elapsed; the element stays hidden.
    Pending,
    /// Easing in; the payload is the eased progress in `(0, 1)`.
    Running(f32),
    Complete,
}

/// A scheduled, delayed, fixed-duration entrance transition.
///
/// Unlike the orbit clocks this runs exactly once; it only answers "how far
/// along am I at `now`" and keeps no running flag, so cancelling is simply
/// dropping the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    starts_at: Instant,
    duration: Duration,
}

impl Entrance {
    /// Schedules an entrance `delay` after `created_at`.
    #[must_use]
    pub fn new(created_at: Instant, delay: Duration, duration: Duration) -> Self {
        Self {
            starts_at: created_at + delay,
            duration: duration.max(Duration::from_millis(1)),
        }
    }

    /// Per-slot staggered delay: `base + slot_index · stagger`.
    #[must_use]
    pub fn staggered_delay(slot_index: usize, base: Duration, stagger: Duration) -> Duration {
        base + stagger * slot_index as u32
    }

    #[must_use]
    pub fn starts_at(&self) -> Instant {
        self.starts_at
    }

    /// Whether the entrance has begun (position updates are suppressed until
    /// this is true, to avoid a visible jump out of the hidden initial state).
    #[must_use]
    pub fn has_started(&self, now: Instant) -> bool {
        now >= self.starts_at
    }

    #[must_use]
    pub fn phase_at(&self, now: Instant) -> EntrancePhase {
        if now < self.starts_at {
            return EntrancePhase::Pending;
        }
        let elapsed = now.saturating_duration_since(self.starts_at);
        if elapsed >= self.duration {
            return EntrancePhase::Complete;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        EntrancePhase::Running(ease_out_cubic(t))
    }

    /// Eased opacity in `[0, 1]` at `now`.
    #[must_use]
    pub fn opacity_at(&self, now: Instant) -> f32 {
        match self.phase_at(now) {
            EntrancePhase::Pending => 0.0,
            EntrancePhase::Running(eased) => eased,
            EntrancePhase::Complete => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);
    const DURATION: Duration = Duration::from_millis(600);

    #[test]
    fn ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-2.0), 0.0);
        assert_eq!(ease_out_cubic(3.0), 1.0);
    }

    #[test]
    fn ease_out_cubic_is_monotone() {
        let mut previous = 0.0;
        for i in 0..=100 {
            let eased = ease_out_cubic(i as f32 / 100.0);
            assert!(eased >= previous);
            previous = eased;
        }
    }

    #[test]
    fn pending_until_delay_elapses() {
        let t0 = Instant::now();
        let entrance = Entrance::new(t0, DELAY, DURATION);

        assert_eq!(entrance.phase_at(t0), EntrancePhase::Pending);
        assert!(!entrance.has_started(t0 + DELAY - Duration::from_millis(1)));
        assert!(entrance.has_started(t0 + DELAY));
    }

    #[test]
    fn runs_then_completes() {
        let t0 = Instant::now();
        let entrance = Entrance::new(t0, DELAY, DURATION);

        match entrance.phase_at(t0 + DELAY + DURATION / 2) {
            EntrancePhase::Running(eased) => assert!(eased > 0.0 && eased < 1.0),
            other => panic!("expected Running, got {other:?}"),
        }
        assert_eq!(entrance.phase_at(t0 + DELAY + DURATION), EntrancePhase::Complete);
    }

    #[test]
    fn opacity_tracks_phase() {
        let t0 = Instant::now();
        let entrance = Entrance::new(t0, DELAY, DURATION);

        assert_eq!(entrance.opacity_at(t0), 0.0);
        let mid = entrance.opacity_at(t0 + DELAY + DURATION / 2);
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(entrance.opacity_at(t0 + DELAY + DURATION * 2), 1.0);
    }

    #[test]
    fn staggered_delay_grows_linearly_with_slot() {
        let base = Duration::from_millis(200);
        let stagger = Duration::from_millis(120);

        assert_eq!(Entrance::staggered_delay(0, base, stagger), base);
        assert_eq!(
            Entrance::staggered_delay(3, base, stagger),
            base + stagger * 3
        );
    }

    #[test]
    fn entrance_begins_no_earlier_than_scheduled() {
        // Slot k becomes visible no earlier than base + k·stagger, and no
        // later than that plus one frame.
        let t0 = Instant::now();
        let base = Duration::from_millis(200);
        let stagger = Duration::from_millis(120);
        let frame = Duration::from_millis(16);

        for slot in 0..8usize {
            let delay = Entrance::staggered_delay(slot, base, stagger);
            let entrance = Entrance::new(t0, delay, DURATION);

            assert!(!entrance.has_started(t0 + delay - Duration::from_millis(1)));
            assert!(entrance.opacity_at(t0 + delay - Duration::from_millis(1)) == 0.0);
            assert!(entrance.has_started(t0 + delay + frame));
            assert!(entrance.opacity_at(t0 + delay + frame) > 0.0);
        }
    }
}
