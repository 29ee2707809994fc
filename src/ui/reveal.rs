// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered staggered reveals.
//!
//! Each entry is registered with a threshold: the fraction of the page scroll
//! at which it becomes visible. An entry triggers exactly once; after that its
//! opacity eases in over a fixed duration, offset by a per-index stagger.
//! Reduced-motion short-circuits every entry to fully visible.

use crate::motion::ease_out_cubic;
use std::time::{Duration, Instant};

/// Fade-in duration once an entry triggers.
const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Delay between sibling entries triggered by the same scroll position.
const STAGGER: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy)]
struct Reveal {
    threshold: f32,
    triggered_at: Option<Instant>,
}

/// An ordered set of reveal entries for one screen.
#[derive(Debug, Clone)]
pub struct RevealSet {
    entries: Vec<Reveal>,
    reduced_motion: bool,
}

impl RevealSet {
    /// Creates a set with one entry per threshold, in display order.
    #[must_use]
    pub fn new(thresholds: &[f32], reduced_motion: bool) -> Self {
        Self {
            entries: thresholds
                .iter()
                .map(|&threshold| Reveal {
                    threshold: threshold.clamp(0.0, 1.0),
                    triggered_at: None,
                })
                .collect(),
            reduced_motion,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Feeds the current scroll position as a fraction in `[0, 1]`. Entries
    /// whose threshold has been passed trigger once, staggered by their index
    /// within the newly-triggered batch.
    pub fn on_scroll(&mut self, fraction: f32, now: Instant) {
        let mut batch_index: u32 = 0;
        for entry in &mut self.entries {
            if entry.triggered_at.is_none() && fraction >= entry.threshold {
                entry.triggered_at = Some(now + STAGGER * batch_index);
                batch_index += 1;
            }
        }
    }

    /// Opacity of entry `index` at `now`.
    #[must_use]
    pub fn opacity(&self, index: usize, now: Instant) -> f32 {
        if self.reduced_motion {
            return 1.0;
        }
        let Some(entry) = self.entries.get(index) else {
            return 1.0;
        };
        let Some(triggered_at) = entry.triggered_at else {
            return 0.0;
        };
        if now < triggered_at {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(triggered_at);
        if elapsed >= REVEAL_DURATION {
            return 1.0;
        }
        ease_out_cubic(elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32())
    }

    /// Whether every entry has fully revealed (gates the tick subscription).
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        self.reduced_motion
            || self.entries.iter().all(|entry| {
                entry
                    .triggered_at
                    .is_some_and(|at| now.saturating_duration_since(at) >= REVEAL_DURATION)
            })
    }
}
