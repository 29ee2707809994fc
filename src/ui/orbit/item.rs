// SPDX-License-Identifier: MPL-2.0
//! Per-slot state for the orbiting showreel: one item per visual slot, plus
//! the twin that duplicates slot 0 at the tail of the loop.

use crate::catalog::MediaDescriptor;
use crate::motion::orbit;
use crate::motion::{Entrance, LoopClock};
use iced::widget::image;
use iced::Vector;
use std::time::{Duration, Instant};

/// Uniform scale applied while the pointer is over an item. Hover never
/// affects position.
pub const HOVER_SCALE: f32 = 1.05;

/// Poster card footprint in logical pixels.
pub const CARD_WIDTH: f32 = 140.0;
pub const CARD_HEIGHT: f32 = 84.0;

/// Timing shared by every item of one orbit view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitTiming {
    pub period: Duration,
    pub base_delay: Duration,
    pub stagger: Duration,
    pub entrance_duration: Duration,
}

impl Default for OrbitTiming {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(24),
            base_delay: Duration::from_millis(200),
            stagger: Duration::from_millis(120),
            entrance_duration: Duration::from_millis(600),
        }
    }
}

/// One visual slot on the orbit circle.
///
/// Owns its clock exclusively; siblings stay in phase because their clocks
/// share a period and are started at the same instant, not because any state
/// is shared.
#[derive(Debug, Clone)]
pub struct OrbitItem {
    pub slot_index: usize,
    pub total_slots: usize,
    pub media: MediaDescriptor,
    pub poster: Option<image::Handle>,
    clock: LoopClock,
    entrance: Entrance,
    pub hovered: bool,
    /// Offset from the orbit center, `None` until the entrance has started so
    /// the item cannot jump out of its hidden initial state.
    pub position: Option<Vector>,
    pub opacity: f32,
}

impl OrbitItem {
    pub fn new(
        slot_index: usize,
        total_slots: usize,
        media: MediaDescriptor,
        poster: Option<image::Handle>,
        now: Instant,
        timing: &OrbitTiming,
    ) -> Self {
        let mut clock = LoopClock::new(timing.period);
        clock.start(now);

        let delay = Entrance::staggered_delay(slot_index, timing.base_delay, timing.stagger);
        Self {
            slot_index,
            total_slots,
            media,
            poster,
            clock,
            entrance: Entrance::new(now, delay, timing.entrance_duration),
            hovered: false,
            position: None,
            opacity: 0.0,
        }
    }

    /// Advances the item to `now`: position from the orbit math, opacity from
    /// the entrance timeline. Does nothing once the clock is stopped.
    pub fn tick(&mut self, now: Instant, radius: f32) {
        let Some(progress) = self.clock.progress_at(now) else {
            return;
        };
        if !self.entrance.has_started(now) {
            return;
        }
        self.position = Some(orbit::slot_position(
            self.slot_index,
            self.total_slots,
            progress,
            radius,
        ));
        self.opacity = self.entrance.opacity_at(now);
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        if self.hovered {
            HOVER_SCALE
        } else {
            1.0
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Stops the clock and hides the item. Safe before the entrance fired and
    /// safe to call repeatedly.
    pub fn shutdown(&mut self) {
        self.clock.stop();
        self.position = None;
        self.opacity = 0.0;
    }
}

/// Duplicate of slot 0 that trails the last slot, closing the loop visually.
///
/// Runs its own clock with the same period as its siblings, so its progress
/// is numerically identical to theirs at any instant. Its placement is the
/// anchor's position composed with the own-minus-anchor offset, which lands
/// it exactly on slot 0's orbit.
#[derive(Debug, Clone)]
pub struct TwinItem {
    pub anchor_slot: usize,
    pub total_slots: usize,
    pub media: MediaDescriptor,
    pub poster: Option<image::Handle>,
    clock: LoopClock,
    /// Own-minus-anchor offset at the last tick.
    pub offset: Option<Vector>,
}

impl TwinItem {
    pub fn new(
        total_slots: usize,
        media: MediaDescriptor,
        poster: Option<image::Handle>,
        now: Instant,
        timing: &OrbitTiming,
    ) -> Self {
        let mut clock = LoopClock::new(timing.period);
        clock.start(now);
        Self {
            anchor_slot: total_slots - 1,
            total_slots,
            media,
            poster,
            clock,
            offset: None,
        }
    }

    pub fn tick(&mut self, now: Instant, radius: f32) {
        let Some(progress) = self.clock.progress_at(now) else {
            return;
        };
        self.offset = Some(orbit::twin_offset(
            0,
            self.anchor_slot,
            self.total_slots,
            progress,
            radius,
        ));
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn shutdown(&mut self) {
        self.clock.stop();
        self.offset = None;
    }
}
