// SPDX-License-Identifier: MPL-2.0
//! Time-based animation kernel: looping clocks, orbital placement math, and
//! one-shot entrance easing.
//!
//! Everything in here is pure computation over `Instant` values. Ticks are
//! delivered by the application's frame subscription, so tests can drive any
//! of these types with synthetic instants and never touch a real scheduler.

pub mod clock;
pub mod easing;
pub mod orbit;

pub use clock::LoopClock;
pub use easing::{ease_out_cubic, Entrance, EntrancePhase};
