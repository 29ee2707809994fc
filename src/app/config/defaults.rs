// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configurable settings.

/// Number of posters on the orbit ring.
pub const DEFAULT_ORBIT_SLOTS: usize = 8;
pub const MIN_ORBIT_SLOTS: usize = 1;
pub const MAX_ORBIT_SLOTS: usize = 24;

/// Seconds for one full revolution.
pub const DEFAULT_ORBIT_PERIOD_SECS: f64 = 24.0;
pub const MIN_ORBIT_PERIOD_SECS: f64 = 1.0;
pub const MAX_ORBIT_PERIOD_SECS: f64 = 600.0;

/// Orbit radius in logical pixels.
pub const DEFAULT_ORBIT_RADIUS: f32 = 180.0;

/// Delay before the first poster's entrance.
pub const DEFAULT_BASE_DELAY_MS: u64 = 200;

/// Extra delay per slot index.
pub const DEFAULT_STAGGER_MS: u64 = 120;

/// Duration of each poster's fade-in.
pub const DEFAULT_ENTRANCE_MS: u64 = 600;

/// Work strip auto-scroll speed in logical pixels per second.
pub const DEFAULT_CAROUSEL_SPEED: f32 = 30.0;
pub const MIN_CAROUSEL_SPEED: f32 = 0.0;
pub const MAX_CAROUSEL_SPEED: f32 = 300.0;

/// Where inquiry submissions are POSTed.
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formsubmit.co/ajax/hello@reel.studio";
