// SPDX-License-Identifier: MPL-2.0
//! Polar-to-Cartesian placement of evenly-spaced slots on a looping circle.
//!
//! A slot's angle is derived from its index offset plus the shared progress
//! value, so any number of independently-owned clocks with the same period
//! produce perfectly even spacing without cross-slot coordination.

use iced::Vector;
use std::f64::consts::TAU;

/// Orbit radius in logical pixels.
pub const RADIUS: f32 = 180.0;

/// Angle in radians of `slot` out of `total` at the given progress:
/// `2π · ((slot/total + progress) mod 1)`.
///
/// Continuous across the 1 → 0 progress wrap because the angle is only ever
/// meaningful mod 2π.
#[must_use]
pub fn slot_angle(slot: usize, total: usize, progress: f64) -> f64 {
    debug_assert!(total >= 1);
    let turns = (slot as f64 / total as f64 + progress).rem_euclid(1.0);
    TAU * turns
}

/// Cartesian offset of a slot from the orbit center.
#[must_use]
pub fn slot_position(slot: usize, total: usize, progress: f64, radius: f32) -> Vector {
    let angle = slot_angle(slot, total, progress);
    Vector::new(
        radius * angle.cos() as f32,
        radius * angle.sin() as f32,
    )
}

/// Relative offset of a twin slot from its anchor: where `own` would be,
/// minus where `anchor` currently is, both at the same progress.
///
/// The twin is rendered relative to its anchor's already-applied position, so
/// composing the anchor position with this offset puts the twin exactly on
/// its own orbit slot.
#[must_use]
pub fn twin_offset(own: usize, anchor: usize, total: usize, progress: f64, radius: f32) -> Vector {
    let own_position = slot_position(own, total, progress, radius);
    let anchor_position = slot_position(anchor, total, progress, radius);
    Vector::new(
        own_position.x - anchor_position.x,
        own_position.y - anchor_position.y,
    )
}
