// SPDX-License-Identifier: MPL-2.0
//! Pointer-driven hover math: magnetic pull and card tilt.

use iced::{Point, Rectangle, Vector};

/// Fraction of the cursor's offset from center that a magnetic element
/// follows.
pub const MAGNETIC_STRENGTH: f32 = 0.3;

/// Maximum tilt in degrees for card hover.
pub const MAX_TILT_DEGREES: f32 = 10.0;

/// Translation an element should apply while the cursor is at `cursor`
/// inside `bounds`: the cursor's offset from the element center, scaled by
/// `strength`. Returns zero when the cursor is outside.
#[must_use]
pub fn magnetic_offset(cursor: Point, bounds: Rectangle, strength: f32) -> Vector {
    if !bounds.contains(cursor) {
        return Vector::new(0.0, 0.0);
    }
    let dx = cursor.x - bounds.x - bounds.width / 2.0;
    let dy = cursor.y - bounds.y - bounds.height / 2.0;
    Vector::new(dx * strength, dy * strength)
}

/// Tilt in degrees `(around_x, around_y)` for a card hovered at `cursor`.
/// The top edge tilts away from the cursor vertically, toward it
/// horizontally; centered cursor yields no tilt.
#[must_use]
pub fn tilt_angles(cursor: Point, bounds: Rectangle, max_degrees: f32) -> (f32, f32) {
    if !bounds.contains(cursor) || bounds.width <= 0.0 || bounds.height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (cursor.x - bounds.x) / bounds.width;
    let y = (cursor.y - bounds.y) / bounds.height;
    let tilt_x = (y - 0.5) * -max_degrees;
    let tilt_y = (x - 0.5) * max_degrees;
    (tilt_x, tilt_y)
}
