// SPDX-License-Identifier: MPL-2.0
//! Orbiting showreel: a circular, continuously-looping arrangement of work
//! posters with staggered entrances and a wrap-around twin slot.

pub mod component;
pub mod item;

pub use component::{Message, OrbitSettings, State, Target};
pub use item::{OrbitItem, OrbitTiming, TwinItem};
