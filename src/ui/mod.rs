// SPDX-License-Identifier: MPL-2.0
//! UI components: the orbit showcase, work strip, lightbox, navigation, and
//! the shared design language they draw from.

pub mod carousel;
pub mod contact;
pub mod design_tokens;
pub mod lightbox;
pub mod magnetic;
pub mod navbar;
pub mod orbit;
pub mod poster;
pub mod reveal;
pub mod theming;
