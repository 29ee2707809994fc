// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Portfolio,
    Contact,
}

impl Screen {
    /// The navbar link that corresponds to this screen.
    #[must_use]
    pub fn link(self) -> navbar::Link {
        match self {
            Screen::Home => navbar::Link::Showreel,
            Screen::Portfolio => navbar::Link::Portfolio,
            Screen::Contact => navbar::Link::Contact,
        }
    }
}

impl From<navbar::Link> for Screen {
    fn from(link: navbar::Link) -> Self {
        match link {
            navbar::Link::Showreel => Screen::Home,
            navbar::Link::Portfolio => Screen::Portfolio,
            navbar::Link::Contact => Screen::Contact,
        }
    }
}
