// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and the palette swap behind wild mode.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// User-selectable theme mode, persisted in `[general]` config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves `System` against the OS preference, defaulting to dark when
    /// detection fails (this is a showreel app; dark is the house style).
    #[must_use]
    pub fn resolve(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => Theme::Light,
                _ => Theme::Dark,
            },
        }
    }
}

/// Accent color for interactive elements; wild mode swaps in the neons.
#[must_use]
pub fn accent(wild_mode: bool) -> Color {
    if wild_mode {
        palette::NEON_PINK
    } else {
        palette::PRIMARY_500
    }
}

/// Secondary accent used by the fun button and nav underline.
#[must_use]
pub fn accent_alt(wild_mode: bool) -> Color {
    if wild_mode {
        palette::NEON_GREEN
    } else {
        palette::PRIMARY_400
    }
}
