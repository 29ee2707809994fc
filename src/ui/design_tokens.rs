// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, opacity, spacing, sizing, typography,
//! and radii. Components reference these instead of hard-coding values so the
//! wild-mode palette swap stays consistent everywhere.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);

    // Wild-mode neons
    pub const NEON_PINK: Color = Color::from_rgb(1.0, 0.08, 0.58);
    pub const NEON_GREEN: Color = Color::from_rgb(0.22, 1.0, 0.42);
    pub const NEON_CYAN: Color = Color::from_rgb(0.0, 0.96, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_BACKDROP: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of a card in the auto-scrolling work strip.
    pub const STRIP_CARD_WIDTH: f32 = 280.0;
    pub const STRIP_CARD_HEIGHT: f32 = 180.0;
    /// Poster shown inside the lightbox.
    pub const LIGHTBOX_POSTER_WIDTH: f32 = 720.0;
    pub const LIGHTBOX_POSTER_HEIGHT: f32 = 405.0;
    /// The home screen's "do not press" button.
    pub const FUN_BUTTON_WIDTH: f32 = 260.0;
    pub const FUN_BUTTON_HEIGHT: f32 = 56.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const SUBTITLE: f32 = 18.0;
    pub const TITLE: f32 = 24.0;
    pub const DISPLAY: f32 = 40.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
}

/// Convenience for translucent blacks used by overlays.
#[must_use]
pub fn black_with_alpha(alpha: f32) -> Color {
    Color {
        a: alpha,
        ..palette::BLACK
    }
}
