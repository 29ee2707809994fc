// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::carousel;
use crate::ui::contact;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::orbit;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Orbit(orbit::Message),
    Carousel(carousel::Message),
    Lightbox(lightbox::Message),
    Contact(contact::Message),
    SwitchScreen(Screen),
    /// Periodic frame tick shared by every animated component.
    Tick(Instant),
    /// A key was pressed anywhere in the window.
    KeyPressed(iced::keyboard::Key),
    /// A portfolio category filter was selected (`None` clears it).
    FilterChanged(Option<String>),
    /// A portfolio grid card was pressed; carries the catalog index.
    PiecePressed(usize),
    /// Cursor moved over a portfolio card; carries the catalog index and the
    /// card-local cursor position.
    CardCursorMoved(usize, iced::Point),
    /// Cursor left the portfolio card it was hovering.
    CardCursorExited,
    /// The home page was scrolled; carries the scroll fraction in `[0, 1]`.
    HomeScrolled(f32),
    /// The "do not press" button was pressed anyway.
    FunButtonPressed,
    /// Cursor moved inside the fun button's magnetic field.
    FunCursorMoved(iced::Point),
    /// Cursor left the fun button's magnetic field.
    FunCursorExited,
    /// Window close was requested; animations are shut down before exit.
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to a catalog TOML file; the built-in sample catalog is
    /// used when absent.
    pub catalog: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_REEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Skip entrance and reveal animations regardless of config.
    pub reduced_motion: bool,
}
