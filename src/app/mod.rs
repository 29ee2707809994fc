// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the catalog, the orbit showcase, the work
//! strip, the lightbox, and the inquiry form, and translates top-level
//! messages into component updates. Policy decisions (window sizing, which
//! screens animate, when the frame tick runs) live here so user-facing
//! behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::Catalog;
use crate::ui::contact::State as ContactState;
use crate::ui::lightbox::State as LightboxState;
use crate::ui::reveal::RevealSet;
use crate::ui::theming::ThemeMode;
use crate::ui::{carousel, navbar, orbit};
use iced::{window, Element, Point, Subscription, Task, Theme};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Scroll fractions at which the home sections reveal, in display order:
/// hero, orbit heading, work strip heading, fun button.
const HOME_REVEAL_THRESHOLDS: [f32; 4] = [0.0, 0.0, 0.4, 0.7];

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    pub(crate) screen: Screen,
    pub(crate) theme_mode: ThemeMode,
    pub(crate) catalog: Catalog,
    /// `None` when composition failed; the home screen then shows a notice
    /// instead of the ring.
    pub(crate) orbit: Option<orbit::State>,
    pub(crate) lightbox: LightboxState,
    pub(crate) carousel: carousel::State,
    pub(crate) contact: ContactState,
    pub(crate) home_reveals: RevealSet,
    pub(crate) portfolio_reveals: RevealSet,
    pub(crate) nav_hover: Option<navbar::Link>,
    /// Active portfolio category filter.
    pub(crate) filter: Option<String>,
    pub(crate) wild_mode: bool,
    /// Progress through the secret arrow/letter sequence.
    pub(crate) konami_progress: usize,
    pub(crate) reduced_motion: bool,
    /// Cursor position inside the fun button's magnetic field.
    pub(crate) fun_cursor: Option<Point>,
    /// Hovered portfolio card (catalog index) and the card-local cursor.
    pub(crate) card_cursor: Option<(usize, Point)>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests are intercepted so animations shut down first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_parts(Catalog::sample(), &config::Config::default(), false)
    }
}

impl App {
    /// Initializes application state from config and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.clone().map(PathBuf::from));
        if let Some(warning) = config_warning {
            eprintln!("{warning}");
        }

        let catalog = match &flags.catalog {
            Some(path) => match Catalog::load(Path::new(path)) {
                Ok(catalog) => catalog,
                Err(err) => {
                    eprintln!("Could not load catalog {path}: {err}");
                    Catalog::sample()
                }
            },
            None => Catalog::sample(),
        };

        let reduced_motion =
            flags.reduced_motion || config.general.reduced_motion.unwrap_or(false);

        (
            Self::with_parts(catalog, &config, reduced_motion),
            Task::none(),
        )
    }

    fn with_parts(catalog: Catalog, config: &config::Config, reduced_motion: bool) -> Self {
        let now = Instant::now();

        let timing = if reduced_motion {
            orbit::OrbitTiming {
                period: Duration::from_secs_f64(config.orbit.clamped_period_secs()),
                base_delay: Duration::ZERO,
                stagger: Duration::ZERO,
                entrance_duration: Duration::ZERO,
            }
        } else {
            orbit::OrbitTiming {
                period: Duration::from_secs_f64(config.orbit.clamped_period_secs()),
                base_delay: Duration::from_millis(
                    config.orbit.base_delay_ms.unwrap_or(config::DEFAULT_BASE_DELAY_MS),
                ),
                stagger: Duration::from_millis(
                    config.orbit.stagger_ms.unwrap_or(config::DEFAULT_STAGGER_MS),
                ),
                entrance_duration: Duration::from_millis(config::DEFAULT_ENTRANCE_MS),
            }
        };

        let settings = orbit::OrbitSettings {
            slots: config.orbit.clamped_slots(),
            radius: config.orbit.radius.unwrap_or(config::DEFAULT_ORBIT_RADIUS),
            timing,
        };

        let orbit_state = match orbit::State::new(&catalog, settings, now) {
            Ok(state) => Some(state),
            Err(err) => {
                eprintln!("Orbit showcase disabled: {err}");
                None
            }
        };

        let mut home_reveals = RevealSet::new(&HOME_REVEAL_THRESHOLDS, reduced_motion);
        // The hero and the ring are visible before any scrolling happens.
        home_reveals.on_scroll(0.0, now);

        let endpoint = config
            .contact
            .endpoint
            .clone()
            .unwrap_or_else(|| config::DEFAULT_CONTACT_ENDPOINT.to_string());

        let mut app = Self {
            screen: Screen::Home,
            theme_mode: config.general.theme_mode,
            orbit: orbit_state,
            lightbox: LightboxState::default(),
            carousel: carousel::State::new(config.carousel.clamped_speed()),
            contact: ContactState::new(endpoint),
            home_reveals,
            portfolio_reveals: RevealSet::new(&[], reduced_motion),
            nav_hover: None,
            filter: None,
            wild_mode: false,
            konami_progress: 0,
            reduced_motion,
            fun_cursor: None,
            card_cursor: None,
            catalog,
        };
        app.restart_portfolio_reveals(now);
        app
    }

    /// Rebuilds the portfolio reveal set for the entries the current filter
    /// keeps, and triggers them immediately so the grid fades in staggered.
    pub(crate) fn restart_portfolio_reveals(&mut self, now: Instant) {
        let count = self
            .catalog
            .entries()
            .iter()
            .filter(|media| match &self.filter {
                Some(filter) => media.category.as_deref() == Some(filter.as_str()),
                None => true,
            })
            .count();

        self.portfolio_reveals = RevealSet::new(&vec![0.0; count], self.reduced_motion);
        self.portfolio_reveals.on_scroll(1.0, now);
    }

    fn title(&self) -> String {
        match self.lightbox.current() {
            Some(media) => format!("{} - IcedReel", media.title),
            None => "IcedReel".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.resolve()
    }

    /// Whether anything on screen needs frame ticks right now.
    fn needs_frames(&self, now: Instant) -> bool {
        let screen_animates = match self.screen {
            // The strip auto-scrolls for as long as the home screen is shown,
            // so home always ticks (even if the ring was shut down).
            Screen::Home => true,
            Screen::Portfolio => !self.portfolio_reveals.is_settled(now),
            Screen::Contact => false,
        };
        screen_animates || self.contact.is_waiting_to_reset()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(self.needs_frames(Instant::now())),
            subscription::create_keyboard_subscription(),
            subscription::create_window_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
