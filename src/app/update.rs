// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All top-level messages funnel through [`update`]; component messages are
//! forwarded to their owners, and anything a component reports back (a play
//! request, a navigation event) is acted on here.

use super::{App, Message, Screen};
use crate::ui::{carousel, contact, lightbox, navbar, orbit};
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::{window, Task};
use std::time::Instant;

/// Length of the arrow/letter sequence that toggles wild mode.
pub const KONAMI_LEN: usize = 10;

/// Processes one top-level message against the whole application state.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => {
            match navbar::update(message, &mut app.nav_hover) {
                navbar::Event::Navigate(link) => switch_screen(app, Screen::from(link)),
                navbar::Event::None => {}
            }
            Task::none()
        }
        Message::SwitchScreen(screen) => {
            switch_screen(app, screen);
            Task::none()
        }
        Message::Orbit(message) => {
            if let Some(orbit) = &mut app.orbit {
                if let Some(media) = orbit.update(message) {
                    app.lightbox.open(media);
                }
            }
            Task::none()
        }
        Message::Carousel(message) => {
            let (play, task) = app.carousel.update(message);
            if let Some(index) = play {
                if let Some(media) = app.catalog.entries().get(index) {
                    app.lightbox.open(media.clone());
                }
            }
            task.map(Message::Carousel)
        }
        Message::Lightbox(message) => {
            app.lightbox.update(message);
            Task::none()
        }
        Message::Contact(message) => app.contact.update(message).map(Message::Contact),
        Message::Tick(now) => tick(app, now),
        Message::KeyPressed(key) => {
            handle_key(app, &key);
            Task::none()
        }
        Message::FilterChanged(filter) => {
            app.filter = filter;
            app.restart_portfolio_reveals(Instant::now());
            Task::none()
        }
        Message::PiecePressed(index) => {
            if let Some(media) = app.catalog.entries().get(index) {
                app.lightbox.open(media.clone());
            }
            Task::none()
        }
        Message::HomeScrolled(fraction) => {
            app.home_reveals.on_scroll(fraction, Instant::now());
            Task::none()
        }
        Message::FunButtonPressed => {
            app.wild_mode = !app.wild_mode;
            Task::none()
        }
        Message::FunCursorMoved(position) => {
            app.fun_cursor = Some(position);
            Task::none()
        }
        Message::FunCursorExited => {
            app.fun_cursor = None;
            Task::none()
        }
        Message::CardCursorMoved(index, position) => {
            app.card_cursor = Some((index, position));
            Task::none()
        }
        Message::CardCursorExited => {
            app.card_cursor = None;
            Task::none()
        }
        Message::WindowCloseRequested(id) => {
            if let Some(orbit) = &mut app.orbit {
                orbit.shutdown();
            }
            window::close(id)
        }
    }
}

fn switch_screen(app: &mut App, screen: Screen) {
    if app.screen == screen {
        return;
    }
    app.screen = screen;
    if screen == Screen::Portfolio {
        app.restart_portfolio_reveals(Instant::now());
    }
}

/// Fans the frame tick out to every component that animates.
fn tick(app: &mut App, now: Instant) -> Task<Message> {
    let mut tasks = Vec::new();

    if app.screen == Screen::Home {
        if let Some(orbit) = &mut app.orbit {
            orbit.update(orbit::Message::Tick(now));
        }
        let (_, task) = app.carousel.update(carousel::Message::Tick(now));
        tasks.push(task.map(Message::Carousel));
    }

    if app.contact.is_waiting_to_reset() {
        tasks.push(
            app.contact
                .update(contact::Message::Tick(now))
                .map(Message::Contact),
        );
    }

    Task::batch(tasks)
}

fn handle_key(app: &mut App, key: &Key) {
    if matches!(key, Key::Named(Named::Escape)) {
        if app.lightbox.is_open() {
            app.lightbox.update(lightbox::Message::Close);
        }
        // Escape still counts against the secret sequence below (it resets it).
    }

    app.konami_progress = next_konami_progress(app.konami_progress, key);
    if app.konami_progress == KONAMI_LEN {
        app.wild_mode = !app.wild_mode;
        app.konami_progress = 0;
    }
}

/// Whether `key` is the expected `step`-th entry of ↑↑↓↓←→←→BA.
fn konami_matches(step: usize, key: &Key) -> bool {
    match (step, key) {
        (0 | 1, Key::Named(Named::ArrowUp)) => true,
        (2 | 3, Key::Named(Named::ArrowDown)) => true,
        (4 | 6, Key::Named(Named::ArrowLeft)) => true,
        (5 | 7, Key::Named(Named::ArrowRight)) => true,
        (8, Key::Character(c)) => c.as_str().eq_ignore_ascii_case("b"),
        (9, Key::Character(c)) => c.as_str().eq_ignore_ascii_case("a"),
        _ => false,
    }
}

/// Advances the sequence, falling back to a fresh start (or zero) on a miss.
fn next_konami_progress(progress: usize, key: &Key) -> usize {
    if konami_matches(progress, key) {
        progress + 1
    } else if konami_matches(0, key) {
        1
    } else {
        0
    }
}
