// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! One frame-rate tick stream drives every animation (orbit, work strip,
//! contact reset); it is only active while something actually needs frames.
//! Keyboard and window-close events are listened for on every screen.

use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Roughly one tick per display frame.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Creates a periodic tick subscription while `needs_frames` holds.
pub fn create_tick_subscription(needs_frames: bool) -> Subscription<Message> {
    if needs_frames {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Key presses feed the lightbox Escape handling and the secret sequence.
/// Only events no widget captured are forwarded, so typing in the inquiry
/// form cannot trip the sequence.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed(key)),
        _ => None,
    })
}

/// Close requests are intercepted so animations can shut down first.
pub fn create_window_subscription() -> Subscription<Message> {
    window::close_requests().map(Message::WindowCloseRequested)
}
