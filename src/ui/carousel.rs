// SPDX-License-Identifier: MPL-2.0
//! Auto-scrolling, draggable work strip.
//!
//! The strip scrolls at a constant speed, reversing direction at either end.
//! Hovering pauses it; dragging maps pointer movement to the scroll offset at
//! twice the pointer delta; after a drag ends (or the user wheel-scrolls) the
//! auto-scroll resumes only once a grace period has elapsed.

use crate::catalog::{Catalog, MediaDescriptor};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::poster;
use iced::widget::{
    button, column, container, image, mouse_area, operation, row, scrollable, text, Id, Space,
};
use iced::{Element, Length, Point, Task};
use std::time::{Duration, Instant};

/// Auto-scroll speed in logical pixels per second, unless configured.
const DEFAULT_SPEED: f32 = 30.0;

/// Pointer-to-offset multiplier while dragging.
const DRAG_MULTIPLIER: f32 = 2.0;

/// Grace period before auto-scroll resumes after a drag ends.
const RESUME_AFTER_DRAG: Duration = Duration::from_secs(1);

/// Grace period after a manual wheel scroll.
const RESUME_AFTER_SCROLL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick from the app subscription.
    Tick(Instant),
    Entered,
    Exited,
    Pressed,
    Released,
    Moved(Point),
    Scrolled(scrollable::Viewport),
    /// The play button on a card was pressed.
    PlayPressed(usize),
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    grab_x: f32,
    start_offset: f32,
}

/// Work strip state. Offset is mirrored into the scrollable through
/// `scroll_to` tasks; `Scrolled` viewport feedback keeps the mirror honest.
#[derive(Debug, Clone)]
pub struct State {
    id: Id,
    speed: f32,
    offset: f32,
    direction: f32,
    hovering: bool,
    drag: Option<Drag>,
    resume_at: Option<Instant>,
    cursor_x: f32,
    viewport_width: f32,
    content_width: f32,
    last_tick: Option<Instant>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            id: Id::unique(),
            speed: DEFAULT_SPEED,
            offset: 0.0,
            direction: 1.0,
            hovering: false,
            drag: None,
            resume_at: None,
            cursor_x: 0.0,
            viewport_width: 0.0,
            content_width: 0.0,
            last_tick: None,
        }
    }
}

impl State {
    #[must_use]
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the next tick will advance the offset.
    #[must_use]
    pub fn is_auto_scrolling(&self, now: Instant) -> bool {
        if self.hovering || self.drag.is_some() {
            return false;
        }
        self.resume_at.is_none_or(|at| now >= at)
    }

    fn max_scroll(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Handles a message; returns the descriptor to play (if a play button
    /// was pressed, resolved by the caller's catalog) and any scroll task.
    pub fn update(&mut self, message: Message) -> (Option<usize>, Task<Message>) {
        match message {
            Message::Tick(now) => {
                let task = self.tick(now);
                (None, task)
            }
            Message::Entered => {
                self.hovering = true;
                (None, Task::none())
            }
            Message::Exited => {
                self.hovering = false;
                // Releasing outside the strip would otherwise leave a stuck
                // drag; ending it here gets the same grace as a release.
                if self.drag.take().is_some() {
                    self.resume_at = self.last_tick.map(|now| now + RESUME_AFTER_DRAG);
                }
                (None, Task::none())
            }
            Message::Pressed => {
                self.drag = Some(Drag {
                    grab_x: self.cursor_x,
                    start_offset: self.offset,
                });
                (None, Task::none())
            }
            Message::Released => {
                if self.drag.take().is_some() {
                    self.resume_at = self.last_tick.map(|now| now + RESUME_AFTER_DRAG);
                }
                (None, Task::none())
            }
            Message::Moved(position) => {
                self.cursor_x = position.x;
                if let Some(drag) = self.drag {
                    let walk = (position.x - drag.grab_x) * DRAG_MULTIPLIER;
                    self.offset = (drag.start_offset - walk).clamp(0.0, self.max_scroll());
                    return (None, self.sync_scrollable());
                }
                (None, Task::none())
            }
            Message::Scrolled(viewport) => {
                self.viewport_width = viewport.bounds().width;
                self.content_width = viewport.content_bounds().width;
                let actual = viewport.absolute_offset().x;
                if (actual - self.offset).abs() > 1.0 && self.drag.is_none() {
                    // Manual wheel scroll: adopt it and hold off the auto-scroll.
                    self.offset = actual;
                    self.resume_at = self.last_tick.map(|now| now + RESUME_AFTER_SCROLL);
                }
                (None, Task::none())
            }
            Message::PlayPressed(index) => (Some(index), Task::none()),
        }
    }

    /// Advances the auto-scroll; call once per frame while the strip shows.
    fn tick(&mut self, now: Instant) -> Task<Message> {
        let dt = self
            .last_tick
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);

        if !self.is_auto_scrolling(now) || self.max_scroll() <= 0.0 {
            return Task::none();
        }

        self.offset += self.speed * self.direction * dt;

        let max = self.max_scroll();
        if self.offset >= max {
            self.offset = max;
            self.direction = -1.0;
        } else if self.offset <= 0.0 {
            self.offset = 0.0;
            self.direction = 1.0;
        }

        self.sync_scrollable()
    }

    fn sync_scrollable(&self) -> Task<Message> {
        operation::scroll_to(
            self.id.clone(),
            scrollable::AbsoluteOffset {
                x: self.offset,
                y: 0.0,
            },
        )
    }

    pub fn view<'a>(&'a self, catalog: &'a Catalog) -> Element<'a, Message> {
        let cards = catalog
            .entries()
            .iter()
            .enumerate()
            .fold(row![].spacing(spacing::MD), |strip, (index, media)| {
                strip.push(card(index, media))
            });

        let strip = scrollable(container(cards).padding(spacing::SM))
            .id(self.id.clone())
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::default(),
            ))
            .on_scroll(Message::Scrolled)
            .width(Length::Fill);

        mouse_area(strip)
            .on_enter(Message::Entered)
            .on_exit(Message::Exited)
            .on_press(Message::Pressed)
            .on_release(Message::Released)
            .on_move(Message::Moved)
            .into()
    }
}

fn card<'a>(index: usize, media: &'a MediaDescriptor) -> Element<'a, Message> {
    let poster: Element<'_, Message> = match poster::for_media(media) {
        Some(handle) => image(handle)
            .width(Length::Fixed(sizing::STRIP_CARD_WIDTH))
            .height(Length::Fixed(sizing::STRIP_CARD_HEIGHT))
            .into(),
        None => container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fixed(sizing::STRIP_CARD_WIDTH))
            .height(Length::Fixed(sizing::STRIP_CARD_HEIGHT))
            .style(|_theme| container::Style {
                background: Some(palette::GRAY_700.into()),
                border: iced::Border {
                    radius: radius::MD.into(),
                    ..iced::Border::default()
                },
                ..container::Style::default()
            })
            .into(),
    };

    column![
        poster,
        row![
            column![
                text(media.title.clone()).size(typography::BODY),
                text(media.client.clone())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            ]
            .spacing(spacing::XXS),
            Space::new().width(Length::Fill),
            button(text("Play").size(typography::CAPTION))
                .on_press(Message::PlayPressed(index))
                .padding([spacing::XXS, spacing::SM]),
        ]
        .align_y(iced::Alignment::Center),
    ]
    .spacing(spacing::XS)
    .width(Length::Fixed(sizing::STRIP_CARD_WIDTH))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized_state() -> State {
        State {
            viewport_width: 400.0,
            content_width: 1000.0,
            ..State::default()
        }
    }

    fn advance(state: &mut State, from: Instant, millis: u64) -> Instant {
        let now = from + Duration::from_millis(millis);
        state.update(Message::Tick(now));
        now
    }

    #[test]
    fn auto_scroll_advances_offset() {
        let mut state = sized_state();
        let t0 = Instant::now();
        state.update(Message::Tick(t0));

        advance(&mut state, t0, 1000);
        assert!((state.offset() - DEFAULT_SPEED).abs() < 0.5);
    }

    #[test]
    fn direction_reverses_at_the_end() {
        let mut state = sized_state();
        state.offset = state.max_scroll() - 0.1;
        let t0 = Instant::now();
        state.update(Message::Tick(t0));

        advance(&mut state, t0, 1000);
        assert_eq!(state.direction, -1.0);
        assert!(state.offset() <= state.max_scroll());

        // And forward again at the start.
        state.offset = 0.05;
        let t1 = state.last_tick.unwrap();
        advance(&mut state, t1, 1000);
        assert_eq!(state.direction, 1.0);
    }

    #[test]
    fn hover_pauses_auto_scroll() {
        let mut state = sized_state();
        let t0 = Instant::now();
        state.update(Message::Tick(t0));
        state.update(Message::Entered);

        let now = advance(&mut state, t0, 500);
        assert_eq!(state.offset(), 0.0);
        assert!(!state.is_auto_scrolling(now));

        state.update(Message::Exited);
        assert!(state.is_auto_scrolling(now));
    }

    #[test]
    fn drag_moves_offset_at_double_pointer_delta() {
        let mut state = sized_state();
        state.offset = 300.0;
        state.update(Message::Moved(Point::new(100.0, 0.0)));
        state.update(Message::Pressed);
        assert!(state.is_dragging());

        state.update(Message::Moved(Point::new(60.0, 0.0)));
        // Pointer moved -40; walk = -80; offset = 300 - (-80).
        assert!((state.offset() - 380.0).abs() < 0.01);
    }

    #[test]
    fn drag_offset_is_clamped() {
        let mut state = sized_state();
        state.offset = 10.0;
        state.update(Message::Moved(Point::new(0.0, 0.0)));
        state.update(Message::Pressed);
        state.update(Message::Moved(Point::new(500.0, 0.0)));
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn release_defers_resume() {
        let mut state = sized_state();
        let t0 = Instant::now();
        state.update(Message::Tick(t0));
        state.update(Message::Pressed);
        state.update(Message::Released);

        // Still inside the grace period.
        let before = t0 + RESUME_AFTER_DRAG - Duration::from_millis(100);
        assert!(!state.is_auto_scrolling(before));

        let after = t0 + RESUME_AFTER_DRAG + Duration::from_millis(100);
        assert!(state.is_auto_scrolling(after));
    }

    #[test]
    fn exit_during_drag_defers_resume() {
        let mut state = sized_state();
        let t0 = Instant::now();
        state.update(Message::Tick(t0));
        state.update(Message::Pressed);
        state.update(Message::Exited);
        assert!(!state.is_dragging());

        let before = t0 + RESUME_AFTER_DRAG - Duration::from_millis(100);
        assert!(!state.is_auto_scrolling(before));

        let after = t0 + RESUME_AFTER_DRAG + Duration::from_millis(100);
        assert!(state.is_auto_scrolling(after));
    }

    #[test]
    fn play_press_reports_card_index() {
        let mut state = sized_state();
        let (play, _task) = state.update(Message::PlayPressed(3));
        assert_eq!(play, Some(3));
    }
}
