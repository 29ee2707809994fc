// SPDX-License-Identifier: MPL-2.0
//! Composition and rendering of the orbiting showreel.
//!
//! `State` owns one `OrbitItem` per visual slot plus the wrap-around twin.
//! Ticks arrive from the application's frame subscription as plain instants,
//! so the whole component can be driven (and tested) without a real frame
//! scheduler. The view is a canvas program that draws each poster at its
//! computed offset from center and hit-tests the cursor for hover and clicks.

use super::item::{OrbitItem, OrbitTiming, TwinItem, CARD_HEIGHT, CARD_WIDTH};
use crate::catalog::{Catalog, MediaDescriptor};
use crate::error::{CatalogError, Result};
use crate::motion::orbit;
use crate::ui::design_tokens::{palette, radius, typography};
use crate::ui::poster;
use iced::widget::{canvas, image};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::time::Instant;

/// Height of the orbit section on the home screen.
const VIEW_HEIGHT: f32 = 520.0;

/// Construction parameters, typically sourced from `[orbit]` config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    pub slots: usize,
    pub radius: f32,
    pub timing: OrbitTiming,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            slots: 8,
            radius: orbit::RADIUS,
            timing: OrbitTiming::default(),
        }
    }
}

/// Something the cursor can land on inside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Item(usize),
    Twin,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick from the app subscription.
    Tick(Instant),
    /// A poster was clicked.
    Pressed(Target),
    /// The cursor moved onto a different poster (or off all of them).
    HoverChanged(Option<usize>),
}

/// Orbit view state: all slots, the twin, and the geometry they share.
#[derive(Debug, Clone)]
pub struct State {
    items: Vec<OrbitItem>,
    twin: Option<TwinItem>,
    radius: f32,
}

impl State {
    /// Composes the orbit view: `settings.slots` items cycling through the
    /// catalog by modulus, with the twin anchored to the last slot.
    ///
    /// Fails fast on a zero slot count; an empty catalog is unrepresentable
    /// (`Catalog::new` rejects it) so the slot-modulus can never divide by
    /// zero here.
    pub fn new(catalog: &Catalog, settings: OrbitSettings, now: Instant) -> Result<Self> {
        if settings.slots == 0 {
            return Err(CatalogError::InvalidSlotCount.into());
        }

        let items = (0..settings.slots)
            .map(|slot| {
                let media = catalog.descriptor_for_slot(slot).clone();
                // Missing posters degrade to a drawn placeholder card.
                let poster = poster::for_media(&media);
                OrbitItem::new(slot, settings.slots, media, poster, now, &settings.timing)
            })
            .collect();

        let twin_media = catalog.descriptor_for_slot(0).clone();
        let twin_poster = poster::for_media(&twin_media);
        let twin = TwinItem::new(
            settings.slots,
            twin_media,
            twin_poster,
            now,
            &settings.timing,
        );

        Ok(Self {
            items,
            twin: Some(twin),
            radius: settings.radius,
        })
    }

    /// Handles a message; returns the descriptor to hand to the playback sink
    /// when a poster was clicked.
    pub fn update(&mut self, message: Message) -> Option<MediaDescriptor> {
        match message {
            Message::Tick(now) => {
                for item in &mut self.items {
                    item.tick(now, self.radius);
                }
                if let Some(twin) = &mut self.twin {
                    twin.tick(now, self.radius);
                }
                None
            }
            Message::Pressed(Target::Item(index)) => {
                self.items.get(index).map(|item| item.media.clone())
            }
            Message::Pressed(Target::Twin) => {
                self.twin.as_ref().map(|twin| twin.media.clone())
            }
            Message::HoverChanged(hovered) => {
                for (index, item) in self.items.iter_mut().enumerate() {
                    item.hovered = hovered == Some(index);
                }
                None
            }
        }
    }

    /// Stops every clock (twin included) and drops all items. The view then
    /// renders nothing. Safe before any entrance fired and safe to repeat.
    pub fn shutdown(&mut self) {
        for item in &mut self.items {
            item.shutdown();
        }
        if let Some(twin) = &mut self.twin {
            twin.shutdown();
        }
        self.items.clear();
        self.twin = None;
    }

    /// Whether any clock is still running (gates the frame subscription).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.items.iter().any(OrbitItem::is_running)
            || self.twin.as_ref().is_some_and(TwinItem::is_running)
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[OrbitItem] {
        &self.items
    }

    #[must_use]
    pub fn hovered_slot(&self) -> Option<usize> {
        self.items.iter().position(|item| item.hovered)
    }

    pub fn view(&self) -> Element<'_, Message> {
        canvas::Canvas::new(OrbitCanvas { state: self })
            .width(Length::Fill)
            .height(Length::Fixed(VIEW_HEIGHT))
            .into()
    }

    /// Card rectangle of an item in canvas coordinates, if it is placed.
    fn card_bounds(&self, index: usize, center: Point) -> Option<Rectangle> {
        let item = self.items.get(index)?;
        let position = item.position?;
        Some(card_rect(center, position, item.scale()))
    }

    /// Absolute twin offset from center: anchor position composed with the
    /// own-minus-anchor offset.
    fn twin_position(&self) -> Option<Vector> {
        let twin = self.twin.as_ref()?;
        let offset = twin.offset?;
        let anchor = self.items.get(twin.anchor_slot)?;
        let anchor_position = anchor.position?;
        Some(Vector::new(
            anchor_position.x + offset.x,
            anchor_position.y + offset.y,
        ))
    }

    fn hit_test(&self, center: Point, cursor: Point) -> Option<Target> {
        // Twin sits visually behind the anchor gap; check items first so the
        // anchor wins where they overlap.
        for index in 0..self.items.len() {
            if let Some(bounds) = self.card_bounds(index, center) {
                if bounds.contains(cursor) {
                    return Some(Target::Item(index));
                }
            }
        }
        if let Some(position) = self.twin_position() {
            if card_rect(center, position, 1.0).contains(cursor) {
                return Some(Target::Twin);
            }
        }
        None
    }
}

fn card_rect(center: Point, offset: Vector, scale: f32) -> Rectangle {
    let width = CARD_WIDTH * scale;
    let height = CARD_HEIGHT * scale;
    Rectangle {
        x: center.x + offset.x - width / 2.0,
        y: center.y + offset.y - height / 2.0,
        width,
        height,
    }
}

struct OrbitCanvas<'a> {
    state: &'a State,
}

impl canvas::Program<Message> for OrbitCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let hovered = cursor
                    .position_in(bounds)
                    .and_then(|position| self.state.hit_test(center, position))
                    .and_then(|target| match target {
                        Target::Item(index) => Some(index),
                        Target::Twin => None,
                    });
                if hovered != self.state.hovered_slot() {
                    return Some(Action::publish(Message::HoverChanged(hovered)));
                }
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                if self.state.hovered_slot().is_some() {
                    return Some(Action::publish(Message::HoverChanged(None)));
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    if let Some(target) = self.state.hit_test(center, position) {
                        return Some(Action::publish(Message::Pressed(target)).and_capture());
                    }
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();

        if let (Some(position), Some(twin)) =
            (self.state.twin_position(), self.state.twin.as_ref())
        {
            let anchor_opacity = self
                .state
                .items
                .get(twin.anchor_slot)
                .map_or(0.0, |anchor| anchor.opacity);
            draw_card(
                &mut frame,
                card_rect(center, position, 1.0),
                twin.poster.as_ref(),
                &twin.media.title,
                anchor_opacity,
            );
        }

        for (index, item) in self.state.items.iter().enumerate() {
            if let Some(card) = self.state.card_bounds(index, center) {
                draw_card(
                    &mut frame,
                    card,
                    item.poster.as_ref(),
                    &item.media.title,
                    item.opacity,
                );
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let over_card = cursor
            .position_in(bounds)
            .and_then(|position| self.state.hit_test(center, position))
            .is_some();
        if over_card {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

fn draw_card(
    frame: &mut canvas::Frame,
    card: Rectangle,
    poster: Option<&image::Handle>,
    title: &str,
    opacity: f32,
) {
    if opacity <= 0.0 {
        return;
    }

    match poster {
        Some(handle) => {
            frame.draw_image(
                card,
                canvas::Image::new(handle.clone()).opacity(opacity),
            );
        }
        None => {
            let background = canvas::Path::rounded_rectangle(
                Point::new(card.x, card.y),
                Size::new(card.width, card.height),
                radius::SM.into(),
            );
            frame.fill(
                &background,
                Color {
                    a: opacity,
                    ..palette::GRAY_700
                },
            );
            frame.fill_text(canvas::Text {
                content: title.to_string(),
                position: Point::new(card.center_x(), card.center_y()),
                color: Color {
                    a: opacity,
                    ..palette::WHITE
                },
                size: typography::CAPTION.into(),
                align_x: iced::alignment::Horizontal::Center.into(),
                align_y: iced::alignment::Vertical::Center.into(),
                ..canvas::Text::default()
            });
        }
    }
}
