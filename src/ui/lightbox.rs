// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: the playback sink the orbit view, work strip, and
//! portfolio grid hand descriptors to.
//!
//! Opening while already open switches to the new piece; closing clears the
//! presented media entirely. A missing poster degrades to a drawn placeholder
//! so a broken asset can never take the overlay down.

use crate::catalog::MediaDescriptor;
use crate::ui::design_tokens::{
    black_with_alpha, opacity, palette, sizing, spacing, typography,
};
use crate::ui::poster;
use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, row, stack, text, Space,
};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    /// Close button or Escape.
    Close,
    /// Click on the darkened backdrop.
    BackdropPressed,
}

/// Lightbox state: the piece being presented, if any.
#[derive(Debug, Clone, Default)]
pub struct State {
    current: Option<MediaDescriptor>,
    poster: Option<image::Handle>,
}

impl State {
    /// Presents a descriptor. Tolerates being called while already showing
    /// another piece: the overlay switches cleanly.
    pub fn open(&mut self, media: MediaDescriptor) {
        self.poster = poster::for_media(&media);
        self.current = Some(media);
    }

    /// Closes the overlay. Idempotent.
    pub fn close(&mut self) {
        self.current = None;
        self.poster = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Option<&MediaDescriptor> {
        self.current.as_ref()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Close | Message::BackdropPressed => self.close(),
        }
    }

    /// Wraps `content` with the overlay when open; passes it through
    /// untouched otherwise. `map` lifts lightbox messages into the parent's
    /// message type.
    pub fn wrap<'a, M: 'a>(
        &'a self,
        content: Element<'a, M>,
        map: fn(Message) -> M,
    ) -> Element<'a, M> {
        let Some(media) = &self.current else {
            return content;
        };

        let poster: Element<'_, Message> = match &self.poster {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(sizing::LIGHTBOX_POSTER_WIDTH))
                .height(Length::Fixed(sizing::LIGHTBOX_POSTER_HEIGHT))
                .into(),
            None => container(
                text(media.title.clone())
                    .size(typography::TITLE)
                    .color(palette::WHITE),
            )
            .width(Length::Fixed(sizing::LIGHTBOX_POSTER_WIDTH))
            .height(Length::Fixed(sizing::LIGHTBOX_POSTER_HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(palette::GRAY_700.into()),
                ..container::Style::default()
            })
            .into(),
        };

        let details = column![
            row![
                text(media.title.clone())
                    .size(typography::TITLE)
                    .color(palette::WHITE),
                Space::new().width(Length::Fill),
                text(media.year.clone())
                    .size(typography::BODY)
                    .color(palette::GRAY_200),
            ],
            text(media.client.clone())
                .size(typography::SUBTITLE)
                .color(palette::GRAY_200),
            text(media.description.clone())
                .size(typography::BODY)
                .color(palette::GRAY_400),
        ]
        .spacing(spacing::XS)
        .width(Length::Fixed(sizing::LIGHTBOX_POSTER_WIDTH));

        let close = button(text("✕").size(typography::SUBTITLE).color(palette::WHITE))
            .on_press(Message::Close)
            .style(|_theme, _status| button::Style {
                background: None,
                ..button::Style::default()
            });

        let card = column![
            row![Space::new().width(Length::Fill), close],
            poster,
            details,
        ]
        .spacing(spacing::MD);

        let backdrop = mouse_area(
            container(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme| container::Style {
                    background: Some(
                        black_with_alpha(opacity::OVERLAY_BACKDROP).into(),
                    ),
                    ..container::Style::default()
                }),
        )
        .on_press(Message::BackdropPressed);

        stack![
            content,
            opaque(backdrop).map(map),
            opaque(center(card)).map(map)
        ]
        .into()
    }
}
