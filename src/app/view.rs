// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navbar plus the active screen, then lets the lightbox wrap the
//! whole thing when a piece is being presented.

use super::{App, Message, Screen};
use crate::catalog::MediaDescriptor;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::{magnetic, navbar, theming};
use iced::widget::{button, column, container, mouse_area, row, scrollable, text, Space};
use iced::{Color, Element, Length, Padding, Rectangle, Vector};
use std::time::Instant;

/// Cards per row in the portfolio grid.
const GRID_COLUMNS: usize = 3;

/// Slack around the fun button that still attracts it.
const FUN_FIELD_MARGIN: f32 = 40.0;

/// Slack around each portfolio card, consumed by the hover shift.
const CARD_FIELD_MARGIN: f32 = 8.0;

/// Logical pixels of card shift per degree of tilt.
const CARD_TILT_SHIFT: f32 = 0.6;

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(app.screen.link(), app.nav_hover, app.wild_mode)
        .map(Message::Navbar);

    let content: Element<'_, Message> = match app.screen {
        Screen::Home => view_home(app),
        Screen::Portfolio => view_portfolio(app),
        Screen::Contact => view_contact(app),
    };

    let base = column![navbar, content].into();
    app.lightbox.wrap(base, Message::Lightbox)
}

fn view_home(app: &App) -> Element<'_, Message> {
    let now = Instant::now();

    let hero = text("Films that move.")
        .size(typography::DISPLAY)
        .color(faded(palette::GRAY_100, app.home_reveals.opacity(0, now)));

    let orbit_heading = text("Selected work, in orbit")
        .size(typography::TITLE)
        .color(faded(palette::GRAY_200, app.home_reveals.opacity(1, now)));

    let orbit_view: Element<'_, Message> = match &app.orbit {
        Some(orbit) => orbit.view().map(Message::Orbit),
        None => text("The showcase is taking a break.")
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into(),
    };

    let strip_heading = text("Recent work")
        .size(typography::TITLE)
        .color(faded(palette::GRAY_200, app.home_reveals.opacity(2, now)));

    let strip = app.carousel.view(&app.catalog).map(Message::Carousel);

    let content = column![
        hero,
        Space::new().height(Length::Fixed(spacing::XL)),
        orbit_heading,
        orbit_view,
        Space::new().height(Length::Fixed(spacing::XL)),
        strip_heading,
        strip,
        Space::new().height(Length::Fixed(spacing::XXL)),
        fun_button(app, app.home_reveals.opacity(3, now)),
        Space::new().height(Length::Fixed(spacing::XXL)),
    ]
    .spacing(spacing::MD)
    .padding(spacing::LG)
    .width(Length::Fill);

    scrollable(content)
        .on_scroll(|viewport| Message::HomeScrolled(viewport.relative_offset().y))
        .height(Length::Fill)
        .into()
}

/// The "do not press" button. It leans toward the cursor while the pointer is
/// inside its field, and pressing it anyway toggles wild mode.
fn fun_button(app: &App, reveal_opacity: f32) -> Element<'_, Message> {
    let field = Rectangle {
        x: 0.0,
        y: 0.0,
        width: sizing::FUN_BUTTON_WIDTH + 2.0 * FUN_FIELD_MARGIN,
        height: sizing::FUN_BUTTON_HEIGHT + 2.0 * FUN_FIELD_MARGIN,
    };
    let offset = app
        .fun_cursor
        .map(|cursor| magnetic::magnetic_offset(cursor, field, magnetic::MAGNETIC_STRENGTH))
        .unwrap_or_default();

    let label = if app.wild_mode {
        "Okay, you did this"
    } else {
        "Do not press"
    };
    let accent = theming::accent(app.wild_mode);
    let wild = app.wild_mode;

    let press_me = button(text(label).size(typography::BODY))
        .on_press(Message::FunButtonPressed)
        .width(Length::Fixed(sizing::FUN_BUTTON_WIDTH))
        .height(Length::Fixed(sizing::FUN_BUTTON_HEIGHT))
        .style(move |_theme, _status| button::Style {
            background: Some(faded(accent, reveal_opacity).into()),
            text_color: if wild {
                palette::BLACK
            } else {
                palette::WHITE
            },
            border: iced::Border {
                radius: radius::LG.into(),
                ..iced::Border::default()
            },
            ..button::Style::default()
        });

    let padded = container(press_me).padding(Padding {
        top: (FUN_FIELD_MARGIN + offset.y).max(0.0),
        right: (FUN_FIELD_MARGIN - offset.x).max(0.0),
        bottom: (FUN_FIELD_MARGIN - offset.y).max(0.0),
        left: (FUN_FIELD_MARGIN + offset.x).max(0.0),
    });

    mouse_area(padded)
        .on_move(Message::FunCursorMoved)
        .on_exit(Message::FunCursorExited)
        .into()
}

fn view_portfolio(app: &App) -> Element<'_, Message> {
    let now = Instant::now();

    let chips = app.catalog.categories().into_iter().fold(
        row![filter_chip("All", app.filter.is_none(), None, app.wild_mode)]
            .spacing(spacing::XS),
        |bar, category| {
            let selected = app.filter.as_deref() == Some(category);
            bar.push(filter_chip(
                category,
                selected,
                Some(category.to_string()),
                app.wild_mode,
            ))
        },
    );

    let visible: Vec<(usize, &MediaDescriptor)> = app
        .catalog
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, media)| match &app.filter {
            Some(filter) => media.category.as_deref() == Some(filter.as_str()),
            None => true,
        })
        .collect();

    let mut grid = column![].spacing(spacing::MD);
    for (row_index, chunk) in visible.chunks(GRID_COLUMNS).enumerate() {
        let mut cards = row![].spacing(spacing::MD);
        for (column_index, &(catalog_index, media)) in chunk.iter().enumerate() {
            let display_index = row_index * GRID_COLUMNS + column_index;
            let opacity = app.portfolio_reveals.opacity(display_index, now);
            let tilt = card_tilt(app, catalog_index);
            cards = cards.push(portfolio_card(catalog_index, media, opacity, tilt));
        }
        grid = grid.push(cards);
    }

    scrollable(
        column![
            text("Portfolio").size(typography::DISPLAY).color(palette::GRAY_100),
            chips,
            grid,
        ]
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn filter_chip(
    label: &str,
    selected: bool,
    filter: Option<String>,
    wild_mode: bool,
) -> Element<'_, Message> {
    let accent = theming::accent(wild_mode);
    button(text(label.to_string()).size(typography::CAPTION))
        .on_press(Message::FilterChanged(filter))
        .padding([spacing::XXS, spacing::SM])
        .style(move |_theme, _status| button::Style {
            background: if selected {
                Some(accent.into())
            } else {
                Some(palette::GRAY_700.into())
            },
            text_color: palette::WHITE,
            border: iced::Border {
                radius: radius::LG.into(),
                ..iced::Border::default()
            },
            ..button::Style::default()
        })
        .into()
}

/// Translation a hovered card picks up, derived from the tilt angles: the
/// card leans toward the cursor. Flat tilt degrades the 3D effect to a shift.
fn card_tilt(app: &App, catalog_index: usize) -> Vector {
    match app.card_cursor {
        Some((index, cursor)) if index == catalog_index => {
            let field = Rectangle {
                x: 0.0,
                y: 0.0,
                width: sizing::STRIP_CARD_WIDTH + 2.0 * CARD_FIELD_MARGIN,
                height: sizing::STRIP_CARD_HEIGHT + 2.0 * CARD_FIELD_MARGIN,
            };
            let (tilt_x, tilt_y) =
                magnetic::tilt_angles(cursor, field, magnetic::MAX_TILT_DEGREES);
            Vector::new(tilt_y * CARD_TILT_SHIFT, -tilt_x * CARD_TILT_SHIFT)
        }
        _ => Vector::new(0.0, 0.0),
    }
}

fn portfolio_card(
    catalog_index: usize,
    media: &MediaDescriptor,
    opacity: f32,
    tilt: Vector,
) -> Element<'_, Message> {
    let details = column![
        text(media.title.clone())
            .size(typography::SUBTITLE)
            .color(faded(palette::GRAY_100, opacity)),
        text(media.client.clone())
            .size(typography::CAPTION)
            .color(faded(palette::GRAY_400, opacity)),
        text(media.year.clone())
            .size(typography::CAPTION)
            .color(faded(palette::GRAY_400, opacity)),
    ]
    .spacing(spacing::XXS)
    .padding(spacing::SM);

    let card = button(
        container(details)
            .width(Length::Fixed(sizing::STRIP_CARD_WIDTH))
            .height(Length::Fixed(sizing::STRIP_CARD_HEIGHT))
            .style(move |_theme| container::Style {
                background: Some(faded(palette::GRAY_900, opacity).into()),
                border: iced::Border {
                    radius: radius::MD.into(),
                    ..iced::Border::default()
                },
                ..container::Style::default()
            }),
    )
    .on_press(Message::PiecePressed(catalog_index))
    .padding(0.0)
    .style(|_theme, _status| button::Style {
        background: None,
        ..button::Style::default()
    });

    let shifted = container(card).padding(Padding {
        top: (CARD_FIELD_MARGIN + tilt.y).max(0.0),
        right: (CARD_FIELD_MARGIN - tilt.x).max(0.0),
        bottom: (CARD_FIELD_MARGIN - tilt.y).max(0.0),
        left: (CARD_FIELD_MARGIN + tilt.x).max(0.0),
    });

    mouse_area(shifted)
        .on_move(move |position| Message::CardCursorMoved(catalog_index, position))
        .on_exit(Message::CardCursorExited)
        .into()
}

fn view_contact(app: &App) -> Element<'_, Message> {
    container(app.contact.view().map(Message::Contact))
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .into()
}

/// Color with its alpha scaled by a reveal opacity.
fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}
