// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Three links (Showreel, Portfolio, Contact) plus the studio wordmark. The
//! active link and the hovered link carry an accent underline; wild mode swaps
//! the accent to neon.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::theming;
use iced::widget::{button, column, container, mouse_area, row, text, Space};
use iced::{Element, Length};

/// Links shown in the bar, in display order.
pub const LINKS: [Link; 3] = [Link::Showreel, Link::Portfolio, Link::Contact];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Showreel,
    Portfolio,
    Contact,
}

impl Link {
    fn label(self) -> &'static str {
        match self {
            Link::Showreel => "Showreel",
            Link::Portfolio => "Portfolio",
            Link::Contact => "Contact",
        }
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Pressed(Link),
    Hovered(Link),
    Unhovered,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Link),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, hovered: &mut Option<Link>) -> Event {
    match message {
        Message::Pressed(link) => {
            *hovered = None;
            Event::Navigate(link)
        }
        Message::Hovered(link) => {
            *hovered = Some(link);
            Event::None
        }
        Message::Unhovered => {
            *hovered = None;
            Event::None
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(
    active: Link,
    hovered: Option<Link>,
    wild_mode: bool,
) -> Element<'a, Message> {
    let wordmark = text("REEL").size(typography::SUBTITLE).color(if wild_mode {
        palette::NEON_CYAN
    } else {
        palette::GRAY_100
    });

    let links = LINKS.iter().fold(
        row![].spacing(spacing::LG),
        |bar, &link| bar.push(nav_link(link, active, hovered, wild_mode)),
    );

    container(
        row![wordmark, Space::new().width(Length::Fill), links]
            .align_y(iced::Alignment::Center)
            .padding([spacing::SM, spacing::LG]),
    )
    .width(Length::Fill)
    .into()
}

fn nav_link<'a>(
    link: Link,
    active: Link,
    hovered: Option<Link>,
    wild_mode: bool,
) -> Element<'a, Message> {
    let underlined = link == active || hovered == Some(link);

    let underline: Element<'_, Message> = if underlined {
        container(Space::new().width(Length::Fill).height(Length::Fixed(2.0)))
            .width(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(theming::accent_alt(wild_mode).into()),
                ..container::Style::default()
            })
            .into()
    } else {
        Space::new().height(Length::Fixed(2.0)).into()
    };

    let label = button(text(link.label()).size(typography::BODY))
        .on_press(Message::Pressed(link))
        .padding(0.0)
        .style(|_theme, _status| button::Style {
            background: None,
            text_color: palette::GRAY_200,
            ..button::Style::default()
        });

    mouse_area(column![label, underline].spacing(spacing::XXS))
        .on_enter(Message::Hovered(link))
        .on_exit(Message::Unhovered)
        .into()
}
