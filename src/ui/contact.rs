// SPDX-License-Identifier: MPL-2.0
//! Contact / inquiry form.
//!
//! Submitting POSTs the inquiry as JSON to the configured endpoint and walks
//! the button through Idle → Sending → Sent/Failed; the outcome label holds
//! for a few seconds before the form returns to Idle.

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{button, column, text, text_input};
use iced::{Element, Length, Task};
use serde::Serialize;
use std::time::{Duration, Instant};

/// How long the Sent/Failed label is shown before resetting.
const RESET_DELAY: Duration = Duration::from_secs(3);

/// Where the submit button is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    CompanyChanged(String),
    BodyChanged(String),
    Submit,
    Submitted(Result<(), String>),
    Tick(Instant),
}

/// JSON body posted to the inquiry endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InquiryPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
    #[serde(rename = "_captcha")]
    pub captcha: bool,
}

impl InquiryPayload {
    #[must_use]
    pub fn new(name: &str, email: &str, company: &str, message: &str) -> Self {
        let from = if name.trim().is_empty() {
            "Website Visitor"
        } else {
            name.trim()
        };
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            company: company.trim().to_string(),
            message: message.trim().to_string(),
            subject: format!("New Project Inquiry from {from}"),
            captcha: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    pub name: String,
    pub email: String,
    pub company: String,
    pub body: String,
    status: Status,
    reset_at: Option<Instant>,
    endpoint: String,
}

impl State {
    #[must_use]
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether a timed reset is pending (gates the tick subscription).
    #[must_use]
    pub fn is_waiting_to_reset(&self) -> bool {
        self.reset_at.is_some()
    }

    fn can_submit(&self) -> bool {
        self.status != Status::Sending
            && !self.email.trim().is_empty()
            && self.email.contains('@')
            && !self.body.trim().is_empty()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Task::none()
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Task::none()
            }
            Message::CompanyChanged(value) => {
                self.company = value;
                Task::none()
            }
            Message::BodyChanged(value) => {
                self.body = value;
                Task::none()
            }
            Message::Submit => {
                if !self.can_submit() {
                    return Task::none();
                }
                self.status = Status::Sending;
                let endpoint = self.endpoint.clone();
                let payload =
                    InquiryPayload::new(&self.name, &self.email, &self.company, &self.body);
                Task::perform(send_inquiry(endpoint, payload), Message::Submitted)
            }
            Message::Submitted(result) => {
                match result {
                    Ok(()) => {
                        self.status = Status::Sent;
                        self.name.clear();
                        self.email.clear();
                        self.company.clear();
                        self.body.clear();
                    }
                    Err(reason) => {
                        eprintln!("Inquiry submission failed: {reason}");
                        self.status = Status::Failed;
                    }
                }
                self.reset_at = Some(Instant::now() + RESET_DELAY);
                Task::none()
            }
            Message::Tick(now) => {
                if self.reset_at.is_some_and(|at| now >= at) {
                    self.status = Status::Idle;
                    self.reset_at = None;
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let sending = self.status == Status::Sending;

        let submit_label = match self.status {
            Status::Idle => "Send Message",
            Status::Sending => "Sending...",
            Status::Sent => "Message Sent!",
            Status::Failed => "Error! Try Again",
        };

        let submit_color = match self.status {
            Status::Sent => palette::SUCCESS_500,
            Status::Failed => palette::ERROR_500,
            Status::Idle | Status::Sending => palette::PRIMARY_500,
        };

        let mut submit = button(text(submit_label).size(typography::BODY)).style(
            move |_theme, _status| button::Style {
                background: Some(submit_color.into()),
                text_color: palette::WHITE,
                ..button::Style::default()
            },
        );
        if !sending {
            submit = submit.on_press(Message::Submit);
        }

        column![
            text("Start a project").size(typography::TITLE),
            text_input("Name", &self.name).on_input(Message::NameChanged),
            text_input("Email", &self.email).on_input(Message::EmailChanged),
            text_input("Company", &self.company).on_input(Message::CompanyChanged),
            text_input("Tell us about it", &self.body).on_input(Message::BodyChanged),
            submit,
        ]
        .spacing(spacing::MD)
        .max_width(560)
        .width(Length::Fill)
        .into()
    }
}

async fn send_inquiry(endpoint: String, payload: InquiryPayload) -> Result<(), String> {
    let client = reqwest::Client::new();
    let response = client
        .post(&endpoint)
        .json(&payload)
        .send()
        .await
        .map_err(|err| crate::error::Error::from(err).to_string())?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("endpoint returned {}", response.status()))
    }
}
