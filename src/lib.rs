// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a motion studio's showreel desktop app built with the Iced
//! GUI framework.
//!
//! Its centerpiece is an orbiting ring of work posters driven by per-item
//! loop clocks; around it sit an auto-scrolling work strip, a portfolio grid
//! with category filters, a lightbox, and an inquiry form.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod motion;
pub mod ui;

pub use app::config;
