// SPDX-License-Identifier: MPL-2.0
//! Poster decoding shared by every view that shows artwork.
//!
//! Posters are decoded to RGBA up front so a truncated or mislabeled file is
//! caught here, once, instead of failing somewhere inside the renderer. A
//! missing or undecodable poster yields `None` and the caller draws a
//! placeholder instead.

use crate::catalog::MediaDescriptor;
use iced::widget::image;
use std::path::Path;

/// Decodes a poster file into an image handle.
pub fn load(poster: &str) -> Option<image::Handle> {
    let path = Path::new(poster);
    if !path.is_file() {
        return None;
    }
    match image_rs::open(path) {
        Ok(decoded) => {
            let rgba = decoded.to_rgba8();
            let (width, height) = rgba.dimensions();
            Some(image::Handle::from_rgba(width, height, rgba.into_raw()))
        }
        Err(err) => {
            eprintln!("Could not decode poster {poster}: {err}");
            None
        }
    }
}

/// The poster handle for a descriptor, if it names one that decodes.
pub fn for_media(media: &MediaDescriptor) -> Option<image::Handle> {
    media.poster.as_deref().and_then(load)
}
