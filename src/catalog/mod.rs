// SPDX-License-Identifier: MPL-2.0
//! Media catalog: the ordered list of work pieces the application presents.
//!
//! Descriptors are loaded once at startup (from a TOML file or the built-in
//! sample set) and are read-only afterwards. Visual slot counts are allowed
//! to exceed the catalog length; slots cycle through descriptors by modulus.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything a visual slot needs to know about the piece it represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    /// Playable source URL.
    pub source: String,
    /// Poster image shown in grids and orbit slots.
    pub poster: Option<String>,
    pub title: String,
    pub client: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub year: String,
    /// Portfolio filter category, e.g. "commercial" or "music-video".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Serialized form of a catalog file: `[[piece]]` tables.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    piece: Vec<MediaDescriptor>,
}

/// Non-empty, immutable sequence of media descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<MediaDescriptor>,
}

impl Catalog {
    /// Builds a catalog, failing fast when no descriptors are supplied.
    pub fn new(entries: Vec<MediaDescriptor>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CatalogError::Empty.into());
        }
        Ok(Self { entries })
    }

    /// Loads a catalog from a TOML file of `[[piece]]` tables.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let file: CatalogFile =
            toml::from_str(&raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(file.piece)
    }

    /// Built-in sample set used when no catalog file is supplied.
    pub fn sample() -> Self {
        let entries = vec![
            MediaDescriptor {
                source: "https://media.example.com/reels/midnight-run.mp4".into(),
                poster: Some("posters/midnight-run.jpg".into()),
                title: "Midnight Run".into(),
                client: "Nocturne Apparel".into(),
                description: "Launch film for the autumn collection.".into(),
                year: "2024".into(),
                category: Some("commercial".into()),
            },
            MediaDescriptor {
                source: "https://media.example.com/reels/salt-air.mp4".into(),
                poster: Some("posters/salt-air.jpg".into()),
                title: "Salt Air".into(),
                client: "Harborline".into(),
                description: "Coastal documentary short.".into(),
                year: "2024".into(),
                category: Some("documentary".into()),
            },
            MediaDescriptor {
                source: "https://media.example.com/reels/static-bloom.mp4".into(),
                poster: Some("posters/static-bloom.jpg".into()),
                title: "Static Bloom".into(),
                client: "Velvet Antenna".into(),
                description: "Music video, single-take build.".into(),
                year: "2023".into(),
                category: Some("music-video".into()),
            },
            MediaDescriptor {
                source: "https://media.example.com/reels/hours.mp4".into(),
                poster: Some("posters/hours.jpg".into()),
                title: "Hours".into(),
                client: "Meridian Watches".into(),
                description: "Product spot, macro photography.".into(),
                year: "2023".into(),
                category: Some("commercial".into()),
            },
            MediaDescriptor {
                source: "https://media.example.com/reels/north-of-here.mp4".into(),
                poster: Some("posters/north-of-here.jpg".into()),
                title: "North of Here".into(),
                client: "Trailhead Co.".into(),
                description: "Brand anthem shot across three seasons.".into(),
                year: "2022".into(),
                category: Some("documentary".into()),
            },
        ];
        Self { entries }
    }

    /// Descriptor bound to a visual slot; slots cycle by modulus when the
    /// slot count exceeds the catalog length.
    #[must_use]
    pub fn descriptor_for_slot(&self, slot_index: usize) -> &MediaDescriptor {
        &self.entries[slot_index % self.entries.len()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        // Catalog::new rejects empty lists, so this is always false; kept for
        // the usual len/is_empty pairing.
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MediaDescriptor] {
        &self.entries
    }

    /// Distinct categories in catalog order, for the portfolio filter bar.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if let Some(category) = entry.category.as_deref() {
                if !seen.contains(&category) {
                    seen.push(category);
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn descriptor(title: &str) -> MediaDescriptor {
        MediaDescriptor {
            source: format!("https://media.example.com/{title}.mp4"),
            poster: None,
            title: title.to_string(),
            client: "Test Client".to_string(),
            description: String::new(),
            year: "2024".to_string(),
            category: None,
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = Catalog::new(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::Empty)));
    }

    #[test]
    fn slots_cycle_by_modulus() {
        let catalog = Catalog::new((0..5).map(|i| descriptor(&format!("p{i}"))).collect())
            .expect("non-empty catalog");

        let assignment: Vec<&str> = (0..8)
            .map(|slot| catalog.descriptor_for_slot(slot).title.as_str())
            .collect();
        assert_eq!(
            assignment,
            vec!["p0", "p1", "p2", "p3", "p4", "p0", "p1", "p2"]
        );
    }

    #[test]
    fn sample_catalog_is_non_empty() {
        let catalog = Catalog::sample();
        assert!(catalog.len() >= 3);
    }

    #[test]
    fn categories_are_deduplicated_in_order() {
        let mut a = descriptor("a");
        a.category = Some("commercial".into());
        let mut b = descriptor("b");
        b.category = Some("documentary".into());
        let mut c = descriptor("c");
        c.category = Some("commercial".into());

        let catalog = Catalog::new(vec![a, b, c]).expect("non-empty catalog");
        assert_eq!(catalog.categories(), vec!["commercial", "documentary"]);
    }

    #[test]
    fn load_parses_piece_tables() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            r#"
[[piece]]
source = "https://media.example.com/one.mp4"
title = "One"
client = "Client A"
year = "2024"

[[piece]]
source = "https://media.example.com/two.mp4"
poster = "posters/two.jpg"
title = "Two"
client = "Client B"
description = "Second piece."
year = "2023"
category = "commercial"
"#,
        )
        .expect("write catalog");

        let catalog = Catalog::load(&path).expect("load catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.descriptor_for_slot(0).title, "One");
        assert_eq!(
            catalog.descriptor_for_slot(1).category.as_deref(),
            Some("commercial")
        );
    }

    #[test]
    fn load_rejects_file_without_pieces() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "# no pieces\n").expect("write catalog");

        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::Empty)));
    }
}
