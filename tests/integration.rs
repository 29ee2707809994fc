// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks through the public crate API: catalog loading, orbit
//! composition and motion, and config persistence.

use iced_reel::catalog::Catalog;
use iced_reel::config::{self, Config};
use iced_reel::motion::orbit;
use iced_reel::ui::orbit::{Message, OrbitSettings, State, Target};
use iced_reel::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn write_catalog(dir: &std::path::Path, pieces: usize) -> std::path::PathBuf {
    let mut content = String::new();
    for i in 0..pieces {
        content.push_str(&format!(
            "[[piece]]\nsource = \"https://media.example.com/{i}.mp4\"\ntitle = \"Piece {i}\"\nclient = \"Client {i}\"\nyear = \"2024\"\n\n"
        ));
    }
    let path = dir.join("catalog.toml");
    std::fs::write(&path, content).expect("write catalog file");
    path
}

#[test]
fn loaded_catalog_composes_and_revolves() {
    let dir = tempdir().expect("tempdir");
    let path = write_catalog(dir.path(), 5);
    let catalog = Catalog::load(&path).expect("load catalog");

    let t0 = Instant::now();
    let settings = OrbitSettings::default();
    let mut state = State::new(&catalog, settings, t0).expect("compose orbit");
    assert_eq!(state.slot_count(), settings.slots);
    assert!(state.is_animating());

    // Drive past every entrance, then one full revolution.
    let settled = t0
        + settings.timing.base_delay
        + settings.timing.stagger * settings.slots as u32
        + settings.timing.entrance_duration;
    state.update(Message::Tick(settled));
    let first: Vec<_> = state
        .items()
        .iter()
        .map(|item| item.position.expect("placed after entrance"))
        .collect();

    state.update(Message::Tick(settled + settings.timing.period));
    for (item, before) in state.items().iter().zip(&first) {
        let after = item.position.expect("still placed");
        assert!((after.x - before.x).abs() < 1e-2);
        assert!((after.y - before.y).abs() < 1e-2);
    }
}

#[test]
fn slots_stay_evenly_spaced_mid_revolution() {
    let total = 8;
    for progress in [0.0, 0.2, 0.5, 0.9] {
        let gap = std::f64::consts::TAU / total as f64;
        for slot in 0..total {
            let a = orbit::slot_angle(slot, total, progress);
            let b = orbit::slot_angle((slot + 1) % total, total, progress);
            let diff = (b - a).rem_euclid(std::f64::consts::TAU);
            assert!(
                (diff - gap).abs() < 1e-9,
                "uneven gap at progress {progress}: {diff} vs {gap}"
            );
        }
    }
}

#[test]
fn clicking_any_slot_yields_its_cycled_descriptor() {
    let dir = tempdir().expect("tempdir");
    let path = write_catalog(dir.path(), 3);
    let catalog = Catalog::load(&path).expect("load catalog");

    let mut state = State::new(&catalog, OrbitSettings::default(), Instant::now())
        .expect("compose orbit");

    for slot in 0..state.slot_count() {
        let played = state
            .update(Message::Pressed(Target::Item(slot)))
            .expect("play request");
        assert_eq!(played.title, format!("Piece {}", slot % 3));
    }

    let twin = state
        .update(Message::Pressed(Target::Twin))
        .expect("twin play request");
    assert_eq!(twin.title, "Piece 0");
}

#[test]
fn shutdown_mid_entrance_stops_everything() {
    let catalog = Catalog::sample();
    let t0 = Instant::now();
    let mut state =
        State::new(&catalog, OrbitSettings::default(), t0).expect("compose orbit");

    // Only part of the ring has entered.
    state.update(Message::Tick(t0 + Duration::from_millis(350)));
    state.shutdown();
    assert!(!state.is_animating());

    // Later ticks stay inert.
    state.update(Message::Tick(t0 + Duration::from_secs(5)));
    assert_eq!(state.slot_count(), 0);
}

#[test]
fn config_round_trips_through_a_custom_directory() {
    let dir = tempdir().expect("tempdir");
    let base = dir.path().to_path_buf();

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Light;
    config.orbit.slots = Some(12);
    config.orbit.period_secs = Some(40.0);
    config.contact.endpoint = Some("https://example.com/inbox".to_string());

    config::save_with_override(&config, Some(base.clone())).expect("save config");

    let (loaded, warning) = config::load_with_override(Some(base));
    assert!(warning.is_none());
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert_eq!(loaded.orbit.slots, Some(12));
    assert_eq!(loaded.orbit.period_secs, Some(40.0));
    assert_eq!(
        loaded.contact.endpoint.as_deref(),
        Some("https://example.com/inbox")
    );
}

#[test]
fn corrupt_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("settings.toml"), "orbit = \"sideways\"")
        .expect("write bad config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_some());
    assert_eq!(loaded, Config::default());
}

#[test]
fn empty_catalog_file_is_refused() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, "").expect("write empty catalog");

    assert!(Catalog::load(&path).is_err());
}
