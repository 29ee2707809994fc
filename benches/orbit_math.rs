// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-frame orbit math and a full composed tick.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_reel::catalog::Catalog;
use iced_reel::motion::orbit;
use iced_reel::ui::orbit::{Message, OrbitSettings, State};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn bench_slot_positions(c: &mut Criterion) {
    c.bench_function("slot_position_8_slots", |b| {
        b.iter(|| {
            for slot in 0..8 {
                black_box(orbit::slot_position(
                    black_box(slot),
                    8,
                    black_box(0.37),
                    orbit::RADIUS,
                ));
            }
        })
    });
}

fn bench_twin_offset(c: &mut Criterion) {
    c.bench_function("twin_offset", |b| {
        b.iter(|| {
            black_box(orbit::twin_offset(
                0,
                7,
                8,
                black_box(0.61),
                orbit::RADIUS,
            ))
        })
    });
}

fn bench_full_tick(c: &mut Criterion) {
    let catalog = Catalog::sample();
    let t0 = Instant::now();
    let settings = OrbitSettings {
        slots: 24,
        ..OrbitSettings::default()
    };
    let mut state = State::new(&catalog, settings, t0).expect("compose orbit");
    let mut elapsed = Duration::from_secs(5);

    c.bench_function("tick_24_slots", |b| {
        b.iter(|| {
            elapsed += Duration::from_millis(16);
            state.update(Message::Tick(t0 + elapsed));
        })
    });
}

criterion_group!(
    benches,
    bench_slot_positions,
    bench_twin_offset,
    bench_full_tick
);
criterion_main!(benches);
