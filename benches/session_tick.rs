// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the session tick path.
//!
//! Measures the performance of:
//! - An idle tick (no timer due, no engine event)
//! - A time sync tick (label formatting and delegate fan-out)
//! - A full drag-and-commit seek cycle

use criterion::{criterion_group, criterion_main, Criterion};
use iced_transport::config::PlaybackSettings;
use iced_transport::domain::video::MediaSource;
use iced_transport::video_player::{
    ManualClock, Message, PlaybackSession, SessionContext, SimulatedCatalog, SimulatedMedia,
};
use std::hint::black_box;
use std::rc::Rc;
use std::time::Duration;

fn session(clock: &ManualClock) -> PlaybackSession {
    let catalog = Rc::new(
        SimulatedCatalog::new(Rc::new(clock.clone())).with_fallback(SimulatedMedia::vod(7200.0)),
    );
    let context = SessionContext::new(catalog, Rc::new(clock.clone()), PlaybackSettings::default());
    context.spawn(MediaSource::new("https://bench.example.com/long.m3u8"), None)
}

fn bench_idle_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_tick");
    let clock = ManualClock::new();
    let mut session = session(&clock);

    group.bench_function("idle_tick", |b| {
        b.iter(|| {
            session.update(Message::Tick);
            black_box(session.state());
        });
    });

    group.finish();
}

fn bench_time_sync_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_tick");
    let clock = ManualClock::new();
    let mut session = session(&clock);
    session.update(Message::TogglePlayback);

    group.bench_function("time_sync_tick", |b| {
        b.iter(|| {
            clock.advance(Duration::from_secs(1));
            session.update(Message::Tick);
            black_box(session.display());
        });
    });

    group.finish();
}

fn bench_seek_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_tick");
    let clock = ManualClock::new();
    let mut session = session(&clock);

    group.bench_function("seek_cycle", |b| {
        b.iter(|| {
            session.update(Message::SeekPreview(black_box(1800.0)));
            session.update(Message::SeekCommit);
            session.update(Message::Tick);
            black_box(session.seek_state());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_idle_tick, bench_time_sync_tick, bench_seek_cycle);
criterion_main!(benches);
