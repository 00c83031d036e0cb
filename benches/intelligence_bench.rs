// ABOUTME: Criterion benchmarks for the fitness calculators and trend windows
// ABOUTME: Measures conversions, macro splits, window signals, and report folding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Criterion benchmarks for `fittrack-intelligence`.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fittrack_intelligence::metrics::{calories_burned, macro_split, MacroRatio};
use fittrack_intelligence::trends::{has_missed_workouts, rest_days_for_window, trend_for_window};
use fittrack_intelligence::{units, FitnessReport};
use fittrack_server::models::{ProgressEntry, Subject};
use uuid::Uuid;

/// History sizes used by the report benchmark
const HISTORY_SIZES: [usize; 3] = [10, 100, 1000];

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn generate_history(subject_id: Uuid, count: usize) -> Vec<ProgressEntry> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    (0..count)
        .map(|index| ProgressEntry {
            id: Uuid::new_v4(),
            subject_id,
            date: start + Duration::days(index as i64),
            weight_kg: 80.0 - (index % 50) as f64 * 0.1,
            workouts_completed: (index % 3) as u32,
            notes: String::new(),
            created_at: Utc::now(),
        })
        .rev()
        .collect()
}

fn bench_calculators(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculators");

    group.bench_function("convert_kg", |b| {
        b.iter(|| units::convert(black_box(70.0), black_box("kg")));
    });
    group.bench_function("macro_split", |b| {
        let ratio = MacroRatio::default();
        b.iter(|| macro_split(black_box(2000.0), &ratio));
    });
    group.bench_function("calories_burned", |b| {
        b.iter(|| calories_burned(black_box(45), black_box(82.5)));
    });

    group.finish();
}

fn bench_trend_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("trend_windows");
    let history = generate_history(Uuid::new_v4(), 30);
    let today = history
        .first()
        .map_or_else(|| Utc::now().date_naive(), |entry| entry.date);

    group.bench_function("rest_days", |b| {
        b.iter(|| rest_days_for_window(black_box(&history[..3])));
    });
    group.bench_function("trend", |b| {
        b.iter(|| trend_for_window(black_box(&history[..2])));
    });
    group.bench_function("missing_workouts", |b| {
        b.iter(|| has_missed_workouts(black_box(&history[..4]), today));
    });

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness_report");
    let subject = Subject {
        id: Uuid::new_v4(),
        username: "bench".to_owned(),
        age: Some(35),
        height_cm: Some(180.0),
        weight_kg: Some(80.0),
        created_at: Utc::now(),
    };

    for size in HISTORY_SIZES {
        let history = generate_history(subject.id, size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &history, |b, history| {
            b.iter(|| FitnessReport::from_history(&subject, black_box(history)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_calculators, bench_trend_windows, bench_report);
criterion_main!(benches);
