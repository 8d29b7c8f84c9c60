//! Performance benchmarks for the mood analysis pipeline
//!
//! Run with: cargo bench --bench analysis_benchmarks

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mood_core::{
    holt_linear, score_history, simple_exponential, MoodObservation, MoodTrendEngine,
    MoodWeightTable, Period, SmoothingConstants,
};

const LABELS: [&str; 8] = [
    "happy", "sad", "calm", "anxious", "neutral", "angry", "proud", "tired",
];

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 31, 12, 0, 0).unwrap()
}

/// Deterministic history, one entry every eight hours.
fn history(size: usize) -> Vec<MoodObservation> {
    (0..size)
        .map(|i| {
            MoodObservation::new(
                reference_now() - Duration::hours(8 * (size - i) as i64),
                LABELS[(i * 7 + i / 3) % LABELS.len()],
                (1 + (i * 5) % 10) as u8,
            )
        })
        .collect()
}

/// Benchmark both smoothers on raw score series
fn bench_smoothing(c: &mut Criterion) {
    let constants = SmoothingConstants::default();
    let mut group = c.benchmark_group("smoothing");

    for size in [10, 100, 1000, 10_000].iter() {
        let scores: Vec<f64> = (0..*size).map(|i| ((i as f64) * 0.37).sin()).collect();

        group.bench_with_input(BenchmarkId::new("holt", size), size, |b, _| {
            b.iter(|| black_box(holt_linear(&scores, &constants)));
        });

        group.bench_with_input(BenchmarkId::new("simple", size), size, |b, _| {
            b.iter(|| black_box(simple_exponential(&scores, constants.alpha)));
        });
    }

    group.finish();
}

/// Benchmark label lookup and sorting
fn bench_scoring(c: &mut Criterion) {
    let weights = MoodWeightTable::default();
    let observations = history(1000);

    c.bench_function("score_history_1000", |b| {
        b.iter(|| black_box(score_history(&observations, &weights)));
    });
}

/// Benchmark the full analysis across periods
fn bench_full_analysis(c: &mut Criterion) {
    let engine = MoodTrendEngine::default();
    let mut group = c.benchmark_group("analyze");

    for size in [30, 365, 3000].iter() {
        let observations = history(*size);
        for period in [Period::Week, Period::All] {
            group.bench_with_input(
                BenchmarkId::new(period.as_str(), size),
                &observations,
                |b, observations| {
                    b.iter(|| black_box(engine.analyze_at(observations, period, reference_now())));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_smoothing, bench_scoring, bench_full_analysis);
criterion_main!(benches);
