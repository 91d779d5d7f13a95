//! Benchmarks for the decomposition, proportion, and grid hot paths

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use memento_core::LifeConfig;
use memento_engine::{decompose, CountdownEngine, ProportionEngine, WeekGridClassifier};

fn bench_decompose(c: &mut Criterion) {
    c.bench_function("decompose", |b| {
        b.iter(|| decompose(black_box(1_556_668_800)));
    });
}

fn bench_proportion_sample(c: &mut Criterion) {
    let engine = ProportionEngine::new();
    let now = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_milli_opt(14, 30, 30, 250)
        .unwrap();
    c.bench_function("proportion_sample", |b| {
        b.iter(|| engine.sample(black_box(now)));
    });
}

fn bench_grid_render_pass(c: &mut Criterion) {
    let birth = NaiveDate::from_ymd_opt(1998, 7, 25)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let now = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let classifier = WeekGridClassifier::new(birth);

    // A full render pass: 75 years x 52 weeks.
    c.bench_function("grid_render_pass", |b| {
        b.iter(|| {
            for grid_year in 0..75 {
                classifier.classify_year(black_box(grid_year), black_box(now)).unwrap();
            }
        });
    });
}

fn bench_countdown_tick(c: &mut Criterion) {
    let birth = NaiveDate::from_ymd_opt(1998, 7, 25)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let mut engine = CountdownEngine::new(LifeConfig::new(birth)).unwrap();
    engine.initialize(birth + chrono::Duration::days(365));

    c.bench_function("countdown_tick", |b| {
        b.iter(|| engine.tick());
    });
}

criterion_group!(
    benches,
    bench_decompose,
    bench_proportion_sample,
    bench_grid_render_pass,
    bench_countdown_tick
);
criterion_main!(benches);
