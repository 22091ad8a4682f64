//! Criterion benchmarks for NavLab hot paths.
//!
//! Benchmarks:
//! 1. Trailing mean (running-sum windowing) at several series lengths
//! 2. Change-ratio computation
//! 3. Full pipeline over a synthetic multi-scheme universe

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chrono::NaiveDate;
use navlab_core::rolling::{change_ratios, trailing_mean};
use navlab_core::{run_pipeline, AnalysisConfig, Observation, SchemeCode};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_navs(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn make_universe(schemes: usize, days: usize) -> Vec<Observation> {
    let base_date = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
    let mut observations = Vec::with_capacity(schemes * days);
    for code in 0..schemes as u32 {
        let mut nav = 50.0 + code as f64;
        let mut date = base_date;
        let mut written = 0;
        while written < days {
            if !matches!(
                chrono::Datelike::weekday(&date),
                chrono::Weekday::Sat | chrono::Weekday::Sun
            ) {
                observations.push(Observation {
                    scheme_code: SchemeCode(code),
                    date,
                    nav,
                    scheme_name: format!("Synthetic Scheme {code} - Direct Plan - Growth"),
                });
                nav *= 1.0 + ((code as f64 - schemes as f64 / 2.0) / 1_000_000.0);
                written += 1;
            }
            date += chrono::Duration::days(1);
        }
    }
    observations
}

// ── Benches ──────────────────────────────────────────────────────────

fn bench_trailing_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("trailing_mean");
    for n in [500usize, 2_000, 10_000] {
        let navs = make_navs(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &navs, |b, navs| {
            b.iter(|| trailing_mean(black_box(navs), black_box(200)));
        });
    }
    group.finish();
}

fn bench_change_ratios(c: &mut Criterion) {
    let navs = make_navs(2_000);
    c.bench_function("change_ratios_2000", |b| {
        b.iter(|| change_ratios(black_box(&navs)));
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let observations = make_universe(200, 300);
    let config = AnalysisConfig::default();
    c.bench_function("pipeline_200_schemes_300_days", |b| {
        b.iter(|| run_pipeline(black_box(observations.clone()), black_box(&config)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_trailing_mean,
    bench_change_ratios,
    bench_full_pipeline
);
criterion_main!(benches);
