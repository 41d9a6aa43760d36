//! Benchmarks for the success and failure paths of condition checks.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use term_conditions::conditions;
use term_conditions::prelude::*;

fn bench_success_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("success_path");

    group.bench_function("no_message", |b| {
        b.iter(|| Arguments.require_in_range_inclusive(black_box(5), 0, 9, NoMessage))
    });

    group.bench_function("literal_message", |b| {
        b.iter(|| Arguments.require_in_range_inclusive(black_box(5), 0, 9, "out of range"))
    });

    group.bench_function("lazy_message", |b| {
        b.iter(|| {
            let value = black_box(5);
            Arguments.require_in_range_inclusive(value, 0, 9, || format!("{value} out of range"))
        })
    });

    group.bench_function("baseline_comparison", |b| {
        b.iter(|| {
            let value = black_box(5);
            (0..=9).contains(&value)
        })
    });

    group.finish();
}

fn bench_failure_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("failure_path");

    group.bench_function("free_function", |b| {
        b.iter(|| {
            conditions::require_greater(
                black_box(1),
                2,
                "too small",
                ConditionError::invalid_state,
            )
        })
    });

    let silent = Guard::builder("bench")
        .factory(ConditionError::invalid_state)
        .with_log_config(LogConfig::silent())
        .build()
        .unwrap();
    group.bench_function("silent_guard", |b| {
        b.iter(|| silent.require_greater(black_box(1), 2, "too small"))
    });

    group.finish();
}

fn bench_containment(c: &mut Criterion) {
    let mut group = c.benchmark_group("containment");

    for size in [10usize, 1_000, 100_000] {
        let values: Vec<usize> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("contains_last", size), &values, |b, values| {
            b.iter(|| Arguments.require_contains_equals(values, black_box(size - 1), NoMessage))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_success_path, bench_failure_path, bench_containment);
criterion_main!(benches);
