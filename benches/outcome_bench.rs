//! Benchmark for the outcome algebra.
//!
//! Measures bind chains on the success and short-circuit paths, Kleisli
//! composition, and the cost of the `try_catch` boundary.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use outcomes::outcome::{Fault, Outcome, attempt, fish};
use std::hint::black_box;

fn increment(value: u64) -> Outcome<u64> {
    Outcome::success(value.wrapping_add(1))
}

// =============================================================================
// Bind Chains
// =============================================================================

fn benchmark_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bind_chain");

    for length in [10_u64, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("success", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let outcome = (0..length)
                    .fold(Outcome::success(0_u64), |outcome, _| outcome.bind(increment));
                black_box(outcome)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("short_circuit", length),
            &length,
            |bencher, &length| {
                bencher.iter(|| {
                    let outcome = (0..length).fold(
                        Outcome::<u64>::failure("stopped early"),
                        |outcome, _| outcome.bind(increment),
                    );
                    black_box(outcome)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_map_vs_bind(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_vs_bind");

    group.bench_function("map", |bencher| {
        bencher.iter(|| black_box(Outcome::success(black_box(41_u64)).map(|value| value + 1)));
    });

    group.bench_function("bind", |bencher| {
        bencher.iter(|| black_box(Outcome::success(black_box(41_u64)).bind(increment)));
    });

    group.finish();
}

// =============================================================================
// Kleisli Composition
// =============================================================================

fn benchmark_fish(criterion: &mut Criterion) {
    let pipeline = fish(increment, fish(increment, increment));

    criterion.bench_function("fish_three_steps", |bencher| {
        bencher.iter(|| black_box(pipeline(black_box(1))));
    });
}

// =============================================================================
// Capture Boundary
// =============================================================================

fn benchmark_capture(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("capture");

    group.bench_function("value", |bencher| {
        bencher.iter(|| black_box(attempt(|| black_box(7_u64) * 6).to_outcome()));
    });

    group.bench_function("exception_outcome", |bencher| {
        bencher.iter(|| black_box(Outcome::<u64>::on_exception(Fault::new("captured"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_bind_chain,
    benchmark_map_vs_bind,
    benchmark_fish,
    benchmark_capture
);

criterion_main!(benches);
