//! Benchmark for the effect types: Thunk and Fallible.
//!
//! Measures construction and run costs of composed pipelines.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use thunkful::control::Either;
use thunkful::effect::{Fallible, Thunk};
use thunkful::typeclass::{Apply, Functor, Monad};

fn benchmark_thunk_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("thunk");

    group.bench_function("of_run", |bencher| {
        bencher.iter(|| {
            let thunk = Thunk::of(black_box(42));
            black_box(thunk.run())
        });
    });

    group.bench_function("map_chain_5", |bencher| {
        bencher.iter(|| {
            let thunk = Thunk::of(black_box(1))
                .fmap(|x| x + 1)
                .fmap(|x| x + 1)
                .fmap(|x| x + 1)
                .fmap(|x| x + 1)
                .fmap(|x| x + 1);
            black_box(thunk.run())
        });
    });

    group.bench_function("flat_map_chain_3", |bencher| {
        bencher.iter(|| {
            let thunk = Thunk::of(black_box(1))
                .flat_map(|x| Thunk::of(x + 1))
                .flat_map(|x| Thunk::of(x * 2))
                .flat_map(|x| Thunk::of(x - 1));
            black_box(thunk.run())
        });
    });

    group.finish();
}

fn benchmark_fallible_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fallible");

    group.bench_function("success_chain", |bencher| {
        bencher.iter(|| {
            let effect: Fallible<String, i32> = Fallible::right(black_box(10))
                .fmap(|x| x * 2)
                .flat_map(|x| Fallible::right(x + 1));
            black_box(effect.run())
        });
    });

    group.bench_function("failure_short_circuit", |bencher| {
        bencher.iter(|| {
            let effect: Fallible<String, i32> = Fallible::left("down".to_string())
                .fmap(|x| x * 2)
                .flat_map(|x| Fallible::right(x + 1));
            black_box(effect.run())
        });
    });

    group.bench_function("map2_both_sides", |bencher| {
        bencher.iter(|| {
            let effect: Fallible<String, i32> =
                Fallible::right(black_box(1)).map2(Fallible::right(2), |a, b| a + b);
            black_box(effect.run())
        });
    });

    group.bench_function("run_either_fold", |bencher| {
        bencher.iter(|| {
            let effect: Fallible<String, i32> = Fallible::right(black_box(21));
            match effect.run() {
                Either::Left(error) => black_box(error.len()),
                Either::Right(value) => black_box(value as usize),
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_thunk_pipeline, benchmark_fallible_pipeline);
criterion_main!(benches);
