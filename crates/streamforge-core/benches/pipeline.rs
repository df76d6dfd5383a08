//! Benchmarks for pipeline terminal operations.
//!
//! Compares a described pipeline against the equivalent `std::iter` chain so
//! decorator overhead stays visible.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use streamforge_core::{Stream, ValueStream};

fn benchmark_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect");

    for size in [100usize, 1_000, 10_000] {
        let data: Vec<i64> = (0..size as i64).collect();

        let stream = ValueStream::of(data.clone())
            .map(|x| x + 1)
            .filter(|x| *x % 2 == 0)
            .take(size / 2);
        group.bench_with_input(BenchmarkId::new("stream", size), &size, |b, _| {
            b.iter(|| black_box(&stream).collect())
        });

        group.bench_with_input(BenchmarkId::new("std_iter", size), &size, |b, &size| {
            b.iter(|| {
                black_box(&data)
                    .iter()
                    .map(|x| x + 1)
                    .filter(|x| *x % 2 == 0)
                    .take(size / 2)
                    .collect::<Vec<i64>>()
            })
        });
    }

    group.finish();
}

fn benchmark_reduce(c: &mut Criterion) {
    let data: Vec<i64> = (0..10_000).collect();
    let stream = ValueStream::of(data.clone())
        .map(|x| x * 3)
        .filter(|x| *x % 7 != 0);

    c.bench_function("reduce_stream", |b| {
        b.iter(|| black_box(&stream).reduce(0, |acc, x| acc + x))
    });

    c.bench_function("reduce_std_fold", |b| {
        b.iter(|| {
            black_box(&data)
                .iter()
                .map(|x| x * 3)
                .filter(|x| *x % 7 != 0)
                .fold(0i64, |acc, x| acc + x)
        })
    });
}

criterion_group!(benches, benchmark_collect, benchmark_reduce);
criterion_main!(benches);
