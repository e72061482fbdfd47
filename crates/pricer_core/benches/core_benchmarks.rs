//! Criterion benchmarks for pricer_core grid construction.
//!
//! Measures sample-axis and mesh construction at the sizes the pricers
//! use (30 for bond axes, 50 and 100 for warrants) and above.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::grid::{linspace, meshgrid};

/// Benchmark evenly spaced axis generation.
fn bench_linspace(c: &mut Criterion) {
    let mut group = c.benchmark_group("linspace");

    for size in [30, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| linspace(black_box(1.0_f64), black_box(30.0), size));
        });
    }

    group.finish();
}

/// Benchmark mesh construction and a cell-wise map over it.
fn bench_meshgrid(c: &mut Criterion) {
    let mut group = c.benchmark_group("meshgrid");

    for size in [30, 50, 200] {
        let xs = linspace(1.0_f64, 30.0, size);
        let ys = linspace(2.0_f64, 8.0, size);

        group.bench_with_input(
            BenchmarkId::new("construction", size),
            &(&xs, &ys),
            |b, (xs, ys)| {
                b.iter(|| meshgrid(black_box(xs), black_box(ys)));
            },
        );

        let (xg, yg) = meshgrid(&xs, &ys);
        group.bench_with_input(
            BenchmarkId::new("zip_map", size),
            &(&xg, &yg),
            |b, (xg, yg)| {
                b.iter(|| xg.zip_map(yg, |&x, &y| x * y).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_linspace, bench_meshgrid);
criterion_main!(benches);
