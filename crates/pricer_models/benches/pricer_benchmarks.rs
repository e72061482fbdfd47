//! Benchmarks for point pricing and chart generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::axes::{
    BondSeries, BondSurfaceMetric, WarrantCurveMetric, WarrantSurfaceMetric,
};
use pricer_models::instruments::{PricingParameters, WarrantParameters};
use pricer_models::pricers::{price_bond, BondPricer, WarrantPricer};

fn bench_point_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_pricing");

    let bond = PricingParameters {
        spot_price: 120.0,
        ..Default::default()
    };
    group.bench_function("price_bond", |b| b.iter(|| price_bond(black_box(&bond))));

    let warrant = WarrantParameters::new(120.0, 100.0);
    let pricer = WarrantPricer::new();
    group.bench_function("price_warrant", |b| {
        b.iter(|| pricer.price_warrant(black_box(&warrant)))
    });

    group.finish();
}

fn bench_bond_charts(c: &mut Criterion) {
    let mut group = c.benchmark_group("bond_charts");
    let pricer = BondPricer::default();

    group.bench_function("curve_maturity_duration", |b| {
        b.iter(|| pricer.generate_curve_data(black_box(BondSeries::Maturity), BondSeries::Duration))
    });

    for metric in [BondSurfaceMetric::Coupon, BondSurfaceMetric::Convexity] {
        group.bench_with_input(
            BenchmarkId::new("surface_30x30", metric),
            &metric,
            |b, &metric| b.iter(|| pricer.generate_surface_data(black_box(metric))),
        );
    }

    group.finish();
}

fn bench_warrant_charts(c: &mut Criterion) {
    let mut group = c.benchmark_group("warrant_charts");
    let pricer = WarrantPricer::new();

    group.bench_function("payoff_curve_value", |b| {
        b.iter(|| pricer.generate_payoff_curve(black_box(100.0), WarrantCurveMetric::Value))
    });

    for metric in [WarrantSurfaceMetric::Time, WarrantSurfaceMetric::Volatility] {
        group.bench_with_input(
            BenchmarkId::new("surface_50x50", metric),
            &metric,
            |b, &metric| {
                b.iter(|| {
                    pricer.generate_surface_data(
                        black_box(100.0),
                        WarrantCurveMetric::Delta,
                        metric,
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_point_pricing, bench_bond_charts, bench_warrant_charts);
criterion_main!(benches);
