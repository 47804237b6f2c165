//! Benchmarks for bootstrapping and curve queries.
//!
//! Run with: cargo bench -p zerocurve-curves

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use zerocurve_core::{BondSpecification, Compounding};
use zerocurve_curves::{Bootstrapper, ForwardCurve, YieldCurve};
use zerocurve_math::interpolation::InterpolationMethod;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Semi-annual ladder out to `count / 2` years priced off a gently rising curve.
fn create_portfolio(count: usize) -> Vec<BondSpecification> {
    (1..=count)
        .map(|i| {
            let maturity = i as f64 * 0.5;
            let coupon = 0.03 + 0.0005 * i as f64;
            let yield_rate = coupon + 0.001;
            let flows = BondSpecification::new(maturity, coupon, 2, 100.0);
            let price: f64 = flows
                .payment_times()
                .iter()
                .zip(flows.cash_flows())
                .map(|(&t, cf)| cf * (-yield_rate * t).exp())
                .sum();
            BondSpecification::new(maturity, coupon, 2, price)
        })
        .collect()
}

fn build_curve(method: InterpolationMethod) -> YieldCurve {
    Bootstrapper::new(Compounding::Continuous, method)
        .bootstrap(&create_portfolio(30))
        .unwrap()
}

// =============================================================================
// BOOTSTRAP
// =============================================================================

fn bench_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap");

    for size in [10usize, 30, 60] {
        let bonds = create_portfolio(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bonds, |b, bonds| {
            let bootstrapper =
                Bootstrapper::new(Compounding::Continuous, InterpolationMethod::LogLinear);
            b.iter(|| bootstrapper.bootstrap(black_box(bonds)).unwrap());
        });
    }

    group.finish();
}

fn bench_bootstrap_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap_30_bonds");
    let bonds = create_portfolio(30);

    for method in InterpolationMethod::ALL {
        group.bench_function(method.to_string(), |b| {
            let bootstrapper = Bootstrapper::new(Compounding::Continuous, method);
            b.iter(|| bootstrapper.bootstrap(black_box(&bonds)).unwrap());
        });
    }

    group.bench_function("Log-Linear + spline", |b| {
        let bootstrapper = Bootstrapper::new(Compounding::Continuous, InterpolationMethod::LogLinear);
        b.iter(|| bootstrapper.bootstrap_with_spline(black_box(&bonds)).unwrap());
    });

    group.finish();
}

// =============================================================================
// QUERIES
// =============================================================================

fn bench_queries(c: &mut Criterion) {
    let curve = build_curve(InterpolationMethod::LogLinear);
    let mut smoothed = curve.clone();
    smoothed.apply_cubic_spline_smoothing().unwrap();

    c.bench_function("discount_factor", |b| {
        b.iter(|| curve.discount_factor(black_box(7.3)).unwrap());
    });

    c.bench_function("discount_factor_smoothed", |b| {
        b.iter(|| smoothed.discount_factor(black_box(7.3)).unwrap());
    });

    c.bench_function("zero_rate", |b| {
        b.iter(|| curve.zero_rate(black_box(7.3)).unwrap());
    });

    let tenors: Vec<f64> = (1..=60).map(|i| f64::from(i) * 0.25).collect();
    c.bench_function("forward_curve_60", |b| {
        let view = ForwardCurve::new(&curve);
        b.iter(|| view.forward_curve(black_box(&tenors)).unwrap());
    });
}

criterion_group!(benches, bench_bootstrap, bench_bootstrap_methods, bench_queries);
criterion_main!(benches);
