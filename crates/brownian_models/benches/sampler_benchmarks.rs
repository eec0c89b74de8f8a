//! Criterion benchmarks for the Brownian samplers.
//!
//! Measures single-path sampling cost against grid resolution, and the
//! parallel ensemble throughput.

use brownian_core::rng::PathRng;
use brownian_core::SampleRequest;
use brownian_models::{
    sample_ensemble, BrownianBridge, BrownianInterpolation, BrownianMotion,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;

/// Benchmark standard Brownian motion in 1 and 4 dimensions.
fn bench_motion(c: &mut Criterion) {
    let mut group = c.benchmark_group("brownian_motion");

    for n_points in [100, 1_000, 10_000] {
        for dim in [1, 4] {
            let bm = BrownianMotion::new(dim);
            group.bench_with_input(
                BenchmarkId::new(format!("dim_{}", dim), n_points),
                &n_points,
                |b, &n| {
                    let mut rng = PathRng::from_seed(42);
                    b.iter(|| bm.sample(0.0, 1.0, black_box(n), &mut rng).unwrap());
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the Brownian bridge.
fn bench_bridge(c: &mut Criterion) {
    let mut group = c.benchmark_group("brownian_bridge");
    let bridge = BrownianBridge::new(0.0, 1.0, 0.0, 1.0).unwrap();

    for n_points in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n_points), &n_points, |b, &n| {
            let mut rng = PathRng::from_seed(42);
            b.iter(|| bridge.sample(black_box(n), &mut rng).unwrap());
        });
    }

    group.finish();
}

/// Benchmark interpolation against the number of waypoints.
fn bench_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("brownian_interpolation");
    let n_points = 1_000;

    for n_waypoints in [2, 10, 100] {
        // Irrational spacing keeps most waypoints off the grid.
        let times: Vec<f64> = (0..n_waypoints)
            .map(|k| k as f64 * std::f64::consts::E)
            .collect();
        let values = Array2::from_shape_fn((n_waypoints, 2), |(k, j)| (k + j) as f64);
        let interp = BrownianInterpolation::new(2, times, values).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(n_waypoints),
            &interp,
            |b, interp| {
                let mut rng = PathRng::from_seed(42);
                b.iter(|| interp.sample(None, None, black_box(n_points), &mut rng).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark parallel ensembles.
fn bench_ensemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("ensemble");
    group.sample_size(20);

    let bm = BrownianMotion::new(1);
    let request = SampleRequest::new(252);

    for n_paths in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n_paths), &n_paths, |b, &n| {
            b.iter(|| sample_ensemble(&bm, &request, black_box(n), 42).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_motion,
    bench_bridge,
    bench_interpolation,
    bench_ensemble
);
criterion_main!(benches);
