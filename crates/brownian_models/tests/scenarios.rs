//! End-to-end sampling scenarios and pinning properties.
//!
//! Exercises the public API only: every sampler is driven through
//! `brownian_models` re-exports and a seeded `PathRng`.

use approx::assert_relative_eq;
use brownian_core::rng::{GaussianSource, PathRng};
use brownian_core::{Process, SampleRequest, TimeGrid};
use brownian_models::{
    BrownianBridge, BrownianInterpolation, BrownianMotion, Deterministic, ProcessEnum,
};
use ndarray::Array2;
use proptest::prelude::*;

#[test]
fn test_motion_two_points_is_one_draw() {
    let bm = BrownianMotion::new(1);
    let path = bm.sample(0.0, 1.0, 2, &mut PathRng::from_seed(2024)).unwrap();

    let z = PathRng::from_seed(2024).gen_normal();
    assert_eq!(path.shape(), (2, 1));
    assert_eq!(path.first()[0], 0.0);
    assert_relative_eq!(path.last()[0], z, epsilon = 1e-15);
}

#[test]
fn test_bridge_three_points_pinned_at_zero() {
    let bridge = BrownianBridge::new(0.0, 1.0, 0.0, 0.0).unwrap();
    let mut rng = PathRng::from_seed(77);

    let mut midpoints = Vec::new();
    for _ in 0..50 {
        let path = bridge.sample(3, &mut rng).unwrap();
        assert_eq!(path.shape(), (3, 1));
        assert_relative_eq!(path.first()[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(path.last()[0], 0.0, epsilon = 1e-12);
        midpoints.push(path.row(1)[0]);
    }

    // The midpoint is random.
    assert!(midpoints.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn test_interpolation_through_squares() {
    let interp = BrownianInterpolation::from_scalar(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
    let path = interp
        .sample(Some(0.0), Some(2.0), 3, &mut PathRng::from_seed(3))
        .unwrap();

    assert_eq!(path.shape(), (3, 1));
    assert_relative_eq!(path.row(0)[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(path.row(1)[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(path.row(2)[0], 4.0, epsilon = 1e-12);
}

#[test]
fn test_interpolation_tail_follows_raw_path() {
    let interp = BrownianInterpolation::from_scalar(&[0.0, 1.0], &[0.0, 5.0]).unwrap();
    let seed = 31;
    let n_points = 21;

    let path = interp
        .sample(Some(0.0), Some(2.0), n_points, &mut PathRng::from_seed(seed))
        .unwrap();
    // Both waypoints sit on nodes, so the raw draw is the only randomness.
    let raw = BrownianMotion::new(1)
        .sample(0.0, 2.0, n_points, &mut PathRng::from_seed(seed))
        .unwrap();

    assert_relative_eq!(path.row(10)[0], 5.0, epsilon = 1e-12);
    for i in 11..n_points {
        let expected = 5.0 + raw.row(i)[0] - raw.row(10)[0];
        assert_relative_eq!(path.row(i)[0], expected, epsilon = 1e-12);
    }
}

#[test]
fn test_same_seed_same_path() {
    let processes = [
        ProcessEnum::from(BrownianMotion::new(3)),
        ProcessEnum::from(BrownianBridge::new(0.5, 2.0, 1.0, -1.0).unwrap()),
        ProcessEnum::from(
            BrownianInterpolation::from_scalar(&[0.0, 0.3, 1.7], &[0.0, 2.0, 1.0]).unwrap(),
        ),
    ];

    for process in &processes {
        let request = SampleRequest::new(64);
        let a = process
            .sample_path(&request, &mut PathRng::from_seed(10))
            .unwrap();
        let b = process
            .sample_path(&request, &mut PathRng::from_seed(10))
            .unwrap();
        assert_eq!(a, b, "{} is not reproducible", process.name());
    }
}

#[test]
fn test_off_grid_waypoints_are_exact_at_ends() {
    // Interior waypoints fall between nodes; the first and last bound the window.
    let times = [0.0, 0.33, 0.71, 1.0];
    let values = [1.0, -2.0, 0.5, 3.0];
    let interp = BrownianInterpolation::from_scalar(&times, &values).unwrap();

    let mut rng = PathRng::from_seed(8);
    for _ in 0..20 {
        let path = interp.sample(None, None, 11, &mut rng).unwrap();
        assert_relative_eq!(path.first()[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(path.last()[0], 3.0, epsilon = 1e-12);
        assert!(path.values().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_deterministic_through_process_contract() {
    let ramp = Deterministic::new(|grid: &TimeGrid| {
        Array2::from_shape_fn((grid.len(), 1), |(i, _)| 2.0 * grid.time(i))
    })
    .with_dim(1);

    let path = ramp
        .sample_path(&SampleRequest::new(5).window(0.0, 2.0), &mut PathRng::from_seed(0))
        .unwrap();
    assert_eq!(path.column(0).to_vec(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

proptest! {
    #[test]
    fn prop_motion_shape_and_origin(
        dim in 1usize..5,
        n_points in 2usize..300,
        t_start in 0.0f64..10.0,
        width in 0.0f64..10.0,
        seed in any::<u64>(),
    ) {
        let bm = BrownianMotion::new(dim);
        let mut rng = PathRng::from_seed(seed);
        let a = bm.sample(t_start, t_start + width, n_points, &mut rng).unwrap();
        let b = bm.sample(t_start, t_start + width, n_points, &mut rng).unwrap();

        prop_assert_eq!(a.shape(), (n_points, dim));
        prop_assert_eq!(b.shape(), (n_points, dim));
        let origin = t_start.sqrt();
        prop_assert!(a.first().iter().all(|&w| w == origin));
    }

    #[test]
    fn prop_bridge_endpoints(
        t_start in 0.0f64..5.0,
        width in 0.01f64..5.0,
        start_value in -10.0f64..10.0,
        end_value in -10.0f64..10.0,
        n_points in 2usize..200,
        seed in any::<u64>(),
    ) {
        let bridge = BrownianBridge::new(t_start, t_start + width, start_value, end_value).unwrap();
        let path = bridge.sample(n_points, &mut PathRng::from_seed(seed)).unwrap();

        prop_assert_eq!(path.shape(), (n_points, 1));
        prop_assert!((path.first()[0] - start_value).abs() < 1e-9);
        prop_assert!((path.last()[0] - end_value).abs() < 1e-9);
    }

    #[test]
    fn prop_on_grid_waypoints_pinned(
        nodes in prop::collection::btree_set(0usize..51, 2..8),
        targets in prop::collection::vec(-5.0f64..5.0, 8),
        t_end in 0.5f64..20.0,
        seed in any::<u64>(),
    ) {
        let n_points = 51;
        let grid = TimeGrid::new(0.0, t_end, n_points).unwrap();
        let nodes: Vec<usize> = nodes.into_iter().collect();
        let times: Vec<f64> = nodes.iter().map(|&i| grid.time(i)).collect();
        let values = &targets[..nodes.len()];

        let interp = BrownianInterpolation::from_scalar(&times, values).unwrap();
        let path = interp
            .sample(Some(0.0), Some(t_end), n_points, &mut PathRng::from_seed(seed))
            .unwrap();

        for (&node, &target) in nodes.iter().zip(values) {
            prop_assert!((path.row(node)[0] - target).abs() < 1e-9);
        }
    }
}
