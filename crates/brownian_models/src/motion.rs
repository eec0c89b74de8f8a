//! Standard multidimensional Brownian motion.
//!
//! Paths are built from independent Gaussian increments scaled by `√dt`:
//!
//! ```text
//! W[0]   = 0
//! W[i]   = Σ_{k < i} √dt · Z_k        (per column)
//! out[i] = W[i] + √t_start
//! ```
//!
//! The constant `√t_start` shift is part of the contract: a path sampled on
//! `[t_start, t_end]` starts at `√t_start`, not at zero. It is a fixed
//! deterministic offset, not a conditioning on the value at `t_start`.

use brownian_core::rng::GaussianSource;
use brownian_core::{Process, SamplePath, SampleRequest, SamplingError, TimeGrid};
use ndarray::Array2;
use tracing::debug;

/// Default window when a request leaves it open.
const DEFAULT_WINDOW: (f64, f64) = (0.0, 1.0);

/// Standard Brownian motion in `dim` dimensions.
///
/// # Examples
///
/// ```rust
/// use brownian_core::rng::PathRng;
/// use brownian_models::BrownianMotion;
///
/// let bm = BrownianMotion::new(2);
/// let mut rng = PathRng::from_seed(42);
///
/// let path = bm.sample(0.0, 1.0, 101, &mut rng).unwrap();
/// assert_eq!(path.shape(), (101, 2));
/// assert_eq!(path.first()[0], 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrownianMotion {
    dim: usize,
}

impl BrownianMotion {
    /// Creates a Brownian motion with `dim` independent components.
    #[inline]
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    /// Dimension of the state space.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Samples a path on `n_points` uniformly spaced times in `[t_start, t_end]`.
    ///
    /// Row 0 equals `√t_start` in every column.
    ///
    /// # Errors
    ///
    /// - `DegenerateGrid` if `n_points < 2`
    /// - `InvalidTime` if `t_start` is negative or either bound is not finite
    /// - `InvalidWindow` if `t_end < t_start`
    pub fn sample<G: GaussianSource + ?Sized>(
        &self,
        t_start: f64,
        t_end: f64,
        n_points: usize,
        rng: &mut G,
    ) -> Result<SamplePath, SamplingError> {
        let grid = Self::grid(t_start, t_end, n_points)?;
        debug!(
            dim = self.dim,
            t_start, t_end, n_points, "sampling Brownian motion"
        );
        let values = self.sample_on(&grid, rng);
        SamplePath::from_grid(&grid, values)
    }

    /// Builds and validates the grid for a Brownian sample.
    pub(crate) fn grid(
        t_start: f64,
        t_end: f64,
        n_points: usize,
    ) -> Result<TimeGrid, SamplingError> {
        let grid = TimeGrid::new(t_start, t_end, n_points)?;
        SamplingError::check_time("t_start", t_start)?;
        Ok(grid)
    }

    /// Samples raw path values on an already validated grid.
    ///
    /// Draws `(len - 1) × dim` normals in row-major order. The grid start
    /// must be non-negative; [`BrownianMotion::sample`] checks this.
    pub fn sample_on<G: GaussianSource + ?Sized>(
        &self,
        grid: &TimeGrid,
        rng: &mut G,
    ) -> Array2<f64> {
        let n_points = grid.len();
        let dim = self.dim;
        let sqrt_dt = grid.dt().sqrt();

        let mut increments = vec![0.0; (n_points - 1) * dim];
        rng.fill_normal(&mut increments);

        let mut values = Array2::<f64>::zeros((n_points, dim));
        for i in 1..n_points {
            let offset = (i - 1) * dim;
            for j in 0..dim {
                values[[i, j]] = values[[i - 1, j]] + sqrt_dt * increments[offset + j];
            }
        }

        let shift = grid.t_start().sqrt();
        values.mapv_inplace(|w| w + shift);
        values
    }
}

impl Process for BrownianMotion {
    fn dim(&self) -> usize {
        self.dim
    }

    fn sample_path<G: GaussianSource + ?Sized>(
        &self,
        request: &SampleRequest,
        rng: &mut G,
    ) -> Result<SamplePath, SamplingError> {
        let (t_start, t_end) = request.window_or(DEFAULT_WINDOW.0, DEFAULT_WINDOW.1);
        self.sample(t_start, t_end, request.n_points(), rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Scripted;
    use approx::assert_relative_eq;
    use brownian_core::rng::PathRng;

    #[test]
    fn test_shape_and_initial_row() {
        let bm = BrownianMotion::new(3);
        let mut rng = PathRng::from_seed(42);
        let path = bm.sample(0.0, 1.0, 50, &mut rng).unwrap();

        assert_eq!(path.shape(), (50, 3));
        assert!(path.first().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_offset_by_sqrt_start() {
        let bm = BrownianMotion::new(2);
        let mut rng = PathRng::from_seed(7);
        let path = bm.sample(4.0, 5.0, 10, &mut rng).unwrap();

        assert!(path.first().iter().all(|&w| w == 2.0));
    }

    #[test]
    fn test_cumulative_increments() {
        // Increments 1, 2, 3 with dt = 0.25 -> steps of 0.5, 1.0, 1.5
        let bm = BrownianMotion::new(1);
        let mut source = Scripted::new(&[1.0, 2.0, 3.0]);
        let path = bm.sample(0.0, 0.75, 4, &mut source).unwrap();

        let column: Vec<f64> = path.column(0).to_vec();
        assert_relative_eq!(column[0], 0.0);
        assert_relative_eq!(column[1], 0.5, epsilon = 1e-15);
        assert_relative_eq!(column[2], 1.5, epsilon = 1e-15);
        assert_relative_eq!(column[3], 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_row_major_draw_order() {
        // Two columns: draws alternate between columns within a row.
        let bm = BrownianMotion::new(2);
        let mut source = Scripted::new(&[1.0, -1.0, 2.0, -2.0]);
        let path = bm.sample(0.0, 2.0, 3, &mut source).unwrap();

        assert_eq!(path.row(1).to_vec(), vec![1.0, -1.0]);
        assert_eq!(path.row(2).to_vec(), vec![3.0, -3.0]);
    }

    #[test]
    fn test_zero_width_window_is_constant() {
        let bm = BrownianMotion::new(1);
        let mut rng = PathRng::from_seed(1);
        let path = bm.sample(1.0, 1.0, 5, &mut rng).unwrap();
        assert!(path.column(0).iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_preconditions() {
        let bm = BrownianMotion::new(1);
        let mut rng = PathRng::from_seed(1);

        assert_eq!(
            bm.sample(0.0, 1.0, 1, &mut rng),
            Err(SamplingError::DegenerateGrid { n_points: 1 })
        );
        assert!(matches!(
            bm.sample(-1.0, 1.0, 10, &mut rng),
            Err(SamplingError::InvalidTime { name: "t_start", .. })
        ));
        assert!(matches!(
            bm.sample(1.0, 0.5, 10, &mut rng),
            Err(SamplingError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_process_defaults_to_unit_window() {
        let bm = BrownianMotion::new(1);
        let mut rng = PathRng::from_seed(3);
        let path = bm.sample_path(&SampleRequest::new(11), &mut rng).unwrap();

        assert_eq!(path.times()[0], 0.0);
        assert_eq!(path.times()[10], 1.0);
        assert_eq!(Process::dim(&bm), 1);
    }

    #[test]
    fn test_seed_reproducibility() {
        let bm = BrownianMotion::new(2);
        let a = bm.sample(0.0, 1.0, 20, &mut PathRng::from_seed(9)).unwrap();
        let b = bm.sample(0.0, 1.0, 20, &mut PathRng::from_seed(9)).unwrap();
        assert_eq!(a, b);
    }
}
