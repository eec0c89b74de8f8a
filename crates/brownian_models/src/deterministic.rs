//! Deterministic processes.
//!
//! Wraps a plain function of the time grid so that non-random trajectories
//! can be sampled through the same [`Process`] contract as the Brownian
//! samplers. No randomness is consumed.

use brownian_core::rng::GaussianSource;
use brownian_core::{Process, SamplePath, SampleRequest, SamplingError, TimeGrid};
use ndarray::Array2;

/// Default window when a request leaves it open.
const DEFAULT_WINDOW: (f64, f64) = (0.0, 1.0);

/// A process whose path is `F(grid)`.
///
/// `dim` defaults to 0, meaning "unspecified": the function may return any
/// number of columns. With an explicit dimension, the column count is checked.
///
/// # Examples
///
/// ```rust
/// use brownian_core::TimeGrid;
/// use brownian_models::Deterministic;
/// use ndarray::Array2;
///
/// let square = Deterministic::new(|grid: &TimeGrid| {
///     Array2::from_shape_fn((grid.len(), 1), |(i, _)| grid.time(i).powi(2))
/// });
///
/// let grid = TimeGrid::new(0.0, 2.0, 3).unwrap();
/// assert_eq!(square.call(&grid)[[2, 0]], 4.0);
/// ```
#[derive(Clone)]
pub struct Deterministic<F> {
    function: F,
    dim: usize,
}

impl<F> Deterministic<F>
where
    F: Fn(&TimeGrid) -> Array2<f64>,
{
    /// Wraps `function` with an unspecified dimension.
    #[inline]
    pub fn new(function: F) -> Self {
        Self { function, dim: 0 }
    }

    /// Declares the state dimension.
    #[inline]
    pub fn with_dim(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }

    /// Declared state dimension (0 when unspecified).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Evaluates the wrapped function on `grid`.
    #[inline]
    pub fn call(&self, grid: &TimeGrid) -> Array2<f64> {
        (self.function)(grid)
    }

    /// Evaluates the wrapped function on `grid` as a checked sample path.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the output does not have one row per grid time, or
    /// the wrong number of columns for a declared dimension.
    pub fn sample(&self, grid: &TimeGrid) -> Result<SamplePath, SamplingError> {
        let values = self.call(grid);
        if self.dim != 0 && values.ncols() != self.dim {
            return Err(SamplingError::ShapeMismatch {
                expected: (grid.len(), self.dim),
                got: values.dim(),
            });
        }
        SamplePath::from_grid(grid, values)
    }
}

impl<F> std::fmt::Debug for Deterministic<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deterministic")
            .field("dim", &self.dim)
            .finish_non_exhaustive()
    }
}

impl<F> Process for Deterministic<F>
where
    F: Fn(&TimeGrid) -> Array2<f64>,
{
    fn dim(&self) -> usize {
        self.dim
    }

    fn sample_path<G: GaussianSource + ?Sized>(
        &self,
        request: &SampleRequest,
        _rng: &mut G,
    ) -> Result<SamplePath, SamplingError> {
        let (t_start, t_end) = request.window_or(DEFAULT_WINDOW.0, DEFAULT_WINDOW.1);
        let grid = TimeGrid::new(t_start, t_end, request.n_points())?;
        self.sample(&grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brownian_core::rng::PathRng;

    fn linear(grid: &TimeGrid) -> Array2<f64> {
        Array2::from_shape_fn((grid.len(), 2), |(i, j)| (j + 1) as f64 * grid.time(i))
    }

    #[test]
    fn test_default_dim_is_zero() {
        assert_eq!(Deterministic::new(linear).dim(), 0);
        assert_eq!(Deterministic::new(linear).with_dim(2).dim(), 2);
    }

    #[test]
    fn test_sample_matches_call() {
        let process = Deterministic::new(linear).with_dim(2);
        let grid = TimeGrid::new(0.0, 1.0, 5).unwrap();
        let path = process.sample(&grid).unwrap();
        assert_eq!(path.values(), &process.call(&grid));
        assert_eq!(path.row(4).to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_process_consumes_no_randomness() {
        let process = Deterministic::new(linear);
        let mut rng = PathRng::from_seed(4);
        let mut untouched = PathRng::from_seed(4);

        let request = SampleRequest::new(3).window(1.0, 2.0);
        let a = process.sample_path(&request, &mut rng).unwrap();
        let b = process.sample_path(&request, &mut rng).unwrap();

        assert_eq!(a, b);
        assert_eq!(rng.gen_uniform(), untouched.gen_uniform());
        assert_eq!(a.first().to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_shape_checks() {
        let grid = TimeGrid::new(0.0, 1.0, 4).unwrap();

        let wrong_cols = Deterministic::new(linear).with_dim(3);
        assert_eq!(
            wrong_cols.sample(&grid),
            Err(SamplingError::ShapeMismatch {
                expected: (4, 3),
                got: (4, 2),
            })
        );

        let wrong_rows = Deterministic::new(|_: &TimeGrid| Array2::zeros((2, 1)));
        assert!(matches!(
            wrong_rows.sample(&grid),
            Err(SamplingError::ShapeMismatch { .. })
        ));
    }
}
