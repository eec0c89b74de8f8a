//! Sample path storage.

use ndarray::{Array1, Array2, ArrayView1};

use crate::error::SamplingError;
use crate::grid::TimeGrid;

/// A discretised trajectory: one row of state per grid time.
///
/// `values` has shape `(n_points, dim)`; `times` holds the `n_points` grid
/// times the rows were sampled at.
///
/// # Examples
///
/// ```rust
/// use brownian_core::{SamplePath, TimeGrid};
/// use ndarray::array;
///
/// let grid = TimeGrid::new(0.0, 1.0, 3).unwrap();
/// let path = SamplePath::from_grid(&grid, array![[0.0], [0.5], [1.0]]).unwrap();
///
/// assert_eq!(path.shape(), (3, 1));
/// assert_eq!(path.last()[0], 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SamplePath {
    times: Array1<f64>,
    values: Array2<f64>,
}

impl SamplePath {
    /// Creates a path from explicit times and values.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the number of value rows differs from the number
    /// of times.
    pub fn new(times: Array1<f64>, values: Array2<f64>) -> Result<Self, SamplingError> {
        if values.nrows() != times.len() {
            return Err(SamplingError::ShapeMismatch {
                expected: (times.len(), values.ncols()),
                got: values.dim(),
            });
        }
        Ok(Self { times, values })
    }

    /// Creates a path whose rows correspond to the nodes of `grid`.
    pub fn from_grid(grid: &TimeGrid, values: Array2<f64>) -> Result<Self, SamplingError> {
        Self::new(grid.times(), values)
    }

    /// The state array, shape `(n_points, dim)`.
    #[inline]
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// The grid times.
    #[inline]
    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    /// Number of rows.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns (state dimension).
    #[inline]
    pub fn dim(&self) -> usize {
        self.values.ncols()
    }

    /// `(n_points, dim)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// State at grid index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_points()`.
    #[inline]
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.values.row(i)
    }

    /// Trajectory of state component `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= dim()`.
    #[inline]
    pub fn column(&self, j: usize) -> ArrayView1<'_, f64> {
        self.values.column(j)
    }

    /// Initial state.
    #[inline]
    pub fn first(&self) -> ArrayView1<'_, f64> {
        self.values.row(0)
    }

    /// Terminal state.
    #[inline]
    pub fn last(&self) -> ArrayView1<'_, f64> {
        self.values.row(self.values.nrows() - 1)
    }

    /// Iterates over `(time, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, ArrayView1<'_, f64>)> + '_ {
        self.times.iter().copied().zip(self.values.rows())
    }

    /// Consumes the path, returning the state array.
    #[inline]
    pub fn into_values(self) -> Array2<f64> {
        self.values
    }

    /// Consumes the path, returning `(times, values)`.
    #[inline]
    pub fn into_parts(self) -> (Array1<f64>, Array2<f64>) {
        (self.times, self.values)
    }
}
