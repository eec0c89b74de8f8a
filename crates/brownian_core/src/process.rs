//! The `Process` contract shared by every sampler.
//!
//! Each process has a state dimension and can draw a [`SamplePath`] for a
//! [`SampleRequest`]. Concrete samplers also expose an inherent `sample`
//! with their natural arguments; `sample_path` is the uniform entry point.
//!
//! Processes are immutable: sampling takes `&self` and all randomness comes
//! from the caller's [`GaussianSource`], so one process can be sampled from
//! several threads at once, each with its own source.
//!
//! ## Example
//!
//! ```
//! use brownian_core::rng::{GaussianSource, PathRng};
//! use brownian_core::{Process, SamplePath, SampleRequest, SamplingError, TimeGrid};
//! use ndarray::Array2;
//!
//! /// A constant process at the origin.
//! struct Origin;
//!
//! impl Process for Origin {
//!     fn dim(&self) -> usize {
//!         1
//!     }
//!
//!     fn sample_path<G: GaussianSource + ?Sized>(
//!         &self,
//!         request: &SampleRequest,
//!         _rng: &mut G,
//!     ) -> Result<SamplePath, SamplingError> {
//!         let (t_start, t_end) = request.window_or(0.0, 1.0);
//!         let grid = TimeGrid::new(t_start, t_end, request.n_points())?;
//!         SamplePath::from_grid(&grid, Array2::zeros((grid.len(), 1)))
//!     }
//! }
//!
//! let path = Origin.sample_path(&SampleRequest::new(5), &mut PathRng::from_seed(1)).unwrap();
//! assert_eq!(path.shape(), (5, 1));
//! ```

use crate::error::SamplingError;
use crate::path::SamplePath;
use crate::rng::GaussianSource;

/// Default grid resolution when a request does not specify one.
pub const DEFAULT_POINTS: usize = 1000;

/// Arguments of a sampling call.
///
/// Omitted window bounds are resolved by each process with its own defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRequest {
    /// Start of the sampling window, if overridden.
    pub t_start: Option<f64>,
    /// End of the sampling window, if overridden.
    pub t_end: Option<f64>,
    /// Number of grid points, at least 2.
    pub n_points: usize,
}

impl Default for SampleRequest {
    fn default() -> Self {
        Self {
            t_start: None,
            t_end: None,
            n_points: DEFAULT_POINTS,
        }
    }
}

impl SampleRequest {
    /// Request `n_points` samples over the process's default window.
    #[inline]
    pub fn new(n_points: usize) -> Self {
        Self {
            n_points,
            ..Self::default()
        }
    }

    /// Sets both window bounds.
    #[inline]
    pub fn window(mut self, t_start: f64, t_end: f64) -> Self {
        self.t_start = Some(t_start);
        self.t_end = Some(t_end);
        self
    }

    /// Sets the window start.
    #[inline]
    pub fn t_start(mut self, t_start: f64) -> Self {
        self.t_start = Some(t_start);
        self
    }

    /// Sets the window end.
    #[inline]
    pub fn t_end(mut self, t_end: f64) -> Self {
        self.t_end = Some(t_end);
        self
    }

    /// Returns the number of grid points.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Resolves the window, filling omitted bounds with the given defaults.
    #[inline]
    pub fn window_or(&self, default_start: f64, default_end: f64) -> (f64, f64) {
        (
            self.t_start.unwrap_or(default_start),
            self.t_end.unwrap_or(default_end),
        )
    }
}

/// A process that can produce approximate sample paths.
///
/// `sample_path` has no default body: every variant must provide its own,
/// so an "abstract" process cannot be sampled.
pub trait Process {
    /// Dimension of the state space (number of path columns).
    fn dim(&self) -> usize;

    /// Draws one sample path.
    ///
    /// # Errors
    ///
    /// Returns a [`SamplingError`] naming the violated precondition; no
    /// path is produced in that case.
    fn sample_path<G: GaussianSource + ?Sized>(
        &self,
        request: &SampleRequest,
        rng: &mut G,
    ) -> Result<SamplePath, SamplingError>;
}
