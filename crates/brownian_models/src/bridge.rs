//! One-dimensional Brownian bridge.
//!
//! A bridge is pinned to `A` at `t_start` and `B` at `t_end`. It is built
//! from an unconditioned path `W` on the same grid:
//!
//! ```text
//! X(t) = (t_end - t)/T · (A + W(t) - W(t_start))
//!      + (t - t_start)/T · (B + W(t_end) - W(t))          T = t_end - t_start
//! ```
//!
//! The `W` terms cancel at both ends, so the endpoints are exact for every
//! draw, and the pointwise variance is `(t - t_start)(t_end - t)/T`.

use brownian_core::rng::GaussianSource;
use brownian_core::{Process, SamplePath, SampleRequest, SamplingError, TimeGrid};
use ndarray::Array2;
use tracing::debug;

use crate::motion::BrownianMotion;

/// Brownian bridge from `(t_start, start_value)` to `(t_end, end_value)`.
///
/// # Examples
///
/// ```rust
/// use brownian_core::rng::PathRng;
/// use brownian_models::BrownianBridge;
///
/// let bridge = BrownianBridge::new(0.0, 1.0, 0.0, 2.0).unwrap();
/// let path = bridge.sample(101, &mut PathRng::from_seed(42)).unwrap();
///
/// assert_eq!(path.shape(), (101, 1));
/// assert_eq!(path.first()[0], 0.0);
/// assert_eq!(path.last()[0], 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrownianBridge {
    t_start: f64,
    t_end: f64,
    start_value: f64,
    end_value: f64,
    motion: BrownianMotion,
}

impl Default for BrownianBridge {
    /// The standard bridge on `[0, 1]` pinned to zero at both ends.
    fn default() -> Self {
        Self {
            t_start: 0.0,
            t_end: 1.0,
            start_value: 0.0,
            end_value: 0.0,
            motion: BrownianMotion::new(1),
        }
    }
}

impl BrownianBridge {
    /// Creates a bridge pinned to `start_value` at `t_start` and `end_value` at `t_end`.
    ///
    /// # Errors
    ///
    /// - `InvalidTime` if a time is negative or not finite
    /// - `InvalidWindow` unless `t_start < t_end`
    /// - `NonFiniteValue` if an endpoint value is not finite
    pub fn new(
        t_start: f64,
        t_end: f64,
        start_value: f64,
        end_value: f64,
    ) -> Result<Self, SamplingError> {
        SamplingError::check_time("t_start", t_start)?;
        SamplingError::check_time("t_end", t_end)?;
        if t_end <= t_start {
            return Err(SamplingError::InvalidWindow { t_start, t_end });
        }
        if !start_value.is_finite() {
            return Err(SamplingError::NonFiniteValue {
                name: "start_value",
                value: start_value,
            });
        }
        if !end_value.is_finite() {
            return Err(SamplingError::NonFiniteValue {
                name: "end_value",
                value: end_value,
            });
        }

        Ok(Self {
            t_start,
            t_end,
            start_value,
            end_value,
            motion: BrownianMotion::new(1),
        })
    }

    /// Pinned start time.
    #[inline]
    pub fn t_start(&self) -> f64 {
        self.t_start
    }

    /// Pinned end time.
    #[inline]
    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    /// Value at `t_start`.
    #[inline]
    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    /// Value at `t_end`.
    #[inline]
    pub fn end_value(&self) -> f64 {
        self.end_value
    }

    /// Samples the bridge on `n_points` uniformly spaced times.
    ///
    /// # Errors
    ///
    /// `DegenerateGrid` if `n_points < 2`.
    pub fn sample<G: GaussianSource + ?Sized>(
        &self,
        n_points: usize,
        rng: &mut G,
    ) -> Result<SamplePath, SamplingError> {
        let grid = TimeGrid::new(self.t_start, self.t_end, n_points)?;
        debug!(
            t_start = self.t_start,
            t_end = self.t_end,
            n_points,
            "sampling Brownian bridge"
        );

        let raw = self.motion.sample_on(&grid, rng);
        let w_start = raw[[0, 0]];
        let w_end = raw[[n_points - 1, 0]];
        let span = grid.span();

        let mut values = Array2::<f64>::zeros((n_points, 1));
        for (i, t) in grid.iter().enumerate() {
            let w = raw[[i, 0]];
            values[[i, 0]] = (self.t_end - t) / span * (self.start_value + w - w_start)
                + (t - self.t_start) / span * (self.end_value + w_end - w);
        }

        SamplePath::from_grid(&grid, values)
    }
}

impl Process for BrownianBridge {
    fn dim(&self) -> usize {
        1
    }

    /// Samples over the construction window.
    ///
    /// A request may repeat the window but not change it.
    fn sample_path<G: GaussianSource + ?Sized>(
        &self,
        request: &SampleRequest,
        rng: &mut G,
    ) -> Result<SamplePath, SamplingError> {
        let requested = request.window_or(self.t_start, self.t_end);
        if requested != (self.t_start, self.t_end) {
            return Err(SamplingError::WindowConflict {
                expected: (self.t_start, self.t_end),
                got: requested,
            });
        }
        self.sample(request.n_points(), rng)
    }
}
