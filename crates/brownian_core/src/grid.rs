//! Uniform time grids.
//!
//! A [`TimeGrid`] is the `linspace` of `n_points` times between `t_start`
//! and `t_end` inclusive. The first and last times are exactly the window
//! bounds; interior times are `t_start + i * dt`.
//!
//! Waypoint handling needs to know where an arbitrary time falls on the grid.
//! [`TimeGrid::locate`] answers that with a [`GridLocation`], from which the
//! samplers derive explicit index ranges instead of boolean masks.

use ndarray::Array1;

use crate::error::SamplingError;

/// Relative tolerance, in grid steps, for treating a time as a grid node.
///
/// `0.3 / 0.1` evaluates to `2.9999999999999996`; a time that far from a
/// node is still that node.
pub const GRID_SNAP_TOLERANCE: f64 = 1e-9;

/// Position of a time relative to a [`TimeGrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridLocation {
    /// The time coincides with grid node `i`.
    Node(usize),
    /// The time lies strictly between nodes `left` and `left + 1`.
    Between {
        /// Index of the bracketing node on the left
        left: usize,
    },
}

impl GridLocation {
    /// Index of the first grid node at or after the located time.
    #[inline]
    pub fn first_at_or_after(&self) -> usize {
        match *self {
            GridLocation::Node(i) => i,
            GridLocation::Between { left } => left + 1,
        }
    }

    /// Index of the first grid node strictly after the located time.
    #[inline]
    pub fn first_after(&self) -> usize {
        match *self {
            GridLocation::Node(i) => i + 1,
            GridLocation::Between { left } => left + 1,
        }
    }
}

/// Uniformly spaced sequence of sample times.
///
/// # Examples
///
/// ```rust
/// use brownian_core::TimeGrid;
///
/// let grid = TimeGrid::new(0.0, 2.0, 5).unwrap();
/// assert_eq!(grid.len(), 5);
/// assert_eq!(grid.dt(), 0.5);
/// assert_eq!(grid.time(0), 0.0);
/// assert_eq!(grid.time(4), 2.0);
///
/// // A single point has no step size.
/// assert!(TimeGrid::new(0.0, 1.0, 1).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    t_start: f64,
    t_end: f64,
    n_points: usize,
    dt: f64,
}

impl TimeGrid {
    /// Creates a grid of `n_points` times covering `[t_start, t_end]`.
    ///
    /// `t_start == t_end` is allowed and yields a zero step.
    ///
    /// # Errors
    ///
    /// - `DegenerateGrid` if `n_points < 2`
    /// - `InvalidTime` if either bound is not finite
    /// - `InvalidWindow` if `t_end < t_start`
    pub fn new(t_start: f64, t_end: f64, n_points: usize) -> Result<Self, SamplingError> {
        if n_points < 2 {
            return Err(SamplingError::DegenerateGrid { n_points });
        }
        if !t_start.is_finite() {
            return Err(SamplingError::InvalidTime {
                name: "t_start",
                value: t_start,
            });
        }
        if !t_end.is_finite() {
            return Err(SamplingError::InvalidTime {
                name: "t_end",
                value: t_end,
            });
        }
        if t_end < t_start {
            return Err(SamplingError::InvalidWindow { t_start, t_end });
        }

        Ok(Self {
            t_start,
            t_end,
            n_points,
            dt: (t_end - t_start) / (n_points - 1) as f64,
        })
    }

    /// First grid time.
    #[inline]
    pub fn t_start(&self) -> f64 {
        self.t_start
    }

    /// Last grid time.
    #[inline]
    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    /// Number of grid times.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_points
    }

    /// Always false; a valid grid has at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_points == 0
    }

    /// Spacing between consecutive grid times.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Length of the window, `t_end - t_start`.
    #[inline]
    pub fn span(&self) -> f64 {
        self.t_end - self.t_start
    }

    /// Time of grid node `i`.
    ///
    /// The last node returns `t_end` exactly rather than the accumulated
    /// `t_start + (n-1) * dt`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `i >= len()`.
    #[inline]
    pub fn time(&self, i: usize) -> f64 {
        debug_assert!(i < self.n_points);
        if i + 1 == self.n_points {
            self.t_end
        } else {
            self.t_start + self.dt * i as f64
        }
    }

    /// All grid times as an array.
    pub fn times(&self) -> Array1<f64> {
        Array1::from_shape_fn(self.n_points, |i| self.time(i))
    }

    /// Iterates over the grid times in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.n_points).map(move |i| self.time(i))
    }

    /// Locates `t` on the grid.
    ///
    /// Times within [`GRID_SNAP_TOLERANCE`] steps of a node are reported as
    /// that node. The tolerance also covers the rounding error of `t`
    /// itself, which dominates for grids with a small step far from zero.
    /// Returns `None` for times outside the window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use brownian_core::{GridLocation, TimeGrid};
    ///
    /// let grid = TimeGrid::new(0.0, 1.0, 11).unwrap();
    /// assert_eq!(grid.locate(0.3), Some(GridLocation::Node(3)));
    /// assert_eq!(grid.locate(0.35), Some(GridLocation::Between { left: 3 }));
    /// assert_eq!(grid.locate(1.5), None);
    /// ```
    pub fn locate(&self, t: f64) -> Option<GridLocation> {
        if !t.is_finite() {
            return None;
        }
        if self.dt == 0.0 {
            return (t == self.t_start).then_some(GridLocation::Node(0));
        }

        let last = (self.n_points - 1) as f64;
        let position = (t - self.t_start) / self.dt;
        let nearest = position.round();

        let magnitude = t.abs().max(self.t_start.abs());
        let tolerance =
            GRID_SNAP_TOLERANCE * nearest.max(1.0) + 4.0 * f64::EPSILON * magnitude / self.dt;

        if (0.0..=last).contains(&nearest) && (position - nearest).abs() <= tolerance {
            return Some(GridLocation::Node(nearest as usize));
        }
        if position < 0.0 || position > last {
            return None;
        }

        let left = (position.floor() as usize).min(self.n_points - 2);
        Some(GridLocation::Between { left })
    }

    /// Index of the first node strictly after `t`.
    ///
    /// Returns 0 before the window and `len()` at or beyond its end, so the
    /// result can bound a half-open index range directly.
    pub fn first_after(&self, t: f64) -> usize {
        match self.locate(t) {
            Some(location) => location.first_after(),
            None if t < self.t_start => 0,
            None => self.n_points,
        }
    }
}
