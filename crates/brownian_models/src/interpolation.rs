//! Multi-waypoint, multidimensional Brownian interpolation.
//!
//! Conditions a Brownian path to pass through `X[k]` at time `T[k]` for every
//! waypoint `k`. One raw path `W` is drawn on the sampling grid and then
//! corrected segment by segment:
//!
//! 1. **Anchor** each waypoint: read `W(T[k])` from the grid if `T[k]` is a
//!    node, otherwise bridge-interpolate between the two bracketing nodes
//!    and add independent noise with the bridge variance
//!    `(t_right - T[k])(T[k] - t_left)/dt`.
//! 2. **Segments**: on every grid time `t ∈ (T[i], T[i+1]]` add
//!
//!    ```text
//!    (T[i+1] - t)/Δ · (X[i] - W(T[i])) + (t - T[i])/Δ · (X[i+1] - W(T[i+1]))
//!    ```
//!
//!    with `Δ = T[i+1] - T[i]`. A grid node at `T[0]` belongs to the first
//!    segment, a node at `T[i+1]` to segment `i`.
//! 3. **Tail**: grid times after `T[-1]` are shifted by `X[-1] - W(T[-1])`,
//!    keeping the raw fluctuations of the unconditioned draw.
//! 4. **Head**: grid times before `T[0]` are shifted by `X[0] - W(T[0])`.
//!
//! All segments share the single draw `W`; anchors are computed once per
//! waypoint, so adjacent segments and the tail agree on `W(T[k])`.

use std::ops::Range;

use brownian_core::rng::GaussianSource;
use brownian_core::{GridLocation, Process, SamplePath, SampleRequest, SamplingError, TimeGrid};
use ndarray::{Array1, Array2, ArrayView1};
use tracing::{debug, trace};

use crate::motion::BrownianMotion;

/// Brownian motion conditioned on passing through a set of waypoints.
///
/// # Examples
///
/// ```rust
/// use brownian_core::rng::PathRng;
/// use brownian_models::BrownianInterpolation;
///
/// let interp = BrownianInterpolation::from_scalar(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
/// let path = interp.sample(None, None, 3, &mut PathRng::from_seed(42)).unwrap();
///
/// assert_eq!(path.column(0).to_vec(), vec![0.0, 1.0, 4.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BrownianInterpolation {
    times: Vec<f64>,
    values: Array2<f64>,
    motion: BrownianMotion,
}

impl BrownianInterpolation {
    /// Creates an interpolation through `(times[k], values.row(k))`.
    ///
    /// # Arguments
    ///
    /// * `dim` - State dimension
    /// * `times` - Waypoint times, finite, non-negative and strictly increasing
    /// * `values` - Waypoint targets, shape `(times.len(), dim)`
    ///
    /// # Errors
    ///
    /// - `WaypointMismatch` if `times.len() != values.nrows()`
    /// - `TooFewWaypoints` for fewer than two waypoints
    /// - `WaypointDimension` if `values.ncols() != dim`
    /// - `InvalidTime` / `UnsortedWaypoints` for bad waypoint times
    /// - `NonFiniteValue` for NaN or infinite targets
    pub fn new(
        dim: usize,
        times: impl Into<Vec<f64>>,
        values: Array2<f64>,
    ) -> Result<Self, SamplingError> {
        let times = times.into();

        if times.len() != values.nrows() {
            return Err(SamplingError::WaypointMismatch {
                times: times.len(),
                values: values.nrows(),
            });
        }
        if times.len() < 2 {
            return Err(SamplingError::TooFewWaypoints { count: times.len() });
        }
        if values.ncols() != dim {
            return Err(SamplingError::WaypointDimension {
                expected: dim,
                got: values.ncols(),
            });
        }

        SamplingError::check_time("waypoint time", times[0])?;
        for (index, pair) in times.windows(2).enumerate() {
            if !(pair[1].is_finite() && pair[1] > pair[0]) {
                return Err(SamplingError::UnsortedWaypoints { index: index + 1 });
            }
        }
        if let Some(&value) = values.iter().find(|v| !v.is_finite()) {
            return Err(SamplingError::NonFiniteValue {
                name: "waypoint value",
                value,
            });
        }

        Ok(Self {
            times,
            values,
            motion: BrownianMotion::new(dim),
        })
    }

    /// Creates a one-dimensional interpolation from scalar targets.
    pub fn from_scalar(times: &[f64], values: &[f64]) -> Result<Self, SamplingError> {
        let column = Array2::from_shape_fn((values.len(), 1), |(i, _)| values[i]);
        Self::new(1, times, column)
    }

    /// State dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.motion.dim()
    }

    /// Waypoint times.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Waypoint targets, one row per waypoint.
    #[inline]
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Number of waypoints.
    #[inline]
    pub fn n_waypoints(&self) -> usize {
        self.times.len()
    }

    /// First and last waypoint times, the default sampling window.
    #[inline]
    pub fn span(&self) -> (f64, f64) {
        (self.times[0], self.times[self.times.len() - 1])
    }

    /// Samples a path through every waypoint.
    ///
    /// Omitted bounds default to the first and last waypoint times.
    ///
    /// # Errors
    ///
    /// - `DegenerateGrid` if `n_points < 2`
    /// - `InvalidTime` / `InvalidWindow` for a bad window
    /// - `WaypointOutsideWindow` if any waypoint lies outside the window
    pub fn sample<G: GaussianSource + ?Sized>(
        &self,
        t_start: Option<f64>,
        t_end: Option<f64>,
        n_points: usize,
        rng: &mut G,
    ) -> Result<SamplePath, SamplingError> {
        let (first, last) = self.span();
        let t_start = t_start.unwrap_or(first);
        let t_end = t_end.unwrap_or(last);

        let grid = BrownianMotion::grid(t_start, t_end, n_points)?;
        let locations = self.locate_waypoints(&grid)?;
        debug!(
            dim = self.dim(),
            waypoints = self.times.len(),
            t_start,
            t_end,
            n_points,
            "sampling Brownian interpolation"
        );

        let raw = self.motion.sample_on(&grid, rng);
        let anchors = self.anchors(&grid, &raw, &locations, rng);
        let errors = &self.values - &anchors;

        let mut values = raw;
        let n_waypoints = self.times.len();

        // Head: constant shift up to the first waypoint.
        let head_end = locations[0].first_at_or_after();
        shift_rows(&mut values, 0..head_end, errors.row(0));

        for i in 0..n_waypoints - 1 {
            let start = if i == 0 {
                head_end
            } else {
                locations[i].first_after()
            };
            let end = locations[i + 1].first_after();
            let (t_left, t_right) = (self.times[i], self.times[i + 1]);
            let width = t_right - t_left;

            for idx in start..end {
                let t = grid.time(idx);
                let w_left = (t_right - t) / width;
                let w_right = (t - t_left) / width;
                let mut row = values.row_mut(idx);
                row.scaled_add(w_left, &errors.row(i));
                row.scaled_add(w_right, &errors.row(i + 1));
            }
        }

        // Tail: constant shift beyond the last waypoint.
        let tail_start = locations[n_waypoints - 1].first_after();
        shift_rows(
            &mut values,
            tail_start..grid.len(),
            errors.row(n_waypoints - 1),
        );

        SamplePath::from_grid(&grid, values)
    }

    /// Locates every waypoint on the grid.
    fn locate_waypoints(&self, grid: &TimeGrid) -> Result<Vec<GridLocation>, SamplingError> {
        self.times
            .iter()
            .map(|&time| {
                grid.locate(time)
                    .ok_or(SamplingError::WaypointOutsideWindow {
                        time,
                        t_start: grid.t_start(),
                        t_end: grid.t_end(),
                    })
            })
            .collect()
    }

    /// Value of the raw path at each waypoint time, one row per waypoint.
    fn anchors<G: GaussianSource + ?Sized>(
        &self,
        grid: &TimeGrid,
        raw: &Array2<f64>,
        locations: &[GridLocation],
        rng: &mut G,
    ) -> Array2<f64> {
        let mut anchors = Array2::<f64>::zeros(self.values.dim());
        for (k, (&time, location)) in self.times.iter().zip(locations).enumerate() {
            let anchor = anchor_value(grid, raw, *location, time, rng);
            anchors.row_mut(k).assign(&anchor);
        }
        anchors
    }
}

/// Raw path value at `time`.
///
/// On a node the grid value is used as is. Between nodes the value is a
/// Brownian-bridge draw pinned at the two bracketing grid samples.
fn anchor_value<G: GaussianSource + ?Sized>(
    grid: &TimeGrid,
    raw: &Array2<f64>,
    location: GridLocation,
    time: f64,
    rng: &mut G,
) -> Array1<f64> {
    match location {
        GridLocation::Node(j) => {
            trace!(time, node = j, "waypoint on grid node");
            raw.row(j).to_owned()
        }
        GridLocation::Between { left } => {
            let t_left = grid.time(left);
            let t_right = grid.time(left + 1);
            let dt = grid.dt();
            let fraction = (time - t_left) / dt;
            let std_dev = ((t_right - time) * (time - t_left) / dt).max(0.0).sqrt();
            trace!(time, left, std_dev, "waypoint between grid nodes");

            Array1::from_shape_fn(raw.ncols(), |j| {
                let w_left = raw[[left, j]];
                let w_right = raw[[left + 1, j]];
                w_left + (w_right - w_left) * fraction + std_dev * rng.gen_normal()
            })
        }
    }
}

/// Adds `offset` to every row in `rows`.
fn shift_rows(values: &mut Array2<f64>, rows: Range<usize>, offset: ArrayView1<'_, f64>) {
    for idx in rows {
        let mut row = values.row_mut(idx);
        row += &offset;
    }
}

impl Process for BrownianInterpolation {
    fn dim(&self) -> usize {
        self.motion.dim()
    }

    fn sample_path<G: GaussianSource + ?Sized>(
        &self,
        request: &SampleRequest,
        rng: &mut G,
    ) -> Result<SamplePath, SamplingError> {
        self.sample(request.t_start, request.t_end, request.n_points(), rng)
    }
}
