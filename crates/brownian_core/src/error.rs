//! Error types for path sampling.
//!
//! This module provides:
//! - `SamplingError`: precondition failures raised before any path is produced
//!
//! Every variant is fatal for the call that raised it. A sampler either
//! returns a fully populated path or one of these errors; there is no
//! partial output and no NaN filling.

use thiserror::Error;

/// Sampling precondition errors.
///
/// Provides structured error handling for grid construction, waypoint
/// validation and process evaluation, with a message naming the failed
/// precondition.
///
/// # Variants
/// - `DegenerateGrid`: fewer than two grid points
/// - `InvalidTime`: non-finite or negative time
/// - `InvalidWindow`: window end precedes its start
/// - `NonFiniteValue`: a state value is NaN or infinite
/// - `WindowConflict`: request window differs from a fixed window
/// - `WaypointMismatch`: waypoint times and values differ in length
/// - `TooFewWaypoints`: fewer than two waypoints
/// - `UnsortedWaypoints`: waypoint times not strictly increasing
/// - `WaypointDimension`: waypoint values have the wrong width
/// - `WaypointOutsideWindow`: waypoint time outside the sampling window
/// - `ShapeMismatch`: deterministic output does not match the grid
/// - `InvalidPathCount`: ensemble requested with zero paths
///
/// # Examples
/// ```
/// use brownian_core::SamplingError;
///
/// let err = SamplingError::DegenerateGrid { n_points: 1 };
/// assert!(err.to_string().contains("at least 2"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SamplingError {
    /// The grid has fewer than two points, so no step size exists.
    #[error("Degenerate grid: {n_points} sample points requested, at least 2 required")]
    DegenerateGrid {
        /// Requested number of points
        n_points: usize,
    },

    /// A time argument is non-finite or negative.
    #[error("Invalid time '{name}' = {value}: must be finite and non-negative")]
    InvalidTime {
        /// Argument name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Window end precedes (or, for bridges, equals) the start.
    #[error("Invalid window [{t_start}, {t_end}]: end precedes start or window is empty")]
    InvalidWindow {
        /// Window start
        t_start: f64,
        /// Window end
        t_end: f64,
    },

    /// A state value (bridge endpoint, waypoint target) is not finite.
    #[error("Invalid value '{name}' = {value}: must be finite")]
    NonFiniteValue {
        /// Value name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// A request window disagrees with the window fixed at construction.
    #[error("Window conflict: process is fixed to {expected:?}, request asked for {got:?}")]
    WindowConflict {
        /// Window fixed at construction
        expected: (f64, f64),
        /// Window in the request
        got: (f64, f64),
    },

    /// Waypoint times and values have different lengths.
    #[error("Waypoint mismatch: {times} times but {values} values")]
    WaypointMismatch {
        /// Number of waypoint times
        times: usize,
        /// Number of waypoint value rows
        values: usize,
    },

    /// Interpolation needs at least one segment.
    #[error("Too few waypoints: got {count}, need at least 2")]
    TooFewWaypoints {
        /// Number of waypoints supplied
        count: usize,
    },

    /// Waypoint times are not strictly increasing (or not finite).
    #[error("Waypoint times must be finite and strictly increasing: violated at index {index}")]
    UnsortedWaypoints {
        /// First index where the ordering fails
        index: usize,
    },

    /// Waypoint value rows do not match the process dimension.
    #[error("Waypoint dimension mismatch: expected {expected} columns, got {got}")]
    WaypointDimension {
        /// Process dimension
        expected: usize,
        /// Columns supplied
        got: usize,
    },

    /// A waypoint lies outside the requested sampling window.
    #[error("Waypoint at t = {time} lies outside the sampling window [{t_start}, {t_end}]")]
    WaypointOutsideWindow {
        /// Waypoint time
        time: f64,
        /// Window start
        t_start: f64,
        /// Window end
        t_end: f64,
    },

    /// A deterministic process returned an array of the wrong shape.
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected `(rows, cols)`
        expected: (usize, usize),
        /// Actual `(rows, cols)`
        got: (usize, usize),
    },

    /// Ensemble sampling with no paths.
    #[error("Invalid path count {0}: must be at least 1")]
    InvalidPathCount(usize),
}

impl SamplingError {
    /// Checks that `value` is a finite, non-negative time.
    ///
    /// # Examples
    /// ```
    /// use brownian_core::SamplingError;
    ///
    /// assert_eq!(SamplingError::check_time("t_start", 0.5), Ok(0.5));
    /// assert!(SamplingError::check_time("t_start", -0.5).is_err());
    /// ```
    pub fn check_time(name: &'static str, value: f64) -> Result<f64, SamplingError> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(SamplingError::InvalidTime { name, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_grid_display() {
        let err = SamplingError::DegenerateGrid { n_points: 1 };
        assert_eq!(
            err.to_string(),
            "Degenerate grid: 1 sample points requested, at least 2 required"
        );
    }

    #[test]
    fn test_waypoint_mismatch_display() {
        let err = SamplingError::WaypointMismatch {
            times: 3,
            values: 2,
        };
        assert!(err.to_string().contains("3 times but 2 values"));
    }

    #[test]
    fn test_outside_window_display() {
        let err = SamplingError::WaypointOutsideWindow {
            time: 3.0,
            t_start: 0.0,
            t_end: 2.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("t = 3"));
        assert!(msg.contains("[0, 2]"));
    }

    #[test]
    fn test_check_time() {
        assert_eq!(SamplingError::check_time("t_start", 0.0), Ok(0.0));
        assert_eq!(SamplingError::check_time("t_start", 2.5), Ok(2.5));
        assert!(matches!(
            SamplingError::check_time("t_start", -1.0),
            Err(SamplingError::InvalidTime { name: "t_start", .. })
        ));
        assert!(SamplingError::check_time("t_end", f64::NAN).is_err());
        assert!(SamplingError::check_time("t_end", f64::INFINITY).is_err());
    }
}
