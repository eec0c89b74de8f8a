//! # Brownian Core (Layer 1: Foundation)
//!
//! Foundation types shared by every sampler in the workspace:
//!
//! - [`TimeGrid`]: uniform `linspace` grids and waypoint location
//! - [`SamplePath`]: `(n_points, dim)` trajectories with their grid times
//! - [`rng`]: the [`GaussianSource`](rng::GaussianSource) trait and the seeded
//!   [`PathRng`](rng::PathRng)
//! - [`Process`]: the sampling contract, driven by a [`SampleRequest`]
//! - [`SamplingError`]: precondition failures
//!
//! The samplers themselves live in `brownian_models`.
//!
//! ## Usage Example
//!
//! ```rust
//! use brownian_core::rng::{GaussianSource, PathRng};
//! use brownian_core::TimeGrid;
//!
//! let grid = TimeGrid::new(0.0, 1.0, 101).unwrap();
//! let mut rng = PathRng::from_seed(42);
//!
//! let mut increments = vec![0.0; grid.len() - 1];
//! rng.fill_normal(&mut increments);
//! assert_eq!(increments.len(), 100);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod grid;
pub mod path;
pub mod process;
pub mod rng;

pub use error::SamplingError;
pub use grid::{GridLocation, TimeGrid, GRID_SNAP_TOLERANCE};
pub use path::SamplePath;
pub use process::{Process, SampleRequest, DEFAULT_POINTS};
