//! # Brownian Models (Layer 2: Samplers)
//!
//! Concrete samplers built on `brownian_core`:
//!
//! - [`BrownianMotion`]: multidimensional standard Brownian motion
//! - [`BrownianBridge`]: one-dimensional bridge pinned at both ends
//! - [`BrownianInterpolation`]: Brownian motion through a list of waypoints
//! - [`Deterministic`]: a plain function of the time grid
//!
//! Runtime selection goes through [`ProcessEnum`], and [`sample_ensemble`]
//! draws many independent paths in parallel.
//!
//! ## Design Principles
//!
//! - **Static dispatch**: samplers are generic over the Gaussian source
//! - **Single draw per path**: conditioning reuses one unconditioned path
//! - **Validation up front**: every precondition fails before any draw
//!
//! ## Usage Example
//!
//! ```rust
//! use brownian_core::rng::PathRng;
//! use brownian_models::BrownianInterpolation;
//!
//! let interp =
//!     BrownianInterpolation::from_scalar(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
//! let path = interp.sample(None, None, 201, &mut PathRng::from_seed(7)).unwrap();
//!
//! assert_eq!(path.shape(), (201, 1));
//! assert!((path.row(100)[0] - 1.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]

pub mod bridge;
pub mod deterministic;
pub mod ensemble;
pub mod interpolation;
pub mod motion;
pub mod process_enum;

pub use bridge::BrownianBridge;
pub use deterministic::Deterministic;
pub use ensemble::{sample_ensemble, terminal_values};
pub use interpolation::BrownianInterpolation;
pub use motion::BrownianMotion;
pub use process_enum::ProcessEnum;
