//! # Gaussian Random Number Generation
//!
//! This module provides the Gaussian draws consumed by every sampler. The
//! samplers only depend on the [`GaussianSource`] trait, so tests can swap in
//! scripted sources while production code uses the seeded [`PathRng`].
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: [`PathRng`] is always seeded; the seed is kept for logging
//! - **Static dispatch**: samplers are generic over `G: GaussianSource + ?Sized`
//! - **Zero-allocation batches**: [`GaussianSource::fill_normal`] writes into caller buffers
//!
//! ## Usage Example
//!
//! ```rust
//! use brownian_core::rng::{GaussianSource, PathRng};
//!
//! let mut rng = PathRng::from_seed(12345);
//!
//! // Standard normal variate (mean=0, std=1)
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PathRng;

/// Source of independent standard normal draws.
///
/// This is the only randomness the samplers consume. Implementations must
/// return independent `N(0, 1)` variates; seeding is recommended but not
/// required by the trait.
pub trait GaussianSource {
    /// Draws a single standard normal variate.
    fn gen_normal(&mut self) -> f64;

    /// Fills `buffer` with independent standard normal variates.
    ///
    /// Empty buffers are a no-op.
    fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.gen_normal();
        }
    }
}

impl<G: GaussianSource + ?Sized> GaussianSource for &mut G {
    #[inline]
    fn gen_normal(&mut self) -> f64 {
        (**self).gen_normal()
    }

    #[inline]
    fn fill_normal(&mut self, buffer: &mut [f64]) {
        (**self).fill_normal(buffer)
    }
}
