//! Static dispatch enum for the Brownian samplers.
//!
//! `ProcessEnum` lets callers choose a sampler at runtime (from a CLI flag or
//! a config file) without boxing. Dispatch is a `match`; there is no vtable.
//!
//! Deterministic processes are generic over their closure type and are not
//! part of the enum.
//!
//! ## Example
//!
//! ```
//! use brownian_core::rng::PathRng;
//! use brownian_core::{Process, SampleRequest};
//! use brownian_models::{BrownianBridge, ProcessEnum};
//!
//! let process = ProcessEnum::from(BrownianBridge::default());
//! assert_eq!(process.name(), "bridge");
//! assert_eq!(process.dim(), 1);
//!
//! let path = process
//!     .sample_path(&SampleRequest::new(10), &mut PathRng::from_seed(1))
//!     .unwrap();
//! assert_eq!(path.shape(), (10, 1));
//! ```

use brownian_core::rng::GaussianSource;
use brownian_core::{Process, SamplePath, SampleRequest, SamplingError};

use crate::bridge::BrownianBridge;
use crate::interpolation::BrownianInterpolation;
use crate::motion::BrownianMotion;

/// Runtime-selectable Brownian sampler.
#[derive(Clone, Debug, PartialEq)]
pub enum ProcessEnum {
    /// Standard Brownian motion.
    Motion(BrownianMotion),
    /// One-dimensional Brownian bridge.
    Bridge(BrownianBridge),
    /// Brownian interpolation through waypoints.
    Interpolation(BrownianInterpolation),
}

impl ProcessEnum {
    /// Short lowercase name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ProcessEnum::Motion(_) => "motion",
            ProcessEnum::Bridge(_) => "bridge",
            ProcessEnum::Interpolation(_) => "interpolation",
        }
    }
}

impl Process for ProcessEnum {
    fn dim(&self) -> usize {
        match self {
            ProcessEnum::Motion(p) => p.dim(),
            ProcessEnum::Bridge(p) => Process::dim(p),
            ProcessEnum::Interpolation(p) => p.dim(),
        }
    }

    fn sample_path<G: GaussianSource + ?Sized>(
        &self,
        request: &SampleRequest,
        rng: &mut G,
    ) -> Result<SamplePath, SamplingError> {
        match self {
            ProcessEnum::Motion(p) => p.sample_path(request, rng),
            ProcessEnum::Bridge(p) => p.sample_path(request, rng),
            ProcessEnum::Interpolation(p) => p.sample_path(request, rng),
        }
    }
}

impl From<BrownianMotion> for ProcessEnum {
    fn from(process: BrownianMotion) -> Self {
        ProcessEnum::Motion(process)
    }
}

impl From<BrownianBridge> for ProcessEnum {
    fn from(process: BrownianBridge) -> Self {
        ProcessEnum::Bridge(process)
    }
}

impl From<BrownianInterpolation> for ProcessEnum {
    fn from(process: BrownianInterpolation) -> Self {
        ProcessEnum::Interpolation(process)
    }
}
