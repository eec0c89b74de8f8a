//! Parallel ensemble sampling.
//!
//! Draws many independent paths of one process across the rayon thread
//! pool. Path `p` always uses the stream [`PathRng::for_path`]`(seed, p)`,
//! so an ensemble is reproducible for a given seed regardless of thread
//! count or scheduling.
//!
//! ```text
//! seed ─┬─ path 0 ─ PathRng::for_path(seed, 0) ─ sample_path ─┐
//!       ├─ path 1 ─ PathRng::for_path(seed, 1) ─ sample_path ─┼─ Vec<SamplePath>
//!       └─ path N ─ PathRng::for_path(seed, N) ─ sample_path ─┘
//! ```

use brownian_core::rng::PathRng;
use brownian_core::{Process, SamplePath, SampleRequest, SamplingError};
use ndarray::Array1;
use rayon::prelude::*;
use tracing::debug;

/// Samples `n_paths` independent paths of `process`.
///
/// Paths are returned in index order. The first failing path aborts the
/// ensemble with its error.
///
/// # Errors
///
/// - `InvalidPathCount` if `n_paths` is zero
/// - any error of [`Process::sample_path`] for `request`
///
/// # Examples
///
/// ```rust
/// use brownian_core::SampleRequest;
/// use brownian_models::{sample_ensemble, BrownianMotion};
///
/// let paths = sample_ensemble(&BrownianMotion::new(1), &SampleRequest::new(11), 8, 42).unwrap();
/// assert_eq!(paths.len(), 8);
/// ```
pub fn sample_ensemble<P>(
    process: &P,
    request: &SampleRequest,
    n_paths: usize,
    seed: u64,
) -> Result<Vec<SamplePath>, SamplingError>
where
    P: Process + Sync,
{
    if n_paths == 0 {
        return Err(SamplingError::InvalidPathCount(n_paths));
    }
    debug!(
        n_paths,
        seed,
        n_points = request.n_points(),
        threads = rayon::current_num_threads(),
        "sampling ensemble"
    );

    (0..n_paths)
        .into_par_iter()
        .map(|path_id| {
            let mut rng = PathRng::for_path(seed, path_id as u64);
            process.sample_path(request, &mut rng)
        })
        .collect()
}

/// Final value of `column` on every path.
///
/// # Errors
///
/// `ShapeMismatch` if a path has no such column.
pub fn terminal_values(paths: &[SamplePath], column: usize) -> Result<Array1<f64>, SamplingError> {
    paths
        .iter()
        .map(|path| {
            if column < path.dim() {
                Ok(path.last()[column])
            } else {
                Err(SamplingError::ShapeMismatch {
                    expected: (path.n_points(), column + 1),
                    got: path.shape(),
                })
            }
        })
        .collect()
}
