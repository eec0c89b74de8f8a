//! Check command implementation
//!
//! Prints the resolved configuration and runs a small smoke sample of every
//! sampler.

use brownian_core::SampleRequest;
use brownian_models::{
    sample_ensemble, BrownianBridge, BrownianInterpolation, BrownianMotion, ProcessEnum,
};
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

const SMOKE_POINTS: usize = 11;
const SMOKE_PATHS: usize = 4;
const SMOKE_SEED: u64 = 42;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");

    println!("Configuration:");
    println!("  log_level      = {}", config.log_level);
    println!("  default_points = {}", config.default_points);
    match config.seed {
        Some(seed) => println!("  seed           = {}", seed),
        None => println!("  seed           = (fresh per run)"),
    }
    println!("  format         = {}", config.format);
    println!();

    println!("Smoke samples ({} paths x {} points):", SMOKE_PATHS, SMOKE_POINTS);
    for process in smoke_processes()? {
        let max_abs = smoke_sample(&process)?;
        println!("  {:<14} ok (max |x| = {:.4})", process.name(), max_abs);
    }

    info!("All checks passed");
    Ok(())
}

fn smoke_processes() -> Result<Vec<ProcessEnum>> {
    Ok(vec![
        BrownianMotion::new(2).into(),
        BrownianBridge::new(0.0, 1.0, 0.0, 1.0)?.into(),
        BrownianInterpolation::from_scalar(&[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0])?.into(),
    ])
}

/// Samples a few paths and returns the largest absolute value seen.
fn smoke_sample(process: &ProcessEnum) -> Result<f64> {
    let request = SampleRequest::new(SMOKE_POINTS);
    let paths = sample_ensemble(process, &request, SMOKE_PATHS, SMOKE_SEED)?;

    let mut max_abs = 0.0_f64;
    for path in &paths {
        for &v in path.values().iter() {
            if !v.is_finite() {
                return Err(CliError::CheckFailed(format!(
                    "{} produced a non-finite value",
                    process.name()
                )));
            }
            max_abs = max_abs.max(v.abs());
        }
    }
    Ok(max_abs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoke_samples_pass() {
        let processes = smoke_processes().unwrap();
        assert_eq!(processes.len(), 3);
        for process in &processes {
            let max_abs = smoke_sample(process).unwrap();
            assert!(max_abs.is_finite());
        }
    }

    #[test]
    fn test_run_with_defaults() {
        assert!(run(&CliConfig::default()).is_ok());
    }
}
