//! CLI error types

use brownian_core::SamplingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `brownian` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be resolved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A sampler precondition failed
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    /// A command line argument could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A smoke check produced an unusable sample
    #[error("Check failed: {0}")]
    CheckFailed(String),

    /// Writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
