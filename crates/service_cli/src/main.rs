//! Brownian CLI - sample Brownian paths from the command line
//!
//! # Commands
//!
//! - `brownian sample motion` - Standard Brownian motion
//! - `brownian sample bridge --start-value A --end-value B` - Brownian bridge
//! - `brownian sample interpolation -w 0:0 -w 1:2` - Brownian motion through waypoints
//! - `brownian check` - Show the resolved configuration and run a smoke sample
//!
//! Paths are printed to stdout; logs go to stderr.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::sample::SampleArgs;
use config::{build_config, CliArgs};

/// Brownian path sampler
#[derive(Parser)]
#[command(name = "brownian")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./brownian.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample one or more paths and print them
    Sample(SampleArgs),

    /// Check configuration and run a smoke sample
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            verbose: self.verbose,
            log_level: self.log_level.clone(),
            ..Default::default()
        };
        if let Commands::Sample(sample) = &self.command {
            args.points = sample.points;
            args.seed = sample.seed;
            args.format = sample.format.clone();
        }
        args
    }
}

fn init_tracing(log_level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(log_level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level.as_filter_str(), cli.verbose);
    debug!(?config, "configuration resolved");

    match &cli.command {
        Commands::Sample(args) => commands::sample::run(args, &config),
        Commands::Check => commands::check::run(&config),
    }
}
