//! Sample command implementation
//!
//! Builds a sampler from the command line, draws an ensemble of paths with
//! per-path seeded streams and prints them to stdout.

use std::io::Write;

use brownian_core::rng::PathRng;
use brownian_core::{Process, SamplePath, SampleRequest};
use brownian_models::{
    sample_ensemble, BrownianBridge, BrownianInterpolation, BrownianMotion, ProcessEnum,
};
use clap::{Args, ValueEnum};
use ndarray::Array2;
use tracing::{info, warn};

use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Sampler selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProcessKind {
    /// Standard Brownian motion
    Motion,
    /// Brownian bridge between two pinned values
    Bridge,
    /// Brownian motion through waypoints
    Interpolation,
}

/// Arguments of `brownian sample`
#[derive(Debug, Clone, Args)]
pub struct SampleArgs {
    /// Process to sample
    #[arg(value_enum)]
    pub process: ProcessKind,

    /// State dimension
    #[arg(short, long, default_value_t = 1)]
    pub dim: usize,

    /// Window start (bridge: pinned start time, default 0)
    #[arg(long)]
    pub t_start: Option<f64>,

    /// Window end (bridge: pinned end time, default 1)
    #[arg(long)]
    pub t_end: Option<f64>,

    /// Number of grid points
    #[arg(short = 'n', long)]
    pub points: Option<usize>,

    /// Base seed; path k uses its own stream derived from it
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of independent paths
    #[arg(short, long, default_value_t = 1)]
    pub paths: usize,

    /// Bridge value at the start time
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub start_value: f64,

    /// Bridge value at the end time
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub end_value: f64,

    /// Interpolation waypoint `t:v1,v2,...` (repeatable, one value per dimension)
    #[arg(short, long = "waypoint", value_name = "T:V1,V2,...")]
    pub waypoints: Vec<String>,

    /// Output format (table, rows)
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Run the sample command
pub fn run(args: &SampleArgs, config: &CliConfig) -> Result<()> {
    let process = build_process(args)?;
    let request = build_request(args, config);
    let seed = config
        .seed
        .unwrap_or_else(|| PathRng::from_entropy().seed());

    info!(
        process = process.name(),
        dim = process.dim(),
        n_points = request.n_points(),
        paths = args.paths,
        seed,
        "Sampling"
    );

    let paths = sample_ensemble(&process, &request, args.paths, seed)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&paths, config.format, &mut out)?;
    out.flush()?;

    info!("Sampling complete");
    Ok(())
}

/// Builds the sampler described by `args`.
pub fn build_process(args: &SampleArgs) -> Result<ProcessEnum> {
    if args.dim == 0 {
        return Err(CliError::InvalidArgument(
            "dimension must be at least 1".to_string(),
        ));
    }
    if args.process != ProcessKind::Interpolation && !args.waypoints.is_empty() {
        warn!("--waypoint is only used by interpolation; ignoring");
    }

    let process: ProcessEnum = match args.process {
        ProcessKind::Motion => BrownianMotion::new(args.dim).into(),
        ProcessKind::Bridge => {
            if args.dim != 1 {
                return Err(CliError::InvalidArgument(format!(
                    "bridge is one-dimensional, got --dim {}",
                    args.dim
                )));
            }
            BrownianBridge::new(
                args.t_start.unwrap_or(0.0),
                args.t_end.unwrap_or(1.0),
                args.start_value,
                args.end_value,
            )?
            .into()
        }
        ProcessKind::Interpolation => build_interpolation(args.dim, &args.waypoints)?.into(),
    };
    Ok(process)
}

/// Resolves the sampling request; the bridge window is fixed at construction.
pub fn build_request(args: &SampleArgs, config: &CliConfig) -> SampleRequest {
    let request = SampleRequest::new(config.default_points);
    match args.process {
        ProcessKind::Bridge => request,
        ProcessKind::Motion | ProcessKind::Interpolation => SampleRequest {
            t_start: args.t_start,
            t_end: args.t_end,
            ..request
        },
    }
}

fn build_interpolation(dim: usize, waypoints: &[String]) -> Result<BrownianInterpolation> {
    if waypoints.is_empty() {
        return Err(CliError::InvalidArgument(
            "interpolation needs at least two --waypoint values".to_string(),
        ));
    }

    let mut times = Vec::with_capacity(waypoints.len());
    let mut flat = Vec::with_capacity(waypoints.len() * dim);
    for spec in waypoints {
        let (time, values) = parse_waypoint(spec)?;
        if values.len() != dim {
            return Err(CliError::InvalidArgument(format!(
                "waypoint '{}' has {} values, expected {}",
                spec,
                values.len(),
                dim
            )));
        }
        times.push(time);
        flat.extend(values);
    }

    let values = Array2::from_shape_vec((times.len(), dim), flat)
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
    Ok(BrownianInterpolation::new(dim, times, values)?)
}

/// Parses `t:v1,v2,...` into a time and its target values.
pub fn parse_waypoint(spec: &str) -> Result<(f64, Vec<f64>)> {
    let invalid = |reason: &str| {
        CliError::InvalidArgument(format!("waypoint '{}': {}", spec, reason))
    };

    let (time, values) = spec
        .split_once(':')
        .ok_or_else(|| invalid("expected T:V1,V2,..."))?;
    let time: f64 = time
        .trim()
        .parse()
        .map_err(|_| invalid("time is not a number"))?;
    let values = values
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| invalid("value is not a number"))?;

    Ok((time, values))
}

/// Writes `paths` in the requested format.
pub fn render<W: Write>(
    paths: &[SamplePath],
    format: OutputFormat,
    out: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Table => render_table(paths, out),
        OutputFormat::Rows => render_rows(paths, out),
    }
}

fn render_table<W: Write>(paths: &[SamplePath], out: &mut W) -> std::io::Result<()> {
    for (p, path) in paths.iter().enumerate() {
        if paths.len() > 1 {
            if p > 0 {
                writeln!(out)?;
            }
            writeln!(out, "# path {}", p)?;
        }

        write!(out, "{:>12}", "t")?;
        for j in 0..path.dim() {
            write!(out, " {:>12}", format!("x{}", j))?;
        }
        writeln!(out)?;

        for (t, row) in path.iter() {
            write!(out, "{:>12.6}", t)?;
            for v in row.iter() {
                write!(out, " {:>12.6}", v)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn render_rows<W: Write>(paths: &[SamplePath], out: &mut W) -> std::io::Result<()> {
    let dim = paths.first().map_or(0, SamplePath::dim);
    write!(out, "path,t")?;
    for j in 0..dim {
        write!(out, ",x{}", j)?;
    }
    writeln!(out)?;

    for (p, path) in paths.iter().enumerate() {
        for (t, row) in path.iter() {
            write!(out, "{},{}", p, t)?;
            for v in row.iter() {
                write!(out, ",{}", v)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
