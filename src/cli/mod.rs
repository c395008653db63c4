//! Command-line parsing for the `surf` demo binary.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fitting code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "surf", version, about = "2D polynomial surface least-squares fitter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a surface read from a JSON file (`{"xs": [...], "ys": [...], "z": [[...], ...]}`).
    Fit(FitArgs),
    /// Generate a synthetic surface and fit it.
    Demo(DemoArgs),
}

/// Degree and output options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct DegreeArgs {
    /// Maximum power of x.
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub kx: i64,

    /// Maximum power of y.
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub ky: i64,

    /// Cap on the total power `i + j` of any term.
    #[arg(long, allow_negative_numbers = true)]
    pub order: Option<i64>,

    /// Export the fit result to JSON.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print solve diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args, Clone)]
pub struct FitArgs {
    /// Surface JSON file.
    #[arg(long, value_name = "JSON")]
    pub input: PathBuf,

    #[command(flatten)]
    pub degree: DegreeArgs,
}

#[derive(Debug, Args, Clone)]
pub struct DemoArgs {
    /// Number of grid points along x.
    #[arg(long, default_value_t = 10)]
    pub nx: usize,

    /// Number of grid points along y.
    #[arg(long, default_value_t = 10)]
    pub ny: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Standard deviation of Gaussian noise added to the polynomial surface.
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Use uniform random integers in 1..=255 instead of a known polynomial.
    #[arg(long)]
    pub random: bool,

    /// Save the generated surface as JSON (readable by `surf fit`).
    #[arg(long, value_name = "JSON")]
    pub save_input: Option<PathBuf>,

    #[command(flatten)]
    pub degree: DegreeArgs,
}
