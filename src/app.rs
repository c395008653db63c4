//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads or generates a surface
//! - runs the fit
//! - prints the report and writes optional exports

use clap::Parser;

use crate::cli::{Cli, Command, DegreeArgs, DemoArgs, FitArgs};
use crate::data::{polynomial_surface, random_surface};
use crate::domain::{FitConfig, SurfaceDegree, SurfaceFit};
use crate::error::FitError;
use crate::io::{read_surface_json, write_fit_json, write_surface_json};
use crate::report::{format_fit_summary, max_coefficient_error};

pub mod pipeline;

/// Entry point for the `surf` binary.
pub fn run() -> Result<(), FitError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Demo(args) => handle_demo(args),
    }
}

fn handle_fit(args: FitArgs) -> Result<(), FitError> {
    let config = fit_config_from_args(&args.degree);
    let input = read_surface_json(&args.input)?;
    let run = pipeline::run_fit(&input, &config)?;

    println!("{}", format_fit_summary(&run.fit, &run.errors));
    export(&config, &run.fit)
}

fn handle_demo(args: DemoArgs) -> Result<(), FitError> {
    let config = fit_config_from_args(&args.degree);

    let (input, truth) = if args.random {
        (random_surface(args.nx, args.ny, args.seed)?, None)
    } else {
        // The generating polynomial uses the same degree as the fit.
        let degree = SurfaceDegree::new(config.kx, config.ky, config.order)?;
        let synthetic = polynomial_surface(args.nx, args.ny, degree, args.noise, args.seed)?;
        (synthetic.input, Some(synthetic.coefficients))
    };

    if let Some(path) = &args.save_input {
        write_surface_json(path, &input)?;
    }

    let run = pipeline::run_fit(&input, &config)?;
    println!("{}", format_fit_summary(&run.fit, &run.errors));
    if let Some(truth) = truth {
        println!(
            "Max |coefficient error| vs generating polynomial: {:.6e}",
            max_coefficient_error(&run.fit, &truth)
        );
    }

    export(&config, &run.fit)
}

fn export(config: &FitConfig, fit: &SurfaceFit) -> Result<(), FitError> {
    if let Some(path) = &config.export {
        write_fit_json(path, fit)?;
        if config.verbose {
            eprintln!("surf: wrote {}", path.display());
        }
    }
    Ok(())
}

pub fn fit_config_from_args(args: &DegreeArgs) -> FitConfig {
    FitConfig {
        kx: args.kx,
        ky: args.ky,
        order: args.order,
        export: args.export.clone(),
        verbose: args.verbose,
    }
}
