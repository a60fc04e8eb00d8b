//! `sim-diagnostics` command line
//!
//! Loads a diagnostic log and writes the stability/conservation figure:
//!
//! ```text
//! sim-diagnostics build/simulation_log.csv -o diagnostics.svg --tolerance 0.02
//! ```
//!
//! Load failures are reported with their kind and, for row errors, the data
//! row number; the process then exits with a non-zero status. Log verbosity
//! follows `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use env_logger::Builder;
use log::{error, info, LevelFilter};

use sim_diagnostics::input::{CsvLoadConfig, CsvLoader, Loader};
use sim_diagnostics::output::visualization::{render, FigureConfig};
use sim_diagnostics::LoadError;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot kinetic energy and mass conservation from a simulation log", long_about = None)]
struct Cli {
    /// Diagnostic log (CSV with Step, KineticEnergy, TotalMass columns)
    #[arg(value_hint = ValueHint::FilePath)]
    log: PathBuf,

    /// Output figure path (`.svg` for vector, anything else for PNG)
    #[arg(short, long, default_value = "diagnostics.png", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Relative tolerance of the mass axis band (fraction of the mass range)
    #[arg(long, default_value_t = 0.01, value_parser = parse_tolerance)]
    tolerance: f64,

    /// Field delimiter of the log
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 500)]
    height: u32,
}

fn main() -> ExitCode {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", failure_report(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let delimiter = u8::try_from(cli.delimiter)
        .with_context(|| format!("delimiter {:?} is not a single-byte character", cli.delimiter))?;
    let loader = CsvLoader::new(CsvLoadConfig::default().delimiter(delimiter));

    // Load errors are kept unwrapped so the report can name the kind and row
    let table = loader.load(&cli.log)?;

    let config = FigureConfig::default()
        .size(cli.width, cli.height)
        .tolerance(cli.tolerance);
    let figure = render(&table, &config);

    figure
        .save(&cli.output)
        .with_context(|| format!("writing figure to {}", cli.output.display()))?;

    info!(
        "mass axis [{}, {}] over {} steps",
        figure.conservation.y_range.lower,
        figure.conservation.y_range.upper,
        table.len()
    );
    Ok(())
}

/// Accept only finite, non-negative tolerances.
fn parse_tolerance(arg: &str) -> Result<f64, String> {
    let value: f64 = arg
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", arg))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("tolerance must be a finite number >= 0, got {}", arg));
    }
    Ok(value)
}

/// One-line description of a failed run
fn failure_report(err: &anyhow::Error) -> String {
    match err.downcast_ref::<LoadError>() {
        Some(load_error) => match load_error.row() {
            Some(row) => format!("load failed at row {}: {}", row, load_error),
            None => format!("load failed: {}", load_error),
        },
        None => format!("{:#}", err),
    }
}

// =================================================================================================
// Tests
// =================================================================================================
