//! The main library for the `scatterview` application.
//!
//! This crate provides the core logic for reading a two-column numeric CSV
//! file and showing it as an interactive scatter plot. The primary entry
//! point is the `run` function, which takes the parsed CLI arguments and
//! executes the load-and-display process.
//!
//! The library is structured into several modules:
//! - `cli`: Defines the command-line interface.
//! - `data_loader`: Reads the CSV file into sub-sampled point sequences.
//! - `plotter`: Shows the scatter plot in a native window.
//! - `error`: Defines the application's custom error type.

use anyhow::{Context, Result};

pub mod cli;
pub mod data_loader;
pub mod error;
pub mod plotter;

use crate::cli::Cli;

/// The main entry point for the application logic.
///
/// This function orchestrates the entire process:
/// 1.  It reads the input file into `Samples`, applying the stride.
/// 2.  It opens the plot window, which blocks until the user closes it.
///
/// Any failure during reading aborts the run before a window is opened, so
/// a parse error late in the file never produces a partial plot.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, a kept row fails to
/// parse, or the display backend fails to start.
pub fn run(cli: &Cli) -> Result<()> {
    let samples = data_loader::load_samples(&cli.input_path, cli.stride)
        .with_context(|| format!("Failed to read '{}'", cli.input_path.display()))?;

    log::info!(
        "plotting {} points from '{}' (stride {})",
        samples.len(),
        cli.input_path.display(),
        cli.stride
    );

    plotter::show(samples, cli.x_label.clone(), cli.y_label.clone())
        .context("Failed to open the plot window")?;

    Ok(())
}
