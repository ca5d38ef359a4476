use anyhow::{anyhow, Result};
use bayestest_utils::compute_posterior_grid;
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use std::path::Path;
use std::time::Instant;

mod cli;
mod io;
fn main() -> Result<()> {
    let args = cli::Cli::parse();
    // Set up logging level
    match args.verbosity {
        cli::LogLevel::Silent => {
            env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();
        }
        cli::LogLevel::Normal => {
            env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
        }
        cli::LogLevel::Verbose => {
            env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();
        }
    }

    posterior_grid(&args)?;
    Ok(())
}

fn posterior_grid(args: &cli::Cli) -> Result<()> {
    let timer = Instant::now();
    info!(
        "Computing {}x{} posterior grid at prior {}",
        args.resolution, args.resolution, args.prior
    );
    let grid = compute_posterior_grid(
        args.prior,
        (args.sensitivity_min, args.sensitivity_max),
        (args.specificity_min, args.specificity_max),
        args.resolution,
    )
    .map_err(|e| anyhow!("Could not compute posterior grid: {}", e))?;

    let n_degenerate = grid.n_degenerate();
    if n_degenerate > 0 {
        warn!("{} grid cells have an undefined posterior", n_degenerate);
    }

    let out_path = Path::new(&args.out);
    match args.format {
        cli::GridFormat::Tsv => io::write_tsv(out_path, &grid)?,
        cli::GridFormat::Json => io::write_json(out_path, &grid)?,
    }
    info!("Wrote grid to {}", args.out);
    info!("Finished in {:?}", timer.elapsed());
    Ok(())
}
