use anyhow::{anyhow, Result};
use bayestest_utils::ProbabilityParameters;
use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};

mod cli;
mod report;
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
    debug!("Verbosity: {}", args.verbosity);

    let params = ProbabilityParameters::new(args.prior, args.sensitivity, args.specificity)
        .map_err(|e| anyhow!("Invalid test parameters: {}", e))?;
    info!(
        "Prior: {}, Sensitivity: {}, Specificity: {}",
        params.prior(),
        params.sensitivity(),
        params.specificity()
    );
    if params.posterior().is_degenerate() {
        warn!("Prior of 0 with specificity of 1: posterior is undefined");
    }
    if params.is_uninformative() {
        warn!("Sensitivity + specificity = 1: the test carries no information");
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    report::write_report(&mut handle, &params, args.format)?;
    Ok(())
}
