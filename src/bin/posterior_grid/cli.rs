// src/bin/posterior_grid/cli.rs
use clap::{Parser, ValueEnum};
/// Posterior probability over a sensitivity x specificity grid, for contour plots.
#[derive(Parser, Debug)]
#[command(name = "posterior_grid", version, about = "Posterior probability landscape")]
pub struct Cli {
    #[arg(
        long,
        short,
        value_name = "OUT",
        help = "Output file path, must not exist"
    )]
    pub out: String,

    #[arg(
        long,
        default_value = "0.05",
        help = "Prior probability of the condition, in [0, 1)"
    )]
    pub prior: f64,

    #[arg(long, default_value = "0.5", help = "Lowest sensitivity on the grid")]
    pub sensitivity_min: f64,

    #[arg(long, default_value = "1.0", help = "Highest sensitivity on the grid")]
    pub sensitivity_max: f64,

    #[arg(long, default_value = "0.5", help = "Lowest specificity on the grid")]
    pub specificity_min: f64,

    #[arg(long, default_value = "1.0", help = "Highest specificity on the grid")]
    pub specificity_max: f64,

    #[arg(
        long,
        short,
        default_value = "50",
        help = "Number of sample points per axis"
    )]
    pub resolution: usize,

    #[arg(
        value_enum,
        long,
        default_value = "tsv",
        value_name = "FORMAT",
        help = "Output format"
    )]
    pub format: GridFormat,

    #[arg(
        value_enum,
        long,
        default_value = "normal",
        value_name = "VERBOSITY",
        help = "Verbosity level"
    )]
    pub verbosity: LogLevel,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum GridFormat {
    Tsv,
    Json,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Normal,
    Silent,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Verbose => write!(f, "verbose"),
            LogLevel::Normal => write!(f, "normal"),
            LogLevel::Silent => write!(f, "silent"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["posterior_grid", "--out", "grid.tsv"]);
        assert_eq!(cli.out, "grid.tsv");
        assert_eq!(cli.prior, 0.05);
        assert_eq!((cli.sensitivity_min, cli.sensitivity_max), (0.5, 1.0));
        assert_eq!((cli.specificity_min, cli.specificity_max), (0.5, 1.0));
        assert_eq!(cli.resolution, 50);
        assert_eq!(cli.format, GridFormat::Tsv);
    }

    #[test]
    fn test_missing_out() {
        assert!(Cli::try_parse_from(["posterior_grid"]).is_err());
    }
}
