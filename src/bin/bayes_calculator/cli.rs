// src/bin/bayes_calculator/cli.rs
use clap::{Parser, ValueEnum};
/// Posterior probability of a condition after a positive diagnostic test.
#[derive(Parser, Debug)]
#[command(name = "bayes_calculator", version, about = "Diagnostic test Bayes calculator")]
pub struct Cli {
    #[arg(
        long,
        default_value = "0.05",
        help = "Prior probability of the condition, in [0, 1)"
    )]
    pub prior: f64,

    #[arg(
        long,
        default_value = "0.9",
        help = "Sensitivity, P(test+ | condition), in (0, 1]"
    )]
    pub sensitivity: f64,

    #[arg(
        long,
        default_value = "0.95",
        help = "Specificity, P(test- | no condition), in (0, 1]"
    )]
    pub specificity: f64,

    #[arg(
        value_enum,
        long,
        default_value = "text",
        value_name = "FORMAT",
        help = "Output format"
    )]
    pub format: ReportFormat,

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
pub enum ReportFormat {
    Text,
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
