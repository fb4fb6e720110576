//! CLI argument parsing for the marktime demo

use clap::{Parser, ValueEnum};

/// Output format for interval reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    #[default]
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "marktime")]
#[command(version)]
#[command(
    about = "Run an instrumented loop and report the time spent between its marks",
    long_about = None
)]
pub struct Cli {
    /// Number of loop iterations to time
    #[arg(short = 'n', long = "iterations", value_name = "N", default_value = "3")]
    pub iterations: u32,

    /// Milliseconds each instrumented step sleeps for
    #[arg(long = "sleep-ms", value_name = "MS", default_value = "1")]
    pub sleep_ms: u64,

    /// Report format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
