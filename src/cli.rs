//! CLI argument parsing for qicompare

use crate::indicator::Indicator;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Format of the comparison summary printed on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables (default)
    Text,
    /// JSON document per indicator
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "qicompare")]
#[command(version)]
#[command(
    about = "Compare quality indicators across algorithms and time budgets",
    long_about = None
)]
pub struct Cli {
    /// Directory holding the qi__*.csv result files
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory receiving the .tex tables (created if missing)
    #[arg(long = "tables-dir", value_name = "DIR")]
    pub tables_dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Quality indicator to process; repeatable (default: all)
    #[arg(short = 'i', long = "indicator", value_name = "QI")]
    pub indicators: Vec<Indicator>,

    /// Summary format on stdout
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Only write the mean/stdev tables
    #[arg(long = "no-comparisons")]
    pub no_comparisons: bool,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Indicators to process, in canonical order without duplicates
    pub fn selected_indicators(&self) -> Vec<Indicator> {
        if self.indicators.is_empty() {
            return Indicator::ALL.to_vec();
        }

        Indicator::ALL
            .iter()
            .copied()
            .filter(|qi| self.indicators.contains(qi))
            .collect()
    }
}
