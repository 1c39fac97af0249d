//! CLI argument parsing for tinystat

use crate::comparison::TestVariant;
use crate::config::Config;
use crate::reader::Delimiter;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for comparison reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table with an optional box plot (default)
    #[default]
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "tinystat")]
#[command(version)]
#[command(
    about = "Compare sets of measurements and report whether they differ significantly",
    long_about = None
)]
pub struct Cli {
    /// File holding the control measurements
    #[arg(value_name = "CONTROL")]
    pub control: PathBuf,

    /// Files holding experimental measurements, each compared to the control
    #[arg(value_name = "EXPERIMENT")]
    pub experiments: Vec<PathBuf>,

    /// Confidence level in percent (default: 95)
    #[arg(short = 'c', long = "confidence", value_name = "PERCENT")]
    pub confidence: Option<f64>,

    /// 0-based column of data to analyze (default: 0)
    #[arg(long = "column", value_name = "N")]
    pub column: Option<usize>,

    /// Column delimiter (default: tab)
    #[arg(short = 'd', long = "delimiter", value_enum)]
    pub delimiter: Option<Delimiter>,

    /// t-test variant (default: welch)
    #[arg(long = "variant", value_enum)]
    pub variant: Option<TestVariant>,

    /// Output format (default: text)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not draw the box plot
    #[arg(long = "no-chart")]
    pub no_chart: bool,

    /// Load settings from a TOML file; explicit flags take precedence
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Resolve the effective configuration: defaults, then config file, then flags
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(confidence) = self.confidence {
            config.confidence = confidence;
        }
        if let Some(column) = self.column {
            config.column = column;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.no_chart {
            config.chart = false;
        }

        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }
}
