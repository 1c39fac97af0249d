// Configuration for comparisons and report output
//
// Layered: built-in defaults < tinystat.toml (--config) < explicit CLI flags.
// Every entry point receives its configuration as a parameter.

use crate::cli::OutputFormat;
use crate::comparison::TestVariant;
use crate::reader::Delimiter;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for reading, comparing and reporting samples
///
/// # Example
/// ```
/// use tinystat::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.confidence, 95.0); // alpha = 0.05
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Confidence level in percent, exclusive range (0, 100)
    ///
    /// - 95 (default): 5% false positive rate
    /// - 99: stricter, fewer false positives, more missed differences
    /// - 80: looser, catches smaller differences at a higher false positive rate
    pub confidence: f64,

    /// t-test variant (Welch by default)
    pub variant: TestVariant,

    /// 0-based column holding the measurements
    pub column: usize,

    /// Column delimiter of the input files
    pub delimiter: Delimiter,

    /// Report format
    pub format: OutputFormat,

    /// Draw a box plot above the text report
    pub chart: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confidence: 95.0,
            variant: TestVariant::Welch,
            column: 0,
            delimiter: Delimiter::Tab,
            format: OutputFormat::Text,
            chart: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Keys that are absent keep their default values.
    ///
    /// # Example TOML
    /// ```toml
    /// confidence = 99.0
    /// variant = "student"
    /// delimiter = "comma"
    /// column = 2
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.confidence > 0.0 && self.confidence < 100.0) {
            return Err(format!(
                "confidence must be in (0, 100), got {}",
                self.confidence
            ));
        }

        Ok(())
    }
}
