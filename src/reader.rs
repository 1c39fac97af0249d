//! Measurement reader for delimited text files
//!
//! Each non-blank line is one record; one 0-based column holds the
//! measurement. There is no header row.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column delimiter for measurement files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Tab-separated values (default)
    #[default]
    Tab,
    /// Space-separated values; runs of spaces count as one separator
    Space,
    /// Comma-separated values
    Comma,
}

impl Delimiter {
    /// Delimiter byte handed to the CSV parser
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Space => b' ',
            Delimiter::Comma => b',',
        }
    }
}

/// Read one column of measurements from delimited text
///
/// # Errors
/// Returns error naming the line number if a record is malformed, lacks the
/// requested column, or holds something other than a number.
///
/// # Example
/// ```
/// use tinystat::reader::{read_measurements, Delimiter};
///
/// let input = "a,1.5\nb,2.5\n";
/// let values = read_measurements(input.as_bytes(), 1, Delimiter::Comma).unwrap();
/// assert_eq!(values, vec![1.5, 2.5]);
/// ```
pub fn read_measurements<R: Read>(input: R, column: usize, delimiter: Delimiter) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut values = Vec::new();
    let mut skipped = 0usize;

    for (index, record) in reader.records().enumerate() {
        let line = index + 1;
        let record = record.with_context(|| format!("Malformed record near line {}", line))?;
        let line = record.position().map_or(line as u64, |p| p.line());

        let fields: Vec<&str> = match delimiter {
            Delimiter::Space => record.iter().filter(|f| !f.is_empty()).collect(),
            _ => record.iter().collect(),
        };

        if fields.iter().all(|f| f.is_empty()) {
            skipped += 1;
            continue;
        }

        let Some(field) = fields.get(column) else {
            anyhow::bail!(
                "Line {} has {} column(s), cannot read column {}",
                line,
                fields.len(),
                column
            );
        };

        let value: f64 = field
            .parse()
            .with_context(|| format!("Line {}: '{}' is not a number", line, field))?;
        values.push(value);
    }

    if skipped > 0 {
        tracing::warn!(skipped, "skipped blank records");
    }
    tracing::debug!(count = values.len(), column, ?delimiter, "read measurements");

    Ok(values)
}

/// Read one column of measurements from a file
pub fn read_file<P: AsRef<Path>>(path: P, column: usize, delimiter: Delimiter) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_measurements(file, column, delimiter)
        .with_context(|| format!("Failed to read measurements from {}", path.display()))
}
