//! Human-readable comparison report
//!
//! ```text
//! File       N  Min     Max     Median  Mean    Stddev
//! iguana     7  50.00   750.00  200.00  300.00  238.05  (control)
//! chameleon  5  150.00  930.00  500.00  540.00  299.08  (no difference, p = .178)
//! leopard    6  400.00  950.00  620.00  643.50  183.12  (643.50 > 300.00 ± 257.74, p = .014)
//!
//! Welch's t, 95% confidence
//! ```

use crate::boxplot::FiveNumber;
use crate::comparison::{compare_with, summarize, Difference, Summary, TestVariant};
use crate::error::{Result, StatError};
use serde::{Deserialize, Serialize};

/// A named sample with its moments and order statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleReport {
    pub name: String,
    pub summary: Summary,
    /// Min, quartiles, median and max
    pub spread: FiveNumber,
}

impl SampleReport {
    pub fn new(name: impl Into<String>, summary: Summary, spread: FiveNumber) -> Self {
        Self {
            name: name.into(),
            summary,
            spread,
        }
    }

    /// Summarize raw measurements
    ///
    /// # Errors
    /// Same as [`summarize`].
    pub fn from_data(name: impl Into<String>, data: &[f64]) -> Result<Self> {
        let summary = summarize(data)?;
        let spread = FiveNumber::from_data(data).ok_or(StatError::InsufficientData {
            required: 1,
            actual: data.len(),
        })?;
        Ok(Self::new(name, summary, spread))
    }
}

/// An experiment together with its comparison against the control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub sample: SampleReport,
    pub difference: Difference,
}

/// Full result of comparing experiments to one control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub confidence: f64,
    pub variant: TestVariant,
    pub control: SampleReport,
    pub experiments: Vec<ExperimentReport>,
}

impl Report {
    /// Compare every experiment against the control
    ///
    /// With no experiments the control is only summarized, so a
    /// single-measurement control is accepted.
    ///
    /// # Errors
    /// Propagates the first comparison error.
    pub fn build(
        control: SampleReport,
        experiments: Vec<SampleReport>,
        confidence: f64,
        variant: TestVariant,
    ) -> Result<Self> {
        let experiments = experiments
            .into_iter()
            .map(|sample| {
                let difference =
                    compare_with(&control.summary, &sample.summary, confidence, variant)?;
                tracing::debug!(
                    experiment = %sample.name,
                    significant = difference.significant(),
                    "compared experiment to control"
                );
                Ok(ExperimentReport { sample, difference })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            confidence,
            variant,
            control,
            experiments,
        })
    }

    /// Number of experiments that differ significantly from the control
    pub fn significant_count(&self) -> usize {
        self.experiments
            .iter()
            .filter(|e| e.difference.significant())
            .count()
    }

    /// Render the results table
    pub fn to_text(&self) -> String {
        let mut rows = vec![[
            "File", "N", "Min", "Max", "Median", "Mean", "Stddev", "",
        ]
        .map(String::from)];
        rows.push(table_row(&self.control, "(control)".to_string()));
        for experiment in &self.experiments {
            rows.push(table_row(
                &experiment.sample,
                verdict(&experiment.difference),
            ));
        }

        // Every column but the trailing verdict is padded
        let mut widths = [0usize; 7];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();
        for row in &rows {
            let mut line = String::new();
            for (cell, width) in row.iter().zip(widths.iter()) {
                line.push_str(&format!("{:<w$}", cell, w = width + 2));
            }
            line.push_str(&row[7]);
            output.push_str(line.trim_end());
            output.push('\n');
        }

        if !self.experiments.is_empty() {
            output.push('\n');
            output.push_str(&format!(
                "{}, {}% confidence\n",
                self.variant, self.confidence
            ));
        }

        output
    }
}

fn table_row(sample: &SampleReport, verdict: String) -> [String; 8] {
    [
        sample.name.clone(),
        sample.summary.n.to_string(),
        format!("{:.2}", sample.spread.min),
        format!("{:.2}", sample.spread.max),
        format!("{:.2}", sample.spread.median),
        format!("{:.2}", sample.summary.mean),
        format!("{:.2}", sample.summary.std_dev()),
        verdict,
    ]
}

/// Verdict column for one experiment
fn verdict(d: &Difference) -> String {
    if !d.significant() {
        return format!("(no difference, {})", format_p(d.p_value));
    }

    let direction = if d.experiment_mean > d.control_mean {
        '>'
    } else {
        '<'
    };
    format!(
        "({:.2} {} {:.2} ± {:.2}, {})",
        d.experiment_mean,
        direction,
        d.control_mean,
        d.critical_value,
        format_p(d.p_value)
    )
}

/// `p = .178` style, dropping the leading zero
fn format_p(p: f64) -> String {
    if p < 0.001 {
        return "p < .001".to_string();
    }
    let text = format!("{:.3}", p);
    match text.strip_prefix('0') {
        Some(rest) => format!("p = {}", rest),
        None => format!("p = {}", text),
    }
}
