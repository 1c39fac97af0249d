//! CSV output format for comparison reports
//!
//! One row per sample; the control row leaves the comparison columns empty.

use crate::report::{Report, SampleReport};

const HEADER: &str =
    "file,n,min,max,median,mean,stddev,effect,critical_value,p_value,significant";

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput<'a> {
    report: &'a Report,
}

impl<'a> CsvOutput<'a> {
    /// Create a CSV formatter for a report
    pub fn new(report: &'a Report) -> Self {
        Self { report }
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn sample_fields(sample: &SampleReport) -> Vec<String> {
        vec![
            Self::escape_field(&sample.name),
            sample.summary.n.to_string(),
            sample.spread.min.to_string(),
            sample.spread.max.to_string(),
            sample.spread.median.to_string(),
            sample.summary.mean.to_string(),
            sample.summary.std_dev().to_string(),
        ]
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(HEADER);
        output.push('\n');

        let mut control = Self::sample_fields(&self.report.control);
        control.extend(["", "", "", ""].map(String::from));
        output.push_str(&control.join(","));
        output.push('\n');

        for experiment in &self.report.experiments {
            let d = &experiment.difference;
            let mut fields = Self::sample_fields(&experiment.sample);
            fields.push(d.effect.to_string());
            fields.push(d.critical_value.to_string());
            fields.push(d.p_value.to_string());
            fields.push(d.significant().to_string());
            output.push_str(&fields.join(","));
            output.push('\n');
        }

        output
    }
}
