//! JSON output format for comparison reports
//!
//! `--format json`: pretty-printed, one object per run.

use crate::comparison::TestVariant;
use crate::report::{Report, SampleReport};
use serde::{Deserialize, Serialize};

/// Summary statistics of one sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSample {
    /// File name the sample was read from
    pub name: String,
    pub n: usize,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub variance: f64,
}

/// One experiment compared against the control
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonComparison {
    pub sample: JsonSample,
    /// Absolute difference of the means
    pub effect: f64,
    /// Half-width of the confidence interval around the effect
    pub critical_value: f64,
    /// Effect as a percentage of the experiment mean; `null` when that
    /// mean is zero
    pub relative_effect: Option<f64>,
    /// Critical value as a percentage of the experiment mean
    pub relative_critical_value: Option<f64>,
    /// Standardized effect; `null` when infinite
    pub effect_size: f64,
    pub p_value: f64,
    pub alpha: f64,
    /// Power term (absent when both samples have zero variance)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    pub degrees_of_freedom: f64,
    pub t_statistic: f64,
    pub std_error: f64,
    pub significant: bool,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Confidence level in percent
    pub confidence: f64,
    /// t-test variant, `welch` or `student`
    pub variant: TestVariant,
    pub control: JsonSample,
    pub experiments: Vec<JsonComparison>,
}

impl JsonOutput {
    /// Build the JSON structure for a report
    pub fn from_report(report: &Report) -> Self {
        let experiments = report
            .experiments
            .iter()
            .map(|e| {
                let d = &e.difference;
                JsonComparison {
                    sample: json_sample(&e.sample),
                    effect: d.effect,
                    critical_value: d.critical_value,
                    relative_effect: d.relative_effect(),
                    relative_critical_value: d.relative_critical_value(),
                    effect_size: d.effect_size,
                    p_value: d.p_value,
                    alpha: d.alpha,
                    beta: d.beta,
                    degrees_of_freedom: d.degrees_of_freedom,
                    t_statistic: d.t_statistic,
                    std_error: d.std_error,
                    significant: d.significant(),
                }
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "tinystat-json-v1".to_string(),
            confidence: report.confidence,
            variant: report.variant,
            control: json_sample(&report.control),
            experiments,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn json_sample(sample: &SampleReport) -> JsonSample {
    JsonSample {
        name: sample.name.clone(),
        n: sample.summary.n,
        min: sample.spread.min,
        max: sample.spread.max,
        median: sample.spread.median,
        mean: sample.summary.mean,
        std_dev: sample.summary.std_dev(),
        variance: sample.summary.variance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, data: &[f64]) -> SampleReport {
        SampleReport::from_data(name, data).unwrap()
    }

    fn report(experiment: &[f64]) -> Report {
        Report::build(
            sample("control", &[1.0, 2.0, 3.0, 4.0]),
            vec![sample("exp", experiment)],
            80.0,
            TestVariant::Welch,
        )
        .unwrap()
    }

    #[test]
    fn test_json_output_creation() {
        let output = JsonOutput::from_report(&report(&[10.0, 20.0, 30.0, 40.0]));
        assert_eq!(output.format, "tinystat-json-v1");
        assert_eq!(output.variant, TestVariant::Welch);
        assert_eq!(output.control.n, 4);
        assert_eq!(output.experiments.len(), 1);
        assert!(output.experiments[0].significant);
        assert_eq!(output.experiments[0].effect, 22.5);
        assert_eq!(output.experiments[0].relative_effect, Some(90.0));
    }

    #[test]
    fn test_json_order_statistics() {
        let output = JsonOutput::from_report(&report(&[40.0, 10.0, 30.0, 20.0]));
        assert_eq!(output.control.min, 1.0);
        assert_eq!(output.control.max, 4.0);
        assert_eq!(output.control.median, 2.5);

        let exp = &output.experiments[0].sample;
        assert_eq!((exp.min, exp.median, exp.max), (10.0, 25.0, 40.0));
    }

    #[test]
    fn test_zero_experiment_mean_has_null_relative_values() {
        let output = JsonOutput::from_report(&report(&[-1.0, 0.0, 1.0]));
        assert_eq!(output.experiments[0].relative_effect, None);

        let json = output.to_json().unwrap();
        assert!(json.contains("\"relative_effect\": null"));
        assert!(json.contains("\"relative_critical_value\": null"));
    }

    #[test]
    fn test_json_serialization() {
        let json = JsonOutput::from_report(&report(&[10.0, 20.0, 30.0, 40.0]))
            .to_json()
            .unwrap();
        assert!(json.contains("\"format\": \"tinystat-json-v1\""));
        assert!(json.contains("\"name\": \"exp\""));
        assert!(json.contains("\"significant\": true"));
        assert!(json.contains("\"beta\""));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["confidence"], 80.0);
        assert_eq!(parsed["experiments"][0]["sample"]["n"], 4);
    }

    #[test]
    fn test_zero_variance_omits_beta() {
        let constant = Report::build(
            sample("a", &[1.0; 3]),
            vec![sample("b", &[2.0; 3])],
            95.0,
            TestVariant::Student,
        )
        .unwrap();
        let json = JsonOutput::from_report(&constant).to_json().unwrap();
        assert!(!json.contains("\"beta\""));
        assert!(json.contains("\"variant\": \"student\""));
        // Infinite effect size has no JSON number
        assert!(json.contains("\"effect_size\": null"));
    }
}
