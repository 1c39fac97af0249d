// Which two-sample t-test a comparison uses

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-sample t-test variant
///
/// Welch's test is the default: it does not assume equal population
/// variances and keeps its Type I error rate when sample sizes or variances
/// differ sharply. Student's pooled test is kept for reproducing results that
/// were computed with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TestVariant {
    /// Unequal variances, Welch–Satterthwaite degrees of freedom
    #[default]
    Welch,
    /// Pooled variance, `na + nb - 2` degrees of freedom
    Student,
}

impl TestVariant {
    /// Human-readable test name
    pub fn name(self) -> &'static str {
        match self {
            TestVariant::Welch => "Welch's t",
            TestVariant::Student => "Student's t",
        }
    }
}

impl fmt::Display for TestVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
