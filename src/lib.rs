//! tinystat - statistical comparison of measurement sets
//!
//! This library answers "is the experiment different from the control?" for
//! small samples such as repeated benchmark runs. It summarizes each sample,
//! compares them with Welch's (or Student's) two-sample t-test, and reports
//! the effect, the critical value, a p-value and a power term, with pure-Rust
//! Student t and normal distribution functions underneath.

pub mod boxplot;
pub mod cli;
pub mod comparison;
pub mod config;
pub mod csv_output;
pub mod distribution;
pub mod error;
pub mod json_output;
pub mod reader;
pub mod report;

pub use comparison::{
    compare, compare_all, compare_with, summarize, Difference, Summary, TestVariant,
};
pub use error::{Result, StatError};
