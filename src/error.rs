//! Error taxonomy for the statistics core
//!
//! Every entry point validates its inputs eagerly and fails with one of these
//! variants instead of returning a silently wrong number. Nothing is retried:
//! the same inputs always produce the same error.

use thiserror::Error;

/// Errors for summarizing and comparing samples
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatError {
    #[error("Insufficient data: need at least {required} measurements, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Degenerate {sample} sample: need n >= 2 for a t-test, got n = {n}")]
    DegenerateSample { sample: &'static str, n: usize },

    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("{routine} did not converge within {iterations} iterations")]
    NonConvergence {
        routine: &'static str,
        iterations: usize,
    },
}

impl StatError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        StatError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatError>;
