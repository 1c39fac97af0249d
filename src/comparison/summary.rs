// Streaming sample summary (count, mean, variance)

use crate::error::{Result, StatError};
use serde::{Deserialize, Serialize};

/// Statistical summary of a sample of measurements
///
/// Pure data: derived once from a sample and never tied back to it, so it can
/// be copied freely and shared across any number of comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of measurements
    pub n: usize,

    /// Arithmetic mean
    pub mean: f64,

    /// Sample variance (Bessel-corrected, divisor `n - 1`); 0 when `n == 1`
    pub variance: f64,
}

impl Summary {
    /// Build a summary from statistics computed elsewhere
    ///
    /// # Errors
    /// `InsufficientData` if `n == 0`; `InvalidParameter` if the mean is not
    /// finite or the variance is negative or not finite.
    ///
    /// # Example
    /// ```
    /// use tinystat::Summary;
    ///
    /// let s = Summary::new(4, 2.5, 1.0).unwrap();
    /// assert_eq!(s.std_dev(), 1.0);
    /// assert_eq!(s.std_err(), 0.5);
    /// ```
    pub fn new(n: usize, mean: f64, variance: f64) -> Result<Self> {
        if n == 0 {
            return Err(StatError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        if !mean.is_finite() {
            return Err(StatError::invalid("mean", mean, "must be finite"));
        }
        if !variance.is_finite() || variance < 0.0 {
            return Err(StatError::invalid(
                "variance",
                variance,
                "must be finite and >= 0",
            ));
        }
        Ok(Self { n, mean, variance })
    }

    /// Sample standard deviation
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Standard error of the mean
    pub fn std_err(&self) -> f64 {
        self.std_dev() / (self.n as f64).sqrt()
    }
}

/// Summarize a sample with Welford's single-pass algorithm
///
/// Numerically stable for data with a large offset and a small spread, where
/// the sum-of-squares formula cancels catastrophically. Does not modify or
/// retain `data`.
///
/// # Errors
/// `InsufficientData` for an empty sample; `InvalidParameter` if any
/// measurement is NaN or infinite.
///
/// # Example
/// ```
/// use tinystat::summarize;
///
/// let s = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(s.n, 4);
/// assert_eq!(s.mean, 2.5);
/// assert!((s.variance - 5.0 / 3.0).abs() < 1e-12);
/// ```
pub fn summarize(data: &[f64]) -> Result<Summary> {
    if data.is_empty() {
        return Err(StatError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let mut mean = 0.0;
    let mut m2 = 0.0;

    for (i, &x) in data.iter().enumerate() {
        if !x.is_finite() {
            return Err(StatError::invalid("measurement", x, "must be finite"));
        }
        let delta = x - mean;
        mean += delta / (i + 1) as f64;
        m2 += delta * (x - mean);
    }

    // Finite inputs near f64::MAX can still overflow the running moments
    if !mean.is_finite() {
        return Err(StatError::invalid(
            "mean",
            mean,
            "overflowed; measurements exceed the representable range",
        ));
    }
    if !m2.is_finite() {
        return Err(StatError::invalid(
            "variance",
            m2,
            "overflowed; measurements exceed the representable range",
        ));
    }

    let n = data.len();
    let variance = if n > 1 { m2 / (n - 1) as f64 } else { 0.0 };

    Ok(Summary {
        n,
        mean,
        // Rounding can leave m2 a hair below zero for constant data
        variance: variance.max(0.0),
    })
}
