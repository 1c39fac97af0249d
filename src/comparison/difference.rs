// Two-sample t-test between a control summary and an experiment summary

use super::summary::Summary;
use super::variant::TestVariant;
use crate::distribution::{normal_cdf, normal_quantile, student_t_cdf, student_t_quantile};
use crate::error::{Result, StatError};
use serde::{Deserialize, Serialize};

/// Statistical difference between a control and an experiment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difference {
    /// Absolute difference of the means, `|control.mean - experiment.mean|`
    pub effect: f64,

    /// Largest effect consistent with "no real difference" at this confidence
    pub critical_value: f64,

    /// Standardized effect: `effect` over the combined standard deviation
    pub effect_size: f64,

    /// Two-tailed probability of an effect at least this large under the null
    pub p_value: f64,

    /// Significance level, `1 - confidence / 100`
    pub alpha: f64,

    /// Normal-approximation power term `Φ(z - z_α) - Φ(-z - z_α)`
    ///
    /// Despite the name this is the statistical power, the probability of
    /// detecting an effect of this size, and not the Type II error rate.
    /// The Type II error rate is `1 - beta`.
    ///
    /// `None` when both samples have zero variance.
    pub beta: Option<f64>,

    /// Degrees of freedom of the reference t distribution
    pub degrees_of_freedom: f64,

    /// Observed t statistic, `effect / std_error`
    pub t_statistic: f64,

    /// Standard error of the difference of means
    pub std_error: f64,

    /// Mean of the control sample
    pub control_mean: f64,

    /// Mean of the experiment sample
    pub experiment_mean: f64,

    /// Test variant that produced this result
    pub variant: TestVariant,
}

impl Difference {
    /// Whether the difference is statistically significant
    ///
    /// Equivalent to `p_value < alpha`.
    pub fn significant(&self) -> bool {
        self.effect > self.critical_value
    }

    /// Confidence level in percent
    pub fn confidence(&self) -> f64 {
        (1.0 - self.alpha) * 100.0
    }

    /// Effect as a percentage of the experiment mean
    ///
    /// `None` when the experiment mean is zero or the ratio is not finite.
    pub fn relative_effect(&self) -> Option<f64> {
        percent_of(self.effect, self.experiment_mean)
    }

    /// Critical value as a percentage of the experiment mean
    ///
    /// `None` when the experiment mean is zero or the ratio is not finite.
    pub fn relative_critical_value(&self) -> Option<f64> {
        percent_of(self.critical_value, self.experiment_mean)
    }
}

fn percent_of(value: f64, base: f64) -> Option<f64> {
    if base == 0.0 {
        return None;
    }
    Some(value * 100.0 / base).filter(|v| v.is_finite())
}

/// Compare two summaries with Welch's t-test
///
/// `confidence` is a percentage in `(0, 100)`.
///
/// # Errors
/// - `InvalidParameter` if `confidence` is outside `(0, 100)` or a summary
///   carries a non-finite mean or a negative variance
/// - `DegenerateSample` if either summary has fewer than two measurements
/// - `NonConvergence` from the distribution functions
///
/// # Example
/// ```
/// use tinystat::{compare, summarize};
///
/// let control = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// let experiment = summarize(&[10.0, 20.0, 30.0, 40.0]).unwrap();
///
/// let d = compare(&control, &experiment, 80.0).unwrap();
/// assert_eq!(d.effect, 22.5);
/// assert!(d.significant());
/// assert!(d.p_value < d.alpha);
/// ```
pub fn compare(control: &Summary, experiment: &Summary, confidence: f64) -> Result<Difference> {
    compare_with(control, experiment, confidence, TestVariant::Welch)
}

/// Compare two summaries with an explicit t-test variant
///
/// Same contract as [`compare`]. With [`TestVariant::Student`] the variances
/// are pooled, degrees of freedom are `na + nb - 2`, and the effect size and
/// power use the pooled standard deviation (Cohen's d).
pub fn compare_with(
    control: &Summary,
    experiment: &Summary,
    confidence: f64,
    variant: TestVariant,
) -> Result<Difference> {
    let alpha = alpha_for(confidence)?;
    validate_summary(control, "control")?;
    validate_summary(experiment, "experiment")?;

    let (na, va) = (control.n as f64, control.variance);
    let (nb, vb) = (experiment.n as f64, experiment.variance);

    let (std_error, combined_sd, welch_df) = match variant {
        TestVariant::Welch => {
            let ua = va / na;
            let ub = vb / nb;
            // Welch–Satterthwaite in terms of the control's share of the
            // variance, so squaring cannot overflow or underflow
            let df = if ua + ub > 0.0 {
                let r = ua / (ua + ub);
                1.0 / (r * r / (na - 1.0) + (1.0 - r) * (1.0 - r) / (nb - 1.0))
            } else {
                na + nb - 2.0
            };
            ((ua + ub).sqrt(), (va / 2.0 + vb / 2.0).sqrt(), Some(df))
        }
        TestVariant::Student => {
            let pooled = (((na - 1.0) * va + (nb - 1.0) * vb) / (na + nb - 2.0)).sqrt();
            (pooled * (1.0 / na + 1.0 / nb).sqrt(), pooled, None)
        }
    };

    let effect = (control.mean - experiment.mean).abs();
    ensure_finite("effect", effect)?;
    ensure_finite("std_error", std_error)?;

    // No spread at all: any effect is exact, none is noise
    if std_error == 0.0 {
        let difference = Difference {
            effect,
            critical_value: 0.0,
            effect_size: if effect == 0.0 { 0.0 } else { f64::INFINITY },
            p_value: if effect == 0.0 { 1.0 } else { 0.0 },
            alpha,
            beta: None,
            degrees_of_freedom: na + nb - 2.0,
            t_statistic: if effect == 0.0 { 0.0 } else { f64::INFINITY },
            std_error,
            control_mean: control.mean,
            experiment_mean: experiment.mean,
            variant,
        };
        tracing::debug!(?variant, effect, "comparison of zero-variance samples");
        return Ok(difference);
    }

    let nu = welch_df.unwrap_or(na + nb - 2.0);
    ensure_finite("degrees_of_freedom", nu)?;

    // Two-tailed: half of alpha in each tail
    let t_critical = ensure_finite("t_critical", student_t_quantile(1.0 - alpha / 2.0, nu)?)?;
    let t_statistic = effect / std_error;
    let p_value = if t_statistic == 0.0 {
        1.0
    } else {
        let tail = ensure_finite("p_value", student_t_cdf(-t_statistic, nu)?)?;
        (2.0 * tail).min(1.0)
    };

    let critical_value = ensure_finite("critical_value", t_critical * std_error)?;
    let effect_size = effect / combined_sd;

    let z = effect / (combined_sd * (1.0 / na + 1.0 / nb).sqrt());
    let z_alpha = normal_quantile(1.0 - alpha / 2.0)?;
    let beta = normal_cdf(z - z_alpha) - normal_cdf(-z - z_alpha);

    tracing::debug!(
        ?variant,
        degrees_of_freedom = nu,
        t_statistic,
        t_critical,
        p_value,
        "compared samples"
    );

    Ok(Difference {
        effect,
        critical_value,
        effect_size,
        p_value,
        alpha,
        beta: Some(beta),
        degrees_of_freedom: nu,
        t_statistic,
        std_error,
        control_mean: control.mean,
        experiment_mean: experiment.mean,
        variant,
    })
}

/// Compare every experiment against the same control
///
/// Fails on the first experiment that cannot be compared.
pub fn compare_all(
    control: &Summary,
    experiments: &[Summary],
    confidence: f64,
    variant: TestVariant,
) -> Result<Vec<Difference>> {
    experiments
        .iter()
        .map(|experiment| compare_with(control, experiment, confidence, variant))
        .collect()
}

fn alpha_for(confidence: f64) -> Result<f64> {
    if !(confidence > 0.0 && confidence < 100.0) {
        return Err(StatError::invalid(
            "confidence",
            confidence,
            "must be a percentage in (0, 100)",
        ));
    }
    Ok(1.0 - confidence / 100.0)
}

/// Intermediate results outside the f64 range are errors, never NaN output
fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StatError::invalid(
            name,
            value,
            "is not finite; measurements exceed the representable range",
        ))
    }
}

fn validate_summary(summary: &Summary, sample: &'static str) -> Result<()> {
    if summary.n < 2 {
        return Err(StatError::DegenerateSample {
            sample,
            n: summary.n,
        });
    }
    if !summary.mean.is_finite() {
        return Err(StatError::invalid("mean", summary.mean, "must be finite"));
    }
    if !summary.variance.is_finite() || summary.variance < 0.0 {
        return Err(StatError::invalid(
            "variance",
            summary.variance,
            "must be finite and >= 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::summarize;

    #[test]
    fn test_alpha_for() {
        assert!((alpha_for(95.0).unwrap() - 0.05).abs() < 1e-15);
        assert!(alpha_for(0.0).is_err());
        assert!(alpha_for(100.0).is_err());
        assert!(alpha_for(f64::NAN).is_err());
        assert!(alpha_for(-5.0).is_err());
    }

    #[test]
    fn test_rejects_degenerate_control() {
        let one = summarize(&[1.0]).unwrap();
        let many = summarize(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(
            compare(&one, &many, 95.0),
            Err(StatError::DegenerateSample {
                sample: "control",
                n: 1
            })
        );
        assert_eq!(
            compare(&many, &one, 95.0),
            Err(StatError::DegenerateSample {
                sample: "experiment",
                n: 1
            })
        );
    }

    #[test]
    fn test_rejects_handmade_invalid_summary() {
        let bad = Summary {
            n: 5,
            mean: 1.0,
            variance: -1.0,
        };
        let good = summarize(&[1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            compare(&good, &bad, 95.0),
            Err(StatError::InvalidParameter {
                name: "variance",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_variance_identical() {
        let s = summarize(&[700.0; 6]).unwrap();
        let d = compare(&s, &s, 95.0).unwrap();
        assert_eq!(d.effect, 0.0);
        assert_eq!(d.p_value, 1.0);
        assert_eq!(d.beta, None);
        assert!(!d.significant());
    }

    #[test]
    fn test_zero_variance_different() {
        let a = summarize(&[1.0; 4]).unwrap();
        let b = summarize(&[2.0; 4]).unwrap();
        let d = compare(&a, &b, 95.0).unwrap();
        assert_eq!(d.effect, 1.0);
        assert_eq!(d.p_value, 0.0);
        assert!(d.significant());
        assert!(d.p_value < d.alpha);
        assert_eq!(d.degrees_of_freedom, 6.0);
    }

    #[test]
    fn test_one_constant_sample() {
        // Welch is still defined when only one side has zero variance
        let a = summarize(&[50.0, 200.0, 150.0, 400.0, 750.0, 400.0, 150.0]).unwrap();
        let b = summarize(&[700.0; 6]).unwrap();
        let d = compare(&a, &b, 95.0).unwrap();
        assert!((d.degrees_of_freedom - 6.0).abs() < 1e-12);
        assert!(d.significant());
    }

    #[test]
    fn test_relative_values() {
        let a = summarize(&[50.0, 200.0, 150.0, 400.0, 750.0, 400.0, 150.0]).unwrap();
        let b = summarize(&[700.0; 6]).unwrap();
        let d = compare_with(&a, &b, 95.0, TestVariant::Student).unwrap();
        assert!((d.relative_effect().unwrap() - 57.142_857_142_857_14).abs() < 1e-9);
        assert!((d.confidence() - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_beta_grows_with_effect() {
        // Power: no chance to detect a null effect, near certain for a huge one
        let a = summarize(&[1.0, 2.0, 3.0]).unwrap();
        let near = summarize(&[2.0, 3.0, 4.0]).unwrap();
        let far = summarize(&[101.0, 102.0, 103.0]).unwrap();

        assert_eq!(compare(&a, &a, 95.0).unwrap().beta, Some(0.0));
        let small = compare(&a, &near, 95.0).unwrap().beta.unwrap();
        let large = compare(&a, &far, 95.0).unwrap().beta.unwrap();
        assert!(small > 0.0 && small < 0.5, "beta = {small}");
        assert!(large > 0.999, "beta = {large}");
    }

    #[test]
    fn test_compare_all() {
        let control = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let experiments = [
            summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
            summarize(&[10.0, 20.0, 30.0, 40.0]).unwrap(),
        ];
        let results = compare_all(&control, &experiments, 80.0, TestVariant::Welch).unwrap();
        assert_eq!(results.len(), 2);
        assert!(!results[0].significant());
        assert!(results[1].significant());
    }

    #[test]
    fn test_relative_values_zero_experiment_mean() {
        let a = summarize(&[1.0, 2.0, 3.0]).unwrap();
        let b = summarize(&[-1.0, 0.0, 1.0]).unwrap();
        let d = compare(&a, &b, 95.0).unwrap();
        assert_eq!(d.relative_effect(), None);
        assert_eq!(d.relative_critical_value(), None);
    }

    #[test]
    fn test_degrees_of_freedom_scale_invariant() {
        let unit = compare(
            &summarize(&[1.0, 3.0, 2.0]).unwrap(),
            &summarize(&[1.0, 5.0, 2.0]).unwrap(),
            95.0,
        )
        .unwrap();
        assert!((unit.degrees_of_freedom - 2.876_404_494_382_022).abs() < 1e-9);

        for scale in [1e150, 1e-150] {
            let a: Vec<f64> = [1.0, 3.0, 2.0].iter().map(|x| x * scale).collect();
            let b: Vec<f64> = [1.0, 5.0, 2.0].iter().map(|x| x * scale).collect();
            let d = compare(&summarize(&a).unwrap(), &summarize(&b).unwrap(), 95.0).unwrap();

            assert!(
                (d.degrees_of_freedom - unit.degrees_of_freedom).abs() < 1e-9,
                "scale {scale}: df = {}",
                d.degrees_of_freedom
            );
            assert!((d.p_value - unit.p_value).abs() < 1e-9, "scale {scale}");
            assert!((d.critical_value / scale - unit.critical_value).abs() < 1e-9);
            assert!(d.critical_value >= 0.0);
        }
    }

    #[test]
    fn test_overflowing_standard_error_is_an_error() {
        let a = Summary::new(2, 0.0, f64::MAX).unwrap();
        let b = Summary::new(2, 1.0, f64::MAX).unwrap();
        // Pooled variance sum overflows
        assert!(matches!(
            compare_with(&a, &b, 95.0, TestVariant::Student),
            Err(StatError::InvalidParameter {
                name: "std_error",
                ..
            })
        ));
    }

    #[test]
    fn test_overflowing_effect_is_an_error() {
        let a = Summary::new(3, -f64::MAX, 1.0).unwrap();
        let b = Summary::new(3, f64::MAX, 1.0).unwrap();
        assert!(matches!(
            compare_with(&a, &b, 95.0, TestVariant::Student),
            Err(StatError::InvalidParameter { name: "effect", .. })
        ));
    }

    #[test]
    fn test_compare_all_propagates_first_error() {
        let control = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let experiments = [summarize(&[5.0]).unwrap()];
        assert!(compare_all(&control, &experiments, 80.0, TestVariant::Welch).is_err());
    }
}
