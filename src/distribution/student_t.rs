// Student's t distribution with real (possibly fractional) degrees of freedom
//
// The CDF goes through the regularized incomplete beta function:
//   P(T <= -|t|) = I_{ν/(ν+t²)}(ν/2, 1/2) / 2
// and the quantile is found by bisection on that CDF. No closed form exists
// for fractional ν, which is what Welch–Satterthwaite produces.

use super::beta::regularized_incomplete_beta;
use super::normal::{normal_cdf, normal_quantile};
use crate::error::{Result, StatError};

/// Absolute tolerance on the quantile (scaled up for |x| > 1)
pub const QUANTILE_TOLERANCE: f64 = 1e-9;

/// Maximum number of interval doublings while bracketing a quantile
const MAX_BRACKET_STEPS: usize = 64;

/// Maximum number of bisection halvings
const MAX_BISECTION_STEPS: usize = 300;

/// Cumulative distribution function of Student's t with `nu` degrees of freedom
///
/// `nu = +∞` is the standard normal distribution.
///
/// # Errors
/// `InvalidParameter` if `nu <= 0`; `NonConvergence` from the incomplete
/// beta function. `NaN` arguments yield `Ok(NaN)`.
///
/// # Example
/// ```
/// use tinystat::distribution::student_t_cdf;
///
/// // t with one degree of freedom is Cauchy: P(T <= 1) = 3/4
/// let p = student_t_cdf(1.0, 1.0).unwrap();
/// assert!((p - 0.75).abs() < 1e-12);
/// ```
pub fn student_t_cdf(x: f64, nu: f64) -> Result<f64> {
    if x.is_nan() || nu.is_nan() {
        return Ok(f64::NAN);
    }
    validate_nu(nu)?;

    if nu.is_infinite() {
        return Ok(normal_cdf(x));
    }
    if x.is_infinite() {
        return Ok(if x > 0.0 { 1.0 } else { 0.0 });
    }

    let x2 = x * x;
    if x2 < nu {
        // Near the center: I_{x²/(ν+x²)}(1/2, ν/2) is the mass in (-|x|, |x|)
        let inner = regularized_incomplete_beta(x2 / (nu + x2), 0.5, nu / 2.0)?;
        Ok(0.5 + (0.5 * inner).copysign(x))
    } else {
        let tail = 0.5 * regularized_incomplete_beta(nu / (nu + x2), nu / 2.0, 0.5)?;
        Ok(if x < 0.0 { tail } else { 1.0 - tail })
    }
}

/// Quantile function (inverse CDF) of Student's t with `nu` degrees of freedom
///
/// Bisection on [`student_t_cdf`], bracketed from the normal quantile (the t
/// quantile is always at least as far from zero). Stops once the interval is
/// within [`QUANTILE_TOLERANCE`] or can no longer shrink in `f64`.
///
/// # Errors
/// - `InvalidParameter` if `p ∉ [0, 1]` or `nu <= 0`
/// - `NonConvergence` if no bracket is found within 64 doublings (only for
///   extreme `p` at tiny `nu`)
///
/// # Example
/// ```
/// use tinystat::distribution::student_t_quantile;
///
/// let t = student_t_quantile(0.975, 10.0).unwrap();
/// assert!((t - 2.228_138_852).abs() < 1e-8);
/// ```
pub fn student_t_quantile(p: f64, nu: f64) -> Result<f64> {
    if p.is_nan() || nu.is_nan() {
        return Ok(f64::NAN);
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(StatError::invalid("p", p, "probability must be in [0, 1]"));
    }
    validate_nu(nu)?;

    if p == 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    if p == 1.0 {
        return Ok(f64::INFINITY);
    }
    if p == 0.5 {
        return Ok(0.0);
    }
    if nu.is_infinite() {
        return normal_quantile(p);
    }

    let (mut lo, mut hi) = bracket(p, nu)?;

    let mut mid = 0.5 * (lo + hi);
    for _ in 0..MAX_BISECTION_STEPS {
        mid = 0.5 * (lo + hi);
        if hi - lo <= QUANTILE_TOLERANCE * mid.abs().max(1.0) || mid == lo || mid == hi {
            break;
        }
        if student_t_cdf(mid, nu)? < p {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok(mid)
}

/// Find `[lo, hi]` with `cdf(lo) <= p <= cdf(hi)`
fn bracket(p: f64, nu: f64) -> Result<(f64, f64)> {
    let z = normal_quantile(p)?;

    if p > 0.5 {
        let (mut lo, mut hi) = (z, 2.0 * z + 1.0);
        for step in 0..MAX_BRACKET_STEPS {
            if student_t_cdf(hi, nu)? >= p {
                return Ok((lo, hi));
            }
            tracing::trace!(step, hi, nu, "expanding upper quantile bracket");
            lo = hi;
            hi *= 2.0;
        }
    } else {
        let (mut lo, mut hi) = (2.0 * z - 1.0, z);
        for step in 0..MAX_BRACKET_STEPS {
            if student_t_cdf(lo, nu)? <= p {
                return Ok((lo, hi));
            }
            tracing::trace!(step, lo, nu, "expanding lower quantile bracket");
            hi = lo;
            lo *= 2.0;
        }
    }

    Err(StatError::NonConvergence {
        routine: "student t quantile bracketing",
        iterations: MAX_BRACKET_STEPS,
    })
}

fn validate_nu(nu: f64) -> Result<()> {
    if nu <= 0.0 {
        return Err(StatError::invalid(
            "nu",
            nu,
            "degrees of freedom must be > 0",
        ));
    }
    Ok(())
}
