// Distribution Math Library
//
// Pure numerical primitives used by the comparison engine:
// - Regularized incomplete beta function (continued fraction, Lentz)
// - Student's t CDF and quantile for real-valued degrees of freedom
// - Standard normal CDF (erfc) and quantile (AS 241)
//
// Every iterative routine is capped. Out-of-domain parameters are errors;
// NaN arguments propagate as NaN.

mod beta;
mod normal;
mod student_t;

pub use beta::{regularized_incomplete_beta, MAX_ITERATIONS};
pub use normal::{normal_cdf, normal_quantile};
pub use student_t::{student_t_cdf, student_t_quantile, QUANTILE_TOLERANCE};

#[cfg(test)]
mod tests;
