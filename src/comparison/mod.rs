// Comparison Engine
//
// Two entry points, both pure and synchronous:
// - summarize(data) -> Summary      (Welford's single-pass mean/variance)
// - compare(control, experiment, confidence) -> Difference
//
// compare() runs Welch's unequal-variance t-test by default; compare_with()
// selects Student's pooled-variance test instead. A control Summary is Copy
// and read-only, so one control can be compared against any number of
// experiments concurrently.
//
// Scientific Foundation:
// [1] Welch, B. L. (1947). The generalization of "Student's" problem when
//     several different population variances are involved. Biometrika 34.
// [2] Welford, B. P. (1962). Note on a method for calculating corrected sums
//     of squares and products. Technometrics 4(3).

mod difference;
mod summary;
mod variant;

pub use difference::{compare, compare_all, compare_with, Difference};
pub use summary::{summarize, Summary};
pub use variant::TestVariant;
