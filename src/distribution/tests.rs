// Cross-function checks for the distribution library
//
// Each primitive is unit tested in its own file; these tests exercise the
// relationships between them.

use super::*;

#[test]
fn test_incomplete_beta_boundaries_for_many_shapes() {
    for &a in &[0.05, 0.5, 1.0, 7.5, 250.0] {
        for &b in &[0.05, 0.5, 1.0, 7.5, 250.0] {
            assert_eq!(regularized_incomplete_beta(0.0, a, b).unwrap(), 0.0);
            assert_eq!(regularized_incomplete_beta(1.0, a, b).unwrap(), 1.0);
        }
    }
}

#[test]
fn test_incomplete_beta_is_monotone_in_x() {
    let mut previous = 0.0;
    for i in 1..=50 {
        let x = i as f64 / 50.0;
        let p = regularized_incomplete_beta(x, 2.5, 4.0).unwrap();
        assert!(p >= previous, "I_x not monotone at x = {x}");
        previous = p;
    }
}

#[test]
fn test_quantile_round_trip_across_degrees_of_freedom() {
    for &nu in &[0.5, 1.0, 2.0, 3.06, 7.425, 30.0, 1000.0, 1e6] {
        for &p in &[0.001, 0.025, 0.1, 0.4, 0.6, 0.9, 0.975, 0.9995] {
            let t = student_t_quantile(p, nu).unwrap();
            let back = student_t_cdf(t, nu).unwrap();
            assert!(
                (back - p).abs() < 1e-8,
                "round trip failed: nu={nu} p={p} t={t} cdf={back}"
            );
        }
    }
}

#[test]
fn test_quantile_strictly_increasing_in_p() {
    for &nu in &[1.0, 4.2, 60.0] {
        let mut previous = f64::NEG_INFINITY;
        for i in 1..100 {
            let p = i as f64 / 100.0;
            let t = student_t_quantile(p, nu).unwrap();
            assert!(t > previous, "not increasing at p={p}, nu={nu}");
            previous = t;
        }
    }
}

#[test]
fn test_t_quantile_dominates_normal_quantile() {
    // Heavier tails: |t_p| >= |z_p| for every finite nu
    for &p in &[0.9, 0.975, 0.999] {
        let z = normal_quantile(p).unwrap();
        for &nu in &[1.0, 5.0, 50.0] {
            assert!(student_t_quantile(p, nu).unwrap() >= z);
        }
    }
}

#[test]
fn test_t_cdf_converges_to_normal() {
    for &x in &[-2.0, -0.5, 0.7, 1.96] {
        let t = student_t_cdf(x, 1e7).unwrap();
        assert!((t - normal_cdf(x)).abs() < 1e-6);
    }
}
