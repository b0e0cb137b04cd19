//! Property-based tests for the numeric helpers.

use ct_core::{Tolerances, ensure_finite, nearly_equal};
use proptest::prelude::*;

proptest! {
    /// Every finite value compares nearly equal to itself.
    #[test]
    fn nearly_equal_is_reflexive(v in -1.0e9f64..1.0e9) {
        prop_assert!(nearly_equal(v, v, Tolerances::default()));
    }

    /// The comparison is symmetric in its arguments.
    #[test]
    fn nearly_equal_is_symmetric(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        let tol = Tolerances::default();
        prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
    }

    /// A relative perturbation well above the tolerance is detected.
    #[test]
    fn nearly_equal_rejects_coarse_perturbation(v in 1.0f64..1.0e6) {
        let tol = Tolerances::default();
        prop_assert!(!nearly_equal(v, v * (1.0 + 1.0e-6), tol));
    }

    /// Finite values pass through untouched.
    #[test]
    fn ensure_finite_is_identity_on_finite(v in -1.0e12f64..1.0e12) {
        prop_assert_eq!(ensure_finite(v, "value").unwrap(), v);
    }
}
