//! Property-based tests for polynomial arithmetic.
//!
//! Coefficients are drawn from small integers embedded in f64, so every
//! operation below is exact and the ring axioms can be asserted with
//! structural equality.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;
    use radicum_rings::RealField;

    // Strategy for generating small integer-valued coefficients
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i64..100i64).prop_map(|n| n as f64)
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial<f64>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::new)
    }

    // Strategy for generating monic divisors (division stays exact)
    fn monic_poly() -> impl Strategy<Value = Polynomial<f64>> {
        proptest::collection::vec(small_coeff(), 1..=3).prop_map(|mut coeffs| {
            coeffs.push(1.0);
            Polynomial::new(coeffs)
        })
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn add_identity(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn mul_identity(a in small_poly()) {
            let one = Polynomial::one();
            prop_assert_eq!(a.mul(&one), a.clone());
            prop_assert_eq!(one.mul(&a), a);
        }

        #[test]
        fn sub_self_is_zero(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
        }

        // Division reconstructs the dividend

        #[test]
        fn div_rem_reconstruction(a in small_poly(), d in monic_poly()) {
            let (q, r) = a.div_rem(&d).unwrap();
            prop_assert!(r.degree() < d.degree());
            prop_assert_eq!(q.mul(&d).add(&r), a);
        }

        // Degree arithmetic

        #[test]
        fn product_degree_bounded(a in small_poly(), b in small_poly()) {
            if let (Some(da), Some(db), Some(dp)) = (a.degree(), b.degree(), a.mul(&b).degree()) {
                prop_assert!(dp <= da + db);
            }
        }

        // Calculus round-trip

        #[test]
        fn integral_then_derivative(a in small_poly()) {
            prop_assert_eq!(a.integral().derivative(), a);
        }

        // Evaluation agrees with composition at a point

        #[test]
        fn compose_evaluates_pointwise(a in small_poly(), b in small_poly(), x in -5i64..5i64) {
            let x = x as f64;
            prop_assert_eq!(a.compose(&b).eval(&x), a.eval(&b.eval(&x)));
        }

        #[test]
        fn translate_evaluates_shifted(a in small_poly(), k in -5i64..5i64, x in -5i64..5i64) {
            let (k, x) = (k as f64, x as f64);
            prop_assert_eq!(a.translate(&k).eval(&x), a.eval(&(x + k)));
        }

        // Reversal is an involution on zero-constant-free polynomials

        #[test]
        fn reversal_involution(a in small_poly()) {
            prop_assume!(!a.coeff(0).is_zero());
            prop_assert_eq!(a.reversed().reversed(), a);
        }
    }
}
