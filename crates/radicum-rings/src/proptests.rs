//! Property-based tests for the extended-real witness.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::extended::ExtendedReal;
    use crate::traits::RealField;

    // Strategy for generating finite dyadic values (exact in both witnesses)
    fn dyadic() -> impl Strategy<Value = f64> {
        (-1000i64..1000i64, 0u32..8u32).prop_map(|(n, s)| n as f64 / f64::from(1u32 << s))
    }

    fn ext(v: f64) -> ExtendedReal {
        ExtendedReal::from_f64(v)
    }

    proptest! {
        // Field axioms on the finite fragment

        #[test]
        fn add_commutative(a in dyadic(), b in dyadic()) {
            prop_assert_eq!(ext(a) + ext(b), ext(b) + ext(a));
        }

        #[test]
        fn mul_commutative(a in dyadic(), b in dyadic()) {
            prop_assert_eq!(ext(a) * ext(b), ext(b) * ext(a));
        }

        #[test]
        fn add_identity(a in dyadic()) {
            prop_assert_eq!(ext(a) + ExtendedReal::zero(), ext(a));
        }

        #[test]
        fn mul_identity(a in dyadic()) {
            prop_assert_eq!(ext(a) * ExtendedReal::one(), ext(a));
        }

        #[test]
        fn neg_is_additive_inverse(a in dyadic()) {
            prop_assert!((ext(a) + (-ext(a))).is_zero());
        }

        // Agreement with the machine-float witness on exact inputs

        #[test]
        fn matches_f64_on_dyadics(a in dyadic(), b in dyadic()) {
            prop_assert_eq!((ext(a) + ext(b)).to_f64(), a + b);
            prop_assert_eq!((ext(a) * ext(b)).to_f64(), a * b);
            prop_assert_eq!((ext(a) - ext(b)).to_f64(), a - b);
        }

        #[test]
        fn ordering_matches_f64(a in dyadic(), b in dyadic()) {
            prop_assert_eq!(ext(a) < ext(b), a < b);
            prop_assert_eq!(ext(a) == ext(b), a == b);
        }

        // Undefined absorbs under every operation

        #[test]
        fn undefined_absorbs(a in dyadic()) {
            let u = ExtendedReal::Undefined;
            prop_assert!((u.clone() + ext(a)).is_undefined());
            prop_assert!((ext(a) * u.clone()).is_undefined());
            prop_assert!((u.clone() / ext(a)).is_undefined());
            prop_assert!(!(u.clone() < ext(a)));
            prop_assert!(!(u > ext(a)));
        }

        #[test]
        fn signum_agrees(a in dyadic()) {
            prop_assert_eq!(ext(a).signum(), RealField::signum(&a));
        }
    }
}
