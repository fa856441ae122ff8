//! Property-based tests for root isolation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use radicum_poly::Polynomial;

    use crate::bounds::{local_max_quadratic_lower, local_max_quadratic_upper};
    use crate::vincent::find_root_intervals;

    // Strategy for small sets of distinct positive integer roots
    fn distinct_positive_roots() -> impl Strategy<Value = Vec<f64>> {
        proptest::sample::subsequence(vec![1.0, 2.0, 3.0, 5.0, 7.0, 11.0], 1..=4)
    }

    // Strategy mixing in negative roots (invisible to the positive-axis engine)
    fn mixed_roots() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (
            proptest::sample::subsequence(vec![1.0, 2.0, 3.0, 5.0], 1..=3),
            proptest::sample::subsequence(vec![-1.0, -2.0, -4.0], 0..=3),
        )
    }

    proptest! {
        // Every constructed root lands in some returned interval, and the
        // count matches the number of distinct positive roots

        #[test]
        fn from_roots_round_trip(roots in distinct_positive_roots()) {
            let p = Polynomial::from_roots(&roots);
            let intervals = find_root_intervals(&p).unwrap();
            prop_assert_eq!(intervals.len(), roots.len());
            for r in &roots {
                prop_assert!(intervals.iter().any(|i| i.contains(r)), "root {} missed", r);
            }
        }

        #[test]
        fn negative_roots_are_invisible(pair in mixed_roots()) {
            let (positive, negative) = pair;
            let all: Vec<f64> = positive.iter().chain(negative.iter()).copied().collect();
            let p = Polynomial::from_roots(&all);
            let intervals = find_root_intervals(&p).unwrap();
            prop_assert_eq!(intervals.len(), positive.len());
            for r in &positive {
                prop_assert!(intervals.iter().any(|i| i.contains(r)));
            }
        }

        // Returned intervals never overlap in their interiors

        #[test]
        fn intervals_are_disjoint(roots in distinct_positive_roots()) {
            let p = Polynomial::from_roots(&roots);
            let intervals = find_root_intervals(&p).unwrap();
            for pair in intervals.windows(2) {
                prop_assert!(pair[0].upper() <= pair[1].lower());
            }
        }

        // Descartes' count bounds the positive-root count from above,
        // exact modulo an even defect

        #[test]
        fn descartes_parity(roots in distinct_positive_roots()) {
            let p = Polynomial::from_roots(&roots);
            let changes = p.sign_changes();
            prop_assert!(changes >= roots.len());
            prop_assert_eq!((changes - roots.len()) % 2, 0);
        }

        // Bound estimators bracket the true roots

        #[test]
        fn bounds_bracket_roots(roots in distinct_positive_roots()) {
            let p = Polynomial::from_roots(&roots);
            let upper = local_max_quadratic_upper(&p);
            let lower = local_max_quadratic_lower(&p);
            prop_assume!(p.degree().is_some_and(|d| d >= 2));
            let upper = upper.unwrap();
            let lower = lower.unwrap();
            for r in &roots {
                prop_assert!(upper > *r);
                prop_assert!(lower < *r);
            }
            prop_assert!(lower < upper);
        }

        // Exact rational roots come back as exact values

        #[test]
        fn integer_roots_are_exact(roots in distinct_positive_roots()) {
            let p = Polynomial::from_roots(&roots);
            let intervals = find_root_intervals(&p).unwrap();
            let exact: Vec<f64> = intervals
                .iter()
                .filter_map(|i| i.exact_value().copied())
                .collect();
            for r in &roots {
                prop_assert!(
                    exact.contains(r) || intervals.iter().any(|i| !i.is_exact_value() && i.contains(r))
                );
            }
        }
    }
}
