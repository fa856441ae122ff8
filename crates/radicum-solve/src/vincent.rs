//! The continued-fraction isolation engine.
//!
//! A worklist of (working polynomial, accumulated Möbius transform) pairs
//! is driven to exhaustion: entries with no sign change are discarded,
//! entries with exactly one sign change emit an isolating interval, and
//! everything else branches into a unit translation and a reflection of
//! (0, 1) onto [1, +∞). The worklist replaces recursion so the depth of
//! the expansion never touches the call stack.

use std::cmp::Ordering;

use rayon::prelude::*;

use radicum_poly::Polynomial;
use radicum_rings::RealField;

use crate::bounds::local_max_quadratic_upper;
use crate::error::IsolateError;
use crate::interval::Interval;
use crate::mobius::Mobius;

/// Tuning knobs for an isolation run.
#[derive(Clone, Debug)]
pub struct IsolatorConfig {
    /// Rescale the working polynomial by the Local-Max-Quadratic upper
    /// bound before searching, so the expansion starts near unit scale.
    /// Off by default; the emitted bounds change (the root set does not).
    pub scale_to_unit: bool,
    /// Worklist-pop budget. A repeated irrational root never reaches a
    /// sign-change count of 1, so the expansion must be fused.
    pub max_steps: usize,
}

impl Default for IsolatorConfig {
    fn default() -> Self {
        Self {
            scale_to_unit: false,
            max_steps: 100_000,
        }
    }
}

/// Counters accumulated across isolation runs.
#[derive(Clone, Debug, Default)]
pub struct IsolationStats {
    /// Sign-change counts taken on worklist entries.
    pub sign_change_tests: u64,
    /// Unit translations applied.
    pub translations: u64,
    /// Reflections applied.
    pub reflections: u64,
    /// Non-degenerate isolating intervals emitted.
    pub intervals_emitted: u64,
    /// Exact roots emitted.
    pub exact_roots: u64,
}

/// Worklist-driven isolator for the positive real axis.
#[derive(Debug, Default)]
pub struct VincentIsolator {
    config: IsolatorConfig,
    stats: IsolationStats,
}

impl VincentIsolator {
    /// Creates an isolator with the given configuration.
    #[must_use]
    pub fn new(config: IsolatorConfig) -> Self {
        Self {
            config,
            stats: IsolationStats::default(),
        }
    }

    /// Accumulated statistics.
    #[must_use]
    pub fn stats(&self) -> &IsolationStats {
        &self.stats
    }

    /// Isolates the non-negative real roots of a polynomial.
    ///
    /// Returns disjoint intervals, one per distinct root: a degenerate
    /// exact-value interval when the root is exactly representable, an
    /// open-ended ray when a single sign change survives to +∞. The list
    /// is sorted ascending by bounds.
    ///
    /// # Errors
    ///
    /// Returns `IsolateError::StepLimitExceeded` when the worklist budget
    /// runs out (no partial results are kept).
    pub fn isolate<T: RealField>(
        &mut self,
        p: &Polynomial<T>,
    ) -> Result<Vec<Interval<T>>, IsolateError> {
        let mut out = Vec::new();
        let Some(n) = p.degree() else {
            // the zero polynomial never enters the worklist
            return Ok(out);
        };
        if n == 0 {
            return Ok(out);
        }

        let mut q = if p.leading_coeff().is_some_and(|c| c.signum() < 0) {
            p.neg()
        } else {
            p.clone()
        };

        // a linear input has its one root in closed form
        if n == 1 {
            let root = -q.coeff(0) / q.coeff(1);
            if root.signum() >= 0 {
                self.stats.exact_roots += 1;
                out.push(Interval::point(root));
            }
            return Ok(out);
        }

        // divide out the root at x = 0, reported once
        let zeros = q.trailing_zero_terms();
        if zeros > 0 {
            self.stats.exact_roots += 1;
            out.push(Interval::point(T::zero()));
            q = q.div_xn(zeros);
        }

        if matches!(q.degree(), None | Some(0)) {
            return Ok(out);
        }

        self.stats.sign_change_tests += 1;
        if q.sign_changes() == 0 {
            return Ok(out);
        }

        let mut transform = Mobius::identity();
        if self.config.scale_to_unit {
            // an undefined or degenerate bound fails safe: keep the whole
            // [0, +∞) domain rather than narrow on a bad estimate
            if let Ok(alpha) = local_max_quadratic_upper(&q) {
                if alpha.is_finite() && alpha.signum() > 0 {
                    q = q.dilate(&alpha);
                    transform = transform.scale(&alpha);
                }
            }
        }

        let mut work = vec![(q, transform)];
        let mut steps = 0usize;

        while let Some((mut q, m)) = work.pop() {
            steps += 1;
            if steps > self.config.max_steps {
                return Err(IsolateError::StepLimitExceeded(self.config.max_steps));
            }

            // an exact root at the subinterval's origin, reported once
            let zeros = q.trailing_zero_terms();
            if zeros > 0 {
                self.stats.exact_roots += 1;
                out.push(Interval::point(m.transform(&T::zero())));
                q = q.div_xn(zeros);
            }

            self.stats.sign_change_tests += 1;
            let changes = q.sign_changes();
            if changes == 0 {
                continue;
            }
            if changes == 1 {
                self.stats.intervals_emitted += 1;
                out.push(Self::emit(&m));
                continue;
            }

            // translate: search [1, +∞) of the current frame
            let shifted = q.translate(&T::one());
            let shifted_m = m.translate(&T::one());
            self.stats.translations += 1;

            // reflect: search (0, 1); a zero constant term here is the
            // translate child's origin root, so deflate without reporting
            let mut reflected = q.budans_theorem();
            let reflected_m = m.vincents_reduction();
            self.stats.reflections += 1;
            let dup = reflected.trailing_zero_terms();
            if dup > 0 {
                reflected = reflected.div_xn(dup);
            }

            // depth-first, translate branch first
            if !reflected.is_zero() {
                work.push((reflected, reflected_m));
            }
            if !shifted.is_zero() {
                work.push((shifted, shifted_m));
            }
        }

        out.sort_by(compare_bounds);
        Ok(out)
    }

    /// Maps the canonical domain [0, +∞) through the accumulated
    /// transform.
    fn emit<T: RealField>(m: &Mobius<T>) -> Interval<T> {
        let at_zero = m.transform(&T::zero());
        let at_infinity = m.transform(&T::positive_infinity());
        Interval::new(at_zero, at_infinity, true, true)
    }
}

fn compare_bounds<T: RealField>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    match a.lower().partial_cmp(b.lower()) {
        Some(Ordering::Equal) | None => {
            a.upper().partial_cmp(b.upper()).unwrap_or(Ordering::Equal)
        }
        Some(order) => order,
    }
}

/// Isolates the non-negative real roots with the default configuration.
///
/// The primary entry point: one disjoint interval per distinct root.
///
/// # Errors
///
/// Returns `IsolateError::StepLimitExceeded` when the worklist budget runs
/// out.
pub fn find_root_intervals<T: RealField>(
    p: &Polynomial<T>,
) -> Result<Vec<Interval<T>>, IsolateError> {
    VincentIsolator::new(IsolatorConfig::default()).isolate(p)
}

/// Isolates every real root, negative side included.
///
/// Runs the positive-axis engine on p(x) and on p(−x), mirroring the
/// latter's intervals; an exact root at zero is reported once.
///
/// # Errors
///
/// Returns `IsolateError::StepLimitExceeded` when either run exhausts its
/// worklist budget.
pub fn isolate_all_roots<T: RealField>(
    p: &Polynomial<T>,
) -> Result<Vec<Interval<T>>, IsolateError> {
    let mut isolator = VincentIsolator::default();
    let mut out = isolator.isolate(p)?;

    let mirrored = isolator.isolate(&p.dilate(&-T::one()))?;
    for interval in mirrored {
        if interval.exact_value().is_some_and(RealField::is_zero) {
            continue;
        }
        out.push(Interval::new(
            -interval.upper().clone(),
            -interval.lower().clone(),
            interval.is_upper_closed(),
            interval.is_lower_closed(),
        ));
    }

    out.sort_by(compare_bounds);
    Ok(out)
}

/// Isolates a batch of independent polynomials in parallel.
///
/// Results are position-stable; observable behavior is identical to
/// calling [`find_root_intervals`] in a loop.
pub fn isolate_batch<T>(
    polys: &[Polynomial<T>],
    config: &IsolatorConfig,
) -> Vec<Result<Vec<Interval<T>>, IsolateError>>
where
    T: RealField + Send + Sync,
{
    polys
        .par_iter()
        .map(|p| VincentIsolator::new(config.clone()).isolate(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use radicum_rings::ExtendedReal;

    fn p(coeffs: &[f64]) -> Polynomial<f64> {
        Polynomial::new(coeffs.to_vec())
    }

    fn bounds_of(intervals: &[Interval<f64>]) -> Vec<(f64, f64)> {
        intervals
            .iter()
            .map(|i| (*i.lower(), *i.upper()))
            .collect()
    }

    #[test]
    fn cubic_with_two_positive_roots() {
        // x^3 - 7x + 7: positive roots near 1.36 and 1.69
        let intervals = find_root_intervals(&p(&[7.0, -7.0, 0.0, 1.0])).unwrap();
        assert_eq!(bounds_of(&intervals), vec![(1.0, 1.5), (1.5, 2.0)]);
        assert!(intervals.iter().all(|i| !i.is_exact_value()));
    }

    #[test]
    fn double_rational_root_is_exact() {
        // x^2 - 2x + 1 = (x - 1)^2
        let intervals = find_root_intervals(&p(&[1.0, -2.0, 1.0])).unwrap();
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].exact_value(), Some(&1.0));
    }

    #[test]
    fn quadratic_with_unit_split() {
        // x^2 - 2x + 0.5: roots 1 ± 1/√2
        let intervals = find_root_intervals(&p(&[0.5, -2.0, 1.0])).unwrap();
        assert_eq!(bounds_of(&intervals), vec![(0.0, 1.0), (1.0, f64::INFINITY)]);
        assert!(!intervals[1].is_upper_closed());
    }

    #[test]
    fn undercount_case_keeps_the_full_ray() {
        // x^2 - 2x: the stripped zero root plus a single sign change
        let intervals = find_root_intervals(&p(&[0.0, -2.0, 1.0])).unwrap();
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].exact_value(), Some(&0.0));
        assert_eq!(*intervals[1].lower(), 0.0);
        assert!(intervals[1].upper().is_positive_infinity());
    }

    #[test]
    fn quintic_with_stripped_zeros() {
        // x^5 - 3x^4 + 2x^3 = x^3 (x - 1)(x - 2)
        let intervals = find_root_intervals(&p(&[0.0, 0.0, 0.0, 2.0, -3.0, 1.0])).unwrap();
        assert_eq!(intervals.len(), 3);
        assert_eq!(intervals[0].exact_value(), Some(&0.0));
        assert_eq!(intervals[1].exact_value(), Some(&1.0));
        assert_eq!(*intervals[2].lower(), 1.0);
        assert!(intervals[2].upper().is_positive_infinity());
    }

    #[test]
    fn no_positive_roots_is_empty() {
        // x^2 + 3x + 2: both roots negative
        assert!(find_root_intervals(&p(&[2.0, 3.0, 1.0])).unwrap().is_empty());
        assert!(find_root_intervals(&Polynomial::<f64>::zero())
            .unwrap()
            .is_empty());
        assert!(find_root_intervals(&p(&[5.0])).unwrap().is_empty());
    }

    #[test]
    fn linear_input_takes_the_closed_form() {
        let intervals = find_root_intervals(&p(&[-2.0, 1.0])).unwrap();
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].exact_value(), Some(&2.0));

        // negative root: nothing on the positive axis
        assert!(find_root_intervals(&p(&[2.0, 1.0])).unwrap().is_empty());

        // negated leading coefficient is normalized away
        let intervals = find_root_intervals(&p(&[2.0, -1.0])).unwrap();
        assert_eq!(intervals[0].exact_value(), Some(&2.0));
    }

    #[test]
    fn roots_of_constructed_products_are_covered() {
        let roots = [0.5, 3.0, 5.0];
        let q = Polynomial::from_roots(&roots);
        let intervals = find_root_intervals(&q).unwrap();
        assert_eq!(intervals.len(), roots.len());
        for r in roots {
            assert!(
                intervals.iter().any(|i| i.contains(&r)),
                "root {r} not covered"
            );
        }
    }

    #[test]
    fn repeated_irrational_root_exhausts_the_budget() {
        // (x^2 - 2)^2: the sign-change count never reaches 1
        let q = p(&[4.0, 0.0, -4.0, 0.0, 1.0]);
        let mut isolator = VincentIsolator::new(IsolatorConfig {
            max_steps: 500,
            ..IsolatorConfig::default()
        });
        assert_eq!(
            isolator.isolate(&q).unwrap_err(),
            IsolateError::StepLimitExceeded(500)
        );
    }

    #[test]
    fn rescaled_search_finds_the_same_roots() {
        let mut isolator = VincentIsolator::new(IsolatorConfig {
            scale_to_unit: true,
            ..IsolatorConfig::default()
        });
        let intervals = isolator.isolate(&p(&[7.0, -7.0, 0.0, 1.0])).unwrap();
        assert_eq!(intervals.len(), 2);
        for root in [1.356_895_867_892_209_2, 1.692_021_471_138_879_5] {
            assert!(intervals.iter().any(|i| i.contains(&root)));
        }
    }

    #[test]
    fn stats_count_the_expansion() {
        let mut isolator = VincentIsolator::default();
        isolator.isolate(&p(&[7.0, -7.0, 0.0, 1.0])).unwrap();
        let stats = isolator.stats();
        assert!(stats.sign_change_tests > 0);
        assert!(stats.translations > 0);
        assert!(stats.reflections > 0);
        assert_eq!(stats.intervals_emitted, 2);
        assert_eq!(stats.exact_roots, 0);
    }

    #[test]
    fn all_roots_covers_the_negative_axis() {
        // x^3 - 7x + 7 also has a root near -3.05
        let intervals = isolate_all_roots(&p(&[7.0, -7.0, 0.0, 1.0])).unwrap();
        assert_eq!(intervals.len(), 3);
        assert!(intervals[0].contains(&-3.048_917_339_522_305_3));
        assert!(*intervals[0].upper() <= 0.0);

        // zero root reported once across both passes
        let intervals = isolate_all_roots(&p(&[0.0, -2.0, 1.0])).unwrap();
        assert_eq!(
            intervals
                .iter()
                .filter(|i| i.exact_value().is_some_and(|v| *v == 0.0))
                .count(),
            1
        );
    }

    #[test]
    fn batch_matches_sequential() {
        let polys = vec![
            p(&[7.0, -7.0, 0.0, 1.0]),
            p(&[1.0, -2.0, 1.0]),
            p(&[2.0, 3.0, 1.0]),
        ];
        let batch = isolate_batch(&polys, &IsolatorConfig::default());
        for (poly, result) in polys.iter().zip(&batch) {
            assert_eq!(result.as_ref().unwrap(), &find_root_intervals(poly).unwrap());
        }
    }

    #[test]
    fn extended_witness_runs_the_same_pipeline() {
        let coeffs = ExtendedReal::from_f64_slice(&[0.5, -2.0, 1.0]);
        let intervals = find_root_intervals(&Polynomial::new(coeffs)).unwrap();
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].lower().to_f64(), 0.0);
        assert_eq!(intervals[0].upper().to_f64(), 1.0);
        assert_eq!(intervals[1].lower().to_f64(), 1.0);
        assert!(intervals[1].upper().is_positive_infinity());
    }

    #[test]
    fn extended_witness_reports_exact_roots() {
        let coeffs = ExtendedReal::from_f64_slice(&[1.0, -2.0, 1.0]);
        let intervals = find_root_intervals(&Polynomial::new(coeffs)).unwrap();
        assert_eq!(intervals.len(), 1);
        assert!(intervals[0].is_exact_value());
        assert_eq!(intervals[0].lower().to_f64(), 1.0);
    }
}
