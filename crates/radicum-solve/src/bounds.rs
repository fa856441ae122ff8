//! Root-magnitude bound estimators.
//!
//! The engine needs a finite radius that dominates every positive real
//! root before it can rescale its search to unit scale. The estimators
//! here implement the Local-Max-Quadratic heuristic: each negative
//! coefficient must be dominated by the positive coefficients above it,
//! with every reuse of a positive coefficient halving the mass it can
//! contribute.

use radicum_poly::Polynomial;
use radicum_rings::RealField;

use crate::error::IsolateError;

/// Counts sign alternations among the non-zero coefficients.
///
/// Standalone Descartes' Rule of Signs utility; delegates to the single
/// shared counter on `Polynomial`.
#[must_use]
pub fn sign_changes<T: RealField>(p: &Polynomial<T>) -> usize {
    p.sign_changes()
}

fn check_preconditions<T: RealField>(p: &Polynomial<T>) -> Result<usize, IsolateError> {
    let Some(n) = p.degree() else {
        return Err(IsolateError::InvalidBoundInput("zero polynomial"));
    };
    if n < 2 {
        return Err(IsolateError::InvalidBoundInput("degree below 2"));
    }
    if p.coeff(n).signum() <= 0 {
        return Err(IsolateError::InvalidBoundInput(
            "leading coefficient not positive",
        ));
    }
    if !p.coeffs().iter().any(|c| c.signum() < 0) {
        return Err(IsolateError::InvalidBoundInput("no negative coefficient"));
    }
    Ok(n)
}

/// Estimates an upper bound on the positive real roots.
///
/// For every negative coefficient at index i, takes the minimum over the
/// positive coefficients at indices j > i of
/// `(−c_i · 2^t_j / c_j)^(1/(j−i))`, where `t_j` counts how often c_j has
/// been paired (successive halving of the reusable positive mass); the
/// bound is the maximum of those minima. Always dominates the largest
/// positive root.
///
/// # Errors
///
/// Returns `IsolateError::InvalidBoundInput` unless the polynomial has
/// degree ≥ 2, a positive leading coefficient, and at least one negative
/// coefficient.
pub fn local_max_quadratic_upper<T: RealField>(p: &Polynomial<T>) -> Result<T, IsolateError> {
    let n = check_preconditions(p)?;

    let mut times_used = vec![1i32; n + 1];
    let mut bound: Option<T> = None;

    for i in (0..n).rev() {
        if p.coeff(i).signum() >= 0 {
            continue;
        }
        let neg = -p.coeff(i);

        let mut minimum: Option<T> = None;
        for j in i + 1..=n {
            let pos = p.coeff(j);
            if pos.signum() <= 0 {
                continue;
            }
            let halved = pos / T::from_f64(2.0f64.powi(times_used[j]));
            times_used[j] += 1;

            #[allow(clippy::cast_precision_loss)]
            let radical = (neg.clone() / halved).powf(1.0 / (j - i) as f64);
            minimum = Some(match minimum {
                Some(m) => m.min_by(radical),
                None => radical,
            });
        }

        // the positive leading coefficient guarantees at least one pairing
        if let Some(m) = minimum {
            bound = Some(match bound {
                Some(b) => b.max_by(m),
                None => m,
            });
        }
    }

    bound.ok_or(IsolateError::InvalidBoundInput("no negative coefficient"))
}

/// Estimates a lower bound on the positive real roots.
///
/// Reverses the coefficient order (whose roots are the reciprocals of the
/// original's), applies the upper-bound estimator, and returns the
/// reciprocal of the result.
///
/// # Errors
///
/// Returns `IsolateError::InvalidBoundInput` when the reversed polynomial
/// falls outside the upper-bound estimator's precondition.
pub fn local_max_quadratic_lower<T: RealField>(p: &Polynomial<T>) -> Result<T, IsolateError> {
    let mut reversed = p.reversed();
    if reversed.leading_coeff().is_some_and(|c| c.signum() < 0) {
        reversed = reversed.neg();
    }
    Ok(local_max_quadratic_upper(&reversed)?.invert())
}
