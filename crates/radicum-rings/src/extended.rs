//! The arbitrary-precision extended-real witness.
//!
//! This module wraps `dashu::float::FBig` with the three special states the
//! capability contract requires: +∞, −∞, and an explicit undefined value.
//! Arithmetic is closed over the augmented domain:
//!
//! - `Undefined` absorbs every operation
//! - `+∞ + −∞` and `0 · ±∞` are `Undefined`
//! - division by zero yields a signed infinity (`0/0` is `Undefined`)
//! - comparisons involving `Undefined` are always false

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use dashu::float::FBig;

use crate::traits::RealField;

/// Working precision, in bits, attached to values built by `from_f64`.
pub const DEFAULT_PRECISION: usize = 128;

/// An arbitrary-precision real extended with ±∞ and an undefined state.
///
/// The special states are variants of the sum type, so no identity
/// comparison is ever involved: equality is structural on finite
/// magnitudes and tag equality otherwise.
#[derive(Clone, PartialEq)]
pub enum ExtendedReal {
    /// An ordinary finite value.
    Finite(FBig),
    /// Larger than every finite value.
    PositiveInfinity,
    /// Smaller than every finite value.
    NegativeInfinity,
    /// The result of an indeterminate operation.
    Undefined,
}

use ExtendedReal::{Finite, NegativeInfinity, PositiveInfinity, Undefined};

impl ExtendedReal {
    /// Creates a finite value from a machine float at the given precision.
    ///
    /// Non-finite floats map onto the matching special state.
    #[must_use]
    pub fn from_f64_with_precision(value: f64, precision: usize) -> Self {
        if value.is_nan() {
            return Undefined;
        }
        if value == f64::INFINITY {
            return PositiveInfinity;
        }
        if value == f64::NEG_INFINITY {
            return NegativeInfinity;
        }
        match FBig::try_from(value) {
            Ok(v) => Finite(v.with_precision(precision).value()),
            Err(_) => Undefined,
        }
    }

    /// Approximates this value as a machine float.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Finite(v) => v.to_f64().value(),
            PositiveInfinity => f64::INFINITY,
            NegativeInfinity => f64::NEG_INFINITY,
            Undefined => f64::NAN,
        }
    }

    /// Returns true if this is the undefined state.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Undefined)
    }

    /// The working precision of a finite value, in bits.
    fn precision_of(&self) -> usize {
        match self {
            Finite(v) => {
                let p = v.precision();
                if p == 0 {
                    DEFAULT_PRECISION
                } else {
                    p
                }
            }
            _ => DEFAULT_PRECISION,
        }
    }
}

impl From<FBig> for ExtendedReal {
    fn from(value: FBig) -> Self {
        Finite(value)
    }
}

impl Add for ExtendedReal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Undefined, _) | (_, Undefined) => Undefined,
            (PositiveInfinity, NegativeInfinity) | (NegativeInfinity, PositiveInfinity) => {
                Undefined
            }
            (PositiveInfinity, _) | (_, PositiveInfinity) => PositiveInfinity,
            (NegativeInfinity, _) | (_, NegativeInfinity) => NegativeInfinity,
            (Finite(a), Finite(b)) => Finite(a + b),
        }
    }
}

impl Sub for ExtendedReal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for ExtendedReal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Undefined, _) | (_, Undefined) => Undefined,
            (Finite(a), Finite(b)) => Finite(a * b),
            // one side infinite: zero annihilates to undefined, otherwise
            // the result is an infinity carrying the product of the signs
            (lhs, rhs) => {
                let (ls, rs) = (signum_tag(&lhs), signum_tag(&rhs));
                if ls == 0 || rs == 0 {
                    Undefined
                } else if ls * rs > 0 {
                    PositiveInfinity
                } else {
                    NegativeInfinity
                }
            }
        }
    }
}

impl Div for ExtendedReal {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Undefined, _) | (_, Undefined) => Undefined,
            (PositiveInfinity | NegativeInfinity, PositiveInfinity | NegativeInfinity) => {
                Undefined
            }
            (Finite(_), PositiveInfinity | NegativeInfinity) => Self::zero(),
            (lhs, Finite(b)) if b == FBig::<dashu::float::round::mode::Zero>::ZERO => {
                // signed-infinity limit convention; 0/0 is indeterminate
                match signum_tag(&lhs) {
                    0 => Undefined,
                    1 => PositiveInfinity,
                    _ => NegativeInfinity,
                }
            }
            (Finite(a), Finite(b)) => Finite(a / b),
            (lhs @ (PositiveInfinity | NegativeInfinity), Finite(b)) => {
                let s = signum_tag(&lhs) * fbig_signum(&b);
                if s > 0 {
                    PositiveInfinity
                } else {
                    NegativeInfinity
                }
            }
        }
    }
}

impl Neg for ExtendedReal {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Finite(v) => Finite(-v),
            PositiveInfinity => NegativeInfinity,
            NegativeInfinity => PositiveInfinity,
            Undefined => Undefined,
        }
    }
}

impl PartialOrd for ExtendedReal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        use std::cmp::Ordering;
        match (self, other) {
            (Undefined, _) | (_, Undefined) => None,
            (Finite(a), Finite(b)) => Some(a.cmp(b)),
            (PositiveInfinity, PositiveInfinity) | (NegativeInfinity, NegativeInfinity) => {
                Some(Ordering::Equal)
            }
            (PositiveInfinity, _) | (_, NegativeInfinity) => Some(Ordering::Greater),
            (NegativeInfinity, _) | (_, PositiveInfinity) => Some(Ordering::Less),
        }
    }
}

fn fbig_signum(v: &FBig) -> i8 {
    use std::cmp::Ordering;
    match v.cmp(&FBig::ZERO) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    }
}

fn signum_tag(v: &ExtendedReal) -> i8 {
    match v {
        Finite(x) => fbig_signum(x),
        PositiveInfinity => 1,
        NegativeInfinity => -1,
        Undefined => 0,
    }
}

impl RealField for ExtendedReal {
    // identities carry the default working precision: dashu refuses to
    // round an inexact quotient when a precision-free operand leaves the
    // result precision unlimited
    fn zero() -> Self {
        Finite(FBig::ZERO.with_precision(DEFAULT_PRECISION).value())
    }

    fn one() -> Self {
        Finite(FBig::ONE.with_precision(DEFAULT_PRECISION).value())
    }

    fn positive_infinity() -> Self {
        PositiveInfinity
    }

    fn negative_infinity() -> Self {
        NegativeInfinity
    }

    fn is_zero(&self) -> bool {
        matches!(self, Finite(v) if *v == FBig::<dashu::float::round::mode::Zero>::ZERO)
    }

    fn is_one(&self) -> bool {
        matches!(self, Finite(v) if *v == FBig::<dashu::float::round::mode::Zero>::ONE)
    }

    fn is_positive_infinity(&self) -> bool {
        matches!(self, PositiveInfinity)
    }

    fn is_negative_infinity(&self) -> bool {
        matches!(self, NegativeInfinity)
    }

    fn is_finite(&self) -> bool {
        matches!(self, Finite(_))
    }

    fn invert(&self) -> Self {
        Self::one() / self.clone()
    }

    fn floor(&self) -> Self {
        match self {
            Finite(v) => Finite(v.clone().floor()),
            other => other.clone(),
        }
    }

    fn rem_euclid(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Finite(a), Finite(b)) => {
                if *b == FBig::<dashu::float::round::mode::Zero>::ZERO {
                    return Undefined;
                }
                let q = (a.clone() / b.clone()).floor();
                Finite(a.clone() - b.clone() * q)
            }
            (Finite(_), PositiveInfinity | NegativeInfinity) => self.clone(),
            _ => Undefined,
        }
    }

    fn abs(&self) -> Self {
        match self {
            Finite(v) => {
                if fbig_signum(v) < 0 {
                    Finite(-v.clone())
                } else {
                    self.clone()
                }
            }
            PositiveInfinity | NegativeInfinity => PositiveInfinity,
            Undefined => Undefined,
        }
    }

    fn powf(&self, exponent: f64) -> Self {
        match self {
            // the only fractional-power consumer is the root-bound
            // heuristic, so a machine-float round-trip is precise enough
            Finite(_) => {
                let approx = self.to_f64().powf(exponent);
                Self::from_f64_with_precision(approx, self.precision_of())
            }
            PositiveInfinity => {
                if exponent > 0.0 {
                    PositiveInfinity
                } else if exponent < 0.0 {
                    Self::zero()
                } else {
                    Self::one()
                }
            }
            NegativeInfinity | Undefined => Undefined,
        }
    }

    fn signum(&self) -> i8 {
        signum_tag(self)
    }

    fn from_f64(value: f64) -> Self {
        Self::from_f64_with_precision(value, DEFAULT_PRECISION)
    }
}

impl fmt::Display for ExtendedReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finite(v) => write!(f, "{v}"),
            PositiveInfinity => write!(f, "+inf"),
            NegativeInfinity => write!(f, "-inf"),
            Undefined => write!(f, "undefined"),
        }
    }
}

impl fmt::Debug for ExtendedReal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
