//! The numeric capability trait.
//!
//! This module defines the arithmetic contract that every coefficient
//! representation must satisfy for the polynomial algebra and the
//! isolation engine to run over it.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A field-like real arithmetic capability, extended with infinities.
///
/// # Laws
///
/// - Addition and multiplication are commutative with identities `zero()`
///   and `one()`
/// - Every operation is total: division by zero yields the witness's
///   signaling value (±∞ or the undefined sentinel), never a panic
/// - Comparisons involving an undefined value are always false
///   (`partial_cmp` returns `None`)
///
/// The trait is the polymorphism seam of the whole workspace: no consumer
/// branches on the concrete representation.
pub trait RealField:
    Clone
    + PartialEq
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// The value larger than every finite value.
    fn positive_infinity() -> Self;

    /// The value smaller than every finite value.
    fn negative_infinity() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Returns true if this is `positive_infinity()`.
    fn is_positive_infinity(&self) -> bool;

    /// Returns true if this is `negative_infinity()`.
    fn is_negative_infinity(&self) -> bool;

    /// Returns true for ordinary finite values (not ±∞, not undefined).
    fn is_finite(&self) -> bool;

    /// The multiplicative inverse, `1/x`.
    ///
    /// Inverting zero yields the witness's division-by-zero value.
    fn invert(&self) -> Self;

    /// The largest integral value not greater than `self`.
    fn floor(&self) -> Self;

    /// The least non-negative remainder of `self` modulo `rhs`.
    fn rem_euclid(&self, rhs: &Self) -> Self;

    /// The absolute value.
    fn abs(&self) -> Self;

    /// Raises `self` to an arbitrary real exponent.
    ///
    /// Fractional exponents are required by the root-bound estimators
    /// (k-th roots); witnesses may route the computation through machine
    /// floats, since the only consumer is a heuristic bound.
    fn powf(&self, exponent: f64) -> Self;

    /// The sign of the value: -1, 0, or +1; 0 also for undefined values.
    fn signum(&self) -> i8;

    /// Converts a machine float into this representation.
    fn from_f64(value: f64) -> Self;

    /// Converts a slice of machine floats into this representation.
    fn from_f64_slice(values: &[f64]) -> Vec<Self> {
        values.iter().map(|&v| Self::from_f64(v)).collect()
    }

    /// The larger of `self` and `other`.
    ///
    /// Keeps `self` when the comparison is undecidable (undefined operand).
    #[must_use]
    fn max_by(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    /// The smaller of `self` and `other`.
    ///
    /// Keeps `self` when the comparison is undecidable (undefined operand).
    #[must_use]
    fn min_by(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
}
