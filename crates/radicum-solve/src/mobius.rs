//! Möbius (fractional-linear) transformations.
//!
//! The isolation engine keeps its working polynomial in a canonical
//! variable ranging over [0, +∞). A `Mobius` value accumulates the
//! substitutions applied along the way, so that bounds in the working
//! coordinate system can be mapped back to the original variable.

use radicum_rings::{Complex, RealField};

use crate::error::IsolateError;

/// The transformation M(x) = (a·x + b)/(c·x + d) over a real witness.
///
/// Invariant: a·d − b·c ≠ 0, checked at construction. Immutable; every
/// composition returns a new value.
#[derive(Clone, PartialEq, Debug)]
pub struct Mobius<T: RealField> {
    a: T,
    b: T,
    c: T,
    d: T,
}

impl<T: RealField> Mobius<T> {
    /// Creates a transformation from its four coefficients.
    ///
    /// # Errors
    ///
    /// Returns `IsolateError::InvalidTransformation` when a·d = b·c (the
    /// map would be constant or undefined everywhere).
    pub fn new(a: T, b: T, c: T, d: T) -> Result<Self, IsolateError> {
        let det = a.clone() * d.clone() - b.clone() * c.clone();
        if det.is_zero() || !det.is_finite() {
            return Err(IsolateError::InvalidTransformation);
        }
        Ok(Self { a, b, c, d })
    }

    /// The identity transformation x → x.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: T::one(),
            b: T::zero(),
            c: T::zero(),
            d: T::one(),
        }
    }

    /// The coefficient quadruple (a, b, c, d).
    #[must_use]
    pub fn coefficients(&self) -> (&T, &T, &T, &T) {
        (&self.a, &self.b, &self.c, &self.d)
    }

    /// Evaluates the transformation at a point.
    ///
    /// `x = +∞` is special-cased: the image is a/c, or a signed infinity
    /// when c = 0 (the map is then affine and non-degeneracy forces
    /// a ≠ 0).
    #[must_use]
    pub fn transform(&self, x: &T) -> T {
        if x.is_positive_infinity() {
            if self.c.is_zero() {
                return if self.a.signum() * self.d.signum() >= 0 {
                    T::positive_infinity()
                } else {
                    T::negative_infinity()
                };
            }
            return self.a.clone() / self.c.clone();
        }
        let num = self.a.clone() * x.clone() + self.b.clone();
        let den = self.c.clone() * x.clone() + self.d.clone();
        num / den
    }

    /// Composes with the substitution x → x + k.
    ///
    /// M(x + k) = (a·x + (a·k + b)) / (c·x + (c·k + d)); the determinant
    /// is unchanged.
    #[must_use]
    pub fn translate(&self, k: &T) -> Self {
        let next = Self {
            a: self.a.clone(),
            b: self.a.clone() * k.clone() + self.b.clone(),
            c: self.c.clone(),
            d: self.c.clone() * k.clone() + self.d.clone(),
        };
        next.debug_check();
        next
    }

    /// Composes with the substitution x → 1/(x + 1).
    ///
    /// M(1/(x+1)) = (b·x + (a + b)) / (d·x + (c + d)); the determinant
    /// only flips sign. This is the reflection step of the
    /// continued-fraction expansion.
    #[must_use]
    pub fn vincents_reduction(&self) -> Self {
        let next = Self {
            a: self.b.clone(),
            b: self.a.clone() + self.b.clone(),
            c: self.d.clone(),
            d: self.c.clone() + self.d.clone(),
        };
        next.debug_check();
        next
    }

    /// Composes with the substitution x → 1/(x + 1).
    ///
    /// Alias of [`Mobius::vincents_reduction`], named for the theorem the
    /// matching polynomial transform realizes.
    #[must_use]
    pub fn budans_theorem(&self) -> Self {
        self.vincents_reduction()
    }

    /// Composes with the substitution x → α·x.
    ///
    /// M(α·x) = (a·α·x + b) / (c·α·x + d); the determinant scales by α,
    /// so α must be non-zero (callers rescale by a positive root bound).
    #[must_use]
    pub fn scale(&self, alpha: &T) -> Self {
        let next = Self {
            a: self.a.clone() * alpha.clone(),
            b: self.b.clone(),
            c: self.c.clone() * alpha.clone(),
            d: self.d.clone(),
        };
        next.debug_check();
        next
    }

    fn debug_check(&self) {
        debug_assert!(
            !(self.a.clone() * self.d.clone() - self.b.clone() * self.c.clone()).is_zero(),
            "composition degenerated a Möbius transformation"
        );
    }
}

/// The transformation M(z) = (a·z + b)/(c·z + d) over complex pairs.
///
/// Mirrors the real variant minus the rescale composition and the point
/// at infinity (the complex plane here is unextended).
#[derive(Clone, PartialEq, Debug)]
pub struct ComplexMobius<T: RealField> {
    a: Complex<T>,
    b: Complex<T>,
    c: Complex<T>,
    d: Complex<T>,
}

impl<T: RealField> ComplexMobius<T> {
    /// Creates a transformation from its four complex coefficients.
    ///
    /// # Errors
    ///
    /// Returns `IsolateError::InvalidTransformation` when a·d = b·c.
    pub fn new(
        a: Complex<T>,
        b: Complex<T>,
        c: Complex<T>,
        d: Complex<T>,
    ) -> Result<Self, IsolateError> {
        let det = a.clone() * d.clone() - b.clone() * c.clone();
        if det.is_zero() {
            return Err(IsolateError::InvalidTransformation);
        }
        Ok(Self { a, b, c, d })
    }

    /// The identity transformation z → z.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: Complex::one(),
            b: Complex::zero(),
            c: Complex::zero(),
            d: Complex::one(),
        }
    }

    /// Evaluates the transformation at a point.
    #[must_use]
    pub fn transform(&self, z: &Complex<T>) -> Complex<T> {
        let num = self.a.clone() * z.clone() + self.b.clone();
        let den = self.c.clone() * z.clone() + self.d.clone();
        num / den
    }

    /// Composes with the substitution z → z + k.
    #[must_use]
    pub fn translate(&self, k: &Complex<T>) -> Self {
        Self {
            a: self.a.clone(),
            b: self.a.clone() * k.clone() + self.b.clone(),
            c: self.c.clone(),
            d: self.c.clone() * k.clone() + self.d.clone(),
        }
    }

    /// Composes with the substitution z → 1/(z + 1).
    #[must_use]
    pub fn vincents_reduction(&self) -> Self {
        Self {
            a: self.b.clone(),
            b: self.a.clone() + self.b.clone(),
            c: self.d.clone(),
            d: self.c.clone() + self.d.clone(),
        }
    }
}
