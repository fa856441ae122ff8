//! Complex pairs over a real witness.
//!
//! Polynomial evaluation at a complex argument and the complex Möbius
//! variant both need a pair type that stays generic over the capability
//! trait, so the pair is built from `RealField` operations rather than a
//! concrete float.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::traits::RealField;

/// A complex value `re + im·i` over any real witness.
#[derive(Clone, PartialEq, Debug)]
pub struct Complex<T: RealField> {
    /// Real part.
    pub re: T,
    /// Imaginary part.
    pub im: T,
}

impl<T: RealField> Complex<T> {
    /// Creates a complex value from its parts.
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Embeds a real value.
    pub fn from_real(re: T) -> Self {
        Self {
            re,
            im: T::zero(),
        }
    }

    /// The additive identity.
    pub fn zero() -> Self {
        Self::from_real(T::zero())
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        Self::from_real(T::one())
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Self {
            re: T::zero(),
            im: T::one(),
        }
    }

    /// Returns true if both parts are zero.
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// The complex conjugate.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self {
            re: self.re.clone(),
            im: -self.im.clone(),
        }
    }

    /// The squared modulus `re² + im²`.
    pub fn modulus_squared(&self) -> T {
        self.re.clone() * self.re.clone() + self.im.clone() * self.im.clone()
    }
}

impl<T: RealField> Add for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<T: RealField> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<T: RealField> Mul for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let re = self.re.clone() * rhs.re.clone() - self.im.clone() * rhs.im.clone();
        let im = self.re * rhs.im + self.im * rhs.re;
        Self { re, im }
    }
}

impl<T: RealField> Div for Complex<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let denom = rhs.modulus_squared();
        let num = self * rhs.conjugate();
        Self {
            re: num.re / denom.clone(),
            im: num.im / denom,
        }
    }
}

impl<T: RealField> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}
