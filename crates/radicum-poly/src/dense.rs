//! Dense univariate polynomials.
//!
//! Coefficients are stored in ascending degree order and trimmed so the
//! highest-index coefficient is non-zero; the zero polynomial is the empty
//! sequence. Every operation returns a new value.

use thiserror::Error;

use radicum_rings::{Complex, RealField};

/// Errors produced by polynomial arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// Long division by the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZeroPolynomial,
}

/// A dense univariate polynomial over a numeric capability witness.
///
/// Invariant: no trailing (highest-degree) zero coefficients; the zero
/// polynomial has an empty coefficient vector, so a "degree-0 polynomial
/// with coefficient 0" cannot be represented.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial<T: RealField> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<T>,
}

impl<T: RealField> Polynomial<T> {
    /// Creates a polynomial from coefficients, trimming trailing zeros.
    #[must_use]
    pub fn new(mut coeffs: Vec<T>) -> Self {
        while coeffs.last().is_some_and(RealField::is_zero) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(T::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![T::zero(), T::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: T, n: usize) -> Self {
        let mut coeffs = vec![T::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Creates ∏(x − rᵢ) from a list of roots.
    #[must_use]
    pub fn from_roots(roots: &[T]) -> Self {
        let mut p = Self::one();
        for r in roots {
            p = p.mul(&Self::new(vec![-r.clone(), T::one()]));
        }
        p
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true if this is the constant polynomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&T> {
        self.coeffs.last()
    }

    /// Returns the coefficient of x^i (zero beyond the degree).
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    /// Returns all coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);
        for i in 0..len {
            result.push(self.coeff(i) + other.coeff(i));
        }
        Self::new(result)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Adds a scalar to the constant term.
    #[must_use]
    pub fn add_scalar(&self, c: &T) -> Self {
        if self.is_zero() {
            return Self::constant(c.clone());
        }
        let mut coeffs = self.coeffs.clone();
        coeffs[0] = coeffs[0].clone() + c.clone();
        Self::new(coeffs)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &T) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Multiplies two polynomials.
    ///
    /// Selects schoolbook below the Karatsuba threshold.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        if self.is_one() {
            return other.clone();
        }
        if other.is_one() {
            return self.clone();
        }

        if self.coeffs.len().max(other.coeffs.len()) < 32 {
            self.mul_schoolbook(other)
        } else {
            self.mul_karatsuba(other)
        }
    }

    /// Schoolbook multiplication: O(n²).
    fn mul_schoolbook(&self, other: &Self) -> Self {
        // reachable with empty operands through Karatsuba's half-splits
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![T::zero(); n + m - 1];

        for i in 0..n {
            for j in 0..m {
                result[i + j] =
                    result[i + j].clone() + self.coeffs[i].clone() * other.coeffs[j].clone();
            }
        }

        Self::new(result)
    }

    /// Karatsuba multiplication: O(n^1.58).
    fn mul_karatsuba(&self, other: &Self) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();

        if n < 32 || m < 32 {
            return self.mul_schoolbook(other);
        }

        let size = n.max(m).next_power_of_two();
        let half = size / 2;

        let mut a_coeffs = self.coeffs.clone();
        let mut b_coeffs = other.coeffs.clone();
        a_coeffs.resize(size, T::zero());
        b_coeffs.resize(size, T::zero());

        // Split: a = a0 + a1*x^half, b = b0 + b1*x^half
        let a0 = Self::new(a_coeffs[..half].to_vec());
        let a1 = Self::new(a_coeffs[half..].to_vec());
        let b0 = Self::new(b_coeffs[..half].to_vec());
        let b1 = Self::new(b_coeffs[half..].to_vec());

        // a*b = z2*x^(2*half) + z1*x^half + z0
        // where z0 = a0*b0, z2 = a1*b1, z1 = (a0+a1)*(b0+b1) - z0 - z2
        let z0 = a0.mul_karatsuba(&b0);
        let z2 = a1.mul_karatsuba(&b1);
        let z1 = a0.add(&a1).mul_karatsuba(&b0.add(&b1)).sub(&z0).sub(&z2);

        let mut result = vec![T::zero(); 2 * size - 1];
        for (i, c) in z0.coeffs.iter().enumerate() {
            result[i] = result[i].clone() + c.clone();
        }
        for (i, c) in z1.coeffs.iter().enumerate() {
            result[i + half] = result[i + half].clone() + c.clone();
        }
        for (i, c) in z2.coeffs.iter().enumerate() {
            result[i + 2 * half] = result[i + 2 * half].clone() + c.clone();
        }

        Self::new(result)
    }

    /// Polynomial long division.
    ///
    /// Returns `(quotient, remainder)` with `degree(remainder)` strictly
    /// below `degree(divisor)`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZeroPolynomial` if `divisor` is
    /// the zero polynomial.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolynomialError> {
        let Some(dd) = divisor.degree() else {
            return Err(PolynomialError::DivisionByZeroPolynomial);
        };
        let Some(nd) = self.degree() else {
            return Ok((Self::zero(), Self::zero()));
        };
        if nd < dd {
            return Ok((Self::zero(), self.clone()));
        }

        let lead = divisor.coeffs[dd].clone();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![T::zero(); nd - dd + 1];

        for k in (0..=nd - dd).rev() {
            let factor = rem[k + dd].clone() / lead.clone();
            quot[k] = factor.clone();
            // the pivot cancels exactly; write the zero rather than trust
            // the subtraction to round to it
            rem[k + dd] = T::zero();
            for i in 0..dd {
                rem[k + i] = rem[k + i].clone() - factor.clone() * divisor.coeffs[i].clone();
            }
        }

        Ok((Self::new(quot), Self::new(rem)))
    }

    /// Evaluates at a scalar by Horner's rule.
    ///
    /// The fold order `((c_n·x + c_{n−1})·x + …)·x + c_0` is load-bearing
    /// for float stability and is preserved exactly.
    #[must_use]
    pub fn eval(&self, x: &T) -> T {
        let mut result = T::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Evaluates at a complex argument by Horner's rule.
    #[must_use]
    pub fn eval_complex(&self, x: &Complex<T>) -> Complex<T> {
        let mut result = Complex::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + Complex::from_real(c.clone());
        }
        result
    }

    /// Evaluates at a polynomial argument by Horner's rule (composition).
    #[must_use]
    pub fn compose(&self, x: &Self) -> Self {
        let mut result = Self::zero();
        for c in self.coeffs.iter().rev() {
            result = result.mul(x).add_scalar(c);
        }
        result
    }

    /// Computes the formal derivative.
    ///
    /// The derivative of a degree ≤ 0 polynomial is the zero polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }
        let mut result = Vec::with_capacity(self.coeffs.len() - 1);
        for (i, c) in self.coeffs.iter().skip(1).enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let factor = T::from_f64((i + 1) as f64);
            result.push(c.clone() * factor);
        }
        Self::new(result)
    }

    /// Computes the antiderivative with constant of integration 0.
    #[must_use]
    pub fn integral(&self) -> Self {
        let mut result = Vec::with_capacity(self.coeffs.len() + 1);
        result.push(T::zero());
        for (i, c) in self.coeffs.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let divisor = T::from_f64((i + 1) as f64);
            result.push(c.clone() / divisor);
        }
        Self::new(result)
    }

    /// Counts sign alternations among the non-zero coefficients.
    ///
    /// By Descartes' Rule of Signs the count bounds the number of positive
    /// real roots from above, exact modulo an even defect. The empty
    /// (zero) polynomial counts 0.
    #[must_use]
    pub fn sign_changes(&self) -> usize {
        let mut changes = 0;
        let mut last_sign = 0i8;
        for c in &self.coeffs {
            let sign = c.signum();
            if sign != 0 {
                if last_sign != 0 && sign != last_sign {
                    changes += 1;
                }
                last_sign = sign;
            }
        }
        changes
    }

    /// Returns the coefficient sequence reversed.
    ///
    /// Equivalent to `x^n · p(1/x)` for a polynomial of degree n.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs.reverse();
        Self::new(coeffs)
    }

    /// Translates the argument: returns `p(x + k)`.
    ///
    /// In-place Ruffini–Horner shift, O(n²) coefficient operations.
    #[must_use]
    pub fn translate(&self, k: &T) -> Self {
        let mut coeffs = self.coeffs.clone();
        let n = coeffs.len();
        if n < 2 {
            return self.clone();
        }
        for i in 0..n - 1 {
            for j in (i..n - 1).rev() {
                coeffs[j] = coeffs[j].clone() + k.clone() * coeffs[j + 1].clone();
            }
        }
        Self::new(coeffs)
    }

    /// Dilates the argument: returns `p(α·x)`.
    #[must_use]
    pub fn dilate(&self, alpha: &T) -> Self {
        let mut power = T::one();
        let mut coeffs = Vec::with_capacity(self.coeffs.len());
        for c in &self.coeffs {
            coeffs.push(c.clone() * power.clone());
            power = power * alpha.clone();
        }
        Self::new(coeffs)
    }

    /// The reflect-and-shift transform: `(x+1)^n · p(1/(x+1))`.
    ///
    /// By Budan's theorem the sign-change count of the result bounds the
    /// number of roots of `p` in the open interval (0, 1).
    #[must_use]
    pub fn budans_theorem(&self) -> Self {
        self.reversed().translate(&T::one())
    }

    /// Multiplies by x^n (pads low-order zero coefficients).
    #[must_use]
    pub fn mul_xn(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }
        let mut coeffs = vec![T::zero(); n];
        coeffs.extend(self.coeffs.clone());
        Self::new(coeffs)
    }

    /// Divides by x^n, dropping the n lowest-order terms.
    #[must_use]
    pub fn div_xn(&self, n: usize) -> Self {
        if n >= self.coeffs.len() {
            return Self::zero();
        }
        Self::new(self.coeffs[n..].to_vec())
    }

    /// Counts the low-order zero coefficients (the multiplicity of the
    /// root at x = 0).
    #[must_use]
    pub fn trailing_zero_terms(&self) -> usize {
        self.coeffs.iter().take_while(|c| c.is_zero()).count()
    }
}

impl<T: RealField> std::fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let term = match i {
                0 => format!("{c:?}"),
                1 => format!("{c:?}*x"),
                _ => format!("{c:?}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}
