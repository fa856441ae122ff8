//! # radicum-poly
//!
//! Dense univariate polynomial arithmetic for the Radicum root isolator.
//!
//! This crate provides:
//! - A trimmed coefficient-vector polynomial, generic over `RealField`
//! - Ring algebra with automatic multiplication-algorithm selection
//! - Long division with quotient and remainder
//! - Horner evaluation at scalar, complex, and polynomial arguments
//! - The sign-change counter and reflect-and-shift transform used by
//!   continued-fraction root isolation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;

#[cfg(test)]
mod proptests;

pub use dense::{Polynomial, PolynomialError};
