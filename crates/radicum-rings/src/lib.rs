//! # radicum-rings
//!
//! Numeric capability layer for the Radicum root isolator.
//!
//! This crate provides:
//! - The abstract capability trait: `RealField`
//! - The machine-float witness: `f64`
//! - The arbitrary-precision extended-real witness: `ExtendedReal`
//! - Complex pairs over any witness: `Complex<T>`
//!
//! ## Witness Hierarchy
//!
//! ```text
//! RealField
//!  ├── f64           (IEEE-754, ±∞/NaN as sentinels)
//!  └── ExtendedReal  (dashu FBig magnitude + tagged ±∞/Undefined)
//! ```
//!
//! Everything downstream (polynomials, Möbius transforms, the isolation
//! engine) is written once against `RealField` and runs unmodified over
//! either witness.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod double;
pub mod extended;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use complex::Complex;
pub use extended::ExtendedReal;
pub use traits::RealField;
