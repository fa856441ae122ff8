//! # radicum-solve
//!
//! Real-root isolation by the continued-fraction method of Vincent,
//! Akritas, and Strzeboński.
//!
//! This crate provides:
//! - **Möbius transforms**: the fractional-linear substitutions that map
//!   interval bounds in the working coordinate system back to the original
//! - **Root bounds**: Descartes' Rule of Signs and the Local-Max-Quadratic
//!   upper/lower estimators
//! - **The isolation engine**: a worklist state machine producing disjoint
//!   intervals, each containing exactly one positive real root
//!
//! # Example
//!
//! ```ignore
//! use radicum_poly::Polynomial;
//! use radicum_solve::find_root_intervals;
//!
//! // x^3 - 7x + 7 has two positive roots, isolated in [1, 1.5] and [1.5, 2]
//! let p = Polynomial::new(vec![7.0, -7.0, 0.0, 1.0]);
//! let intervals = find_root_intervals(&p).unwrap();
//! assert_eq!(intervals.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bounds;
pub mod error;
pub mod interval;
pub mod mobius;
pub mod vincent;

#[cfg(test)]
mod proptests;

pub use error::IsolateError;
pub use interval::Interval;
pub use mobius::{ComplexMobius, Mobius};
pub use vincent::{
    find_root_intervals, isolate_all_roots, isolate_batch, IsolationStats, IsolatorConfig,
    VincentIsolator,
};
