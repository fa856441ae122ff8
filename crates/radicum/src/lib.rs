//! # Radicum
//!
//! Real-root isolation for univariate polynomials by the
//! continued-fraction method of Vincent, Akritas, and Strzeboński.
//!
//! Given a polynomial with real coefficients, the engine produces a
//! finite list of disjoint intervals, each guaranteed to contain exactly
//! one real root; degenerate intervals report exactly representable
//! roots by value.
//!
//! ## Features
//!
//! - **Generic arithmetic**: one capability trait, two witnesses
//!   (machine floats and arbitrary-precision extended reals)
//! - **Dense polynomial algebra**: Horner evaluation, long division,
//!   Karatsuba multiplication
//! - **Möbius bookkeeping**: interval bounds in the working coordinate
//!   system map back to the original variable in closed form
//! - **Descartes + Local-Max-Quadratic bounds**: sign-change counting
//!   and root-magnitude estimation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use radicum::prelude::*;
//!
//! // x^3 - 7x + 7: positive roots isolated in [1, 1.5] and [1.5, 2]
//! let p = Polynomial::new(vec![7.0, -7.0, 0.0, 1.0]);
//! let intervals = find_root_intervals(&p)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use radicum_poly as poly;
pub use radicum_rings as rings;
pub use radicum_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use radicum_poly::{Polynomial, PolynomialError};
    pub use radicum_rings::{Complex, ExtendedReal, RealField};
    pub use radicum_solve::{
        find_root_intervals, isolate_all_roots, isolate_batch, Interval, IsolateError,
        IsolatorConfig, Mobius, VincentIsolator,
    };
}
