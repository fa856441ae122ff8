//! Errors produced by root isolation.

use thiserror::Error;

/// Errors that can occur during root isolation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IsolateError {
    /// Möbius-transformation construction with a·d = b·c.
    ///
    /// The engine's own compositions preserve non-degeneracy, so seeing
    /// this from inside an isolation run indicates a logic defect
    /// upstream, not a recoverable runtime condition.
    #[error("degenerate Möbius transformation (a·d = b·c)")]
    InvalidTransformation,

    /// A root-bound estimator was invoked outside its precondition:
    /// degree ≥ 2, positive leading coefficient, and at least one
    /// negative coefficient.
    #[error("root-bound estimator precondition violated: {0}")]
    InvalidBoundInput(&'static str),

    /// The worklist budget ran out before every branch terminated.
    ///
    /// Reached only for inputs outside the method's termination
    /// guarantee, e.g. a repeated irrational root, whose sign-change
    /// count never falls to 1. No partial results are returned.
    #[error("isolation exceeded the step budget of {0}")]
    StepLimitExceeded(usize),
}
