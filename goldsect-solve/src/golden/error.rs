use thiserror::Error;

use crate::objective::DomainError;

/// Errors that can occur during a golden section search.
#[derive(Debug, Error)]
pub enum Error {
    /// The left bound is not strictly less than the right bound.
    #[error("invalid bounds: left bound {a} must be less than right bound {b}")]
    InvalidBounds { a: f64, b: f64 },

    /// One or both bounds are non-finite.
    #[error("bounds contain non-finite value: {value}")]
    NonFiniteBounds { value: f64 },

    /// The stopping criteria are misconfigured.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// The objective was undefined at a probe point.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
