use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The objective was not a finite real number at a probe point.
///
/// A NaN or infinite value must never drive a bracketing decision, so the
/// search aborts as soon as one appears.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("function evaluated to a non-finite value ({value}) at x = {x}")]
pub struct DomainError {
    /// The probe point where evaluation failed.
    pub x: f64,
    /// The offending value (NaN, `inf`, or `-inf`).
    pub value: f64,
}

/// Direction of the search.
///
/// The solver always minimizes internally; [`Goal::Maximize`] negates
/// objective values on the way in, and [`Goal::restore`] negates them back
/// for user-facing output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Find the smallest objective value.
    #[default]
    Minimize,
    /// Find the largest objective value.
    Maximize,
}

impl Goal {
    /// Transforms an objective value for internal minimization.
    #[inline]
    #[must_use]
    pub fn transform(self, value: f64) -> f64 {
        match self {
            Goal::Minimize => value,
            Goal::Maximize => -value,
        }
    }

    /// Restores a transformed value to the original function's scale.
    ///
    /// Negation is its own inverse, so this is the same mapping as
    /// [`Goal::transform`]; the separate name marks the direction.
    #[inline]
    #[must_use]
    pub fn restore(self, value: f64) -> f64 {
        self.transform(value)
    }
}

/// Wraps a function so the solver sees a minimization problem with a
/// uniform domain check.
pub struct Objective<F> {
    func: F,
    goal: Goal,
}

impl<F> Objective<F>
where
    F: Fn(f64) -> f64,
{
    /// Wraps a function with the given search direction.
    pub fn new(func: F, goal: Goal) -> Self {
        Self { func, goal }
    }

    /// The direction this objective was built with.
    #[must_use]
    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// Evaluates the objective at `x` in the solver's internal scale.
    ///
    /// This is the single place domain validity is checked; every probe
    /// the search makes goes through here.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if the value is NaN or infinite.
    pub fn probe(&self, x: f64) -> Result<f64, DomainError> {
        let value = self.goal.transform((self.func)(x));

        if value.is_finite() {
            Ok(value)
        } else {
            Err(DomainError { x, value })
        }
    }
}
