use serde::Serialize;

use super::Iteration;

/// Indicates whether the search converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The bracket width reached the configured tolerance.
    Converged,
    /// Reached the iteration limit without converging. The answer is a
    /// best-effort estimate, not an error.
    MaxIters,
}

/// The result of a golden section search.
///
/// Objective values are in the solver's internal scale; when the search
/// maximized they are the negated originals until a
/// [`Report`](crate::report::Report) restores them.
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Midpoint of the final bracket.
    pub x_min: f64,
    /// Objective value at `x_min`.
    pub f_min: f64,
    /// Tolerance the search ran with.
    pub tolerance: f64,
    /// Iteration count when the search finished.
    pub iters: usize,
    /// Per-iteration bracket snapshots, in chronological order.
    pub trace: Vec<Iteration>,
}

impl Solution {
    /// Returns true if the bracket shrank to within tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
