use serde::Serialize;

use crate::{
    golden::{Iteration, Solution},
    objective::Goal,
};

/// User-facing record of a completed search.
///
/// The solver works in an internal scale where it always minimizes; when
/// the goal was [`Goal::Maximize`], `f_min` and the trace values here are
/// negated back to the original function's scale. Building a report is a
/// pure transformation with no I/O.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Location of the reported optimum.
    pub x_min: f64,
    /// Function value at `x_min`, in the original scale.
    pub f_min: f64,
    /// Per-iteration bracket snapshots, values in the original scale.
    pub iterations: Vec<Iteration>,
    /// Number of iterations the search ran.
    pub iteration_count: usize,
    /// Tolerance the search ran with.
    pub tolerance: f64,
    /// Whether the bracket shrank to within tolerance.
    pub converged: bool,
    /// Present when the iteration cap was hit before convergence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl Report {
    /// Builds a report from a raw solution and the goal it was solved
    /// under.
    #[must_use]
    pub fn new(solution: &Solution, goal: Goal) -> Self {
        let iterations = solution
            .trace
            .iter()
            .map(|record| Iteration {
                f_x1: goal.restore(record.f_x1),
                f_x2: goal.restore(record.f_x2),
                ..*record
            })
            .collect();

        let warning = (!solution.converged()).then(|| {
            format!(
                "iteration limit ({}) reached before tolerance was met; \
                 the result may be less accurate",
                solution.iters
            )
        });

        Self {
            x_min: solution.x_min,
            f_min: goal.restore(solution.f_min),
            iterations,
            iteration_count: solution.iters,
            tolerance: solution.tolerance,
            converged: solution.converged(),
            warning,
        }
    }
}
