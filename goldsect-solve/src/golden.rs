mod config;
mod error;
mod solution;
mod trace;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};
pub use trace::Iteration;

use crate::objective::Objective;

/// Finds the minimizer of the objective within `[a, b]`.
///
/// The bracket shrinks by the golden section ratio each iteration,
/// reusing the surviving interior probe and its value, so every iteration
/// after the two initial evaluations costs exactly one objective call.
/// The returned solution carries a per-iteration trace of the bracket,
/// snapshotted before each bound update.
///
/// When `f(x1) == f(x2)` the left bound moves, the same branch as
/// `f(x1) > f(x2)`, so equal values always produce the same bracket.
///
/// # Errors
///
/// Returns an error if the bounds are not strictly increasing or contain
/// a non-finite value, if the config is invalid, or if the objective is
/// undefined (NaN or infinite) at any probe point, including the final
/// midpoint.
pub fn minimize<F>(
    objective: &Objective<F>,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let (mut a, mut b) = validate_bounds(bounds)?;

    // Interior probe ratio, (3 - sqrt(5)) / 2.
    let tau = (3.0 - 5.0_f64.sqrt()) / 2.0;

    let mut x1 = a + tau * (b - a);
    let mut x2 = b - tau * (b - a);
    let mut f_x1 = objective.probe(x1)?;
    let mut f_x2 = objective.probe(x2)?;

    let mut trace = Vec::new();
    let mut iters = 0;

    while (b - a) > config.tolerance && iters < config.max_iters {
        trace.push(Iteration {
            index: iters,
            a,
            b,
            x1,
            x2,
            f_x1,
            f_x2,
            width: b - a,
        });

        iters += 1;

        if f_x1 < f_x2 {
            // Minimum lies left of x2; the old x1 becomes the new x2.
            b = x2;
            x2 = x1;
            f_x2 = f_x1;
            x1 = a + tau * (b - a);
            f_x1 = objective.probe(x1)?;
        } else {
            // Minimum lies right of x1; the old x2 becomes the new x1.
            a = x1;
            x1 = x2;
            f_x1 = f_x2;
            x2 = b - tau * (b - a);
            f_x2 = objective.probe(x2)?;
        }
    }

    let x_min = 0.5 * (a + b);
    let f_min = objective.probe(x_min)?;

    let status = if (b - a) <= config.tolerance {
        Status::Converged
    } else {
        Status::MaxIters
    };

    Ok(Solution {
        status,
        x_min,
        f_min,
        tolerance: config.tolerance,
        iters,
        trace,
    })
}

/// Validates that the bounds are finite and strictly increasing.
fn validate_bounds(bounds: [f64; 2]) -> Result<(f64, f64), Error> {
    let [a, b] = bounds;

    if !a.is_finite() {
        return Err(Error::NonFiniteBounds { value: a });
    }

    if !b.is_finite() {
        return Err(Error::NonFiniteBounds { value: b });
    }

    if a >= b {
        return Err(Error::InvalidBounds { a, b });
    }

    Ok((a, b))
}
