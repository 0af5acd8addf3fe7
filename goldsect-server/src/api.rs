use serde::{Deserialize, Serialize};
use thiserror::Error;
use warp::{http::StatusCode, reply, Filter, Rejection, Reply};

use goldsect_expr::{CompileError, Formula};
use goldsect_solve::{
    golden::{self, Config, Iteration},
    objective::{Goal, Objective},
    report::Report,
    sample::{self, GridConfig},
};

use crate::history::{Entry, History};

/// Request body for `POST /api/solve`.
#[derive(Debug, Clone, Deserialize)]
pub struct SolveRequest {
    pub expression: String,
    pub a: f64,
    pub b: f64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default)]
    pub mode: Goal,
}

fn default_tolerance() -> f64 {
    1e-4
}

/// Response body for a successful solve.
#[derive(Debug, Serialize)]
pub struct SolveResponse {
    pub x_min: f64,
    pub f_min: f64,
    pub iterations: Vec<Iteration>,
    pub iteration_count: usize,
    pub converged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub plot_data: PlotData,
}

/// Chartable payload: the sampled curve plus search annotations.
#[derive(Debug, Serialize)]
pub struct PlotData {
    /// Initial search bounds.
    pub bounds: [f64; 2],
    /// Valid `(x, y)` samples of the function over the padded bounds.
    pub curve: Vec<[f64; 2]>,
    /// Interior probe points visited by the search.
    pub probes: Vec<[f64; 2]>,
    /// The reported optimum.
    pub minimum: [f64; 2],
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

/// Failures a client can correct; all map to HTTP 400.
#[derive(Debug, Error)]
enum SolveError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Search(#[from] golden::Error),
    #[error(transparent)]
    Sample(#[from] sample::Error),
}

/// Compiles, searches, samples, and records one request.
fn handle_solve(req: &SolveRequest, history: &History) -> Result<SolveResponse, SolveError> {
    let formula = Formula::compile(&req.expression)?;
    let objective = Objective::new(|x| formula.eval(x), req.mode);

    let config = Config {
        tolerance: req.tolerance,
        ..Config::default()
    };
    let solution = golden::minimize(&objective, [req.a, req.b], &config)?;
    let report = Report::new(&solution, req.mode);

    // The plot shows the original function, never the negated one.
    let grid = sample::sample(|x| formula.eval(x), [req.a, req.b], &GridConfig::default())?;

    history.record(Entry {
        expression: req.expression.clone(),
        a: req.a,
        b: req.b,
        mode: req.mode,
        x_min: report.x_min,
        f_min: report.f_min,
        iteration_count: report.iteration_count,
        converged: report.converged,
    });

    let plot_data = PlotData {
        bounds: [req.a, req.b],
        curve: grid.valid_points(),
        probes: sample::probe_overlay(&report),
        minimum: [report.x_min, report.f_min],
    };

    Ok(SolveResponse {
        x_min: report.x_min,
        f_min: report.f_min,
        iterations: report.iterations,
        iteration_count: report.iteration_count,
        converged: report.converged,
        warning: report.warning,
        plot_data,
    })
}

/// Builds the complete route tree for the solver API.
///
/// `POST /api/solve` runs a search; `GET /api/history` and
/// `DELETE /api/history` read and clear the session history; `GET /`
/// returns a welcome message. Client-correctable failures answer 400
/// with an `{ "error": ... }` body carrying the error's display text;
/// anything unexpected falls through to warp's default 5xx handling.
pub fn routes(history: History) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let solve_history = history.clone();
    let solve = warp::path!("api" / "solve")
        .and(warp::post())
        .and(warp::body::json())
        .map(move |req: SolveRequest| match handle_solve(&req, &solve_history) {
            Ok(response) => reply::with_status(reply::json(&response), StatusCode::OK),
            Err(err) => reply::with_status(
                reply::json(&ErrorBody {
                    error: err.to_string(),
                }),
                StatusCode::BAD_REQUEST,
            ),
        });

    let list_history = history.clone();
    let get_history = warp::path!("api" / "history")
        .and(warp::get())
        .map(move || reply::json(&list_history.snapshot()));

    let clear_history = warp::path!("api" / "history")
        .and(warp::delete())
        .map(move || {
            history.clear();
            reply::json(&MessageBody {
                message: "history cleared".to_owned(),
            })
        });

    let root = warp::path::end().and(warp::get()).map(|| {
        reply::json(&MessageBody {
            message: "goldsect solver API; POST /api/solve to run a search".to_owned(),
        })
    });

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "DELETE"])
        .allow_header("content-type");

    root.or(solve).or(get_history).or(clear_history).with(cors)
}
