//! End-to-end tests through the full pipeline: compile a textual formula,
//! run the golden section search, assemble the report, and sample the
//! function for visualization.

use approx::assert_relative_eq;

use goldsect_expr::Formula;
use goldsect_solve::{
    golden::{self, Config, Error},
    objective::{Goal, Objective},
    report::Report,
    sample::{self, GridConfig},
};
use integration_tests::CallCounter;

fn search(
    expression: &str,
    bounds: [f64; 2],
    tolerance: f64,
    goal: Goal,
) -> Result<Report, Error> {
    let formula = Formula::compile(expression).expect("should compile");
    let objective = Objective::new(|x| formula.eval(x), goal);
    let config = Config {
        tolerance,
        ..Config::default()
    };

    let solution = golden::minimize(&objective, bounds, &config)?;
    Ok(Report::new(&solution, goal))
}

#[test]
fn finds_known_parabola_minimum() {
    let report = search("(x-2)**2", [-5.0, 5.0], 1e-6, Goal::Minimize)
        .expect("should solve");

    assert!(report.converged);
    assert_relative_eq!(report.x_min, 2.0, epsilon = 1e-4);
    assert_relative_eq!(report.f_min, 0.0, epsilon = 1e-4);
}

#[test]
fn maximize_matches_negated_minimize() {
    let up = search("sin(x)", [0.0, std::f64::consts::PI], 1e-8, Goal::Maximize)
        .expect("should solve");
    let down = search("-(sin(x))", [0.0, std::f64::consts::PI], 1e-8, Goal::Minimize)
        .expect("should solve");

    assert_relative_eq!(up.f_min, -down.f_min, epsilon = 1e-9);
    assert_relative_eq!(up.x_min, down.x_min, epsilon = 1e-6);
    assert_relative_eq!(up.x_min, 0.5 * std::f64::consts::PI, epsilon = 1e-6);
}

#[test]
fn trace_invariants_hold_for_transcendental_objective() {
    let report = search("exp(x) - 2*x", [-2.0, 2.0], 1e-7, Goal::Minimize)
        .expect("should solve");

    // Minimum of exp(x) - 2x is at x = ln(2).
    assert_relative_eq!(report.x_min, 2.0_f64.ln(), epsilon = 1e-4);

    for record in &report.iterations {
        assert!(record.a <= record.x1);
        assert!(record.x1 < record.x2);
        assert!(record.x2 <= record.b);
    }
    for pair in report.iterations.windows(2) {
        assert!(pair[1].width < pair[0].width);
    }
}

#[test]
fn search_reuses_probes_across_iterations() {
    let formula = Formula::compile("(x-2)**2").expect("should compile");
    let counter = CallCounter::new(|x| formula.eval(x));
    let objective = Objective::new(counter.as_fn(), Goal::Minimize);
    let config = Config {
        tolerance: 1e-6,
        ..Config::default()
    };

    let solution =
        golden::minimize(&objective, [-5.0, 5.0], &config).expect("should solve");

    // Two initial probes, one per iteration, one final midpoint. A naive
    // implementation recomputing both probes would roughly double this.
    assert_eq!(counter.calls(), solution.iters + 3);
}

#[test]
fn rejects_reversed_bounds() {
    let result = search("x**2", [5.0, 1.0], 1e-4, Goal::Minimize);

    assert!(matches!(result, Err(Error::InvalidBounds { .. })));
}

#[test]
fn rejects_formula_undefined_inside_bracket() {
    let sqrt = search("sqrt(x)", [-1.0, 1.0], 1e-4, Goal::Minimize);
    assert!(matches!(sqrt, Err(Error::Domain(_))));

    let log = search("log(x)", [-1.0, 1.0], 1e-4, Goal::Minimize);
    assert!(matches!(log, Err(Error::Domain(_))));
}

#[test]
fn sampling_excludes_pole_but_search_data_stays_usable() {
    let formula = Formula::compile("1/x").expect("should compile");

    // Three points with no padding put a grid point exactly on the pole.
    let config = GridConfig {
        count: 3,
        padding: 0.0,
    };
    let set = sample::sample(|x| formula.eval(x), [-1.0, 1.0], &config)
        .expect("should sample");

    assert_eq!(set.invalid_count(), 1);
    assert!(set.points[1].y.is_none());
    assert_eq!(set.valid_points().len(), 2);
}

#[test]
fn batch_evaluation_matches_grid_samples() {
    let formula = Formula::compile("x^3 - x").expect("should compile");
    let config = GridConfig {
        count: 50,
        padding: 0.2,
    };

    let set = sample::sample(|x| formula.eval(x), [-1.0, 1.0], &config)
        .expect("should sample");
    let xs: Vec<f64> = set.points.iter().map(|point| point.x).collect();
    let ys = formula.eval_many(&xs);

    for (point, y) in set.points.iter().zip(&ys) {
        assert_relative_eq!(point.y.expect("polynomial is total"), *y);
    }
}

#[test]
fn report_and_overlay_are_consistent() {
    let report = search("(x-2)**2", [-5.0, 5.0], 1e-6, Goal::Minimize)
        .expect("should solve");

    let overlay = sample::probe_overlay(&report);

    assert_eq!(overlay.len(), 2 * report.iteration_count);
    assert_eq!(report.iterations.len(), report.iteration_count);

    // Overlay points are the recorded probes, in order.
    for (pair, record) in overlay.chunks(2).zip(&report.iterations) {
        assert_relative_eq!(pair[0][0], record.x1);
        assert_relative_eq!(pair[1][0], record.x2);
    }
}

#[test]
fn iteration_cap_surfaces_as_warning_not_error() {
    let formula = Formula::compile("x**2").expect("should compile");
    let objective = Objective::new(|x| formula.eval(x), Goal::Minimize);
    let config = Config {
        tolerance: 1e-15,
        max_iters: 20,
    };

    let solution =
        golden::minimize(&objective, [-1.0, 1.0], &config).expect("should solve");
    let report = Report::new(&solution, Goal::Minimize);

    assert!(!report.converged);
    assert_eq!(report.iteration_count, 20);
    assert!(report.warning.is_some());
    assert!(report.x_min.abs() < 1e-2);
}
