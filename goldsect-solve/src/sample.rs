use serde::Serialize;
use thiserror::Error;

use crate::report::Report;

/// Errors that can occur when building a sample grid.
#[derive(Debug, Error)]
pub enum Error {
    /// The left bound is not strictly less than the right bound.
    #[error("invalid bounds: left bound {a} must be less than right bound {b}")]
    InvalidBounds { a: f64, b: f64 },

    /// One or both bounds are non-finite.
    #[error("bounds contain non-finite value: {value}")]
    NonFiniteBounds { value: f64 },

    /// The grid parameters are misconfigured.
    #[error("invalid grid config: {reason}")]
    InvalidConfig { reason: &'static str },
}

/// Configuration for the visualization grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Number of grid points.
    pub count: usize,
    /// Fraction of the bounds width added on each side of the grid.
    pub padding: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            count: 400,
            padding: 0.1,
        }
    }
}

impl GridConfig {
    /// Validates the grid parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are requested or the
    /// padding is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.count < 2 {
            return Err("count must be at least 2");
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err("padding must be finite and non-negative");
        }
        Ok(())
    }
}

/// A single grid point; `y` is `None` where the function is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: Option<f64>,
}

/// A function sampled over a padded uniform grid.
#[derive(Debug, Clone, Serialize)]
pub struct SampleSet {
    /// Grid points in ascending `x` order, undefined points included.
    pub points: Vec<SamplePoint>,
}

impl SampleSet {
    /// Returns the renderable `(x, y)` series, skipping undefined points.
    #[must_use]
    pub fn valid_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .filter_map(|point| point.y.map(|y| [point.x, y]))
            .collect()
    }

    /// Number of grid points where the function was undefined.
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.points.iter().filter(|point| point.y.is_none()).count()
    }
}

/// Samples the function over a uniform grid spanning the padded bounds.
///
/// The grid covers `[a - padding*(b-a), b + padding*(b-a)]`. A point
/// where the function is NaN or infinite is kept in the grid but marked
/// invalid rather than failing the whole sample; visualization degrades
/// gracefully where the search itself would abort.
///
/// # Errors
///
/// Returns an error if the bounds are not strictly increasing or contain
/// a non-finite value, or if the grid config is invalid.
pub fn sample<F>(func: F, bounds: [f64; 2], config: &GridConfig) -> Result<SampleSet, Error>
where
    F: Fn(f64) -> f64,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

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

    let pad = config.padding * (b - a);
    let lo = a - pad;
    let hi = b + pad;
    let step = (hi - lo) / (config.count - 1) as f64;

    let points = (0..config.count)
        .map(|i| {
            let x = lo + i as f64 * step;
            let y = func(x);
            SamplePoint {
                x,
                y: y.is_finite().then_some(y),
            }
        })
        .collect();

    Ok(SampleSet { points })
}

/// Extracts the probe points from a report's trace as plottable pairs.
///
/// Each iteration contributes its two interior probes, in chronological
/// order. The report is only read.
#[must_use]
pub fn probe_overlay(report: &Report) -> Vec<[f64; 2]> {
    report
        .iterations
        .iter()
        .flat_map(|record| [[record.x1, record.f_x1], [record.x2, record.f_x2]])
        .collect()
}
