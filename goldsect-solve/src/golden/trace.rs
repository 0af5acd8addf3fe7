use serde::Serialize;

/// Snapshot of the search bracket at the start of one iteration.
///
/// Records are taken before that iteration's bound update, so each one
/// shows the bracket that produced the decision. Once appended to the
/// trace a record never changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Iteration {
    /// Zero-based iteration counter.
    pub index: usize,
    /// Left bound of the bracket.
    pub a: f64,
    /// Right bound of the bracket.
    pub b: f64,
    /// Left interior probe point.
    pub x1: f64,
    /// Right interior probe point.
    pub x2: f64,
    /// Objective value at `x1`.
    pub f_x1: f64,
    /// Objective value at `x2`.
    pub f_x2: f64,
    /// Bracket width `b - a`.
    #[serde(rename = "interval_width")]
    pub width: f64,
}
