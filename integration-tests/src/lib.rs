//! Shared helpers for the end-to-end tests.

use std::cell::Cell;

/// Wraps a function and counts how many times it is called.
///
/// Used to verify that the search reuses the surviving probe instead of
/// re-evaluating both interior points every iteration.
pub struct CallCounter<F> {
    func: F,
    calls: Cell<usize>,
}

impl<F> CallCounter<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            calls: Cell::new(0),
        }
    }

    /// Number of evaluations so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Returns a counting view of the wrapped function.
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| {
            self.calls.set(self.calls.get() + 1);
            (self.func)(x)
        }
    }
}
