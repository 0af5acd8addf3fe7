/// Configuration for the golden section search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Stop once the bracket width is at or below this value.
    pub tolerance: f64,
    /// Hard cap on iterations, the sole bounded-runtime guarantee.
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Validates the stopping criteria.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-finite or not positive,
    /// or if the iteration cap is zero.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("tolerance must be finite and positive");
        }
        if self.max_iters == 0 {
            return Err("max_iters must be at least 1");
        }
        Ok(())
    }
}
