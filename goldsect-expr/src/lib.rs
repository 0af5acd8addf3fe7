//! Compiles textual formulas in the single variable `x` into callable
//! real-valued functions.
//!
//! Parsing and evaluation are delegated to [`meval`]; this crate adds a
//! notation normalization pass and a stable error surface for callers.
//! Compilation is pure: the same text always produces the same function,
//! and a [`Formula`] never changes after construction.

use std::fmt;

use thiserror::Error;

/// Errors that can occur when compiling a formula.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The text is not a well-formed expression.
    #[error("invalid expression: {0}")]
    Parse(#[source] meval::Error),

    /// The expression references a variable other than `x` or an
    /// unknown function.
    #[error("unknown symbol in expression: {0}")]
    Bind(#[source] meval::Error),
}

/// A compiled single-variable formula.
pub struct Formula {
    source: String,
    func: Box<dyn Fn(f64) -> f64>,
}

impl Formula {
    /// Compiles a formula over the free variable `x`.
    ///
    /// Supported notation: `+ - * /`, `^` or `**` for powers, parentheses,
    /// the usual function set (`sin`, `cos`, `tan`, `exp`, `log`, `sqrt`,
    /// and the rest of meval's built-ins), and the constants `pi` and `e`.
    /// `log` is the natural logarithm.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Parse`] for malformed syntax and
    /// [`CompileError::Bind`] when the expression uses a free variable
    /// other than `x` or a function meval does not know.
    pub fn compile(text: &str) -> Result<Self, CompileError> {
        let expr: meval::Expr = normalize(text).parse().map_err(CompileError::Parse)?;
        let func = expr.bind("x").map_err(CompileError::Bind)?;

        Ok(Self {
            source: text.to_owned(),
            func: Box::new(func),
        })
    }

    /// The original, unnormalized source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluates the formula at a single point.
    ///
    /// Points outside the function's domain yield NaN or an infinity;
    /// classifying those is the caller's concern.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        (self.func)(x)
    }

    /// Evaluates the formula elementwise over a batch of points.
    #[must_use]
    pub fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formula")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Rewrites superficial notation variants into meval's dialect.
///
/// Runs exactly once per compilation, before parsing: backslash escapes
/// are stripped, `**` becomes `^`, and `log(` becomes `ln(`.
fn normalize(text: &str) -> String {
    text.replace('\\', "")
        .replace("**", "^")
        .replace("log(", "ln(")
}
