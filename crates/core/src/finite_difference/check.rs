use thiserror::Error;

use crate::LeastSquaresProblem;

use super::{Config, jacobian};

/// Outcome of comparing an analytic Jacobian with a numeric one.
///
/// Reports the entry that comes closest to, or furthest beyond, its tolerance
/// bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Check {
    pub row: usize,
    pub col: usize,
    pub analytic: f64,
    pub numeric: f64,
    pub abs_error: f64,

    passed: bool,
}

impl Check {
    /// Returns true if every entry agreed within the configured tolerances.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }
}

/// Errors that can occur while checking a Jacobian.
#[derive(Debug, Error)]
pub enum CheckError<PE> {
    /// The problem failed to compute residuals or the Jacobian.
    #[error("problem error")]
    Problem(#[source] PE),

    #[error("expected {expected} residuals, got {actual}")]
    ResidualCount { expected: usize, actual: usize },

    #[error("expected {expected} jacobian rows, got {actual}")]
    RowCount { expected: usize, actual: usize },
}

/// Compares the analytic Jacobian of a problem at `x` with central differences.
///
/// An entry agrees when `|a - n| <= abs_tol + rel_tol * max(|a|, |n|)`.
/// Non-finite entries never agree.
///
/// # Errors
///
/// Returns an error if the problem fails, or if its residuals or analytic
/// Jacobian do not have [`LeastSquaresProblem::residual_count`] entries.
pub fn check_jacobian<P, const N: usize>(
    problem: &P,
    x: [f64; N],
    config: &Config,
) -> Result<Check, CheckError<P::Error>>
where
    P: LeastSquaresProblem<N>,
{
    let analytic = problem.jacobian(&x).map_err(CheckError::Problem)?;
    let numeric = jacobian(problem, x, config)?;

    if analytic.len() != numeric.len() {
        return Err(CheckError::RowCount {
            expected: numeric.len(),
            actual: analytic.len(),
        });
    }

    let mut worst = Check {
        row: 0,
        col: 0,
        analytic: 0.0,
        numeric: 0.0,
        abs_error: 0.0,
        passed: true,
    };
    let mut worst_excess = f64::NEG_INFINITY;

    for (row, (a_row, n_row)) in analytic.iter().zip(&numeric).enumerate() {
        for col in 0..N {
            let (a, n) = (a_row[col], n_row[col]);
            let abs_error = (a - n).abs();
            let bound = config.abs_tol() + config.rel_tol() * a.abs().max(n.abs());

            // NaN or infinite entries never agree.
            let excess = abs_error - bound;
            let excess = if excess.is_nan() { f64::INFINITY } else { excess };

            if excess > worst_excess {
                worst_excess = excess;
                worst = Check {
                    row,
                    col,
                    analytic: a,
                    numeric: n,
                    abs_error,
                    passed: excess <= 0.0,
                };
            }
        }
    }

    if !worst.passed {
        tracing::warn!(
            row = worst.row,
            col = worst.col,
            analytic = worst.analytic,
            numeric = worst.numeric,
            "jacobian disagrees with finite differences"
        );
    }

    Ok(worst)
}
