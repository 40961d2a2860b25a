//! Numeric Jacobians for verifying closed-form derivatives.
//!
//! A solver fed a Jacobian that disagrees with its residuals will converge to
//! the wrong point or diverge, so every hand-derived Jacobian should be checked
//! against a numeric one. This module approximates the Jacobian with central
//! differences and compares it entry-wise with the analytic one.
//!
//! The step for variable `j` is `relative_step * max(1, |x_j|)`, which keeps
//! the truncation and round-off errors balanced for both small and large
//! coordinates.

mod check;
mod config;


pub use check::{Check, CheckError, check_jacobian};
pub use config::{Config, ConfigError};

use crate::LeastSquaresProblem;

/// Approximates the Jacobian of a problem at `x` using central differences.
///
/// # Errors
///
/// Returns an error if any residual evaluation fails, or if it does not return
/// [`LeastSquaresProblem::residual_count`] residuals.
pub fn jacobian<P, const N: usize>(
    problem: &P,
    x: [f64; N],
    config: &Config,
) -> Result<Vec<[f64; N]>, CheckError<P::Error>>
where
    P: LeastSquaresProblem<N>,
{
    let expected = problem.residual_count();
    let mut jacobian = vec![[0.0; N]; expected];

    for col in 0..N {
        let xj = x[col];
        let h = config.relative_step() * if xj.is_finite() { xj.abs().max(1.0) } else { 1.0 };

        let mut forward = x;
        forward[col] = xj + h;
        let mut backward = x;
        backward[col] = xj - h;

        let r_forward = problem.residuals(&forward).map_err(CheckError::Problem)?;
        let r_backward = problem.residuals(&backward).map_err(CheckError::Problem)?;
        for actual in [r_forward.len(), r_backward.len()] {
            if actual != expected {
                return Err(CheckError::ResidualCount { expected, actual });
            }
        }

        // Use the realized step, which may differ from `2h` after rounding.
        let span = forward[col] - backward[col];
        for ((row, rf), rb) in jacobian.iter_mut().zip(&r_forward).zip(&r_backward) {
            row[col] = (rf - rb) / span;
        }
    }

    Ok(jacobian)
}
