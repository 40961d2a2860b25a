use thiserror::Error;

use crate::LeastSquaresProblem;

/// The result of evaluating a least-squares problem at a given `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<const N: usize> {
    pub x: [f64; N],

    pub residuals: Vec<f64>,

    pub jacobian: Vec<[f64; N]>,
}

impl<const N: usize> Evaluation<N> {
    /// Returns half the sum of squared residuals.
    #[must_use]
    pub fn cost(&self) -> f64 {
        0.5 * self.residuals.iter().map(|r| r * r).sum::<f64>()
    }

    /// Returns the gradient of [`cost`](Self::cost), `Jᵀ r`.
    #[must_use]
    pub fn gradient(&self) -> [f64; N] {
        let mut gradient = [0.0; N];
        for (row, residual) in self.jacobian.iter().zip(&self.residuals) {
            for (g, partial) in gradient.iter_mut().zip(row) {
                *g += partial * residual;
            }
        }
        gradient
    }
}

/// Errors that can occur when evaluating a least-squares problem.
#[derive(Debug, Error)]
pub enum EvalError<PE> {
    /// The problem failed to compute residuals or the Jacobian.
    #[error("problem error")]
    Problem(#[source] PE),

    #[error("expected {expected} residuals, got {actual}")]
    ResidualCount { expected: usize, actual: usize },

    #[error("expected {expected} jacobian rows, got {actual}")]
    JacobianRows { expected: usize, actual: usize },

    #[error("residual {index} is not finite: {value}")]
    NonFiniteResidual { index: usize, value: f64 },

    #[error("jacobian entry ({row}, {col}) is not finite: {value}")]
    NonFiniteJacobian { row: usize, col: usize, value: f64 },
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<P, const N: usize> =
    Result<Evaluation<N>, EvalError<<P as LeastSquaresProblem<N>>::Error>>;

/// Evaluates the residuals and Jacobian of a problem at `x`.
///
/// Unlike calling the problem directly, this checks that the output has the
/// advertised shape and contains only finite values, so a singular point
/// surfaces as an error instead of NaN propagating into a solver.
///
/// # Errors
///
/// Returns an error if the problem fails, if the residual or Jacobian row count
/// differs from [`LeastSquaresProblem::residual_count`], or if any residual or
/// Jacobian entry is NaN or infinite.
pub fn evaluate<P, const N: usize>(problem: &P, x: [f64; N]) -> EvaluateResult<P, N>
where
    P: LeastSquaresProblem<N>,
{
    let expected = problem.residual_count();

    let residuals = problem.residuals(&x).map_err(EvalError::Problem)?;
    if residuals.len() != expected {
        return Err(EvalError::ResidualCount {
            expected,
            actual: residuals.len(),
        });
    }
    if let Some((index, &value)) = residuals.iter().enumerate().find(|(_, r)| !r.is_finite()) {
        tracing::warn!(?x, index, value, "non-finite residual");
        return Err(EvalError::NonFiniteResidual { index, value });
    }

    let jacobian = problem.jacobian(&x).map_err(EvalError::Problem)?;
    if jacobian.len() != expected {
        return Err(EvalError::JacobianRows {
            expected,
            actual: jacobian.len(),
        });
    }
    for (row, partials) in jacobian.iter().enumerate() {
        if let Some((col, &value)) = partials.iter().enumerate().find(|(_, d)| !d.is_finite()) {
            tracing::warn!(?x, row, col, value, "non-finite jacobian entry");
            return Err(EvalError::NonFiniteJacobian { row, col, value });
        }
    }

    let evaluation = Evaluation {
        x,
        residuals,
        jacobian,
    };
    tracing::debug!(?x, residuals = expected, cost = evaluation.cost(), "evaluated");

    Ok(evaluation)
}
