/// Defines a nonlinear least-squares problem to be solved.
///
/// A least-squares problem maps solver variables to a vector of residuals and
/// to the Jacobian of those residuals. Solvers search for the variables that
/// minimize half the sum of squared residuals.
///
/// The const generic `N` is the number of solver variables.
/// For example, `N = 2` represents a problem over a 2D point such as a circle
/// center.
///
/// The residual count may differ from `N`, but it must not depend on `x`:
/// every call returns exactly [`residual_count`] residuals and Jacobian rows.
///
/// [`residual_count`]: LeastSquaresProblem::residual_count
pub trait LeastSquaresProblem<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the number of residuals produced by each evaluation.
    fn residual_count(&self) -> usize;

    /// Computes the residual vector at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals cannot be computed.
    fn residuals(&self, x: &[f64; N]) -> Result<Vec<f64>, Self::Error>;

    /// Computes the Jacobian of the residuals at `x`.
    ///
    /// Row `i` holds the partial derivatives of residual `i` with respect to
    /// each solver variable, in variable order.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Jacobian cannot be computed.
    fn jacobian(&self, x: &[f64; N]) -> Result<Vec<[f64; N]>, Self::Error>;
}
