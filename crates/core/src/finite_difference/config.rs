use thiserror::Error;

/// Configuration for finite-difference Jacobians and checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    relative_step: f64,
    abs_tol: f64,
    rel_tol: f64,
}

/// Errors that can occur when validating a finite-difference config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("relative_step must be finite and positive")]
    RelativeStep,

    #[error("abs_tol must be finite and non-negative")]
    AbsTol,

    #[error("rel_tol must be finite and non-negative")]
    RelTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 1e-6, 1e-6).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated step and tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if the step is not positive, or if any tolerance is
    /// negative or non-finite.
    pub fn new(relative_step: f64, abs_tol: f64, rel_tol: f64) -> Result<Self, ConfigError> {
        if !relative_step.is_finite() || relative_step <= 0.0 {
            return Err(ConfigError::RelativeStep);
        }
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(ConfigError::AbsTol);
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }

        Ok(Self {
            relative_step,
            abs_tol,
            rel_tol,
        })
    }

    /// Returns the step size relative to the magnitude of each variable.
    #[must_use]
    pub fn relative_step(&self) -> f64 {
        self.relative_step
    }

    /// Returns the absolute tolerance for Jacobian agreement.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the relative tolerance for Jacobian agreement.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }
}
