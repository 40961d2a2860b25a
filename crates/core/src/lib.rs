//! Core traits and utilities for Residua.
//!
//! This crate defines the seam between residual models and the nonlinear
//! least-squares solvers that consume them:
//!
//! - [`LeastSquaresProblem`] — maps solver variables to a residual vector and
//!   its Jacobian
//! - [`evaluate`] — calls a problem once and rejects malformed or non-finite
//!   output before it reaches a solver
//! - [`finite_difference`] — numeric Jacobians for verifying closed-form
//!   derivatives

mod evaluate;
mod problems;

pub mod finite_difference;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use problems::LeastSquaresProblem;
