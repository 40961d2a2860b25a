//! Residual models for nonlinear least-squares fitting.
//!
//! Each model implements [`LeastSquaresProblem`] so it can be handed to any
//! solver built on `residua-core`.
//!
//! - [`circle`] — fits a circle center to observed 2D points
//!
//! [`LeastSquaresProblem`]: residua_core::LeastSquaresProblem

pub mod circle;
