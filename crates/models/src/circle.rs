//! Circle fitting residuals.
//!
//! [`CircleResidualModel`] holds observed points believed to lie near a circle
//! and, for a candidate center `c`, measures how far each point's distance to
//! `c` deviates from the mean distance of all points to `c`:
//!
//! ```text
//! d_i = ‖p_i − c‖
//! R   = (1/n) Σ d_i
//! r_i = d_i − R
//! ```
//!
//! The radius is never a free parameter; it is implied by the center. A solver
//! minimizing `Σ r_i²` over the two center coordinates therefore fits both the
//! center and the radius, and the fitted radius is [`mean_radius`] at the
//! solution. By construction the residuals always sum to zero.
//!
//! # Jacobian
//!
//! The partial derivatives of `r_i` with respect to the center are
//!
//! ```text
//! ∂r_i/∂c_x = (c_x − p_i.x) / d_i − ∂R/∂c_x
//! ∂R/∂c_x   = (1/n) Σ_k (c_x − p_k.x) / d_k
//! ```
//!
//! and symmetrically for `c_y`.
//!
//! # Singular Centers
//!
//! A center that coincides exactly with an observed point has `d_i = 0`, where
//! the distance is not differentiable. [`CircleResidualModel::jacobian`] then
//! contains NaN values rather than failing, so raw results match the closed
//! form exactly. Use [`residua_core::evaluate`] to turn non-finite output into
//! an error before it reaches a solver.
//!
//! [`mean_radius`]: CircleResidualModel::mean_radius

mod error;
mod point;


pub use error::Error;
pub use point::Point;

use residua_core::LeastSquaresProblem;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Residual model for fitting a circle center to observed points.
///
/// Points are kept in insertion order; residual `i` and Jacobian row `i`
/// always refer to the `i`-th added point.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CircleResidualModel {
    points: Vec<Point>,
}

impl CircleResidualModel {
    /// Creates a model with no points.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observed point.
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.points.push(Point::new(x, y));
    }

    /// Returns the number of observed points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the observed points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the mean distance from the observed points to `center`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPointSet`] if the model has no points.
    pub fn mean_radius(&self, center: &Point) -> Result<f64, Error> {
        let n = self.nonempty_len()?;
        let total: f64 = self.points.iter().map(|p| p.distance(center)).sum();
        Ok(total / n)
    }

    /// Returns the residuals for the center `[x, y]`, one per point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPointSet`] if the model has no points.
    pub fn residuals(&self, params: &[f64; 2]) -> Result<Vec<f64>, Error> {
        let center = Point::from(*params);
        let radius = self.mean_radius(&center)?;

        Ok(self
            .points
            .iter()
            .map(|p| p.distance(&center) - radius)
            .collect())
    }

    /// Returns the `n × 2` Jacobian of [`residuals`](Self::residuals) with
    /// respect to the center `[x, y]`.
    ///
    /// Entries are NaN when the center coincides with an observed point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPointSet`] if the model has no points.
    pub fn jacobian(&self, params: &[f64; 2]) -> Result<Vec<[f64; 2]>, Error> {
        let n = self.nonempty_len()?;
        let center = Point::from(*params);

        // Unit vectors from each point toward the center, ∂d_i/∂c.
        let directions: Vec<[f64; 2]> = self
            .points
            .iter()
            .map(|p| {
                let d = p.distance(&center);
                [(center.x - p.x) / d, (center.y - p.y) / d]
            })
            .collect();

        let (sum_x, sum_y) = directions
            .iter()
            .fold((0.0_f64, 0.0_f64), |(sx, sy), &[dx, dy]| (sx + dx, sy + dy));
        let (dr_dx, dr_dy) = (sum_x / n, sum_y / n);

        Ok(directions
            .into_iter()
            .map(|[dx, dy]| [dx - dr_dx, dy - dr_dy])
            .collect())
    }

    /// Returns the point count as a divisor, rejecting an empty set.
    #[allow(clippy::cast_precision_loss)]
    fn nonempty_len(&self) -> Result<f64, Error> {
        if self.points.is_empty() {
            return Err(Error::EmptyPointSet);
        }
        Ok(self.points.len() as f64)
    }
}

impl LeastSquaresProblem<2> for CircleResidualModel {
    type Error = Error;

    fn residual_count(&self) -> usize {
        self.point_count()
    }

    fn residuals(&self, x: &[f64; 2]) -> Result<Vec<f64>, Self::Error> {
        CircleResidualModel::residuals(self, x)
    }

    fn jacobian(&self, x: &[f64; 2]) -> Result<Vec<[f64; 2]>, Self::Error> {
        CircleResidualModel::jacobian(self, x)
    }
}

impl FromIterator<Point> for CircleResidualModel {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(f64, f64)> for CircleResidualModel {
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
        iter.into_iter().map(Point::from).collect()
    }
}

impl Extend<Point> for CircleResidualModel {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        self.points.extend(iter);
    }
}
