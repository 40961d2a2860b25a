#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An observed point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn distance_is_root_of_summed_squares() {
        let cases = [
            (Point::new(3.0, 4.0), Point::new(0.0, 0.0)),
            (Point::new(30.0, 68.0), Point::new(96.075_902_096, 48.135_167_894)),
            (Point::new(-1.0e-3, 7.5), Point::new(2.25, -1.0e5)),
        ];

        for (a, b) in cases {
            let (dx, dy) = (a.x - b.x, a.y - b.y);
            assert_eq!(a.distance(&b), (dx * dx + dy * dy).sqrt());
            assert_eq!(a.distance(&b), b.distance(&a));
        }
        assert_eq!(Point::new(3.0, 4.0).distance(&Point::new(0.0, 0.0)), 5.0);
    }
}
