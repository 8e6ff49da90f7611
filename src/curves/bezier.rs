//! Quadratic Bézier curves and their discretization.
//!
//! Smoothed paths are built from quadratic segments; flattening them back to
//! polylines uses adaptive subdivision.

use crate::primitives::{Point2, Point2Like};
use num_traits::Float;

/// Subdivision stops at this depth even if the tolerance is not met, which
/// bounds the output at `2^16` segments per curve.
const MAX_SUBDIVISION_DEPTH: u32 = 16;

/// A quadratic Bézier curve defined by 3 control points.
///
/// The curve starts at `p0`, is influenced by `p1`, and ends at `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier2<F> {
    /// Start point
    pub p0: Point2<F>,
    /// Control point
    pub p1: Point2<F>,
    /// End point
    pub p2: Point2<F>,
}

impl<F: Float> QuadraticBezier2<F> {
    /// Creates a new quadratic Bézier curve.
    #[inline]
    pub fn new(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluates the curve at parameter `t` (0 to 1).
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let one = F::one();
        let mt = one - t;
        let mt2 = mt * mt;
        let t2 = t * t;
        let two = one + one;

        Point2::new(
            mt2 * self.p0.x + two * mt * t * self.p1.x + t2 * self.p2.x,
            mt2 * self.p0.y + two * mt * t * self.p1.y + t2 * self.p2.y,
        )
    }

    /// Splits the curve at parameter `t`, returning two new curves.
    pub fn split(&self, t: F) -> (Self, Self) {
        // de Casteljau
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p012 = p01.lerp(p12, t);

        (
            Self::new(self.p0, p01, p012),
            Self::new(p012, p12, self.p2),
        )
    }

    /// Distance from the control point to the baseline, used as the
    /// flatness measure for subdivision.
    #[inline]
    pub fn flatness(&self) -> F {
        self.p1
            .distance_squared_to_segment(&self.p0, &self.p2)
            .sqrt()
    }

    /// Converts the curve to a polyline using adaptive subdivision.
    ///
    /// The result starts with `p0` and ends with `p2`.
    pub fn to_polyline(&self, tolerance: F) -> Vec<Point2<F>> {
        let mut points = vec![self.p0];
        self.subdivide(tolerance, 0, &mut points);
        points
    }

    /// Appends the flattened curve to `points`, excluding `p0`.
    pub(crate) fn flatten_into(&self, tolerance: F, points: &mut Vec<Point2<F>>) {
        self.subdivide(tolerance, 0, points);
    }

    fn subdivide(&self, tolerance: F, depth: u32, points: &mut Vec<Point2<F>>) {
        if depth >= MAX_SUBDIVISION_DEPTH || self.flatness() <= tolerance {
            points.push(self.p2);
        } else {
            let half = (F::one() + F::one()).recip();
            let (left, right) = self.split(half);
            left.subdivide(tolerance, depth + 1, points);
            right.subdivide(tolerance, depth + 1, points);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> QuadraticBezier2<f64> {
        QuadraticBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        )
    }

    #[test]
    fn test_eval_endpoints_and_midpoint() {
        let curve = arch();
        assert_eq!(curve.eval(0.0), curve.p0);
        assert_eq!(curve.eval(1.0), curve.p2);

        let mid = curve.eval(0.5);
        assert_relative_eq!(mid.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(mid.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_split() {
        let (left, right) = arch().split(0.5);

        assert_eq!(left.p0, Point2::new(0.0, 0.0));
        assert_relative_eq!(left.p2.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(left.p2.y, 1.0, epsilon = 1e-10);
        assert_eq!(left.p2, right.p0);
        assert_eq!(right.p2, Point2::new(2.0, 0.0));
    }

    #[test]
    fn test_flatness() {
        assert_relative_eq!(arch().flatness(), 2.0, epsilon = 1e-12);

        // Control point past the end of the baseline
        let hook = QuadraticBezier2::new(
            Point2::new(0.0_f64, 0.0),
            Point2::new(5.0, 4.0),
            Point2::new(2.0, 0.0),
        );
        assert_relative_eq!(hook.flatness(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_to_polyline() {
        let polyline = arch().to_polyline(0.1);

        assert!(polyline.len() > 2);
        assert_eq!(polyline.first(), Some(&Point2::new(0.0, 0.0)));
        assert_eq!(polyline.last(), Some(&Point2::new(2.0, 0.0)));
    }

    #[test]
    fn test_straight_line_is_two_points() {
        let curve: QuadraticBezier2<f64> = QuadraticBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        assert_eq!(curve.to_polyline(0.01).len(), 2);
    }

    #[test]
    fn test_zero_tolerance_terminates() {
        let polyline = arch().to_polyline(0.0);
        assert_eq!(polyline.len(), (1 << MAX_SUBDIVISION_DEPTH) + 1);
    }
}
