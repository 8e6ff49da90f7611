//! 2D point type.

use super::Point2Like;
use num_traits::Float;

/// A point in 2D space.
///
/// Generic over floating-point types (`f32` or `f64`). This is the crate's
/// own point type; callers with their own representation implement
/// [`Point2Like`] instead of converting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Returns a copy translated by `(dx, dy)`.
    #[inline]
    pub fn translate(self, dx: F, dy: F) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl<F: Float> Point2Like for Point2<F> {
    type Scalar = F;

    #[inline]
    fn x_value(&self) -> F {
        self.x
    }

    #[inline]
    fn y_value(&self) -> F {
        self.y
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<[F; 2]> for Point2<F> {
    fn from([x, y]: [F; 2]) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_squared_from(&b), 25.0);
    }

    #[test]
    fn test_midpoint_and_lerp() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 20.0);
        assert_eq!(a.midpoint(b), Point2::new(5.0, 10.0));

        let q = a.lerp(b, 0.25);
        assert_relative_eq!(q.x, 2.5);
        assert_relative_eq!(q.y, 5.0);
    }

    #[test]
    fn test_translate() {
        let p: Point2<f32> = Point2::new(1.0, 2.0);
        assert_eq!(p.translate(-1.0, 3.0), Point2::new(0.0, 5.0));
    }

    #[test]
    fn test_conversions() {
        let p: Point2<f64> = (1.0, 2.0).into();
        let q: Point2<f64> = [1.0, 2.0].into();
        assert_eq!(p, q);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let p: Point2<f64> = Point2::new(1.5, -2.0);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
        let back: Point2<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
