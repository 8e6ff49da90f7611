//! The coordinate capability every simplifiable point provides.
//!
//! Simplification never builds points of its own. It reads two coordinates,
//! measures squared distances and compares coordinates for equality, so any
//! type that can expose an `x` and a `y` can be simplified in place, without
//! converting into [`Point2`](super::Point2) first.

use num_traits::{Float, One, Zero};

/// A value with two floating-point coordinates.
///
/// Only [`x_value`](Self::x_value) and [`y_value`](Self::y_value) are
/// required. The distance helpers work purely on squared quantities; no
/// square root is ever taken.
///
/// # Example
///
/// ```
/// use tracesimp::Point2Like;
///
/// #[derive(Clone)]
/// struct Touch {
///     x: f32,
///     y: f32,
///     pressure: f32,
/// }
///
/// impl Point2Like for Touch {
///     type Scalar = f32;
///     fn x_value(&self) -> f32 { self.x }
///     fn y_value(&self) -> f32 { self.y }
/// }
///
/// let a = Touch { x: 0.0, y: 0.0, pressure: 0.2 };
/// let b = Touch { x: 3.0, y: 4.0, pressure: 0.9 };
/// assert_eq!(a.distance_squared_from(&b), 25.0);
/// ```
pub trait Point2Like {
    /// Coordinate type.
    type Scalar: Float;

    /// Horizontal coordinate.
    fn x_value(&self) -> Self::Scalar;

    /// Vertical coordinate.
    fn y_value(&self) -> Self::Scalar;

    /// Squared Euclidean distance to `other`.
    #[inline]
    fn distance_squared_from(&self, other: &Self) -> Self::Scalar {
        let dx = self.x_value() - other.x_value();
        let dy = self.y_value() - other.y_value();
        dx * dx + dy * dy
    }

    /// Squared distance from `self` to the segment `[p1, p2]`.
    ///
    /// The foot point is found from the projection parameter `t` of `self`
    /// onto the line through `p1` and `p2`: past the end (`t > 1`) it is
    /// `p2`, inside (`t > 0`) it is interpolated, otherwise it is `p1`.
    /// A zero-length segment measures the distance to `p1`.
    fn distance_squared_to_segment(&self, p1: &Self, p2: &Self) -> Self::Scalar {
        let zero = Self::Scalar::zero();
        let one = Self::Scalar::one();

        let (px, py) = (self.x_value(), self.y_value());
        let mut x = p1.x_value();
        let mut y = p1.y_value();
        let dx = p2.x_value() - x;
        let dy = p2.y_value() - y;
        let len_sq = dx * dx + dy * dy;

        if len_sq > zero {
            let t = ((px - x) * dx + (py - y) * dy) / len_sq;
            if t > one {
                x = p2.x_value();
                y = p2.y_value();
            } else if t > zero {
                x = x + dx * t;
                y = y + dy * t;
            }
        }

        let dx = px - x;
        let dy = py - y;
        dx * dx + dy * dy
    }

    /// Exact coordinate equality, no epsilon.
    #[inline]
    fn coords_eq(&self, other: &Self) -> bool {
        self.x_value() == other.x_value() && self.y_value() == other.y_value()
    }
}

impl<P: Point2Like + ?Sized> Point2Like for &P {
    type Scalar = P::Scalar;

    #[inline]
    fn x_value(&self) -> Self::Scalar {
        (**self).x_value()
    }

    #[inline]
    fn y_value(&self) -> Self::Scalar {
        (**self).y_value()
    }
}

impl<F: Float> Point2Like for (F, F) {
    type Scalar = F;

    #[inline]
    fn x_value(&self) -> F {
        self.0
    }

    #[inline]
    fn y_value(&self) -> F {
        self.1
    }
}

impl<F: Float> Point2Like for [F; 2] {
    type Scalar = F;

    #[inline]
    fn x_value(&self) -> F {
        self[0]
    }

    #[inline]
    fn y_value(&self) -> F {
        self[1]
    }
}
