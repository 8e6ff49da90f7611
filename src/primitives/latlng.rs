//! Geographic coordinate pair.

use super::Point2Like;

/// A latitude/longitude pair in degrees.
///
/// No geodesy is applied: latitude is read as the x coordinate and longitude
/// as the y coordinate, and distances are planar. The tolerance passed to
/// simplification is therefore in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    /// Degrees north of the equator, used as x.
    pub latitude: f64,
    /// Degrees east of the prime meridian, used as y.
    pub longitude: f64,
}

impl LatLng {
    /// Creates a new coordinate.
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Point2Like for LatLng {
    type Scalar = f64;

    #[inline]
    fn x_value(&self) -> f64 {
        self.latitude
    }

    #[inline]
    fn y_value(&self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_axes() {
        let c = LatLng::new(45.5, 9.2);
        assert_eq!(c.x_value(), 45.5);
        assert_eq!(c.y_value(), 9.2);
    }

    #[test]
    fn test_planar_distance() {
        let a = LatLng::new(45.0, 9.0);
        let b = LatLng::new(45.3, 9.4);
        assert_relative_eq!(a.distance_squared_from(&b), 0.25, epsilon = 1e-12);
    }
}
