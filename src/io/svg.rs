//! SVG path export.
//!
//! Writes path data (the `d` attribute) for raw and simplified polylines and
//! for smoothed paths, so results can be inspected in any SVG viewer.
//!
//! # Example
//!
//! ```
//! use tracesimp::io::{polyline_to_svg_path, smooth_path_to_svg};
//! use tracesimp::curves::smooth_path;
//! use tracesimp::{simplify, Point2};
//!
//! let track = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(5.0, 0.1),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//! ];
//! let simplified = simplify(&track, Some(0.5), false);
//!
//! assert_eq!(polyline_to_svg_path(&simplified, false), "M 0 0 L 10 0 L 10 10");
//! assert!(smooth_path_to_svg(&smooth_path(&simplified)).starts_with("M 0 0 L 10 0 Q"));
//! ```

use crate::curves::{PathCommand, SmoothPath};
use crate::primitives::Point2Like;
use num_traits::Float;
use std::fmt;

/// Converts a polyline to an SVG path string.
///
/// # Arguments
///
/// * `points` - The polyline vertices
/// * `closed` - Whether to close the path with 'Z'
///
/// # Returns
///
/// An SVG path string using M and L commands, empty for an empty polyline.
pub fn polyline_to_svg_path<P>(points: &[P], closed: bool) -> String
where
    P: Point2Like,
    P::Scalar: fmt::Display,
{
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut result = String::new();
    result.push_str(&format!("M {} {}", first.x_value(), first.y_value()));

    for p in rest {
        result.push_str(&format!(" L {} {}", p.x_value(), p.y_value()));
    }

    if closed {
        result.push_str(" Z");
    }

    result
}

/// Converts a smoothed path to an SVG path string using M, L and Q commands.
pub fn smooth_path_to_svg<F: Float + fmt::Display>(path: &SmoothPath<F>) -> String {
    let parts: Vec<String> = path
        .commands()
        .iter()
        .map(|cmd| match cmd {
            PathCommand::MoveTo(p) => format!("M {} {}", p.x, p.y),
            PathCommand::LineTo(p) => format!("L {} {}", p.x, p.y),
            PathCommand::QuadTo { control, to } => {
                format!("Q {} {} {} {}", control.x, control.y, to.x, to.y)
            }
        })
        .collect();
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::smooth_path;
    use crate::primitives::{LatLng, Point2};

    #[test]
    fn test_polyline_to_svg() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ];

        assert_eq!(polyline_to_svg_path(&points, false), "M 0 0 L 10 0 L 10 10");
        assert_eq!(polyline_to_svg_path(&points, true), "M 0 0 L 10 0 L 10 10 Z");
    }

    #[test]
    fn test_polyline_to_svg_empty() {
        let empty: Vec<Point2<f64>> = vec![];
        assert_eq!(polyline_to_svg_path(&empty, true), "");
    }

    #[test]
    fn test_polyline_to_svg_foreign_points() {
        let coords = [LatLng::new(1.5, 2.0), LatLng::new(3.0, 4.25)];
        assert_eq!(polyline_to_svg_path(&coords, false), "M 1.5 2 L 3 4.25");
    }

    #[test]
    fn test_smooth_path_to_svg() {
        let path = smooth_path(&[Point2::new(0.0_f64, 0.0), Point2::new(4.0, 2.0)]);
        assert_eq!(
            smooth_path_to_svg(&path),
            "M 0 0 L 4 2 Q 1 0 2 1 Q 3 2 4 2"
        );
    }

    #[test]
    fn test_smooth_path_to_svg_empty() {
        let path = smooth_path::<Point2<f32>>(&[]);
        assert_eq!(smooth_path_to_svg(&path), "");
    }
}
