//! Smoothed rendering paths through simplified points.
//!
//! Simplified tracks look angular when stroked with straight segments.
//! [`smooth_path`] threads quadratic curves through the points instead,
//! bending at each segment midpoint. The result only affects presentation;
//! it does not change which points were kept.

use super::QuadraticBezier2;
use crate::primitives::{Point2, Point2Like};
use num_traits::Float;

/// A drawing command in a smoothed path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand<F> {
    /// Start a new subpath.
    MoveTo(Point2<F>),
    /// Straight segment.
    LineTo(Point2<F>),
    /// Quadratic curve from the current position.
    QuadTo { control: Point2<F>, to: Point2<F> },
}

/// An ordered list of [`PathCommand`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SmoothPath<F> {
    commands: Vec<PathCommand<F>>,
}

impl<F: Float> SmoothPath<F> {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// The commands in drawing order.
    pub fn commands(&self) -> &[PathCommand<F>] {
        &self.commands
    }

    /// Returns `true` if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Where the pen rests after the last command.
    pub fn end_point(&self) -> Option<Point2<F>> {
        self.commands.last().map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::QuadTo { to, .. } => to,
        })
    }

    /// Flattens the path to a polyline, subdividing curves until they are
    /// within `tolerance` of their chords.
    pub fn to_polyline(&self, tolerance: F) -> Vec<Point2<F>> {
        let mut points: Vec<Point2<F>> = Vec::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => points.push(p),
                PathCommand::QuadTo { control, to } => match points.last() {
                    Some(&from) => {
                        QuadraticBezier2::new(from, control, to).flatten_into(tolerance, &mut points)
                    }
                    None => points.push(to),
                },
            }
        }
        points
    }

    fn push(&mut self, cmd: PathCommand<F>) {
        self.commands.push(cmd);
    }
}

/// Builds a smoothed path through `points`.
///
/// The pen moves to the first point and draws a line to the second. Then,
/// for every consecutive pair `(prev, cur)` with midpoint `m`, it adds a
/// quadratic curve to `m` and another to `cur`, each with its control point
/// at the midpoint of `m` and the pair's point, pushed vertically towards
/// that point.
///
/// Fewer than two points give an empty path.
///
/// # Example
///
/// ```
/// use tracesimp::curves::{smooth_path, PathCommand};
/// use tracesimp::Point2;
///
/// let path = smooth_path(&[Point2::new(0.0, 0.0), Point2::new(4.0, 2.0)]);
/// assert_eq!(path.len(), 4);
/// assert_eq!(path.commands()[0], PathCommand::MoveTo(Point2::new(0.0, 0.0)));
/// assert_eq!(path.end_point(), Some(Point2::new(4.0, 2.0)));
/// ```
pub fn smooth_path<P: Point2Like>(points: &[P]) -> SmoothPath<P::Scalar> {
    let mut path = SmoothPath::new();
    if points.len() < 2 {
        return path;
    }

    let mut prev: Option<Point2<P::Scalar>> = None;
    for (i, p) in points.iter().enumerate() {
        let cur = Point2::new(p.x_value(), p.y_value());
        match prev {
            None => path.push(PathCommand::MoveTo(cur)),
            Some(prev) => {
                if i == 1 {
                    path.push(PathCommand::LineTo(cur));
                }
                let mid = prev.midpoint(cur);
                path.push(PathCommand::QuadTo {
                    control: control_point(mid, prev),
                    to: mid,
                });
                path.push(PathCommand::QuadTo {
                    control: control_point(mid, cur),
                    to: cur,
                });
            }
        }
        prev = Some(cur);
    }

    path
}

/// Midpoint of `from` and `to`, moved vertically towards `to` by the height
/// remaining between them.
fn control_point<F: Float>(from: Point2<F>, to: Point2<F>) -> Point2<F> {
    let mut control = from.midpoint(to);
    let diff_y = (to.y - control.y).abs();
    if from.y < to.y {
        control.y = control.y + diff_y;
    } else if from.y > to.y {
        control.y = control.y - diff_y;
    }
    control
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_and_single() {
        let empty: Vec<Point2<f64>> = vec![];
        assert!(smooth_path(&empty).is_empty());
        assert!(smooth_path(&[(1.0_f64, 1.0)]).is_empty());
        assert_eq!(smooth_path(&empty).end_point(), None);
    }

    #[test]
    fn test_command_layout() {
        let points = [(0.0_f64, 0.0), (2.0, 2.0), (4.0, 0.0)];
        let path = smooth_path(&points);

        // move, line, then two curves per consecutive pair
        assert_eq!(path.len(), 2 + 2 * 2);
        assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
        assert!(matches!(path.commands()[1], PathCommand::LineTo(_)));
        assert!(path.commands()[2..]
            .iter()
            .all(|c| matches!(c, PathCommand::QuadTo { .. })));

        assert_eq!(
            path.commands()[4],
            PathCommand::QuadTo {
                control: control_point(Point2::new(3.0, 1.0), Point2::new(2.0, 2.0)),
                to: Point2::new(3.0, 1.0),
            }
        );
        assert_eq!(path.end_point(), Some(Point2::new(4.0, 0.0)));
    }

    #[test]
    fn test_control_point_pushes_towards_target() {
        let from = Point2::new(0.0_f64, 0.0);

        // Rising: control sits level with the target
        let up = control_point(from, Point2::new(2.0, 4.0));
        assert_relative_eq!(up.x, 1.0);
        assert_relative_eq!(up.y, 4.0);

        // Falling
        let down = control_point(from, Point2::new(2.0, -4.0));
        assert_relative_eq!(down.y, -4.0);

        // Level: plain midpoint
        let flat = control_point(from, Point2::new(2.0, 0.0));
        assert_eq!(flat, Point2::new(1.0, 0.0));
    }

    #[test]
    fn test_to_polyline_passes_through_points() {
        let points = [
            Point2::new(0.0_f64, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(20.0, 0.0),
            Point2::new(30.0, 8.0),
        ];
        let polyline = smooth_path(&points).to_polyline(0.05);

        assert_eq!(polyline.first(), Some(&points[0]));
        assert_eq!(polyline.last(), Some(&points[3]));
        for p in &points {
            assert!(polyline.contains(p));
        }
    }

    #[test]
    fn test_lone_curve_without_start() {
        let path = SmoothPath {
            commands: vec![PathCommand::QuadTo {
                control: Point2::new(1.0_f64, 1.0),
                to: Point2::new(2.0, 0.0),
            }],
        };
        assert_eq!(path.to_polyline(0.1), vec![Point2::new(2.0, 0.0)]);
    }
}
