//! Ramer-Douglas-Peucker polyline simplification.
//!
//! The RDP algorithm keeps the point that deviates most from the chord
//! joining a range's endpoints whenever that deviation exceeds the tolerance,
//! then repeats on both halves. Every other point is dropped.
//!
//! Ranges are processed from an explicit work stack rather than by
//! recursion, so a pathological input (one split per point) cannot exhaust
//! the call stack. Kept points are marked in a mask, which keeps the output
//! in input order regardless of the order ranges are visited.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use crate::primitives::Point2Like;
use log::trace;

/// Simplifies a polyline using the Ramer-Douglas-Peucker algorithm.
///
/// `sq_tolerance` is a squared distance: a point survives only if its squared
/// distance to the chord of its enclosing range is strictly greater. The first
/// and last points are always preserved.
///
/// Returns an empty vector if the input has fewer than 2 points.
///
/// # Example
///
/// ```
/// use tracesimp::{Point2, simplify::douglas_peucker};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.1),  // Close to the chord, will be removed
///     Point2::new(2.0, 0.0),
///     Point2::new(3.0, 2.0),  // Far from the chord, will be kept
///     Point2::new(4.0, 0.0),
/// ];
///
/// let simplified = douglas_peucker(&points, 0.5 * 0.5);
/// assert_eq!(simplified.len(), 4);
/// ```
pub fn douglas_peucker<P>(points: &[P], sq_tolerance: P::Scalar) -> Vec<P>
where
    P: Point2Like + Clone,
{
    douglas_peucker_indices(points, sq_tolerance)
        .into_iter()
        .map(|i| points[i].clone())
        .collect()
}

/// Returns the indices of the points [`douglas_peucker`] keeps, in order.
///
/// Always includes index 0 and the last index if the input has at least
/// 2 points; empty otherwise.
pub fn douglas_peucker_indices<P: Point2Like>(points: &[P], sq_tolerance: P::Scalar) -> Vec<usize> {
    let n = points.len();
    if n <= 1 {
        return Vec::new();
    }

    let last = n - 1;
    let mut keep = vec![false; n];
    keep[0] = true;
    keep[last] = true;

    let mut ranges = vec![(0, last)];
    let mut splits = 0usize;

    while let Some((first, last)) = ranges.pop() {
        let Some(index) = farthest_beyond(points, first, last, sq_tolerance) else {
            continue;
        };

        keep[index] = true;
        splits += 1;

        if index - first > 1 {
            ranges.push((first, index));
        }
        if last - index > 1 {
            ranges.push((index, last));
        }
    }

    trace!("douglas-peucker: {n} points, {splits} interior points kept");

    keep.iter()
        .enumerate()
        .filter_map(|(i, &k)| if k { Some(i) } else { None })
        .collect()
}

/// Finds the interior point of `[first, last]` farthest from the chord, if
/// its squared distance exceeds `sq_tolerance`.
///
/// Ties keep the lowest index.
fn farthest_beyond<P: Point2Like>(
    points: &[P],
    first: usize,
    last: usize,
    sq_tolerance: P::Scalar,
) -> Option<usize> {
    if last <= first {
        return None;
    }

    let (a, b) = (&points[first], &points[last]);
    let mut max_sq_dist = sq_tolerance;
    let mut index = None;

    for (i, point) in points.iter().enumerate().take(last).skip(first + 1) {
        let sq_dist = point.distance_squared_to_segment(a, b);
        if sq_dist > max_sq_dist {
            max_sq_dist = sq_dist;
            index = Some(i);
        }
    }

    index
}
