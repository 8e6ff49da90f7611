//! Radial distance simplification.
//!
//! A fast O(n) pass that drops every point lying within the tolerance of the
//! last kept point. It is used to thin out clustered samples (GPS jitter,
//! dense touch input) before the more expensive Douglas-Peucker stage.
//!
//! All thresholds here are *squared* distances.

use crate::primitives::Point2Like;

/// Removes points within `sq_tolerance` (squared distance) of the last kept
/// point.
///
/// The first point is always kept. A point is kept only when its squared
/// distance to the previously kept point is strictly greater than
/// `sq_tolerance`. After the scan, the final input point is appended unless
/// the last kept point already has the same coordinates, so the output always
/// ends on the original end of the line.
///
/// Inputs with two or fewer points are returned unchanged.
///
/// # Example
///
/// ```
/// use tracesimp::simplify::radial_distance;
/// use tracesimp::Point2;
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.1, 0.0),  // Too close, will be removed
///     Point2::new(0.2, 0.0),  // Too close, will be removed
///     Point2::new(1.0, 0.0),  // Far enough, kept
///     Point2::new(1.05, 0.0), // Too close, will be removed
///     Point2::new(2.0, 0.0),  // Far enough, kept
/// ];
///
/// let simplified = radial_distance(&points, 0.5 * 0.5);
/// assert_eq!(simplified.len(), 3);
/// ```
pub fn radial_distance<P>(points: &[P], sq_tolerance: P::Scalar) -> Vec<P>
where
    P: Point2Like + Clone,
{
    radial_distance_indices(points, sq_tolerance)
        .into_iter()
        .map(|i| points[i].clone())
        .collect()
}

/// Returns indices of the points [`radial_distance`] keeps.
///
/// Indices are strictly increasing. Useful when per-point attributes such as
/// timestamps have to stay aligned with the output.
pub fn radial_distance_indices<P: Point2Like>(points: &[P], sq_tolerance: P::Scalar) -> Vec<usize> {
    let n = points.len();
    if n <= 2 {
        return (0..n).collect();
    }

    let mut indices = Vec::with_capacity(n / 2);
    indices.push(0);
    let mut prev = 0;

    for (i, point) in points.iter().enumerate().skip(1) {
        if point.distance_squared_from(&points[prev]) > sq_tolerance {
            indices.push(i);
            prev = i;
        }
    }

    let last = n - 1;
    if prev != last && !points[prev].coords_eq(&points[last]) {
        indices.push(last);
    }

    indices
}

/// Streaming radial distance filter.
///
/// Maintains the state of [`radial_distance`] so points can be filtered as
/// they arrive (live GPS fixes, touch events). Call [`finish`](Self::finish)
/// once the stream ends to recover the trailing endpoint; for streams of
/// three or more points the kept sequence then matches the batch function.
///
/// # Example
///
/// ```
/// use tracesimp::simplify::RadialFilter;
/// use tracesimp::Point2;
///
/// let mut filter: RadialFilter<Point2<f64>> = RadialFilter::new(1.0);
///
/// assert!(filter.push(Point2::new(0.0, 0.0)).is_some());  // First point, kept
/// assert!(filter.push(Point2::new(0.5, 0.0)).is_none());  // Too close
/// assert!(filter.push(Point2::new(1.5, 0.0)).is_some());  // Far enough
/// assert!(filter.push(Point2::new(1.7, 0.0)).is_none());  // Too close
/// assert_eq!(filter.finish(), Some(Point2::new(1.7, 0.0))); // Endpoint restored
/// ```
#[derive(Debug, Clone)]
pub struct RadialFilter<P: Point2Like> {
    sq_tolerance: P::Scalar,
    last_kept: Option<P>,
    pending: Option<P>,
}

impl<P: Point2Like + Clone> RadialFilter<P> {
    /// Creates a filter dropping points within `tolerance` of the last kept one.
    pub fn new(tolerance: P::Scalar) -> Self {
        Self::with_sq_tolerance(tolerance * tolerance)
    }

    /// Creates a filter from an already squared tolerance.
    pub fn with_sq_tolerance(sq_tolerance: P::Scalar) -> Self {
        Self {
            sq_tolerance,
            last_kept: None,
            pending: None,
        }
    }

    /// Processes a point, returning it if it should be kept.
    pub fn push(&mut self, point: P) -> Option<P> {
        let keep = match &self.last_kept {
            None => true,
            Some(last) => point.distance_squared_from(last) > self.sq_tolerance,
        };

        if keep {
            self.pending = None;
            self.last_kept = Some(point.clone());
            Some(point)
        } else {
            self.pending = Some(point);
            None
        }
    }

    /// Ends the stream and resets the filter.
    ///
    /// Returns the last pushed point if it was dropped and differs from the
    /// last kept point; callers append it to close the line.
    pub fn finish(&mut self) -> Option<P> {
        let pending = self.pending.take();
        let last_kept = self.last_kept.take();
        match (pending, last_kept) {
            (Some(p), Some(kept)) if !p.coords_eq(&kept) => Some(p),
            _ => None,
        }
    }

    /// Resets the filter state.
    pub fn reset(&mut self) {
        self.last_kept = None;
        self.pending = None;
    }

    /// Returns the last kept point, if any.
    pub fn last_kept(&self) -> Option<&P> {
        self.last_kept.as_ref()
    }
}
