//! The two-stage simplification pipeline and its configuration.

use super::radial::radial_distance_indices;
use super::rdp::douglas_peucker_indices;
use crate::error::SimplifyError;
use crate::primitives::Point2Like;
use log::debug;
use num_traits::Float;
use std::fmt;

/// Tolerance applied when none is given.
///
/// Because it is 1, it is also the squared threshold used in that case.
pub const DEFAULT_TOLERANCE: f64 = 1.0;

/// Settings for a simplification run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimplifyOptions<F> {
    /// Maximum deviation, in coordinate units. `None` uses
    /// [`DEFAULT_TOLERANCE`].
    pub tolerance: Option<F>,
    /// Skip the radial pre-pass and run Douglas-Peucker on the raw input.
    /// Slower, but never loses a point the pre-pass would have merged away.
    pub highest_quality: bool,
}

impl<F> Default for SimplifyOptions<F> {
    fn default() -> Self {
        Self {
            tolerance: None,
            highest_quality: false,
        }
    }
}

impl<F: Float> SimplifyOptions<F> {
    /// Creates options from a tolerance and the quality flag.
    pub fn new(tolerance: Option<F>, highest_quality: bool) -> Self {
        Self {
            tolerance,
            highest_quality,
        }
    }

    /// The squared threshold both stages compare against.
    pub fn sq_tolerance(&self) -> F {
        match self.tolerance {
            Some(t) => t * t,
            None => default_tolerance::<F>(),
        }
    }

    /// Checks that the tolerance, if any, is finite and non-negative.
    pub fn validate(&self) -> Result<(), SimplifyError> {
        match self.tolerance {
            Some(t) if !t.is_finite() || t < F::zero() => Err(SimplifyError::InvalidTolerance {
                value: t.to_f64().unwrap_or(f64::NAN),
            }),
            _ => Ok(()),
        }
    }
}

fn default_tolerance<F: Float>() -> F {
    F::from(DEFAULT_TOLERANCE).unwrap_or_else(F::one)
}

/// Simplifies `points`, returning a subsequence that stays within
/// `tolerance` of the original.
///
/// Sequences of zero or one point are returned unchanged. Otherwise the
/// tolerance is squared once (`None` means [`DEFAULT_TOLERANCE`]); unless
/// `highest_quality` is set, the radial pre-pass runs first, then
/// Douglas-Peucker always runs on the result.
///
/// The first point and (by value) the last point are always kept.
///
/// If the radial pre-pass collapses every point onto the first one, that
/// single point is returned and Douglas-Peucker is skipped. Running it on one
/// point would yield an empty result and lose the track altogether.
///
/// # Example
///
/// ```
/// use tracesimp::simplify;
///
/// let spike = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 5.0), (2.0, 5.0)];
/// assert_eq!(simplify(&spike, Some(0.1), false), spike);
///
/// let line = vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)];
/// assert_eq!(simplify(&line, Some(0.5), false), vec![(0.0, 0.0), (3.0, 0.0)]);
/// ```
pub fn simplify<P>(points: &[P], tolerance: Option<P::Scalar>, highest_quality: bool) -> Vec<P>
where
    P: Point2Like + Clone,
{
    let options = SimplifyOptions::new(tolerance, highest_quality);
    simplify_indices_with(points, &options)
        .into_iter()
        .map(|i| points[i].clone())
        .collect()
}

/// Like [`simplify`], but returns the indices of the kept points.
///
/// Indices are strictly increasing.
pub fn simplify_indices<P: Point2Like>(
    points: &[P],
    tolerance: Option<P::Scalar>,
    highest_quality: bool,
) -> Vec<usize> {
    simplify_indices_with(points, &SimplifyOptions::new(tolerance, highest_quality))
}

fn simplify_indices_with<P: Point2Like>(points: &[P], options: &SimplifyOptions<P::Scalar>) -> Vec<usize> {
    let n = points.len();
    if n <= 1 {
        return (0..n).collect();
    }

    let sq_tolerance = options.sq_tolerance();

    let kept = if options.highest_quality {
        douglas_peucker_indices(points, sq_tolerance)
    } else {
        let radial = radial_distance_indices(points, sq_tolerance);
        if radial.len() <= 1 {
            // Every point coincides with the first one
            return radial;
        }
        let thinned: Vec<&P> = radial.iter().map(|&i| &points[i]).collect();
        douglas_peucker_indices(&thinned, sq_tolerance)
            .into_iter()
            .map(|j| radial[j])
            .collect()
    };

    debug!(
        "simplified {} points to {} (highest_quality: {})",
        n,
        kept.len(),
        options.highest_quality
    );

    kept
}

/// Point counts before and after a simplification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimplifyReport {
    /// Number of points passed in.
    pub input_len: usize,
    /// Number of points kept.
    pub output_len: usize,
}

impl SimplifyReport {
    /// Number of points removed.
    pub fn removed(&self) -> usize {
        self.input_len.saturating_sub(self.output_len)
    }

    /// Percentage of input points removed, `0.0` for empty input.
    pub fn reduction_percent(&self) -> f64 {
        if self.input_len == 0 {
            return 0.0;
        }
        100.0 - (self.output_len as f64 / self.input_len as f64) * 100.0
    }
}

impl fmt::Display for SimplifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} points ({:.1}% reduction)",
            self.input_len,
            self.output_len,
            self.reduction_percent()
        )
    }
}

/// A reusable, validated simplification configuration.
///
/// # Example
///
/// ```
/// use tracesimp::{Point2, Simplifier};
///
/// let simplifier = Simplifier::new().with_tolerance(0.5).highest_quality(true);
/// let track: Vec<Point2<f64>> = (0..100)
///     .map(|i| Point2::new(i as f64, (i % 2) as f64 * 0.1))
///     .collect();
///
/// let (simplified, report) = simplifier.simplify_with_report(&track);
/// assert_eq!(simplified.len(), 2);
/// assert_eq!(report.removed(), 98);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Simplifier<F> {
    options: SimplifyOptions<F>,
}

impl<F: Float> Simplifier<F> {
    /// Default tolerance, radial pre-pass enabled.
    pub fn new() -> Self {
        Self {
            options: SimplifyOptions::default(),
        }
    }

    /// Builds a simplifier from options, rejecting invalid tolerances.
    pub fn from_options(options: SimplifyOptions<F>) -> Result<Self, SimplifyError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Sets the tolerance without validation.
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        self.options.tolerance = Some(tolerance);
        self
    }

    /// Sets the tolerance, rejecting negative, NaN or infinite values.
    pub fn try_with_tolerance(self, tolerance: F) -> Result<Self, SimplifyError> {
        let next = self.with_tolerance(tolerance);
        next.options.validate()?;
        Ok(next)
    }

    /// Enables or disables highest quality mode (no radial pre-pass).
    pub fn highest_quality(mut self, enabled: bool) -> Self {
        self.options.highest_quality = enabled;
        self
    }

    /// The options this simplifier runs with.
    pub fn options(&self) -> &SimplifyOptions<F> {
        &self.options
    }

    /// Simplifies `points` with this configuration.
    pub fn simplify<P>(&self, points: &[P]) -> Vec<P>
    where
        P: Point2Like<Scalar = F> + Clone,
    {
        self.simplify_indices(points)
            .into_iter()
            .map(|i| points[i].clone())
            .collect()
    }

    /// Indices of the points [`simplify`](Self::simplify) keeps.
    pub fn simplify_indices<P: Point2Like<Scalar = F>>(&self, points: &[P]) -> Vec<usize> {
        simplify_indices_with(points, &self.options)
    }

    /// Simplifies `points` and reports how many were removed.
    pub fn simplify_with_report<P>(&self, points: &[P]) -> (Vec<P>, SimplifyReport)
    where
        P: Point2Like<Scalar = F> + Clone,
    {
        let simplified = self.simplify(points);
        let report = SimplifyReport {
            input_len: points.len(),
            output_len: simplified.len(),
        };
        (simplified, report)
    }
}

impl<F: Float> TryFrom<SimplifyOptions<F>> for Simplifier<F> {
    type Error = SimplifyError;

    fn try_from(options: SimplifyOptions<F>) -> Result<Self, Self::Error> {
        Self::from_options(options)
    }
}

/// Simplification as a method on point slices.
///
/// ```
/// use tracesimp::{LatLng, SimplifyExt};
///
/// let track = vec![
///     LatLng::new(45.0, 9.0),
///     LatLng::new(45.0001, 9.0001),
///     LatLng::new(45.0002, 9.0002),
/// ];
/// assert_eq!(track.simplified(Some(0.001)).len(), 2);
/// ```
pub trait SimplifyExt<P: Point2Like + Clone> {
    /// Simplifies in highest quality mode (no radial pre-pass).
    fn simplified(&self, tolerance: Option<P::Scalar>) -> Vec<P>;

    /// Simplifies with explicit options.
    fn simplified_with(&self, options: &SimplifyOptions<P::Scalar>) -> Vec<P>;
}

impl<P: Point2Like + Clone> SimplifyExt<P> for [P] {
    fn simplified(&self, tolerance: Option<P::Scalar>) -> Vec<P> {
        simplify(self, tolerance, true)
    }

    fn simplified_with(&self, options: &SimplifyOptions<P::Scalar>) -> Vec<P> {
        simplify_indices_with(self, options)
            .into_iter()
            .map(|i| self[i].clone())
            .collect()
    }
}
