//! tracesimp - Polyline simplification
//!
//! Reduces an ordered sequence of 2D points (a polyline, GPS track or a
//! touch-drawn stroke) to a subsequence that stays within a tolerance of the
//! original. A cheap radial-distance pass thins out clustered points, then
//! Ramer-Douglas-Peucker keeps only the points that deviate from their chord.
//!
//! ```
//! use tracesimp::{simplify, Point2};
//!
//! let track = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(3.0, 0.0),
//! ];
//!
//! let simplified = simplify(&track, Some(0.5), false);
//! assert_eq!(simplified, vec![Point2::new(0.0, 0.0), Point2::new(3.0, 0.0)]);
//! ```

pub mod curves;
pub mod error;
pub mod io;
pub mod primitives;
pub mod simplify;

pub use error::SimplifyError;
pub use primitives::{LatLng, Point2, Point2Like};
pub use simplify::{
    simplify, simplify_indices, SimplifyExt, SimplifyOptions, SimplifyReport, Simplifier,
    DEFAULT_TOLERANCE,
};
