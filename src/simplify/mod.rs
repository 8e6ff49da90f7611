//! Polyline simplification.
//!
//! [`simplify`] chains the two stages: an optional [`radial_distance`]
//! pre-pass followed by [`douglas_peucker`]. Both stages are exported on their
//! own, together with index-returning variants.

mod radial;
mod rdp;
mod simplifier;

pub use radial::{radial_distance, radial_distance_indices, RadialFilter};
pub use rdp::{douglas_peucker, douglas_peucker_indices};
pub use simplifier::{
    simplify, simplify_indices, SimplifyExt, SimplifyOptions, SimplifyReport, Simplifier,
    DEFAULT_TOLERANCE,
};
