//! Curves for presenting simplified polylines.

mod bezier;
mod smooth;

pub use bezier::QuadraticBezier2;
pub use smooth::{smooth_path, PathCommand, SmoothPath};
