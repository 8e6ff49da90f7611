//! Output utilities for simplified geometry.
//!
//! Provides SVG path serialization for polylines and smoothed paths.

mod svg;

pub use svg::{polyline_to_svg_path, smooth_path_to_svg};
