//! Floating-point point types and the coordinate contract simplification
//! is written against.

mod latlng;
mod point2;
mod point_like;

pub use latlng::LatLng;
pub use point2::Point2;
pub use point_like::Point2Like;
