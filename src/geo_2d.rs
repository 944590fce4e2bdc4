//! Plane geometry value types.
//! Points and displacement vectors in 2D, both plain `Copy` values.

mod point;
mod vector;

pub use point::Point;
pub use vector::GeoVector;

/// Angle type (alias for f64), in radians.
pub type Angle = f64;
