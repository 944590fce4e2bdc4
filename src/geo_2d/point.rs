use std::ops::{
    Add,
    Sub,
};
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::GeoError;
use crate::geo_2d::GeoVector;

/// A point in 2D space.
/// Contains the coordinates of the point.
/// Has basic math support for adding and subtracting vectors.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point{x, y}
    }

    /// Create a new zero point.
    pub fn zero() -> Self {
        Point{x: 0.0, y: 0.0}
    }

    /// Get the distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        (*self - *other).norm()
    }

    /// Squared distance from the origin, `x² + y²`.
    pub(crate) fn norm_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}
impl Add<GeoVector> for Point {
    type Output = Self;

    fn add(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub<GeoVector> for Point {
    type Output = Self;

    fn sub(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl Sub<Point> for Point {
    type Output = GeoVector;

    fn sub(self, rhs: Self) -> GeoVector {
        GeoVector{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl std::convert::From<GeoVector> for Point {
    fn from(vector: GeoVector) -> Self {
        Point{
            x: vector.x,
            y: vector.y,
        }
    }
}

/// Structural check for untyped input.
/// Accepts any JSON object carrying numeric `x` and `y` members; other members are ignored.
impl TryFrom<&serde_json::Value> for Point {
    type Error = GeoError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        let coord = |name: &str| value.get(name).and_then(serde_json::Value::as_f64);
        match (value.is_object(), coord("x"), coord("y")) {
            (true, Some(x), Some(y)) => Ok(Point{x, y}),
            _ => Err(GeoError::TypeError(format!("expected a 2D point with numeric x and y, got {}", value))),
        }
    }
}
