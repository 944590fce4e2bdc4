use crate::{
    GeoError,
    GeoResult,
};
use crate::geo_2d::Point;
use crate::collinearity::{
    CollinearityTest,
    Exact,
};

/// Shift point `a` into a frame with `b` at the origin.
/// The result is the vector from `b` to `a`, as a new point.
pub fn shift_coordinate_2d(a: Point, b: Point) -> Point {
    Point::from(a - b)
}

/// Find the circumcenter of the triangle `a`, `b`, `c`.
/// Fails with `GeoError::Collinear` only when the determinant is exactly zero.
pub fn find_circumcenter_2d(a: Point, b: Point, c: Point) -> GeoResult<Point> {
    find_circumcenter_2d_with(a, b, c, &Exact)
}

/// Find the circumcenter of the triangle `a`, `b`, `c`, using `test` to reject degenerate triangles.
pub fn find_circumcenter_2d_with<T>(a: Point, b: Point, c: Point, test: &T) -> GeoResult<Point>
where T: CollinearityTest
{
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if test.is_collinear(d) {
        return Err(GeoError::Collinear);
    }

    let (a_sq, b_sq, c_sq) = (a.norm_sq(), b.norm_sq(), c.norm_sq());
    let ux = (1.0 / d) * (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y));
    let uy = (1.0 / d) * (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x));

    Ok(Point::new(ux, uy))
}

/// `shift_coordinate_2d` for untyped operands.
/// Both values are checked to be points before anything is computed.
pub fn shift_coordinate_2d_value(a: &serde_json::Value, b: &serde_json::Value) -> GeoResult<Point> {
    let a = Point::try_from(a)?;
    let b = Point::try_from(b)?;
    Ok(shift_coordinate_2d(a, b))
}

/// `find_circumcenter_2d` for untyped operands.
/// All three values are checked to be points before the collinearity check.
pub fn find_circumcenter_2d_value(
    a: &serde_json::Value,
    b: &serde_json::Value,
    c: &serde_json::Value,
) -> GeoResult<Point> {
    let a = Point::try_from(a)?;
    let b = Point::try_from(b)?;
    let c = Point::try_from(c)?;
    find_circumcenter_2d(a, b, c)
}
