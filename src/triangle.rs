use itertools::Itertools;

use crate::geo_2d::Angle;

/// Check if three side lengths can form a non-degenerate triangle.
/// All sides must be strictly positive and every pair must sum to strictly more than the third.
/// Degenerate (flat) triangles and `NaN` sides give `false`.
pub fn is_valid_triangle(a: f64, b: f64, c: f64) -> bool {
    let sides = [a, b, c];
    sides.iter().all(|&side| side > 0.0)
        && sides.iter().circular_tuple_windows().all(|(x, y, z)| x + y > *z)
}

/// Third side of a triangle from two sides and the angle between them (law of cosines).
/// No validation: a negative radicand gives `NaN`.
pub fn calculate_third_side_using_cosine_law(a: f64, b: f64, angle: Angle) -> f64 {
    (a * a + b * b - 2.0 * a * b * angle.cos()).sqrt()
}
