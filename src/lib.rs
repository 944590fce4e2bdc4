//! Small 2D triangle utilities.
//! Triangle validity, the law of cosines, coordinate shifts and circumcenters.

pub mod geo_2d;
pub mod triangle;
pub mod coords;
pub mod collinearity;
pub mod cfg;
pub mod io;
mod crate_errors;

pub use crate_errors::{
    GeoError,
    GeoResult,
    err_str,
};
pub use geo_2d::{
    Angle,
    GeoVector,
    Point,
};
pub use triangle::{
    is_valid_triangle,
    calculate_third_side_using_cosine_law,
};
pub use coords::{
    shift_coordinate_2d,
    find_circumcenter_2d,
    find_circumcenter_2d_with,
    shift_coordinate_2d_value,
    find_circumcenter_2d_value,
};
pub use collinearity::{
    CollinearityChoice,
    CollinearityTest,
};
pub use cfg::GeometryCfg;
