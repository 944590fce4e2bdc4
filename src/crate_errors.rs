use crate::io;

/// Error-type enum for the `trigeo` crate.
/// Covers malformed point operands, degenerate triangles and config loading.
#[derive(Debug)]
pub enum GeoError {
    /// An operand expected to be a 2D point is not one.
    TypeError(String),
    /// The three points lie on a single line.
    Collinear,
    /// Config file could not be read or parsed.
    IoError(io::IoError),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::TypeError(error) => write!(f, "Arguments must be instances of Point: {}", error),
            GeoError::Collinear => write!(f, "The points are collinear, circumcenter cannot be determined."),
            GeoError::IoError(error) => write!(f, "IO Error:\n{}", error),
            GeoError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl std::error::Error for GeoError {}
impl From<io::IoError> for GeoError {
    fn from(error: io::IoError) -> Self {
        GeoError::IoError(error)
    }
}
impl From<String> for GeoError {
    fn from(error: String) -> Self {
        GeoError::StringOnly(error)
    }
}

/// Result type for the `trigeo` crate.
pub type GeoResult<T> = std::result::Result<T, GeoError>;

/// Create a `GeoResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::GeoError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> GeoResult<T> {
    Err(GeoError::StringOnly(error_str.to_string()))
}
