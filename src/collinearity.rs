/*!
 * Collinearity tests for the circumcenter determinant.
 *
 * The default is the exact `D == 0` comparison. A tolerance-based test is
 * available for callers that want near-collinear triangles rejected too.
 *
 * New tests need:
 * - A struct implementing `CollinearityTest`
 * - An enum variant containing that struct in `CollinearityChoice`
 * - A constructor arg_name and function in `COLLINEARITY_CONSTRUCTION`
 */

use enum_dispatch::enum_dispatch;

use crate::{
    err_str,
    GeoResult,
};

/// Collinearity test enum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[enum_dispatch(CollinearityTest)]
pub enum CollinearityChoice {
    /// Collinear only when the determinant is exactly zero.
    Exact(Exact),
    /// Collinear when the determinant is within an absolute tolerance of zero.
    WithinTolerance(WithinTolerance),
}
impl Default for CollinearityChoice {
    fn default() -> Self {
        CollinearityChoice::Exact(Exact)
    }
}

/// Collinearity construction array -- Written out in once place for easy modification.
const COLLINEARITY_CONSTRUCTION: &[CollinearityConstructor] = &[
    CollinearityConstructor{
        arg_name: "exact",
        constructor: |epsilon| {
            if epsilon.is_some() {
                return err_str("Collinearity test \"exact\" does not take a tolerance");
            }
            Ok(CollinearityChoice::Exact(Exact))
        },
    },
    CollinearityConstructor{
        arg_name: "tolerance",
        constructor: |epsilon| {
            match epsilon {
                Some(epsilon) => Ok(CollinearityChoice::WithinTolerance(WithinTolerance::new(epsilon)?)),
                None => err_str("Collinearity test \"tolerance\" requires a tolerance value"),
            }
        },
    },
];

/// Collinearity test trait.
/// Decides whether a circumcenter determinant marks the triangle as degenerate.
#[enum_dispatch]
pub trait CollinearityTest {
    /// Get the name of the test, as used in config files.
    fn name(&self) -> String;

    /// Check the determinant `D = 2*(Ax*(By-Cy) + Bx*(Cy-Ay) + Cx*(Ay-By))`.
    fn is_collinear(&self, determinant: f64) -> bool;
}

/// Collinearity test constructor.
struct CollinearityConstructor {
    /// Name of the test.
    arg_name: &'static str,
    /// Constructor function, given the optional tolerance.
    constructor: fn(Option<f64>) -> GeoResult<CollinearityChoice>,
}

impl CollinearityChoice {
    /// Construct a collinearity test from a name (given in the config file).
    pub fn from_name(arg_name: &str, epsilon: Option<f64>) -> GeoResult<Self> {
        for constructor in COLLINEARITY_CONSTRUCTION {
            if constructor.arg_name == arg_name {
                return (constructor.constructor)(epsilon);
            }
        }

        let mut error_str = format!("Collinearity test not found: {arg_name}\n");
        error_str.push_str("Available tests:\n");
        for constructor in COLLINEARITY_CONSTRUCTION {
            error_str.push_str(&format!("    {}\n", constructor.arg_name));
        }
        err_str(&error_str)
    }
}

/// Exact floating-point comparison against zero.
/// Near-collinear inputs whose determinant rounds to a tiny nonzero value pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Exact;
impl CollinearityTest for Exact {
    fn name(&self) -> String {
        "exact".to_string()
    }

    fn is_collinear(&self, determinant: f64) -> bool {
        determinant == 0.0
    }
}

/// Absolute tolerance on the determinant.
/// The determinant scales with the square of the coordinates, so `epsilon` should too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithinTolerance {
    epsilon: f64,
}
impl WithinTolerance {
    /// Create a new tolerance test. `epsilon` must be finite and non-negative.
    pub fn new(epsilon: f64) -> GeoResult<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return err_str(&format!("Collinearity tolerance must be finite and non-negative, got {}", epsilon));
        }
        Ok(WithinTolerance{epsilon})
    }

    /// Get the tolerance bound.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}
impl CollinearityTest for WithinTolerance {
    fn name(&self) -> String {
        "tolerance".to_string()
    }

    fn is_collinear(&self, determinant: f64) -> bool {
        determinant.abs() <= self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoError;

    #[test]
    fn exact_only_matches_zero() {
        let test = CollinearityChoice::default();
        assert_eq!(test.name(), "exact");
        assert!(test.is_collinear(0.0));
        assert!(test.is_collinear(-0.0));
        assert!(!test.is_collinear(1e-300));
        assert!(!test.is_collinear(f64::NAN));
    }

    #[test]
    fn tolerance_matches_small_determinants() {
        let test = CollinearityChoice::from_name("tolerance", Some(1e-9)).unwrap();
        assert_eq!(test.name(), "tolerance");
        assert!(test.is_collinear(0.0));
        assert!(test.is_collinear(-5e-10));
        assert!(test.is_collinear(1e-9));
        assert!(!test.is_collinear(2e-9));
    }

    #[test]
    fn zero_tolerance_behaves_like_exact() {
        let test = CollinearityChoice::from_name("tolerance", Some(0.0)).unwrap();
        for d in [0.0, 1e-300, -1e-300, 4.0] {
            assert_eq!(test.is_collinear(d), Exact.is_collinear(d));
        }
    }

    #[test]
    fn invalid_tolerance_is_rejected() {
        for epsilon in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(WithinTolerance::new(epsilon), Err(GeoError::StringOnly(_))));
        }
        assert_eq!(WithinTolerance::new(0.5).unwrap().epsilon(), 0.5);
    }

    #[test]
    fn constructor_argument_checks() {
        assert!(CollinearityChoice::from_name("exact", Some(1e-9)).is_err());
        assert!(CollinearityChoice::from_name("tolerance", None).is_err());
        assert_eq!(CollinearityChoice::from_name("exact", None).unwrap(), CollinearityChoice::Exact(Exact));
    }

    #[test]
    fn unknown_name_lists_available_tests() {
        match CollinearityChoice::from_name("fuzzy", None) {
            Err(GeoError::StringOnly(msg)) => {
                assert!(msg.contains("fuzzy"));
                assert!(msg.contains("exact"));
                assert!(msg.contains("tolerance"));
            },
            other => panic!("expected an unknown-name error, got {:?}", other),
        }
    }
}
