use serde::{Serialize, Deserialize};

use crate::{
    io,
    GeoResult,
};
use crate::collinearity::{
    CollinearityChoice,
    CollinearityTest,
};

fn default_collinearity() -> String {
    "exact".to_string()
}

/// Geometry settings, loaded from a json/toml/yaml config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeometryCfg {
    /// Name of the collinearity test for circumcenters.
    #[serde(rename = "collinearity", default = "default_collinearity")]
    pub collinearity_name: String,

    /// Absolute tolerance on the circumcenter determinant (only for `tolerance`).
    #[serde(default, alias = "epsilon", alias = "eps", skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
}
impl Default for GeometryCfg {
    fn default() -> Self {
        GeometryCfg{
            collinearity_name: default_collinearity(),
            tolerance: None,
        }
    }
}
impl GeometryCfg {
    /// Load and check a geometry config file.
    pub fn from_cfg_file(cfg_file: &str) -> GeoResult<Self> {
        println!("Loading geometry config file: {}...", cfg_file);
        let cfg: GeometryCfg = io::read_cfg_file(cfg_file)?;

        // Fail on a bad test name or tolerance here, not at first use
        cfg.collinearity_test()?;

        Ok(cfg)
    }

    /// Build the collinearity test named in the config.
    pub fn collinearity_test(&self) -> GeoResult<CollinearityChoice> {
        CollinearityChoice::from_name(&self.collinearity_name, self.tolerance)
    }
}
impl From<CollinearityChoice> for GeometryCfg {
    fn from(test: CollinearityChoice) -> Self {
        let tolerance = match test {
            CollinearityChoice::Exact(_) => None,
            CollinearityChoice::WithinTolerance(within) => Some(within.epsilon()),
        };
        GeometryCfg{
            collinearity_name: test.name(),
            tolerance,
        }
    }
}

/// Render an example geometry config in the given format.
pub fn example_cfg(format: io::CfgFormat) -> GeoResult<String> {
    let example = GeometryCfg{
        collinearity_name: "tolerance".to_string(),
        tolerance: Some(1e-9),
    };
    Ok(io::to_cfg_string(&example, format)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collinearity::{Exact, WithinTolerance};

    #[test]
    fn default_is_exact() {
        let cfg = GeometryCfg::default();
        assert_eq!(cfg.collinearity_test().unwrap(), CollinearityChoice::Exact(Exact));
    }

    #[test]
    fn missing_fields_fall_back_to_exact() {
        let cfg: GeometryCfg = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, GeometryCfg::default());
    }

    #[test]
    fn tolerance_aliases() {
        let cfg: GeometryCfg = serde_yaml::from_str("collinearity: tolerance\neps: 0.001\n").unwrap();
        assert_eq!(cfg.tolerance, Some(0.001));
        let cfg: GeometryCfg = toml::from_str("collinearity = \"tolerance\"\nepsilon = 0.5\n").unwrap();
        assert_eq!(cfg.tolerance, Some(0.5));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<GeometryCfg>(r#"{"collinear": "exact"}"#).is_err());
    }

    #[test]
    fn from_collinearity_choice() {
        let test = CollinearityChoice::WithinTolerance(WithinTolerance::new(0.25).unwrap());
        let cfg = GeometryCfg::from(test);
        assert_eq!(cfg.collinearity_name, "tolerance");
        assert_eq!(cfg.tolerance, Some(0.25));
        assert_eq!(cfg.collinearity_test().unwrap(), test);

        assert_eq!(GeometryCfg::from(CollinearityChoice::default()), GeometryCfg::default());
    }

    #[test]
    fn example_parses_back_in_every_format() {
        let json: GeometryCfg = serde_json::from_str(&example_cfg(io::CfgFormat::Json).unwrap()).unwrap();
        let toml: GeometryCfg = toml::from_str(&example_cfg(io::CfgFormat::Toml).unwrap()).unwrap();
        let yaml: GeometryCfg = serde_yaml::from_str(&example_cfg(io::CfgFormat::Yaml).unwrap()).unwrap();
        assert_eq!(json, toml);
        assert_eq!(toml, yaml);
        assert_eq!(json.tolerance, Some(1e-9));
    }
}
