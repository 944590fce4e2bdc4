use strum::{Display, EnumIter, IntoEnumIterator};

/// What went wrong while reading or writing a config.
#[derive(Debug)]
pub enum CfgErrorCause {
    File(std::io::Error),
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
    TomlWrite(toml::ser::Error),
    TomlParse(toml::de::Error),
    /// Extension did not match any `CfgFormat`.
    UnsupportedFormat,
}
impl std::fmt::Display for CfgErrorCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CfgErrorCause::File(error) => write!(f, "cannot access file: {}", error),
            CfgErrorCause::Json(error) => write!(f, "invalid JSON geometry config: {}", error),
            CfgErrorCause::Yaml(error) => write!(f, "invalid YAML geometry config: {}", error),
            CfgErrorCause::TomlWrite(error) => write!(f, "cannot render TOML geometry config: {}", error),
            CfgErrorCause::TomlParse(error) => write!(f, "invalid TOML geometry config: {}", error),
            CfgErrorCause::UnsupportedFormat => write!(
                f,
                "unsupported config filetype\nSupported filetypes: {:?}",
                CfgFormat::supported_extensions(),
            ),
        }
    }
}

/// Config IO error, tagged with the file it concerns when there is one.
#[derive(Debug)]
pub struct IoError {
    /// Config file path, `None` for in-memory rendering.
    pub file: Option<String>,
    /// Error cause.
    pub cause: CfgErrorCause,
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- {}: {}", file, self.cause),
            None => write!(f, "- {}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Config file formats, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CfgFormat {
    Json,
    Toml,
    Yaml,
}
impl CfgFormat {
    /// File extensions recognised for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            CfgFormat::Json => &["json"],
            CfgFormat::Toml => &["toml"],
            CfgFormat::Yaml => &["yaml", "yml"],
        }
    }

    /// Find the format matching the extension of `path`, if any.
    pub fn from_path(path: &str) -> Option<Self> {
        let extension = std::path::Path::new(path).extension()?.to_str()?;
        CfgFormat::iter().find(|format| format.extensions().contains(&extension))
    }

    /// All supported extensions, in declaration order.
    pub fn supported_extensions() -> Vec<&'static str> {
        CfgFormat::iter()
            .flat_map(|format| format.extensions().iter().copied())
            .collect()
    }
}

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    match std::fs::File::open(path) {
        Ok(file) => Ok(file),
        Err(error) => Err(IoError{file: Some(path.to_string()), cause: CfgErrorCause::File(error)}),
    }
}

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    match std::fs::read_to_string(path) {
        Ok(buffer) => Ok(buffer),
        Err(error) => Err(IoError{file: Some(path.to_string()), cause: CfgErrorCause::File(error)}),
    }
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    let with_file = |cause: CfgErrorCause| IoError{file: Some(path.to_string()), cause};
    match CfgFormat::from_path(path) {
        Some(CfgFormat::Json) => {
            serde_json::from_reader(open(path)?).map_err(|error| with_file(CfgErrorCause::Json(error)))
        },
        Some(CfgFormat::Toml) => {
            toml::from_str(&read_to_string(path)?).map_err(|error| with_file(CfgErrorCause::TomlParse(error)))
        },
        Some(CfgFormat::Yaml) => {
            serde_yaml::from_reader(open(path)?).map_err(|error| with_file(CfgErrorCause::Yaml(error)))
        },
        None => Err(with_file(CfgErrorCause::UnsupportedFormat)),
    }
}

/// Serialize a value to a string in the given cfg format.
pub fn to_cfg_string<T>(value: &T, format: CfgFormat) -> IoResult<String>
where T: serde::Serialize
{
    let no_file = |cause: CfgErrorCause| IoError{file: None, cause};
    match format {
        CfgFormat::Json => serde_json::to_string_pretty(value).map_err(|error| no_file(CfgErrorCause::Json(error))),
        CfgFormat::Toml => toml::to_string_pretty(value).map_err(|error| no_file(CfgErrorCause::TomlWrite(error))),
        CfgFormat::Yaml => serde_yaml::to_string(value).map_err(|error| no_file(CfgErrorCause::Yaml(error))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(CfgFormat::from_path("geometry.json"), Some(CfgFormat::Json));
        assert_eq!(CfgFormat::from_path("dir.d/geometry.toml"), Some(CfgFormat::Toml));
        assert_eq!(CfgFormat::from_path("geometry.yaml"), Some(CfgFormat::Yaml));
        assert_eq!(CfgFormat::from_path("geometry.yml"), Some(CfgFormat::Yaml));
        assert_eq!(CfgFormat::from_path("geometry.ini"), None);
        assert_eq!(CfgFormat::from_path("geometry"), None);
    }

    #[test]
    fn supported_extensions_listed() {
        assert_eq!(CfgFormat::supported_extensions(), vec!["json", "toml", "yaml", "yml"]);
        assert_eq!(CfgFormat::Yaml.to_string(), "yaml");
    }

    #[test]
    fn unsupported_filetype_is_rejected() {
        let result: IoResult<serde_json::Value> = read_cfg_file("geometry.ini");
        match result {
            Err(error @ IoError{cause: CfgErrorCause::UnsupportedFormat, ..}) => {
                assert_eq!(error.file.as_deref(), Some("geometry.ini"));
                assert!(error.to_string().contains("yml"));
            },
            other => panic!("expected an unsupported filetype error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let result: IoResult<serde_json::Value> = read_cfg_file("tests/data/does_not_exist.json");
        let error = result.unwrap_err();
        assert!(matches!(error.cause, CfgErrorCause::File(_)));
        assert!(error.to_string().contains("does_not_exist.json"));
    }
}
