//! Configuration file handling
//!
//! The config file is JSONC (`.esqlwalk.jsonc`) or plain JSON
//! (`.esqlwalk.json`). Both are parsed with `jsonc-parser`, so comments and
//! trailing commas are accepted either way.

use std::fs;
use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use serde::Deserialize;

use crate::output::OutputFormat;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    #[diagnostic(help("supported keys are \"format\" and \"functions\""))]
    Invalid(#[source] serde_json::Error),
}

/// Settings for the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalkConfig {
    /// Output format used when `--format` is not given.
    pub format: OutputFormat,

    /// Function names the `report` subcommand looks for.
    pub functions: Vec<String>,
}

impl WalkConfig {
    /// Config file names, in lookup order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".esqlwalk.jsonc", ".esqlwalk.json"];

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_jsonc(&content)
    }

    /// Parses configuration from JSONC text. An empty document is the
    /// default configuration.
    pub fn from_jsonc(content: &str) -> Result<Self, ConfigError> {
        let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        match value {
            Some(value) => serde_json::from_value(value).map_err(ConfigError::Invalid),
            None => Ok(Self::default()),
        }
    }

    /// Finds the first config file present in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_jsonc_with_comments() {
        let config = WalkConfig::from_jsonc(
            r#"{
                // printed by `report`
                "functions": ["avg", "now"],
                "format": "json",
            }"#,
        )
        .unwrap();

        assert_eq!(
            config,
            WalkConfig {
                format: OutputFormat::Json,
                functions: vec!["avg".to_string(), "now".to_string()],
            }
        );
    }

    #[test]
    fn missing_keys_use_defaults() {
        assert_eq!(WalkConfig::from_jsonc("{}").unwrap(), WalkConfig::default());
        assert_eq!(WalkConfig::from_jsonc("").unwrap(), WalkConfig::default());
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = WalkConfig::from_jsonc(r#"{ "rules": [] }"#).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("rules"));
    }

    #[test]
    fn rejects_unknown_format() {
        let err = WalkConfig::from_jsonc(r#"{ "format": "sarif" }"#).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn reports_syntax_errors() {
        let err = WalkConfig::from_jsonc("{ \"functions\": [").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn discover_prefers_jsonc() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(WalkConfig::discover(temp_dir.path()), None);

        fs::write(temp_dir.path().join(".esqlwalk.json"), "{}").unwrap();
        fs::write(temp_dir.path().join(".esqlwalk.jsonc"), "{}").unwrap();

        assert_eq!(
            WalkConfig::discover(temp_dir.path()),
            Some(temp_dir.path().join(".esqlwalk.jsonc"))
        );
    }

    #[test]
    fn from_file_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let err = WalkConfig::from_file(temp_dir.path().join("missing.jsonc")).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
