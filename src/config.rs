//! Loader configuration file parsing.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::resolver::ArgumentOrder;

/// Environment variable pointing at a configuration file.
pub const CONFIG_PATH_ENV: &str = "PAYLOAD_CONFIG";

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "payload.toml";

/// Complete loader configuration.
///
/// Expected format:
/// ```toml
/// argument_order = "declared"   # or "legacy"
///
/// [globals]
/// jquery = "3.7.1"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Argument order for modules that had to wait.
    pub argument_order: ArgumentOrder,
    /// Ambient bindings available before anything is registered.
    pub globals: IndexMap<String, String>,
}

impl LoaderConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Locate and load the configuration file, if there is one.
    ///
    /// `PAYLOAD_CONFIG` wins over `./payload.toml`. No file means defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        match Self::discover_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    fn discover_path() -> Option<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            Some(local)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = LoaderConfig::parse("").unwrap();
        assert_eq!(config.argument_order, ArgumentOrder::Declared);
        assert!(config.globals.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = LoaderConfig::parse(
            r#"
            argument_order = "legacy"

            [globals]
            jquery = "3.7.1"
            "$" = "dollar"
            "#,
        )
        .unwrap();
        assert_eq!(config.argument_order, ArgumentOrder::Legacy);
        let globals: Vec<(&str, &str)> = config
            .globals
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(globals, vec![("jquery", "3.7.1"), ("$", "dollar")]);
    }

    #[test]
    fn test_rejects_unknown_order_and_keys() {
        assert!(matches!(
            LoaderConfig::parse(r#"argument_order = "random""#),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            LoaderConfig::parse("timeout = 3"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = LoaderConfig::load(Path::new("/nonexistent/payload.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
