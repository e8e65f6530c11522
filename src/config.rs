use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::ConfigError;

/// Default cap on retained lending events
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Tunables for a [`Catalog`](crate::catalog::Catalog)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Maximum number of lending events kept in history; 0 disables history
    pub history_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { history_limit: DEFAULT_HISTORY_LIMIT }
    }
}

impl CatalogConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read and
    /// `ConfigError::Parse` if it is not valid JSON for this type.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&contents)
    }

    /// Parse a config from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the JSON does not match this type.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    #[allow(clippy::expect_used)]
    fn test_missing_fields_take_defaults() {
        let config = CatalogConfig::from_json_str("{}").expect("Empty object should parse");
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_history_limit_is_read() {
        let config = CatalogConfig::from_json_str(r#"{ "history_limit": 3 }"#)
            .expect("Config should parse");
        assert_eq!(config.history_limit, 3);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = CatalogConfig::from_json_str("history_limit = 3");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Temp file should be created");
        write!(file, r#"{{ "history_limit": 7 }}"#).expect("Temp file should be writable");

        let config = CatalogConfig::from_json_file(file.path()).expect("Config file should load");
        assert_eq!(config.history_limit, 7);
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("Temp dir should be created");
        let result = CatalogConfig::from_json_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
