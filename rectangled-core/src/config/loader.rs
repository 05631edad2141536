//! Configuration loading.
//!
//! [`ConfigLoader`] parses a TOML document into a [`CoreConfig`], applies
//! defaults for anything missing and validates the result.
//!
//! ## Validation
//!
//! - Log levels and formats are lower-cased and checked against the accepted values.
//! - Nothing else is touched; log file paths are used as given.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_FORMATS: [&str; 2] = ["text", "json"];

/// Namespace for loading and validating [`CoreConfig`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parses and validates a TOML document. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ParseError`] for malformed TOML or unknown fields.
    /// - [`ConfigError::ValidationError`] for unsupported levels or formats.
    pub fn from_toml_str(content: &str) -> Result<CoreConfig, CoreError> {
        let config = if content.trim().is_empty() {
            CoreConfig::default()
        } else {
            toml::from_str::<CoreConfig>(content).map_err(ConfigError::ParseError)?
        };

        Self::validate_config(config)
    }

    /// Reads, parses and validates the configuration file at `path`.
    ///
    /// A missing file is not an error: the defaults are returned instead.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ReadError`] if the file exists but cannot be read.
    /// - Any error from [`Self::from_toml_str`].
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "loaded configuration file");
                Self::from_toml_str(&content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "configuration file not found, using defaults");
                Self::validate_config(CoreConfig::default())
            }
            Err(e) => Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            }
            .into()),
        }
    }

    /// Normalizes and checks a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the log level or format is
    /// not one of the accepted values.
    pub fn validate_config(mut config: CoreConfig) -> Result<CoreConfig, CoreError> {
        config.logging.level = config.logging.level.to_lowercase();
        if !VALID_LEVELS.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}. Must be one of {}.",
                config.logging.level,
                VALID_LEVELS.join(", ")
            ))
            .into());
        }

        config.logging.format = config.logging.format.to_lowercase();
        if !VALID_FORMATS.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Invalid log format: {}. Must be one of {}.",
                config.logging.format,
                VALID_FORMATS.join(", ")
            ))
            .into());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn blank_input_yields_defaults() {
        assert_eq!(ConfigLoader::from_toml_str("  \n").unwrap(), CoreConfig::default());
    }

    #[test]
    fn values_are_lowercased() {
        let config = ConfigLoader::from_toml_str(
            "[logging]\nlevel = \"WARN\"\nformat = \"Json\"\nfile_path = \"logs/geometry.log\"\n",
        )
        .unwrap();
        assert_eq!(
            config.logging,
            LoggingConfig {
                level: "warn".to_string(),
                file_path: Some(PathBuf::from("logs/geometry.log")),
                format: "json".to_string(),
            }
        );
    }

    #[rstest]
    #[case::bad_level("[logging]\nlevel = \"verbose\"\n", "Invalid log level: verbose")]
    #[case::bad_format("[logging]\nformat = \"xml\"\n", "Invalid log format: xml")]
    fn invalid_values_are_rejected(#[case] content: &str, #[case] expected: &str) {
        match ConfigLoader::from_toml_str(content) {
            Err(CoreError::Config(ConfigError::ValidationError(msg))) => {
                assert!(msg.contains(expected), "unexpected message: {msg}");
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = ConfigLoader::from_toml_str("[logging\nlevel = ");
        assert!(matches!(result, Err(CoreError::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigLoader::load_from_path(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn loads_file_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rectangled.toml");
        std::fs::write(&path, "[logging]\nlevel = \"trace\"\n").unwrap();

        let config = ConfigLoader::load_from_path(&path).unwrap();
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be read as a string.
        let result = ConfigLoader::load_from_path(temp_dir.path());
        match result {
            Err(CoreError::Config(ConfigError::ReadError { path, .. })) => {
                assert_eq!(path, temp_dir.path());
            }
            other => panic!("expected a read error, got {other:?}"),
        }
    }
}
