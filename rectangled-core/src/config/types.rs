//! Configuration data structures.
//!
//! These structs are populated by deserializing TOML. Missing fields take their
//! values from [`super::defaults`], and unknown fields are rejected.

use super::defaults;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration for the logging subsystem.
///
/// # Examples
///
/// ```
/// use rectangled_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let default_log_config = LoggingConfig::default();
/// assert_eq!(default_log_config.level, "info");
/// assert_eq!(default_log_config.file_path, None);
/// assert_eq!(default_log_config.format, "text");
///
/// let log_config: LoggingConfig = toml::from_str(r#"
/// level = "debug"
/// file_path = "/var/log/rectangled.log"
/// format = "json"
/// "#).unwrap();
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/rectangled.log")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level to record: "trace", "debug", "info", "warn" or "error" (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. File logging is disabled when `None`.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// Output format: "text" or "json" (case-insensitive).
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            logging: defaults::default_logging_config(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_uses_defaults() {
        let config: CoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn partial_logging_table_fills_missing_fields() {
        let config: CoreConfig = toml::from_str("[logging]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.file_path, None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<CoreConfig>("[logging]\ncolour = true\n").is_err());
        assert!(toml::from_str::<CoreConfig>("[rendering]\nenabled = true\n").is_err());
    }
}
