//! Default configuration values.
//!
//! These functions are referenced by `serde`'s `default` attribute in
//! [`super::types`] so that missing fields fall back to sensible values.

use super::types::LoggingConfig;
use std::path::PathBuf;

/// Returns the default `LoggingConfig`, used when the `[logging]` table is missing.
pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

/// `"info"`
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// No log file by default.
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// `"text"`
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_logging_config_is_console_text_at_info() {
        let config = default_logging_config();
        assert_eq!(config.level, "info");
        assert_eq!(config.file_path, None);
        assert_eq!(config.format, "text");
    }
}
