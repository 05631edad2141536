//! Error handling for the rectangled core layer.
//!
//! This module defines the error types used throughout the crate using the
//! `thiserror` crate for ergonomic error definition and handling.
//!
//! The only fallible geometry operation is [`Rectangle::validate`](crate::Rectangle::validate),
//! which returns a [`ValidationError`]. Configuration and logging setup have their own
//! error types, and [`CoreError`] wraps all of them for callers that want a single type.
//!
//! # Examples
//!
//! ```
//! use rectangled_core::{CoreError, Rectangle, ValidationError};
//!
//! fn accept(rect: &Rectangle<&str>) -> Result<(), CoreError> {
//!     rect.validate()?;
//!     Ok(())
//! }
//!
//! let flat = Rectangle::new("flat", 0, 0, 10, 0);
//! assert!(matches!(accept(&flat), Err(CoreError::Validation(ValidationError::ZeroArea))));
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a rectangle can fail [`Rectangle::validate`](crate::Rectangle::validate).
///
/// Both variants are plain values so they can be compared directly with `==`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The normalized width or height is zero.
    #[error("rectangle has zero area")]
    ZeroArea,

    /// The raw corners were supplied backwards (`x > w` or `y > z`).
    #[error("rectangle points are in the wrong order")]
    BadPoints,
}

/// Core error type for the rectangled crate.
///
/// Wraps the more specific error types so that applications can use a single
/// error type with `?` across validation, configuration and logging setup.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A rectangle failed validation.
    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationError),

    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur while setting up logging.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// Filesystem failures not covered by configuration or logging I/O errors.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Error type for configuration-related operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration was not valid TOML or did not match the schema.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but contains invalid values.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Error type for logging-related operations.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The global subscriber could not be installed, or the config was unusable.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// A log filter directive could not be parsed.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),
}
