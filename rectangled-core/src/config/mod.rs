//! Configuration management for the rectangled crate.
//!
//! The geometry itself needs no configuration; what is configurable is the
//! ambient behaviour around it, currently logging.
//!
//! - [`types`]: the configuration schema ([`CoreConfig`], [`LoggingConfig`]).
//! - [`defaults`]: default values used by Serde for missing fields.
//! - [`loader`]: [`ConfigLoader`], which parses TOML and validates the result.
//!
//! # Examples
//!
//! ```
//! use rectangled_core::config::ConfigLoader;
//!
//! let config = ConfigLoader::from_toml_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();
//! assert_eq!(config.logging.level, "debug");
//! assert_eq!(config.logging.format, "text");
//! ```

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig};
