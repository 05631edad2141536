//! Logging setup built on the `tracing` ecosystem.
//!
//! The geometry code only emits `tracing` events; nothing is printed unless the
//! application installs a subscriber. This module offers two ways to do that:
//! [`init_minimal_logging`] for tests and quick tools, and [`init_logging`]
//! driven by a [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};

use once_cell::sync::Lazy;
use std::fs;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Keeps the file writer alive so buffered lines are flushed.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Installs a `stderr` subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Errors (e.g. a subscriber already being set) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

fn parse_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        invalid_level => Err(LoggingError::InitializationFailure(format!(
            "Invalid log level in config: {}",
            invalid_level
        ))),
    }
}

fn level_filter(level: Level) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level.to_string()).map_err(|e| LoggingError::FilterError(e.to_string()))
}

fn ensure_parent_dir(log_path: &Path) -> Result<(), CoreError> {
    let Some(parent) = log_path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|source| CoreError::Filesystem {
        message: "Failed to create log directory".to_string(),
        path: parent.to_path_buf(),
        source,
    })
}

/// Builds a daily-rolling file layer in the given format ("text" or "json").
fn create_file_layer(log_path: &Path, format: &str) -> Result<(BoxedLayer, WorkerGuard), CoreError> {
    ensure_parent_dir(log_path)?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("rectangled.log"));

    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer = match format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(non_blocking_writer)
            .with_ansi(false)
            .boxed(),
        _ => fmt::layer().with_writer(non_blocking_writer).with_ansi(false).boxed(),
    };

    Ok((layer, guard))
}

/// Installs the global subscriber described by `config`.
///
/// Logs go to stdout in the configured format, and additionally to a
/// daily-rolling file when `config.file_path` is set.
///
/// # Arguments
///
/// * `config`: Level, format and optional file path.
/// * `is_reload`: When `true`, an already installed subscriber is not an error.
///
/// # Errors
///
/// Returns [`LoggingError::InitializationFailure`] for an invalid level, or when a
/// subscriber is already set and `is_reload` is `false`. Failing to create the
/// log directory yields [`CoreError::Filesystem`].
///
/// When no new subscriber is installed, the file guard of the active one is
/// left in place and any file layer built for this call is discarded.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let level = parse_level(&config.level)?;

    let stdout_layer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(level_filter(level)?)
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(level_filter(level)?)
            .boxed(),
    };

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer];
    let mut new_file_guard: Option<WorkerGuard> = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        layers.push(file_layer.with_filter(level_filter(level)?).boxed());
        new_file_guard = Some(guard);
    }

    let result = Registry::default().with(layers).try_init();

    match result {
        Ok(()) => {
            // Only the installed subscriber's guard is kept; dropping the
            // previous one flushes its writer.
            match LOG_WORKER_GUARD.lock() {
                Ok(mut guard_slot) => *guard_slot = new_file_guard,
                Err(e) => eprintln!("[ERROR] Failed to lock LOG_WORKER_GUARD: {}. Log flushing may be affected.", e),
            }
            tracing::debug!(level = %level, format = %config.format, "logging initialized");
            Ok(())
        }
        Err(_) if is_reload => {
            tracing::info!("logging re-initialization requested; the existing subscriber stays active");
            Ok(())
        }
        Err(e) => Err(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        ))
        .into()),
    }
}
