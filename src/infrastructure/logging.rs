//! Logging system configuration and initialization
//!
//! Console output is the operator's progress report; an optional log file
//! (plain or JSON) can be enabled through `LoggingConfig`. `RUST_LOG`
//! overrides the configured level.

use anyhow::{Result, anyhow};
use chrono::Local;
use lazy_static::lazy_static;
use std::sync::{Mutex, PoisonError};
use tracing::debug;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub use crate::infrastructure::config::LoggingConfig;

// Keeps the non-blocking file writer alive for the whole run
lazy_static! {
    static ref LOG_GUARDS: Mutex<Vec<WorkerGuard>> = Mutex::new(Vec::new());
}

/// Local wall clock with millisecond precision
struct LocalTimeFormatter;

impl FormatTime for LocalTimeFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Hold a writer guard until exit; a poisoned list still takes the guard
fn keep_guard(guard: WorkerGuard) -> usize {
    let mut guards = LOG_GUARDS.lock().unwrap_or_else(PoisonError::into_inner);
    guards.push(guard);
    guards.len()
}

/// Build the level filter: `RUST_LOG` if set, otherwise the configured level
/// for this crate with dependencies held at `warn`.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directives = format!("warn,catalog_vendor_sync={}", config.level);
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow!("Invalid log level '{}': {}", config.level, e))
}

/// Initialize logging with custom configuration
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<()> {
    if !config.console_output && !config.file_output {
        return Err(anyhow!("No logging output configured"));
    }

    let registry = Registry::default().with(build_env_filter(config)?);

    // Console layer prints only time + message; these lines are the progress report
    let console_layer = config.console_output.then(|| {
        fmt::Layer::new()
            .with_writer(std::io::stdout)
            .with_timer(LocalTimeFormatter)
            .with_target(false)
    });

    let (plain_file_layer, json_file_layer) = if config.file_output {
        std::fs::create_dir_all(&config.log_dir).map_err(|e| {
            anyhow!(
                "Failed to create log directory {}: {}",
                config.log_dir.display(),
                e
            )
        })?;
        let file_appender = rolling::never(&config.log_dir, &config.file_name);
        let (file_writer, file_guard) = non_blocking(file_appender);
        keep_guard(file_guard);

        if config.json_format {
            let layer = fmt::Layer::new()
                .json()
                .with_writer(file_writer)
                .with_timer(LocalTimeFormatter)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false);
            (None, Some(layer))
        } else {
            let layer = fmt::Layer::new()
                .with_writer(file_writer)
                .with_timer(LocalTimeFormatter)
                .with_target(false)
                .with_ansi(false);
            (Some(layer), None)
        }
    } else {
        (None, None)
    };

    registry
        .with(console_layer)
        .with(plain_file_layer)
        .with(json_file_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    debug!(
        level = %config.level,
        json = config.json_format,
        console = config.console_output,
        file = config.file_output,
        "Logging system initialized"
    );
    Ok(())
}
