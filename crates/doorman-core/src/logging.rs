//! File-based tracing setup.
//!
//! The TUI owns the terminal, so diagnostics go to a daily-rolling file
//! under ${DOORMAN_HOME}/logs instead of stdout/stderr.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Initializes the global tracing subscriber.
///
/// Log level is controlled by DOORMAN_LOG (EnvFilter syntax), defaulting
/// to `info`. The returned guard must be held for the process lifetime;
/// dropping it flushes and stops the background writer.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "doorman.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("DOORMAN_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
