//! File-backed tracing setup. Stdout belongs to the terminal UI, so nothing
//! is written there.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "tic-tac-toe.log";

/// Get the log directory using the platform-specific cache directory
pub fn default_log_dir() -> Result<PathBuf> {
    let mut path =
        dirs::cache_dir().context("Unable to determine cache directory for your platform")?;

    path.push("tic-tac-toe");
    path.push("logs");
    Ok(path)
}

/// Installs the global subscriber. Keep the returned guard alive until exit
/// or buffered lines are lost.
pub fn init_logging(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let dir = match log_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_log_dir()?,
    };

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Log file: {}", dir.join(LOG_FILE).display());
    Ok(guard)
}
