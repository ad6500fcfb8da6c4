//! File logging for the terminal client.
//!
//! The TUI owns stdout, so tracing output goes to a per-run file only.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const APP_DIR: &str = "party-vs-boss";

/// Installs the global subscriber writing to `<dir>/run_<unix secs>/client.log`.
///
/// `dir` overrides the platform cache directory. `RUST_LOG` filters as usual,
/// defaulting to `info`.
pub fn setup_logging(dir: Option<&Path>) -> Result<WorkerGuard> {
    let log_dir = dir.map(Path::to_path_buf).unwrap_or_else(log_directory);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let run_dir = log_dir.join(format!("run_{timestamp}"));
    std::fs::create_dir_all(&run_dir)?;

    let file_appender = tracing_appender::rolling::never(&run_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!(log_file = %run_dir.join("client.log").display(), "logging initialized");

    Ok(guard)
}

/// Platform-specific cache directory for log files.
///
/// - macOS: `~/Library/Caches/party-vs-boss/logs`
/// - Linux: `~/.cache/party-vs-boss/logs` (or `$XDG_CACHE_HOME/party-vs-boss/logs`)
/// - Windows: `%LOCALAPPDATA%\party-vs-boss\cache\logs`
/// - Fallback: `<temp dir>/party-vs-boss/logs`
pub fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_DIR)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join(APP_DIR))
        .join("logs")
}
