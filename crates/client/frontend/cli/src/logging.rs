//! File logging for the terminal client.
//!
//! Stdout belongs to the TUI, so logs go to a per-run file under the
//! platform cache directory (or `LOG_DIR` when set).

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "client.log";

/// Initialize the global subscriber writing to `<log dir>/<run id>/client.log`.
///
/// Returns the path of the log file.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<PathBuf> {
    let base = match log_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_log_directory()?,
    };

    let run_dir = run_log_directory(&base);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create log directory {}", run_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&run_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // File layer only; the terminal is owned by ratatui
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    // Keep the writer alive for the whole process
    std::mem::forget(guard);

    let log_file = run_dir.join(LOG_FILE);
    tracing::info!("Log file: {}", log_file.display());
    Ok(log_file)
}

/// Platform cache directory, e.g. `~/.cache/crypto-devs/logs` on Linux.
pub fn default_log_directory() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("dev", "cryptodevs", "crypto-devs")
        .context("Could not determine a home directory for logs; set LOG_DIR")?;
    Ok(dirs.cache_dir().join("logs"))
}

fn run_log_directory(base: &Path) -> PathBuf {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    base.join(format!("run_{}", timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_directory_is_nested_under_base() {
        let base = tempfile::tempdir().unwrap();
        let run_dir = run_log_directory(base.path());

        assert_eq!(run_dir.parent(), Some(base.path()));
        let name = run_dir.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("run_"));
    }
}
