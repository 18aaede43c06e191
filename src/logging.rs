//! Log file setup.
//!
//! The terminal is in raw mode while the app runs, so tracing output goes to a
//! file instead of stderr.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// # Arguments
/// * `config` - Supplies the log path and default level
///
/// # Returns
/// * `Result<PathBuf>` - Path of the log file or error
///
/// # Details
/// `RUST_LOG` takes precedence over `config.log_level`. Appends to an existing
/// log file. Calling this twice leaves the first subscriber in place.
pub fn init_logging(config: &Config) -> Result<PathBuf> {
    let path = config.log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_logging_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("applist.log");
        let config = Config {
            log_path: log_path.display().to_string(),
            ..Config::default()
        };

        let path = init_logging(&config).unwrap();
        assert_eq!(path, log_path);
        assert!(log_path.exists());
    }
}
