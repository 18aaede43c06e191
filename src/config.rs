//! Configuration management for the application browser.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages the record source, paging, and logging preferences.

use crate::catalog::RecordSource;
use crate::engine::SortKey;
use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "applist-tui";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Records shown per page
    pub page_size: usize,
    /// JSON file with records; generated mock data when unset
    pub records_path: Option<String>,
    /// Number of mock records to generate
    pub generated_count: usize,
    /// Seed for reproducible mock records
    pub seed: Option<u64>,
    /// Amount a cost thumb moves per key press
    pub cost_step: u64,
    /// Sort key applied at startup
    pub default_sort: SortKey,
    /// Log filter directive (overridden by `RUST_LOG`)
    pub log_level: String,
    /// Log file path (relative to config dir or absolute)
    pub log_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 10,
            records_path: None,
            generated_count: 50,
            seed: None,
            cost_step: 500,
            default_sort: SortKey::None,
            log_level: "info".to_string(),
            log_path: "applist.log".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/applist-tui/config.jsonc`
    /// 3. `~/.config/applist-tui/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| "Failed to deserialize config")?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Reject settings the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size must be greater than zero");
        }
        if self.cost_step == 0 {
            anyhow::bail!("cost_step must be greater than zero");
        }
        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/applist-tui/config.jsonc` or error
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(app_config_dir()?.join("config.jsonc"))
    }

    /// Get log file path.
    ///
    /// # Details
    /// If log_path is absolute, returns it as-is.
    /// Otherwise, returns path relative to config directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        let log_path = Path::new(&self.log_path);
        if log_path.is_absolute() {
            Ok(log_path.to_path_buf())
        } else {
            Ok(app_config_dir()?.join(log_path))
        }
    }

    /// Build the record source described by this configuration.
    pub fn record_source(&self) -> RecordSource {
        match &self.records_path {
            Some(path) => RecordSource::File(PathBuf::from(path)),
            None => RecordSource::Generated {
                count: self.generated_count,
                seed: self.seed,
            },
        }
    }
}

fn app_config_dir() -> Result<PathBuf> {
    let config_dir =
        config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
    Ok(config_dir.join(APP_DIR))
}

/// Strip `//` line comments that are not inside a string.
///
/// # Details
/// A `//` counts as inside a string when an odd number of quotes precede it on
/// the same line. Escaped quotes are not handled.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| match line.find("//") {
            Some(pos) if line[..pos].matches('"').count() % 2 == 0 => line[..pos].trim_end(),
            _ => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.page_size, 10);
        assert!(config.records_path.is_none());
        assert_eq!(config.default_sort, SortKey::None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let config = Config {
            page_size: 6,
            seed: Some(9),
            default_sort: SortKey::CostDescending,
            ..Config::default()
        };

        config.save(Some(&config_path)).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.page_size, 6);
        assert_eq!(loaded.seed, Some(9));
        assert_eq!(loaded.default_sort, SortKey::CostDescending);
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // Records per page
            "page_size": 4,
            "records_path": "/data/apps.json" // trailing comment
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.page_size, 4);
        assert_eq!(
            loaded.record_source(),
            RecordSource::File(PathBuf::from("/data/apps.json"))
        );
    }

    #[test]
    fn test_config_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("nope.jsonc"))).unwrap();
        assert_eq!(loaded.generated_count, 50);
        assert_eq!(
            loaded.record_source(),
            RecordSource::Generated {
                count: 50,
                seed: None
            }
        );
    }

    #[test]
    fn test_config_rejects_zero_page_size() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");
        fs::write(&config_path, r#"{ "page_size": 0 }"#).unwrap();
        assert!(Config::load(Some(&config_path)).is_err());
    }

    #[test]
    fn test_config_absolute_log_path() {
        let config = Config {
            log_path: "/tmp/applist.log".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.log_file_path().unwrap(),
            PathBuf::from("/tmp/applist.log")
        );
    }
}
