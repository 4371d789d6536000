// Rust guideline compliant 2026-10-19

//! Configuration management for the issue board.

use crate::duplicates::DEFAULT_WINDOW;
use crate::{Error, Priority, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted duplicate-check window.
pub const MAX_WINDOW: usize = 1000;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for board behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of recent issues compared by the duplicate check.
    #[serde(default = "default_window")]
    pub duplicate_window: usize,

    /// Priority given to new issues when none is specified.
    #[serde(default)]
    pub default_priority: Priority,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duplicate_window: default_window(),
            default_priority: Priority::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.board/config.toml`
    /// 3. Environment variables with `BOARD_` prefix
    ///
    /// # Arguments
    ///
    /// * `board_dir` - Path to the `.board` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(board_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = board_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Validation(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `BOARD_DUPLICATE_WINDOW` - Duplicate-check window (1-1000)
    /// - `BOARD_DEFAULT_PRIORITY` - Default priority (low/medium/high)
    /// - `BOARD_OUTPUT_FORMAT` - Output format (json/table/plain)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("BOARD_DUPLICATE_WINDOW") {
            self.duplicate_window = val.parse().map_err(|_| {
                Error::Validation("BOARD_DUPLICATE_WINDOW must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("BOARD_DEFAULT_PRIORITY") {
            self.default_priority = match val.to_lowercase().as_str() {
                "low" => Priority::Low,
                "medium" => Priority::Medium,
                "high" => Priority::High,
                _ => {
                    return Err(Error::Validation(
                        "BOARD_DEFAULT_PRIORITY must be low, medium, or high".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("BOARD_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Validation(
                        "BOARD_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `duplicate_window` is outside `1..=1000`.
    fn validate(&self) -> Result<()> {
        if self.duplicate_window == 0 || self.duplicate_window > MAX_WINDOW {
            return Err(Error::Validation(format!(
                "duplicate_window must be 1-{}, got {}",
                MAX_WINDOW, self.duplicate_window
            )));
        }
        Ok(())
    }

    /// Saves the configuration to `config.toml` in the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, board_dir: &Path) -> Result<()> {
        let config_path = board_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Validation(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("BOARD_DUPLICATE_WINDOW");
        std::env::remove_var("BOARD_DEFAULT_PRIORITY");
        std::env::remove_var("BOARD_OUTPUT_FORMAT");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.duplicate_window, 200);
        assert_eq!(config.default_priority, Priority::Medium);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
duplicate_window = 50
default_priority = "High"
output_format = "json"
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.duplicate_window, 50);
        assert_eq!(config.default_priority, Priority::High);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_config_validation_zero_window() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "duplicate_window = 0").unwrap();
        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_validation_oversized_window() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "duplicate_window = 5000").unwrap();
        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "duplicate_window = 10").unwrap();

        std::env::set_var("BOARD_DUPLICATE_WINDOW", "75");
        std::env::set_var("BOARD_DEFAULT_PRIORITY", "LOW");
        std::env::set_var("BOARD_OUTPUT_FORMAT", "plain");
        let config = Config::load(temp_dir.path()).unwrap();
        clear_all_env_vars();

        assert_eq!(config.duplicate_window, 75);
        assert_eq!(config.default_priority, Priority::Low);
        assert_eq!(config.output_format, OutputFormat::Plain);
    }

    #[test]
    fn test_config_env_invalid_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("BOARD_DUPLICATE_WINDOW", "many");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();

        std::env::set_var("BOARD_DEFAULT_PRIORITY", "urgent");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();

        std::env::set_var("BOARD_OUTPUT_FORMAT", "xml");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            duplicate_window: 120,
            default_priority: Priority::Low,
            output_format: OutputFormat::Json,
        };
        original.save(temp_dir.path()).unwrap();
        assert_eq!(Config::load(temp_dir.path()).unwrap(), original);
    }
}
