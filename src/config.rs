//! Configuration management for the contact assistant.
//!
//! Every setting is optional and read from environment variables, with an
//! optional `.env` file loaded first. The assistant runs with none set.

use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;
use std::path::{Path, PathBuf};

/// Prompt printed before each command when `ASSISTANT_PROMPT` is unset.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Prompt shown before reading each command
    pub prompt: String,

    /// Fixed date for the `birthdays` command (default: local date)
    pub today: Option<NaiveDate>,

    /// `.env` file that was loaded, if any
    pub env_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ASSISTANT_PROMPT`: Prompt text (default: "Enter a command: ")
    /// - `ASSISTANT_TODAY`: Date in `YYYY-MM-DD` used instead of today
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let env_file = dotenvy::dotenv().ok();
        Self::from_vars(env_file)
    }

    /// Load `path` as a `.env` file, then read the environment.
    ///
    /// Variables already set in the process take precedence over the file.
    pub fn from_env_file(path: &Path) -> ConfigResult<Self> {
        dotenvy::from_path(path).map_err(|e| ConfigError::InvalidValue {
            var: path.display().to_string(),
            reason: format!("Failed to load .env file: {}", e),
        })?;
        Self::from_vars(Some(path.to_path_buf()))
    }

    fn from_vars(env_file: Option<PathBuf>) -> ConfigResult<Self> {
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let today = Self::parse_env_date("ASSISTANT_TODAY")?;

        Ok(Config {
            log_level,
            prompt,
            today,
            env_file,
        })
    }

    /// Parse an optional `YYYY-MM-DD` environment variable.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => NaiveDate::parse_from_str(val.trim(), "%Y-%m-%d")
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a date in YYYY-MM-DD format, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            today: None,
            env_file: None,
        }
    }
}
