// Rust guideline compliant 2026-10-18

//! Configuration defaults for the bot's formatting and validation helpers.

use crate::models::Language;
use crate::{Error, Result};
use phonenumber::country;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Bot-wide defaults applied by callers of the pure helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Language used when a user has not picked one.
    #[serde(default)]
    pub default_language: Language,

    /// ISO country code assumed for phone numbers typed without `+`.
    #[serde(default)]
    pub default_region: Option<String>,

    /// Items per page in paginated menus.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Length previews are truncated to.
    #[serde(default = "default_truncate_length")]
    pub truncate_length: usize,

    /// Marker appended to truncated previews.
    #[serde(default = "default_truncate_suffix")]
    pub truncate_suffix: String,

    /// Maximum message length accepted from users.
    #[serde(default = "default_message_max_length")]
    pub message_max_length: usize,

    /// Log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional log file; logs go to stdout when unset.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_page_size() -> usize {
    10
}

fn default_truncate_length() -> usize {
    100
}

fn default_truncate_suffix() -> String {
    "...".to_string()
}

/// Telegram's message length limit.
fn default_message_max_length() -> usize {
    4096
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            default_region: None,
            page_size: default_page_size(),
            truncate_length: default_truncate_length(),
            truncate_suffix: default_truncate_suffix(),
            message_max_length: default_message_max_length(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/config.toml`
    /// 3. Environment variables with `BOTKIT_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory holding `config.toml`
    ///
    /// # Returns
    ///
    /// The merged, validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - An environment variable or resulting value fails validation
    pub fn load(dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        tracing::debug!(
            language = %config.default_language,
            page_size = config.page_size,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `BOTKIT_DEFAULT_LANGUAGE` - RU or UZ
    /// - `BOTKIT_DEFAULT_REGION` - ISO country code for phone parsing
    /// - `BOTKIT_PAGE_SIZE` - Items per page
    /// - `BOTKIT_TRUNCATE_LENGTH` - Preview length
    /// - `BOTKIT_TRUNCATE_SUFFIX` - Preview suffix
    /// - `BOTKIT_MESSAGE_MAX_LENGTH` - Message length limit
    /// - `BOTKIT_LOG_LEVEL` - Log level
    /// - `BOTKIT_LOG_FILE` - Log file path
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or language value cannot be parsed.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("BOTKIT_DEFAULT_LANGUAGE") {
            self.default_language = val.parse().map_err(|_| {
                Error::InvalidConfig("BOTKIT_DEFAULT_LANGUAGE must be RU or UZ".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("BOTKIT_DEFAULT_REGION") {
            self.default_region = Some(val);
        }

        if let Ok(val) = std::env::var("BOTKIT_PAGE_SIZE") {
            self.page_size = parse_count("BOTKIT_PAGE_SIZE", &val)?;
        }

        if let Ok(val) = std::env::var("BOTKIT_TRUNCATE_LENGTH") {
            self.truncate_length = parse_count("BOTKIT_TRUNCATE_LENGTH", &val)?;
        }

        if let Ok(val) = std::env::var("BOTKIT_TRUNCATE_SUFFIX") {
            self.truncate_suffix = val;
        }

        if let Ok(val) = std::env::var("BOTKIT_MESSAGE_MAX_LENGTH") {
            self.message_max_length = parse_count("BOTKIT_MESSAGE_MAX_LENGTH", &val)?;
        }

        if let Ok(val) = std::env::var("BOTKIT_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Ok(val) = std::env::var("BOTKIT_LOG_FILE") {
            self.log_file = Some(PathBuf::from(val));
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - page_size is zero
    /// - message_max_length is below 3
    /// - truncate_length is shorter than truncate_suffix
    /// - default_region is not a country known to the phone numbering plans
    /// - log_level is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidConfig(
                "page_size must be greater than 0".to_string(),
            ));
        }

        if self.message_max_length < 3 {
            return Err(Error::InvalidConfig(format!(
                "message_max_length must be at least 3, got {}",
                self.message_max_length
            )));
        }

        if self.truncate_length < self.truncate_suffix.chars().count() {
            return Err(Error::InvalidConfig(format!(
                "truncate_length {} is shorter than truncate_suffix {:?}",
                self.truncate_length, self.truncate_suffix
            )));
        }

        if let Some(region) = &self.default_region {
            if region.parse::<country::Id>().is_err() {
                return Err(Error::InvalidConfig(format!(
                    "default_region must be an upper-case ISO country code, got {:?}",
                    region
                )));
            }
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `<dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn parse_count(name: &str, val: &str) -> Result<usize> {
    val.parse()
        .map_err(|_| Error::InvalidConfig(format!("{name} must be a non-negative number")))
}
