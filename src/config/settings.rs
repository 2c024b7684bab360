//! Rewriter configuration settings
//!
//! The compose endpoint is a source constant (see `rewrite::WEBMAIL_BASE`);
//! only logging and `&amp;` handling are configurable here.

use crate::rewrite::AmpDecoding;
use serde::{Deserialize, Serialize};
use std::path::Path;
use anyhow::{Context, Result};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "mailto-webmail.yml";

/// Main configuration for the rewriter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriterConfig {
    /// Log level configuration
    pub log_level: String,

    /// How `&amp;` entities in intercepted links are decoded
    pub decoding: AmpDecoding,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging (default: false)
    pub enable_file_logging: bool,

    /// Directory for the log file
    pub log_dir: String,

    /// Log file name inside `log_dir`
    pub file_name: String,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            decoding: AmpDecoding::First,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_file_logging: false,
            log_dir: "logs".to_string(),
            file_name: "mailto-webmail.log".to_string(),
        }
    }
}

impl RewriterConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::from_yaml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    /// Parse configuration from YAML text; missing keys take their defaults
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: RewriterConfig = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    ///
    /// An explicit path must exist. Without one, `mailto-webmail.yml` in the
    /// working directory is used if present, otherwise the defaults.
    pub fn load_config(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_yaml_file(DEFAULT_CONFIG_FILE)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from environment-style lookups
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("RUST_LOG") {
            self.log_level = log_level;
        }

        if let Some(decoding) = lookup("MAILTO_WEBMAIL_DECODING") {
            self.decoding = decoding
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("Invalid MAILTO_WEBMAIL_DECODING")?;
        }

        if let Some(enable_file_logging) = lookup("MAILTO_WEBMAIL_FILE_LOGGING") {
            self.logging.enable_file_logging = enable_file_logging.to_lowercase() == "true";
        }

        if let Some(log_dir) = lookup("MAILTO_WEBMAIL_LOG_DIR") {
            self.logging.log_dir = log_dir;
        }

        Ok(())
    }
}
