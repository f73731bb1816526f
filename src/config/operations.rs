//! Config loading, validation, and accessors.

use super::model::Config;
use super::types::LOG_LEVELS;
use crate::duration::parse_duration;
use crate::error::{Result, SuperviseError};
use crate::signal::parse_signal;
use nix::sys::signal::Signal;
use std::path::Path;
use std::time::Duration;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SuperviseError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SuperviseError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the named file, or fall back to defaults when no file is named.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            SuperviseError::Config(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SuperviseError::Config(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `timeout_grace` must be a valid, non-negative duration
    /// - `timeout_signal` must name a signal
    /// - `log_level` must be one of the known levels
    pub fn validate(&self) -> Result<()> {
        let invalid =
            |e: SuperviseError| SuperviseError::Config(format!("config validation failed: {}", e));

        parse_duration(&self.timeout_grace).map_err(invalid)?;
        parse_signal(&self.timeout_signal).map_err(invalid)?;

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(SuperviseError::Config(format!(
                "config validation failed: log_level must be one of {} (found '{}')",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Configured grace period.
    pub fn grace(&self) -> Result<Duration> {
        parse_duration(&self.timeout_grace)
    }

    /// Configured timeout signal.
    pub fn signal(&self) -> Result<Signal> {
        parse_signal(&self.timeout_signal)
    }
}
