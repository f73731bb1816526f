//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Defaults for supervise, read from an optional YAML file.
///
/// Command-line flags override every value here. Unknown fields in the YAML
/// are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grace period after the timeout signal before the command is killed.
    #[serde(default = "default_timeout_grace")]
    pub timeout_grace: String,

    /// Signal sent when a command overruns its deadline (name or number).
    #[serde(default = "default_timeout_signal")]
    pub timeout_signal: String,

    /// Diagnostic log level: off, error, warn, info, debug or trace.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Diagnostic log format.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_grace: default_timeout_grace(),
            timeout_signal: default_timeout_signal(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}
