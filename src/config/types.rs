//! Configuration types and defaults for supervise.

use serde::{Deserialize, Serialize};

/// Output format for diagnostic logs on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines (default).
    #[default]
    Human,
    /// One JSON object per line.
    Json,
}

/// Log levels accepted in `log_level`.
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Default grace period between the timeout signal and the forced kill.
pub fn default_timeout_grace() -> String {
    "3s".to_string()
}

/// Default signal sent when a command overruns its deadline.
pub fn default_timeout_signal() -> String {
    "TERM".to_string()
}

/// Default diagnostic log level.
pub fn default_log_level() -> String {
    "warn".to_string()
}
