//! Diagnostic logging for supervise.
//!
//! Logs go to stderr through `tracing-subscriber`, next to whatever the
//! supervised command writes to its inherited streams. The filter is taken
//! from `SUPERVISE_LOG`, then `RUST_LOG`, then the configured level.

use crate::config::LogFormat;
use crate::config::types::LOG_LEVELS;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding a filter directive, e.g. `supervise=debug`.
pub const LOG_ENV: &str = "SUPERVISE_LOG";

/// Raise `base` by `verbosity` steps (`-v`, `-vv`, ...).
pub fn effective_level(base: &str, verbosity: u8) -> &'static str {
    let start = LOG_LEVELS
        .iter()
        .position(|level| level.eq_ignore_ascii_case(base))
        .unwrap_or(2);
    LOG_LEVELS[(start + usize::from(verbosity)).min(LOG_LEVELS.len() - 1)]
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(format!("supervise={}", level)))
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logging(level: &str, format: LogFormat) {
    let filter = filter(level);

    // Err means a subscriber is already installed (e.g. by a test harness).
    let _ = match format {
        LogFormat::Human => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal());
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_level_without_verbosity() {
        assert_eq!(effective_level("warn", 0), "warn");
        assert_eq!(effective_level("DEBUG", 0), "debug");
        assert_eq!(effective_level("off", 0), "off");
    }

    #[test]
    fn test_effective_level_raises_and_saturates() {
        assert_eq!(effective_level("warn", 1), "info");
        assert_eq!(effective_level("warn", 2), "debug");
        assert_eq!(effective_level("warn", 9), "trace");
    }

    #[test]
    fn test_unknown_level_falls_back_to_warn() {
        assert_eq!(effective_level("loud", 0), "warn");
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging("warn", LogFormat::Human);
        init_logging("debug", LogFormat::Json);
    }
}
