//! Signal specifications for the timeout escalation stage.
//!
//! Accepts a signal number (`15`) or a name, case-insensitive, with or
//! without the `SIG` prefix (`TERM`, `sigterm`, `SIGTERM`).

use crate::error::{Result, SuperviseError};
use nix::sys::signal::Signal;
use std::str::FromStr;

/// Signal sent when a command overruns its deadline, unless configured.
pub const DEFAULT_SIGNAL: Signal = Signal::SIGTERM;

/// Parse a signal number or name into a [`Signal`].
pub fn parse_signal(spec: &str) -> Result<Signal> {
    let trimmed = spec.trim();
    let invalid = || SuperviseError::Config(format!("invalid signal \"{}\"", spec));

    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Ok(number) = trimmed.parse::<i32>() {
        return Signal::try_from(number).map_err(|_| invalid());
    }

    let upper = trimmed.to_ascii_uppercase();
    let name = if upper.starts_with("SIG") {
        upper
    } else {
        format!("SIG{}", upper)
    };
    Signal::from_str(&name).map_err(|_| invalid())
}

/// Human-readable name for logs, e.g. `SIGTERM`.
pub fn signal_name(signal: Signal) -> &'static str {
    signal.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_number() {
        assert_eq!(parse_signal("15").unwrap(), Signal::SIGTERM);
        assert_eq!(parse_signal("9").unwrap(), Signal::SIGKILL);
        assert_eq!(parse_signal("2").unwrap(), Signal::SIGINT);
    }

    #[test]
    fn test_parse_by_name() {
        assert_eq!(parse_signal("TERM").unwrap(), Signal::SIGTERM);
        assert_eq!(parse_signal("SIGTERM").unwrap(), Signal::SIGTERM);
        assert_eq!(parse_signal("sigint").unwrap(), Signal::SIGINT);
        assert_eq!(parse_signal("hup").unwrap(), Signal::SIGHUP);
        assert_eq!(parse_signal(" usr1 ").unwrap(), Signal::SIGUSR1);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for spec in ["", "0", "-1", "1000", "NOPE", "SIG"] {
            let err = parse_signal(spec).unwrap_err();
            assert!(err.is_config(), "{spec:?} should be rejected");
        }
    }

    #[test]
    fn test_default_is_terminate() {
        assert_eq!(DEFAULT_SIGNAL, Signal::SIGTERM);
        assert_eq!(signal_name(DEFAULT_SIGNAL), "SIGTERM");
    }
}
