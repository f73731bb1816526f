//! CLI argument parsing for supervise.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::LogFormat;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Supervise: run a command under a retry or timeout policy.
///
/// The command is executed directly, never through a shell. A program name
/// without a path separator is looked up in PATH. The command inherits
/// stdin, stdout and stderr.
///
/// Exit status is the command's own, or 1 when supervise could not run it
/// or it timed out.
#[derive(Parser, Debug)]
#[command(name = "supervise")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// YAML file with default grace period, signal and log settings.
    #[arg(long, global = true, env = "SUPERVISE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log format for diagnostics on stderr.
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Available commands for supervise.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Re-run a command until it succeeds.
    ///
    /// Runs <COMMAND> and, while it exits with a non-zero code, re-runs it
    /// up to <COUNT> more times. Exits with the code of the last run.
    Retry(RetryArgs),

    /// Run a command with a time limit.
    ///
    /// Sends a signal to <COMMAND> once <DURATION> has passed, and kills it
    /// if it is still running after the grace period.
    Timeout(TimeoutArgs),
}

/// Arguments for the `retry` command.
#[derive(Parser, Debug)]
#[command(arg_required_else_help = true, allow_negative_numbers = true)]
pub struct RetryArgs {
    /// Number of retries after the first attempt (may not be negative).
    pub count: String,

    /// Command to run, followed by its arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true, num_args = 1..)]
    pub command: Vec<String>,
}

/// Arguments for the `timeout` command.
#[derive(Parser, Debug)]
#[command(arg_required_else_help = true)]
pub struct TimeoutArgs {
    /// Grace period between the signal and the kill (e.g. 500ms, 3s).
    #[arg(short, long, value_name = "DURATION")]
    pub grace: Option<String>,

    /// Signal to send on timeout, by name or number (e.g. TERM, INT, 15).
    #[arg(short, long, value_name = "SIGNAL")]
    pub signal: Option<String>,

    /// How long the command may run (e.g. 50ms, 1.5s, 1h30m).
    pub duration: String,

    /// Command to run, followed by its arguments.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true, num_args = 1..)]
    pub command: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_retry() {
        let cli = parse(&["supervise", "retry", "3", "make", "test"]);
        match cli.command {
            Command::Retry(args) => {
                assert_eq!(args.count, "3");
                assert_eq!(args.command, vec!["make", "test"]);
            }
            other => panic!("expected retry, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_retry_negative_count() {
        let cli = parse(&["supervise", "retry", "-1", "true"]);
        match cli.command {
            Command::Retry(args) => assert_eq!(args.count, "-1"),
            other => panic!("expected retry, got {other:?}"),
        }
    }

    #[test]
    fn test_command_flags_are_not_ours() {
        let cli = parse(&["supervise", "retry", "2", "ls", "-la", "--color", "-v"]);
        assert_eq!(cli.global.verbose, 0);
        match cli.command {
            Command::Retry(args) => {
                assert_eq!(args.command, vec!["ls", "-la", "--color", "-v"]);
            }
            other => panic!("expected retry, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_timeout_with_options() {
        let cli = parse(&[
            "supervise", "timeout", "-g", "100ms", "-s", "INT", "50ms", "sleep", "1",
        ]);
        match cli.command {
            Command::Timeout(args) => {
                assert_eq!(args.grace.as_deref(), Some("100ms"));
                assert_eq!(args.signal.as_deref(), Some("INT"));
                assert_eq!(args.duration, "50ms");
                assert_eq!(args.command, vec!["sleep", "1"]);
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_timeout_defaults() {
        let cli = parse(&["supervise", "timeout", "1s", "true"]);
        match cli.command {
            Command::Timeout(args) => {
                assert!(args.grace.is_none());
                assert!(args.signal.is_none());
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn test_global_options() {
        let cli = parse(&[
            "supervise",
            "-vv",
            "--log-format",
            "json",
            "--config",
            "/tmp/supervise.yaml",
            "retry",
            "0",
            "true",
        ]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.log_format, Some(LogFormat::Json));
        assert_eq!(
            cli.global.config.as_deref(),
            Some(std::path::Path::new("/tmp/supervise.yaml"))
        );
    }

    #[test]
    fn test_missing_command_is_rejected() {
        assert!(Cli::try_parse_from(["supervise", "retry", "3"]).is_err());
        assert!(Cli::try_parse_from(["supervise", "timeout", "1s"]).is_err());
    }
}
