//! Error types for supervise.
//!
//! Uses thiserror for derive macros. Every variant maps to a process exit
//! code so the CLI can surface it without further inspection.

use crate::duration::format_duration;
use crate::exit_codes;
use std::time::Duration;
use thiserror::Error;

/// Main error type for supervise operations.
#[derive(Error, Debug)]
pub enum SuperviseError {
    /// Invalid caller configuration: negative retry count, malformed
    /// duration or signal, unreadable config file, empty command.
    ///
    /// Always detected before any process is spawned.
    #[error("{0}")]
    Config(String),

    /// The program could not be resolved or the process could not be started.
    #[error("failed to run '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process was started but its exit status could not be collected.
    #[error("failed to wait for child process: {0}")]
    Wait(#[source] std::io::Error),

    /// The async runtime driving the supervisor could not be started.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The process overran its deadline and was signalled (and possibly killed).
    #[error("timeout ({})", display_deadline(.0))]
    Timeout(Duration),
}

impl SuperviseError {
    /// Returns the exit code the CLI should use for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SuperviseError::Config(_) => exit_codes::SUPERVISOR_FAILURE,
            SuperviseError::Launch { .. } => exit_codes::SUPERVISOR_FAILURE,
            SuperviseError::Wait(_) => exit_codes::SUPERVISOR_FAILURE,
            SuperviseError::Runtime(_) => exit_codes::SUPERVISOR_FAILURE,
            SuperviseError::Timeout(_) => exit_codes::TIMEOUT,
        }
    }

    /// True for errors caused by how the supervisor was invoked rather than
    /// by the supervised program.
    pub fn is_config(&self) -> bool {
        matches!(self, SuperviseError::Config(_))
    }
}

fn display_deadline(deadline: &Duration) -> String {
    format_duration(*deadline)
}

/// Result type alias for supervise operations.
pub type Result<T> = std::result::Result<T, SuperviseError>;
