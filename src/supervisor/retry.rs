//! Bounded retry: run a command until it exits 0 or the budget runs out.

use super::command::CommandLine;
use super::runner;
use crate::error::{Result, SuperviseError};
use crate::exit_codes;

/// Number of additional attempts allowed after the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryBudget(u32);

impl RetryBudget {
    /// Validate a caller-supplied retry count. Negative counts are rejected.
    pub fn new(retries: i64) -> Result<Self> {
        if retries < 0 {
            return Err(SuperviseError::Config(
                "negative retries are not allowed".to_string(),
            ));
        }
        u32::try_from(retries)
            .map(Self)
            .map_err(|_| SuperviseError::Config(format!("retry count {} is too large", retries)))
    }

    pub fn retries(self) -> u32 {
        self.0
    }

    /// Total attempts, the first one included.
    pub fn attempts(self) -> u64 {
        u64::from(self.0) + 1
    }
}

/// Run `command` up to `retries + 1` times, back to back, stopping at the
/// first exit code 0.
///
/// Returns the exit code of the last attempt. Running out of retries is not
/// an error: the final nonzero code is returned as-is. A launch failure ends
/// the loop immediately and is returned as the error.
pub async fn run_with_retry(retries: i64, command: &CommandLine) -> Result<i32> {
    let budget = RetryBudget::new(retries)?;
    run_with_budget(budget, command).await
}

pub async fn run_with_budget(budget: RetryBudget, command: &CommandLine) -> Result<i32> {
    let total = budget.attempts();
    let mut code = exit_codes::SUCCESS;

    for attempt in 1..=total {
        code = runner::run(command).await?;
        if code == exit_codes::SUCCESS {
            tracing::debug!(program = command.program(), attempt, "command succeeded");
            break;
        }
        if attempt < total {
            tracing::info!(
                program = command.program(),
                attempt,
                exit_code = code,
                remaining = total - attempt,
                "command failed, retrying"
            );
        } else {
            tracing::info!(
                program = command.program(),
                attempt,
                exit_code = code,
                "command failed, no retries left"
            );
        }
    }

    Ok(code)
}
