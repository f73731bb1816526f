//! Implementation of the `supervise retry` command.

use crate::cli::RetryArgs;
use crate::error::{Result, SuperviseError};
use crate::supervisor::{CommandLine, run_with_retry};

/// Execute the `supervise retry` command.
///
/// Returns the exit code of the last attempt.
pub async fn cmd_retry(args: RetryArgs) -> Result<i32> {
    let count = parse_count(&args.count)?;
    let command = CommandLine::new(args.command)?;
    run_with_retry(count, &command).await
}

/// Parse the retry count. The sign is checked by the retry policy so a
/// negative count is reported the same way wherever it comes from.
fn parse_count(count: &str) -> Result<i64> {
    count
        .trim()
        .parse::<i64>()
        .map_err(|e| SuperviseError::Config(format!("invalid count: {}", e)))
}
