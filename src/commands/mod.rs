//! Command implementations for supervise.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command resolves to the exit code supervise should
//! terminate with, or an error.

mod retry;
mod timeout;

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;

pub use retry::cmd_retry;
pub use timeout::cmd_timeout;

/// Dispatch a command to its implementation.
pub async fn dispatch(command: Command, config: &Config) -> Result<i32> {
    match command {
        Command::Retry(args) => cmd_retry(args).await,
        Command::Timeout(args) => cmd_timeout(args, config).await,
    }
}
