//! Implementation of the `supervise timeout` command.

use crate::cli::TimeoutArgs;
use crate::config::Config;
use crate::duration::parse_duration;
use crate::error::Result;
use crate::signal::parse_signal;
use crate::supervisor::{CommandLine, TimeoutSpec, run_with_timeout};

/// Execute the `supervise timeout` command.
///
/// Flags override the grace period and signal from `config`.
pub async fn cmd_timeout(args: TimeoutArgs, config: &Config) -> Result<i32> {
    let spec = build_spec(&args, config)?;
    let command = CommandLine::new(args.command)?;
    run_with_timeout(&spec, &command).await
}

/// Resolve the deadline, signal and grace period before anything is spawned.
fn build_spec(args: &TimeoutArgs, config: &Config) -> Result<TimeoutSpec> {
    let deadline = parse_duration(&args.duration)?;

    let grace = match &args.grace {
        Some(grace) => parse_duration(grace)?,
        None => config.grace()?,
    };
    let signal = match &args.signal {
        Some(signal) => parse_signal(signal)?,
        None => config.signal()?,
    };

    Ok(TimeoutSpec::new(deadline)
        .with_grace(grace)
        .with_signal(signal))
}
