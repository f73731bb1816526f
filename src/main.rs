//! Supervise: run a command under a retry or timeout policy.
//!
//! This is the main entry point for the `supervise` CLI. It parses arguments,
//! loads configuration, dispatches to the selected policy, and turns the
//! outcome into the process exit code.

use std::process::ExitCode;
use supervise::cli::Cli;
use supervise::config::Config;
use supervise::error::SuperviseError;
use supervise::{commands, exit_codes, logging};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(code) => ExitCode::from(exit_codes::to_process_code(code)),
        Err(err) => {
            eprintln!("supervise: {}", err);
            ExitCode::from(exit_codes::to_process_code(err.exit_code()))
        }
    }
}

fn run(cli: Cli) -> Result<i32, SuperviseError> {
    let config = Config::load_or_default(cli.global.config.as_deref())?;

    let level = logging::effective_level(&config.log_level, cli.global.verbose);
    logging::init_logging(level, cli.global.log_format.unwrap_or(config.log_format));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(SuperviseError::Runtime)?;

    runtime.block_on(commands::dispatch(cli.command, &config))
}
