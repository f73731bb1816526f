//! Supervise: run an external program to completion under a policy.
//!
//! Two policies are provided, both reporting a single outcome (the child's
//! exit code, or an error):
//!
//! - [`supervisor::run_with_retry`] re-runs a failing command back to back,
//!   up to a fixed number of retries.
//! - [`supervisor::run_with_timeout`] signals a command that overruns its
//!   deadline and kills it if it outlives the grace period.
//!
//! The command is never run through a shell and always inherits the
//! caller's standard streams.

pub mod cli;
pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod signal;
pub mod supervisor;

#[cfg(test)]
mod test_support;
