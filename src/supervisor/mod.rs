//! Running an external program to completion under a policy.
//!
//! This module provides:
//!
//! - `runner`: spawn one child with inherited standard streams and wait for it
//! - `retry`: re-run on nonzero exit, up to a fixed number of retries
//! - `timeout`: signal a child that overruns its deadline, then kill it
//!   after a grace period
//!
//! Both policies report a single outcome: the child's exit code, or a
//! [`SuperviseError`](crate::error::SuperviseError).

mod command;
pub mod retry;
pub mod runner;
pub mod timeout;

pub use command::CommandLine;
pub use retry::{RetryBudget, run_with_retry};
pub use timeout::{Stage, Supervision, TimeoutSpec, run_with_timeout};
