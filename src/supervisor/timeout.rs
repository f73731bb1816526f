//! Time-bounded execution.
//!
//! The child's exit races a deadline timer. If the deadline wins, the
//! configured signal is sent, then the exit races a grace timer, and if that
//! wins too the child is killed. The child is always reaped before returning.
//!
//! Signals are only ever sent to a child that has not been reaped yet: until
//! `wait` collects it, its pid stays allocated (at worst as a zombie) and
//! cannot be handed to another process.

use super::command::CommandLine;
use super::runner;
use crate::duration::format_duration;
use crate::error::{Result, SuperviseError};
use crate::signal::{DEFAULT_SIGNAL, signal_name};
use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use std::process::ExitStatus;
use std::time::Duration;
use tokio::process::Child;
use tokio::time::sleep;

/// Grace period between the signal and the forced kill, unless configured.
pub const DEFAULT_GRACE: Duration = Duration::from_secs(3);

/// How a command is bounded in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutSpec {
    /// How long the command may run before it is signalled.
    pub deadline: Duration,
    /// Signal sent when the deadline passes.
    pub signal: Signal,
    /// How long to wait after the signal before killing the command.
    pub grace: Duration,
}

impl TimeoutSpec {
    pub fn new(deadline: Duration) -> Self {
        Self {
            deadline,
            signal: DEFAULT_SIGNAL,
            grace: DEFAULT_GRACE,
        }
    }

    pub fn with_signal(mut self, signal: Signal) -> Self {
        self.signal = signal;
        self
    }

    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }
}

/// Lifecycle of a child under a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Running,
    /// Exited before the deadline.
    CompletedNormally,
    /// Sent the timeout signal (and exited within the grace period).
    Signaled,
    /// Still alive when the grace period ran out.
    Killed,
}

/// What happened to a supervised child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Supervision {
    pub pid: u32,
    pub stage: Stage,
    /// Exit code when the child completed normally.
    pub exit_code: Option<i32>,
}

impl Supervision {
    pub fn timed_out(&self) -> bool {
        matches!(self.stage, Stage::Signaled | Stage::Killed)
    }
}

struct Supervised {
    child: Child,
    pid: u32,
    stage: Stage,
}

impl Supervised {
    fn new(child: Child) -> Self {
        // A freshly spawned child always has an id.
        let pid = child.id().unwrap_or_default();
        Self {
            child,
            pid,
            stage: Stage::Running,
        }
    }

    fn complete(&mut self, status: ExitStatus) -> Supervision {
        self.stage = Stage::CompletedNormally;
        Supervision {
            pid: self.pid,
            stage: self.stage,
            exit_code: Some(runner::exit_code(status)),
        }
    }

    /// Send the timeout signal. Only the first call while running has any
    /// effect.
    fn signal(&mut self, signal: Signal) {
        if self.stage != Stage::Running {
            return;
        }
        self.stage = Stage::Signaled;

        // None once the child has been reaped.
        let Some(pid) = self.child.id() else {
            return;
        };
        let Ok(raw) = i32::try_from(pid) else {
            return;
        };
        if let Err(errno) = kill(Pid::from_raw(raw), signal) {
            tracing::warn!(pid, signal = signal_name(signal), %errno, "failed to signal child");
        }
    }

    /// Kill a child that outlived its grace period. Only acts once, and only
    /// after the timeout signal.
    fn force_kill(&mut self) {
        if self.stage != Stage::Signaled {
            return;
        }
        self.stage = Stage::Killed;

        if self.child.id().is_none() {
            return;
        }
        if let Err(err) = self.child.start_kill() {
            tracing::warn!(pid = self.pid, error = %err, "failed to kill child");
        }
    }

    fn finish(&self) -> Supervision {
        Supervision {
            pid: self.pid,
            stage: self.stage,
            exit_code: None,
        }
    }
}

/// Run the command once under `spec` and report how it ended.
///
/// A launch failure returns immediately without starting any timer.
pub async fn supervise(spec: &TimeoutSpec, command: &CommandLine) -> Result<Supervision> {
    let child = runner::spawn(command)?;
    let mut supervised = Supervised::new(child);

    let finished = tokio::select! {
        biased;
        status = supervised.child.wait() => Some(status),
        () = sleep(spec.deadline) => None,
    };
    if let Some(status) = finished {
        let status = status.map_err(SuperviseError::Wait)?;
        return Ok(supervised.complete(status));
    }

    // The child may have exited at the same instant the deadline fired.
    if let Ok(Some(status)) = supervised.child.try_wait() {
        return Ok(supervised.complete(status));
    }

    tracing::warn!(
        program = command.program(),
        pid = supervised.pid,
        signal = signal_name(spec.signal),
        deadline = %format_duration(spec.deadline),
        "deadline exceeded, signalling child"
    );
    supervised.signal(spec.signal);

    let exited = tokio::select! {
        biased;
        _ = supervised.child.wait() => true,
        () = sleep(spec.grace) => false,
    };
    if !exited {
        tracing::warn!(
            program = command.program(),
            pid = supervised.pid,
            grace = %format_duration(spec.grace),
            "grace period elapsed, killing child"
        );
        supervised.force_kill();
        if let Err(err) = supervised.child.wait().await {
            tracing::warn!(pid = supervised.pid, error = %err, "failed to reap killed child");
        }
    }

    Ok(supervised.finish())
}

/// Run the command once, signalling it after `spec.deadline` and killing it
/// if it is still alive `spec.grace` later.
///
/// Returns the child's exit code when it finishes in time. A timed-out run is
/// always [`SuperviseError::Timeout`], however the child ended.
pub async fn run_with_timeout(spec: &TimeoutSpec, command: &CommandLine) -> Result<i32> {
    let supervision = supervise(spec, command).await?;
    match supervision.exit_code {
        Some(code) if !supervision.timed_out() => Ok(code),
        _ => Err(SuperviseError::Timeout(spec.deadline)),
    }
}
