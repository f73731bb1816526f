//! Launching a single child process and collecting its exit status.
//!
//! The child inherits stdin, stdout and stderr directly. Nothing is piped or
//! buffered. A program name without a path separator is looked up in `PATH`;
//! anything else is used as a literal path.

use super::command::CommandLine;
use crate::error::{Result, SuperviseError};
use crate::exit_codes;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};

/// Resolve a program name to the path that will be executed.
pub fn resolve_program(program: &str) -> Result<PathBuf> {
    if program.contains('/') {
        return Ok(PathBuf::from(program));
    }

    let search_path = std::env::var_os("PATH").unwrap_or_default();
    for dir in std::env::split_paths(&search_path) {
        // An empty PATH entry means the current directory.
        let dir = if dir.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            dir
        };
        let candidate = dir.join(program);
        if !program.is_empty() && is_executable(&candidate) {
            return Ok(candidate);
        }
    }

    Err(SuperviseError::Launch {
        program: program.to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "executable file not found in $PATH"),
    })
}

fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Start the command with inherited standard streams.
///
/// The child is killed if the returned handle is dropped before it has been
/// waited on, so an abandoned supervisor never leaves the process running.
pub fn spawn(command: &CommandLine) -> Result<Child> {
    let path = resolve_program(command.program())?;

    let child = Command::new(&path)
        .arg0(command.program())
        .args(command.args())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| SuperviseError::Launch {
            program: command.program().to_string(),
            source,
        })?;

    tracing::debug!(
        program = command.program(),
        path = %path.display(),
        pid = child.id(),
        "spawned child"
    );
    Ok(child)
}

/// Run the command once and wait for it to exit.
///
/// Returns the child's exit code. Failing to start or await the child is an
/// error, never an exit code.
pub async fn run(command: &CommandLine) -> Result<i32> {
    let mut child = spawn(command)?;
    let status = child.wait().await.map_err(SuperviseError::Wait)?;
    let code = exit_code(status);
    tracing::debug!(program = command.program(), exit_code = code, "child exited");
    Ok(code)
}

/// Exit code of a finished child, or `-1` when it was terminated by a signal.
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(exit_codes::NO_EXIT_CODE)
}
