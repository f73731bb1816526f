use crate::supervisor::CommandLine;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) fn command(argv: &[&str]) -> CommandLine {
    CommandLine::new(argv.iter().copied()).unwrap()
}

/// Write a POSIX shell script into `dir`.
///
/// Tests run scripts as `sh <path>` instead of executing the file directly:
/// a freshly written executable can fail with ETXTBSY when another test
/// thread forks while the write handle is still open.
pub(crate) fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    path
}

/// `sh <script> [args...]` as a command line.
pub(crate) fn script_command(script: &Path, args: &[&str]) -> CommandLine {
    let mut argv = vec!["sh".to_string(), script.display().to_string()];
    argv.extend(args.iter().map(|a| a.to_string()));
    CommandLine::new(argv).unwrap()
}

/// Script that appends a line to `counter` on every run and exits with
/// `fail_code` until it has run `succeed_on` times.
pub(crate) fn counting_script(dir: &TempDir, succeed_on: usize, fail_code: i32) -> CommandLine {
    let counter = dir.path().join("attempts");
    let body = format!(
        r#"echo x >> "{counter}"
n=$(wc -l < "{counter}")
if [ "$n" -ge {succeed_on} ]; then exit 0; fi
exit {fail_code}"#,
        counter = counter.display(),
        succeed_on = succeed_on,
        fail_code = fail_code,
    );
    let script = write_script(dir, "count.sh", &body);
    script_command(&script, &[])
}

/// Number of times a script built by [`counting_script`] has run.
pub(crate) fn attempts(dir: &TempDir) -> usize {
    std::fs::read_to_string(dir.path().join("attempts"))
        .map(|s| s.lines().count())
        .unwrap_or(0)
}

/// Whether `pid` still names a live (or unreaped) process.
pub(crate) fn process_alive(pid: i32) -> bool {
    use nix::sys::signal::kill;
    use nix::unistd::Pid;
    kill(Pid::from_raw(pid), None).is_ok()
}
