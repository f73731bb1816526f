//! Exit code constants for the supervise CLI.
//!
//! - 0: the supervised command succeeded
//! - the child's own code when it ran and failed
//! - 1: supervise could not run the command, or the command timed out

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// The supervisor itself failed: bad arguments, launch or wait failure.
pub const SUPERVISOR_FAILURE: i32 = 1;

/// The command overran its deadline.
pub const TIMEOUT: i32 = 1;

/// Exit code reported for a child that terminated without one
/// (killed by a signal).
pub const NO_EXIT_CODE: i32 = -1;

/// Truncate an exit code to the byte the OS passes to the parent.
pub fn to_process_code(code: i32) -> u8 {
    (code & 0xff) as u8
}
