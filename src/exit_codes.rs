//! Exit code constants for the cookiecutter CLI.
//!
//! - 0: Success (child process failures do not change this)
//! - 1: User error (bad args, missing tool binaries, unreadable files)
//! - 2: Input configuration error (mismatched paired-end file lists)
//! - 3: Launch failure (the controller lost track of its child processes)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing binaries, or unreadable input.
pub const USER_ERROR: i32 = 1;

/// Input configuration error: the set of input files is inconsistent.
pub const CONFIGURATION_ERROR: i32 = 2;

/// Launch failure: polling a running child process failed.
pub const LAUNCH_FAILURE: i32 = 3;
