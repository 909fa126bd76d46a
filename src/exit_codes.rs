//! Exit code constants for the runlog CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, malformed environment)
//! - 2: Command not found on the search path
//! - 3: Child process could not be spawned
//! - 4: I/O failure (log file, output pipe)
//! - 5: Waiting for the child failed
//! - 6: Child exited non-zero and the caller asked for `--check`

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or malformed environment.
pub const USER_ERROR: i32 = 1;

/// The command could not be located.
pub const NOT_FOUND: i32 = 2;

/// The operating system refused to create the child process.
pub const SPAWN_FAILURE: i32 = 3;

/// Opening/writing the log file or reading the output pipe failed.
pub const IO_FAILURE: i32 = 4;

/// Retrieving the child's exit status failed.
pub const WAIT_FAILURE: i32 = 5;

/// The child ran but exited with a non-zero status.
pub const CHILD_FAILURE: i32 = 6;
