//! Error types for runlog.
//!
//! Uses thiserror for derive macros. The child process exiting non-zero is
//! never one of these errors unless a caller opts in via
//! [`ExecutionResult::check`](crate::runner::ExecutionResult::check).

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for runlog operations.
#[derive(Error, Debug)]
pub enum RunError {
    /// The argument vector was empty.
    #[error("empty command: the argument vector must name a program")]
    EmptyCommand,

    /// An environment entry was not of the form `KEY=VALUE`.
    #[error("invalid environment entry '{0}': expected KEY=VALUE")]
    InvalidEnv(String),

    /// The command could not be located on the search path.
    #[error("{command}: executable not found in PATH")]
    NotFound {
        command: String,
        #[source]
        source: which::Error,
    },

    /// The operating system failed to create the child process.
    #[error("failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Opening or writing the log file, or reading the output pipe, failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Retrieving the child's exit status failed.
    #[error("failed to wait for {}: {source}", program.display())]
    Wait {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The child exited with a non-zero status and the caller asked for it to be an error.
    #[error("command exited with status {status}")]
    NonZeroExit { status: i32, output: String },

    /// Configuration could not be read, parsed, or validated.
    #[error("{0}")]
    Config(String),
}

impl RunError {
    /// Returns the CLI exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::EmptyCommand | RunError::InvalidEnv(_) | RunError::Config(_) => {
                exit_codes::USER_ERROR
            }
            RunError::NotFound { .. } => exit_codes::NOT_FOUND,
            RunError::Spawn { .. } => exit_codes::SPAWN_FAILURE,
            RunError::Io { .. } => exit_codes::IO_FAILURE,
            RunError::Wait { .. } => exit_codes::WAIT_FAILURE,
            RunError::NonZeroExit { .. } => exit_codes::CHILD_FAILURE,
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        RunError::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for runlog operations.
pub type Result<T> = std::result::Result<T, RunError>;
