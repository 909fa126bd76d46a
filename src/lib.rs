//! runlog: run subprocesses with a controlled environment and capture their
//! combined output.
//!
//! The library centres on [`runner::Runner`]; the `runlog` binary is a thin
//! clap front end over it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod environment;
pub mod error;
pub mod exit_codes;
pub mod interpreter;
pub mod logging;
pub mod lookup;
pub mod runner;

#[cfg(test)]
mod test_support;

pub use environment::Environment;
pub use error::{Result, RunError};
pub use runner::{ExecutionResult, ResolvedCommand, Runner};
