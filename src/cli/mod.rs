//! CLI argument parsing for runlog.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// runlog: run a command with a controlled environment and capture its output.
///
/// Script files ending in a known suffix (by default `.bash`) are run through
/// their interpreter. Bare command names are searched for on the caller's
/// PATH; names starting with `/`, `./` or `../` are used as given.
#[derive(Parser, Debug)]
#[command(name = "runlog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log the argument vector of every command before it runs.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RUNLOG_LOG` or a default level is used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for runlog.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a command, discarding its output.
    ///
    /// Only failures to find, start, or wait for the command are reported;
    /// the command's own exit status is ignored.
    Run(RunArgs),

    /// Run a command and capture its combined stdout/stderr.
    ///
    /// The output is printed once the command exits and, with `--log-file`,
    /// appended to a log file as it arrives.
    Capture(CaptureArgs),

    /// Show how a command would be resolved without running it.
    Which(WhichArgs),
}

/// Options shared by every command that spawns a process.
#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Working directory for the command (default: current directory).
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Environment entry for the command; repeatable. Replaces the caller's
    /// environment unless `--inherit-env` is given.
    #[arg(short, long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Start from the caller's environment instead of an empty one.
    #[arg(long)]
    pub inherit_env: bool,

    /// The command and its arguments.
    #[arg(value_name = "COMMAND", required = true, trailing_var_arg = true)]
    pub argv: Vec<String>,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub exec: ExecArgs,
}

/// Arguments for the `capture` command.
#[derive(Args, Debug)]
pub struct CaptureArgs {
    /// Append the combined output to this file (created if missing).
    #[arg(short, long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the result as JSON instead of the raw output.
    #[arg(long)]
    pub json: bool,

    /// Fail if the command exits with a non-zero status.
    #[arg(long)]
    pub check: bool,

    #[command(flatten)]
    pub exec: ExecArgs,
}

/// Arguments for the `which` command.
#[derive(Args, Debug)]
pub struct WhichArgs {
    /// The command and its arguments.
    #[arg(value_name = "COMMAND", required = true, trailing_var_arg = true)]
    pub argv: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
