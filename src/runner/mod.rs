//! Subprocess runner.
//!
//! [`Runner`] resolves a command, optionally prefixes an interpreter for
//! script files, and spawns it with a replacing environment and a working
//! directory. Two modes are offered:
//!
//! - [`Runner::run`]: all standard streams go to the null device and only
//!   spawn/wait failures are reported.
//! - [`Runner::run_log`]: stdout and stderr are merged into one pipe, copied
//!   into memory and (optionally) appended to a log file; the exit status is
//!   returned as data.
//!
//! # Example
//!
//! ```no_run
//! use runlog::environment::Environment;
//! use runlog::runner::Runner;
//! use std::path::Path;
//!
//! let runner = Runner::new().with_verbose(true);
//! let env = Environment::parse(["LANG=C"])?;
//! let log = Some(Path::new("build.log"));
//! let result = runner.run_log(&env, log, Path::new("."), &["./make.bash"])?;
//! println!("exit {}:\n{}", result.exit_status, result.output);
//! # Ok::<(), runlog::error::RunError>(())
//! ```

mod capture;


use crate::config::Config;
use crate::environment::Environment;
use crate::error::{Result, RunError};
use crate::interpreter::{self, Interpreter};
use crate::lookup;
use capture::{ChildGuard, Tee};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info};

/// Outcome of a captured run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// Merged stdout and stderr, in the order the child wrote them.
    ///
    /// Invalid UTF-8 is replaced; the log file keeps the raw bytes.
    pub output: String,
    /// Exit code of the child, or -1 if it was terminated by a signal.
    pub exit_status: i32,
}

impl ExecutionResult {
    /// Returns true if the child exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_status == 0
    }

    /// Turn a non-zero exit status into [`RunError::NonZeroExit`].
    pub fn check(self) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(RunError::NonZeroExit {
                status: self.exit_status,
                output: self.output,
            })
        }
    }
}

/// A command after interpreter rewriting and path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    /// Path the process is spawned from.
    pub program: PathBuf,
    /// Argument vector after rewriting; `argv[0]` is what the child sees.
    pub argv: Vec<String>,
}

impl ResolvedCommand {
    fn command(&self, env: &Environment, dir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.argv[1..]);

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.arg0(&self.argv[0]);
        }

        env.apply(&mut command);

        // An empty directory means "stay where the caller is".
        if !dir.as_os_str().is_empty() {
            command.current_dir(dir);
        }

        command
    }
}

/// Runs subprocesses. Immutable once built, so one runner can be shared
/// freely between threads.
#[derive(Debug, Clone)]
pub struct Runner {
    verbose: bool,
    interpreters: Vec<Interpreter>,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            verbose: false,
            interpreters: interpreter::default_interpreters(),
        }
    }
}

impl Runner {
    /// A quiet runner that only knows the `.bash` interpreter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a runner from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            verbose: config.verbose,
            interpreters: config.interpreters.clone(),
        }
    }

    /// Emit one diagnostic line per call naming the argument vector.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Replace the interpreter table.
    pub fn with_interpreters(mut self, interpreters: Vec<Interpreter>) -> Self {
        self.interpreters = interpreters;
        self
    }

    /// Whether the per-call diagnostic line is emitted.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// The interpreter table, in match order.
    pub fn interpreters(&self) -> &[Interpreter] {
        &self.interpreters
    }

    /// Apply interpreter rewriting, then locate the resulting `argv[0]`.
    pub fn resolve(&self, argv: &[&str]) -> Result<ResolvedCommand> {
        if argv.is_empty() {
            return Err(RunError::EmptyCommand);
        }

        let argv = interpreter::rewrite(&self.interpreters, argv);
        let program = lookup::look_path(&argv[0])?;
        debug!(program = %program.display(), ?argv, "resolved command");

        Ok(ResolvedCommand { program, argv })
    }

    /// Run a command to completion, discarding all of its output.
    ///
    /// The child's exit status is not inspected: only failures to locate,
    /// start, or wait for the process are errors.
    pub fn run(&self, env: &Environment, dir: &Path, argv: &[&str]) -> Result<()> {
        if self.verbose {
            info!(?argv, "run");
        }

        let resolved = self.resolve(argv)?;
        let mut command = resolved.command(env, dir);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = command.spawn().map_err(|source| RunError::Spawn {
            program: resolved.program.clone(),
            source,
        })?;

        let status = ChildGuard::new(child)
            .wait()
            .map_err(|source| RunError::Wait {
                program: resolved.program.clone(),
                source,
            })?;
        debug!(
            program = %resolved.program.display(),
            exit_status = exit_code(status),
            "command exited"
        );

        Ok(())
    }

    /// Run a command, capturing its merged stdout/stderr.
    ///
    /// Every byte is also appended to `log_file` when one is given (`None`
    /// or an empty path disables file logging). A non-zero exit status is
    /// returned in the result, not as an error.
    pub fn run_log(
        &self,
        env: &Environment,
        log_file: Option<&Path>,
        dir: &Path,
        argv: &[&str],
    ) -> Result<ExecutionResult> {
        if self.verbose {
            info!(?argv, "runLog");
        }

        let resolved = self.resolve(argv)?;

        let log = match log_file.filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => Some(capture::open_log(path).map_err(|e| {
                RunError::io(format!("failed to open log file '{}'", path.display()), e)
            })?),
            None => None,
        };

        let (mut reader, writer) =
            io::pipe().map_err(|e| RunError::io("failed to create output pipe", e))?;

        // The command owns the write ends; dropping it at the end of this
        // block leaves the child as the only writer, so the read hits EOF
        // when the child exits.
        let child = {
            let stderr = writer
                .try_clone()
                .map_err(|e| RunError::io("failed to duplicate output pipe", e))?;
            let mut command = resolved.command(env, dir);
            command.stdin(Stdio::null()).stdout(writer).stderr(stderr);
            command.spawn().map_err(|source| RunError::Spawn {
                program: resolved.program.clone(),
                source,
            })?
        };
        let child = ChildGuard::new(child);

        let mut tee = Tee::new(log);
        io::copy(&mut reader, &mut tee).map_err(|e| {
            RunError::io(
                format!("failed to copy output of {}", resolved.program.display()),
                e,
            )
        })?;
        drop(reader);

        let status = child.wait().map_err(|source| RunError::Wait {
            program: resolved.program.clone(),
            source,
        })?;

        let exit_status = exit_code(status);
        let output = String::from_utf8_lossy(&tee.into_bytes()).into_owned();
        debug!(
            program = %resolved.program.display(),
            exit_status,
            bytes = output.len(),
            "command exited"
        );

        Ok(ExecutionResult {
            output,
            exit_status,
        })
    }
}

/// Numeric exit status; -1 when the child was killed by a signal.
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
