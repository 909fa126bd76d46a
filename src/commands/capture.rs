//! Implementation of the `runlog capture` command.
//!
//! Prints the captured output after the command exits. With `--json` the
//! whole [`ExecutionResult`] is printed instead; with `--check` a non-zero
//! exit status becomes an error after the output has been printed.

use super::{Invocation, argv_refs};
use crate::cli::CaptureArgs;
use crate::config::Config;
use crate::runner::ExecutionResult;
use anyhow::{Context, Result};
use std::io::Write;

pub fn cmd_capture(config: &Config, args: CaptureArgs) -> Result<()> {
    let inv = Invocation::new(config, &args.exec)?;
    let log_file = args.log_file.clone().or_else(|| config.log_file());

    let result = inv.runner.run_log(
        &inv.env,
        log_file.as_deref(),
        &inv.dir,
        &argv_refs(&args.exec.argv),
    )?;

    print_result(&result, args.json)?;

    if args.check {
        result.check()?;
    }
    Ok(())
}

fn print_result(result: &ExecutionResult, json: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        let rendered =
            serde_json::to_string_pretty(result).context("serializing execution result")?;
        writeln!(stdout, "{}", rendered)?;
    } else {
        stdout.write_all(result.output.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}
