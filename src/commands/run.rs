//! Implementation of the `runlog run` command.

use super::{Invocation, argv_refs};
use crate::cli::RunArgs;
use crate::config::Config;
use anyhow::Result;

/// Run the command with all output discarded.
pub fn cmd_run(config: &Config, args: RunArgs) -> Result<()> {
    let inv = Invocation::new(config, &args.exec)?;
    inv.runner
        .run(&inv.env, &inv.dir, &argv_refs(&args.exec.argv))?;
    Ok(())
}
