//! Implementation of the `runlog which` command.
//!
//! Shows the program that would be spawned and the argument vector after
//! interpreter rewriting, without running anything.

use super::argv_refs;
use crate::cli::WhichArgs;
use crate::config::Config;
use crate::runner::{ResolvedCommand, Runner};
use anyhow::Result;

pub fn cmd_which(config: &Config, args: WhichArgs) -> Result<()> {
    let runner = Runner::from_config(config);
    let resolved = runner.resolve(&argv_refs(&args.argv))?;
    print!("{}", render(&resolved));
    Ok(())
}

fn render(resolved: &ResolvedCommand) -> String {
    format!(
        "program: {}\ncommand: {}\n",
        resolved.program.display(),
        shell_words::join(&resolved.argv)
    )
}
