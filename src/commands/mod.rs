//! Command implementations for runlog.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared step that folds command-line overrides
//! into the loaded configuration.

mod capture;
mod run;
mod which;

use crate::cli::{Cli, Command, ExecArgs};
use crate::config::Config;
use crate::environment::Environment;
use crate::runner::Runner;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.verbose)?;

    match cli.command {
        Command::Run(args) => run::cmd_run(&config, args),
        Command::Capture(args) => capture::cmd_capture(&config, args),
        Command::Which(args) => which::cmd_which(&config, args),
    }
}

/// Load the config file if one was given, then apply `--verbose`.
fn load_config(path: Option<&Path>, verbose: bool) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from '{}'", path.display()))?,
        None => Config::default(),
    };
    config.verbose |= verbose;
    Ok(config)
}

/// Everything a spawning command needs, resolved from config and flags.
struct Invocation {
    runner: Runner,
    env: Environment,
    dir: PathBuf,
}

impl Invocation {
    fn new(config: &Config, exec: &ExecArgs) -> Result<Self> {
        let mut config = config.clone();
        config.inherit_env |= exec.inherit_env;
        config.env.extend(exec.env.iter().cloned());

        let env = config
            .environment()
            .context("building the command environment")?;

        Ok(Self {
            runner: Runner::from_config(&config),
            env,
            dir: exec.dir.clone().unwrap_or_default(),
        })
    }
}

fn argv_refs(argv: &[String]) -> Vec<&str> {
    argv.iter().map(String::as_str).collect()
}
