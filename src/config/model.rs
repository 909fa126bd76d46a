//! Config struct definition and default implementation.

use crate::interpreter::{Interpreter, default_interpreters};
use serde::{Deserialize, Serialize};

/// Configuration for a runner.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Diagnostics
    // =========================================================================
    /// Log one line naming the argument vector for every call.
    pub verbose: bool,

    // =========================================================================
    // Child environment
    // =========================================================================
    /// Start the child's environment from the caller's own environment.
    pub inherit_env: bool,

    /// `KEY=VALUE` entries passed to the child, after any inherited ones.
    pub env: Vec<String>,

    // =========================================================================
    // Output capture
    // =========================================================================
    /// Log file used by `capture` when none is given on the command line.
    /// Empty disables file logging.
    pub log_file: String,

    // =========================================================================
    // Interpreters
    // =========================================================================
    /// Filename suffix to interpreter table; first match wins.
    #[serde(default = "default_interpreters")]
    pub interpreters: Vec<Interpreter>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            inherit_env: false,
            env: Vec::new(),
            log_file: String::new(),
            interpreters: default_interpreters(),
        }
    }
}
