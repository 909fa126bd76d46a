//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::environment::Environment;
use crate::error::{Result, RunError};
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(RunError::Config)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RunError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document means "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| RunError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| RunError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - every interpreter has a non-empty `suffix` and `program`
    /// - every `env` entry is `KEY=VALUE` with a non-empty key
    pub fn validate(&self) -> Result<()> {
        for interp in &self.interpreters {
            if interp.suffix.is_empty() {
                return Err(RunError::Config(format!(
                    "config validation failed: interpreter '{}' has an empty suffix",
                    interp.program
                )));
            }
            if interp.program.trim().is_empty() {
                return Err(RunError::Config(format!(
                    "config validation failed: interpreter for suffix '{}' has an empty program",
                    interp.suffix
                )));
            }
        }

        Environment::parse(&self.env).map_err(|e| {
            RunError::Config(format!("config validation failed: {}", e))
        })?;

        Ok(())
    }

    /// Build the child environment described by this config.
    pub fn environment(&self) -> Result<Environment> {
        let mut env = if self.inherit_env {
            Environment::inherit()
        } else {
            Environment::empty()
        };
        env.extend(Environment::parse(&self.env)?);
        Ok(env)
    }

    /// Configured default log file, if any.
    pub fn log_file(&self) -> Option<PathBuf> {
        if self.log_file.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.log_file))
        }
    }
}
