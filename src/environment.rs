//! The child's environment vector.
//!
//! An ordered list of `KEY=VALUE` entries that *replaces* the caller's
//! environment when a child is spawned.

use crate::error::{Result, RunError};
use std::process::Command;

/// Ordered `KEY=VALUE` entries handed to a child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: Vec<(String, String)>,
}

impl Environment {
    /// An empty environment: the child sees no variables at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse `KEY=VALUE` entries, keeping their order.
    ///
    /// The value may itself contain `=`; only the first one splits.
    pub fn parse<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut env = Self::empty();
        for entry in entries {
            env.push_entry(entry.as_ref())?;
        }
        Ok(env)
    }

    /// Snapshot of the caller's own environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn inherit() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Append a single `KEY=VALUE` entry.
    pub fn push_entry(&mut self, entry: &str) -> Result<()> {
        match entry.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                self.vars.push((key.to_string(), value.to_string()));
                Ok(())
            }
            _ => Err(RunError::InvalidEnv(entry.to_string())),
        }
    }

    /// Append entries from another environment, after the existing ones.
    pub fn extend(&mut self, other: Environment) {
        self.vars.extend(other.vars);
    }

    /// Value of the last entry for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True if the child would see no variables at all.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Entries rendered back to `KEY=VALUE` form, in order.
    pub fn entries(&self) -> Vec<String> {
        self.vars.iter().map(|(k, v)| format!("{}={}", k, v)).collect()
    }

    /// Clear `command`'s inherited environment and install these entries.
    ///
    /// Later entries for the same key override earlier ones.
    pub(crate) fn apply(&self, command: &mut Command) {
        command.env_clear();
        for (key, value) in &self.vars {
            command.env(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order() {
        let env = Environment::parse(["B=2", "A=1"]).unwrap();
        assert_eq!(env.entries(), vec!["B=2", "A=1"]);
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_value_may_contain_equals() {
        let env = Environment::parse(["OPTS=a=b=c"]).unwrap();
        assert_eq!(env.get("OPTS"), Some("a=b=c"));
    }

    #[test]
    fn test_empty_value_is_allowed() {
        let env = Environment::parse(["EMPTY="]).unwrap();
        assert_eq!(env.get("EMPTY"), Some(""));
    }

    #[test]
    fn test_missing_equals_is_rejected() {
        let err = Environment::parse(["NOVALUE"]).unwrap_err();
        assert!(matches!(err, RunError::InvalidEnv(ref e) if e == "NOVALUE"));
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let err = Environment::parse(["=value"]).unwrap_err();
        assert!(matches!(err, RunError::InvalidEnv(_)));
    }

    #[test]
    fn test_last_duplicate_wins_for_get() {
        let env = Environment::parse(["A=1", "A=2"]).unwrap();
        assert_eq!(env.get("A"), Some("2"));
        assert_eq!(env.entries(), vec!["A=1", "A=2"]);
    }

    #[test]
    fn test_extend_appends() {
        let mut env = Environment::parse(["A=1"]).unwrap();
        env.extend(Environment::parse(["B=2"]).unwrap());
        assert_eq!(env.entries(), vec!["A=1", "B=2"]);
    }

    #[test]
    fn test_inherit_sees_path() {
        let env = Environment::inherit();
        if std::env::var("PATH").is_ok() {
            assert!(env.get("PATH").is_some());
        }
    }

    #[test]
    fn test_empty_environment() {
        let env = Environment::empty();
        assert!(env.is_empty());
        assert!(env.entries().is_empty());
    }
}
