//! Interpreter prefixing for script files.
//!
//! Purely a filename-suffix heuristic: the script's contents and permission
//! bits are never looked at.

use serde::{Deserialize, Serialize};

/// Maps a script filename suffix to the program that runs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpreter {
    /// Filename suffix including the leading dot, e.g. `.bash`.
    pub suffix: String,
    /// Program placed in front of the script, e.g. `bash`.
    pub program: String,
}

impl Interpreter {
    pub fn new(suffix: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            program: program.into(),
        }
    }

    fn matches(&self, arg0: &str) -> bool {
        arg0.ends_with(&self.suffix)
    }
}

/// Default table: only `.bash` scripts are prefixed.
pub fn default_interpreters() -> Vec<Interpreter> {
    vec![Interpreter::new(".bash", "bash")]
}

/// Prefix `argv` with an interpreter if `argv[0]` ends with a known suffix.
///
/// The first matching entry wins. An empty `argv` is returned as-is.
pub fn rewrite(interpreters: &[Interpreter], argv: &[&str]) -> Vec<String> {
    let mut rewritten: Vec<String> = Vec::with_capacity(argv.len() + 1);

    if let Some(arg0) = argv.first()
        && let Some(interp) = interpreters.iter().find(|i| i.matches(arg0))
    {
        rewritten.push(interp.program.clone());
    }

    rewritten.extend(argv.iter().map(|s| s.to_string()));
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_script_gets_bash_prefix() {
        let argv = rewrite(&default_interpreters(), &["foo.bash", "-x", "y"]);
        assert_eq!(argv, vec!["bash", "foo.bash", "-x", "y"]);
    }

    #[test]
    fn test_other_names_are_unchanged() {
        for arg0 in ["foo.sh", "foo", "bash", "foo.bash.txt"] {
            let argv = rewrite(&default_interpreters(), &[arg0, "rest"]);
            assert_eq!(argv, vec![arg0, "rest"]);
        }
    }

    #[test]
    fn test_only_first_argument_is_inspected() {
        let argv = rewrite(&default_interpreters(), &["make", "all.bash"]);
        assert_eq!(argv, vec!["make", "all.bash"]);
    }

    #[test]
    fn test_literal_path_script_keeps_its_path() {
        let argv = rewrite(&default_interpreters(), &["./make.bash"]);
        assert_eq!(argv, vec!["bash", "./make.bash"]);
    }

    #[test]
    fn test_first_matching_interpreter_wins() {
        let table = vec![
            Interpreter::new(".py", "python3"),
            Interpreter::new(".bash", "bash"),
            Interpreter::new("run.bash", "zsh"),
        ];
        assert_eq!(rewrite(&table, &["run.bash"]), vec!["bash", "run.bash"]);
        assert_eq!(rewrite(&table, &["gen.py"]), vec!["python3", "gen.py"]);
    }

    #[test]
    fn test_empty_table_never_rewrites() {
        assert_eq!(rewrite(&[], &["foo.bash"]), vec!["foo.bash"]);
    }

    #[test]
    fn test_empty_argv_is_returned_empty() {
        assert!(rewrite(&default_interpreters(), &[]).is_empty());
    }
}
