//! Executable path resolution.
//!
//! Names that already look like paths are used as-is; everything else is
//! searched for on the caller's `PATH`, never the child's.

use crate::error::{Result, RunError};
use std::path::PathBuf;

/// Prefixes that mark a command as a literal path.
const LITERAL_PREFIXES: [&str; 3] = ["/", "./", "../"];

/// Returns true if `command` is a literal path that must not be searched for.
pub fn is_literal_path(command: &str) -> bool {
    LITERAL_PREFIXES
        .iter()
        .any(|prefix| command.starts_with(prefix))
}

/// Locate `command`.
///
/// Literal paths (starting with `/`, `./` or `../`) are returned unchanged
/// without touching the filesystem. Anything else is looked up on `PATH`.
pub fn look_path(command: &str) -> Result<PathBuf> {
    if is_literal_path(command) {
        return Ok(PathBuf::from(command));
    }

    which::which(command).map_err(|source| RunError::NotFound {
        command: command.to_string(),
        source,
    })
}
