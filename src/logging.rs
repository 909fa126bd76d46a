//! Logging setup for the `runlog` binary using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the log level:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `RUNLOG_LOG` environment variable (e.g. "info", "debug")
//! 3. `debug` with `--verbose`, otherwise `info`
//!
//! Logs go to stderr; stdout carries captured command output.

use crate::cli::LogLevel;

/// Environment variable consulted when no `--log-level` is given.
pub const LOG_ENV_VAR: &str = "RUNLOG_LOG";

/// Initialise the global logging subscriber.
///
/// Call once at startup; a second call leaves the first subscriber in place.
pub fn init_logging(cli_level: Option<LogLevel>, verbose: bool) {
    let level = resolve_level(
        cli_level,
        std::env::var(LOG_ENV_VAR).ok().as_deref(),
        verbose,
    );

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_level(
    cli_level: Option<LogLevel>,
    env_value: Option<&str>,
    verbose: bool,
) -> tracing::Level {
    if let Some(lvl) = cli_level {
        return level_from_log_level(lvl);
    }
    if let Some(lvl) = env_value.and_then(parse_level_str) {
        return lvl;
    }
    if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

fn level_from_log_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(
            resolve_level(Some(LogLevel::Warn), Some("trace"), true),
            Level::WARN
        );
    }

    #[test]
    fn test_env_level_beats_verbose() {
        assert_eq!(resolve_level(None, Some("error"), true), Level::ERROR);
    }

    #[test]
    fn test_verbose_defaults_to_debug() {
        assert_eq!(resolve_level(None, None, true), Level::DEBUG);
        assert_eq!(resolve_level(None, None, false), Level::INFO);
    }

    #[test]
    fn test_unknown_env_value_is_ignored() {
        assert_eq!(resolve_level(None, Some("loud"), false), Level::INFO);
    }

    #[test]
    fn test_parse_level_str_is_lenient() {
        assert_eq!(parse_level_str(" WARNING "), Some(Level::WARN));
        assert_eq!(parse_level_str("Debug"), Some(Level::DEBUG));
    }
}
