//! Logging setup for applications embedding the Lara adapter
//!
//! The adapter only emits `tracing` events, each inside its device's
//! `elkoep_lara` span. These helpers install a subscriber for binaries and
//! tests that have none. Without an explicit filter only this crate's
//! events are shown.

use tracing_subscriber::EnvFilter;

/// Target prefix of every event this crate emits
pub const LOG_TARGET: &str = "elkoep_lara";

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber installed
    Silent,
    /// Compact stderr output at info level
    Development,
    /// Pretty output at debug level with source locations
    Debug,
}

impl LoggingMode {
    fn default_level(self) -> Option<&'static str> {
        match self {
            LoggingMode::Silent => None,
            LoggingMode::Development => Some("info"),
            LoggingMode::Debug => Some("debug"),
        }
    }
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid filter directive '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },
}

/// Install a global subscriber for `mode`
///
/// # Environment Variables
///
/// - `LARA_LOG_LEVEL`: filter directive, e.g. `elkoep_lara=trace,warn`
/// - `RUST_LOG`: used when `LARA_LOG_LEVEL` is unset
///
/// With neither set the filter is `elkoep_lara=<mode level>`.
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    let directive = filter_directive(
        mode,
        std::env::var("LARA_LOG_LEVEL").ok(),
        std::env::var("RUST_LOG").ok(),
    );
    let Some(directive) = directive else {
        return Ok(());
    };
    let filter = parse_filter(&directive)?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match mode {
        LoggingMode::Debug => builder
            .pretty()
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .try_init(),
        _ => builder.compact().with_target(false).try_init(),
    };

    result.map_err(|e| LoggingError::TracingInit(e.to_string()))
}

/// Pick the mode from `LARA_LOG_MODE` (`development`, `debug`), silent otherwise
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    init_logging(mode_from_env_value(std::env::var("LARA_LOG_MODE").ok().as_deref()))
}

fn mode_from_env_value(value: Option<&str>) -> LoggingMode {
    match value {
        Some("development") => LoggingMode::Development,
        Some("debug") => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    }
}

/// Filter directive for `mode`, or `None` when nothing should be installed
fn filter_directive(
    mode: LoggingMode,
    lara_log_level: Option<String>,
    rust_log: Option<String>,
) -> Option<String> {
    let level = mode.default_level()?;
    Some(
        lara_log_level
            .or(rust_log)
            .unwrap_or_else(|| format!("{}={}", LOG_TARGET, level)),
    )
}

fn parse_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidFilter {
        directive: directive.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_silent_mode() {
        assert!(init_logging(LoggingMode::Silent).is_ok());
    }

    #[test]
    fn test_mode_from_env_value() {
        assert_eq!(mode_from_env_value(Some("development")), LoggingMode::Development);
        assert_eq!(mode_from_env_value(Some("debug")), LoggingMode::Debug);
        assert_eq!(mode_from_env_value(Some("loud")), LoggingMode::Silent);
        assert_eq!(mode_from_env_value(None), LoggingMode::Silent);
    }

    #[rstest]
    #[case(LoggingMode::Development, None, None, Some("elkoep_lara=info"))]
    #[case(LoggingMode::Debug, None, None, Some("elkoep_lara=debug"))]
    #[case(LoggingMode::Debug, Some("warn"), Some("trace"), Some("warn"))]
    #[case(LoggingMode::Development, None, Some("elkoep_lara=trace"), Some("elkoep_lara=trace"))]
    #[case(LoggingMode::Silent, Some("debug"), None, None)]
    fn test_filter_directive(
        #[case] mode: LoggingMode,
        #[case] lara_log_level: Option<&str>,
        #[case] rust_log: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let directive = filter_directive(
            mode,
            lara_log_level.map(str::to_string),
            rust_log.map(str::to_string),
        );
        assert_eq!(directive.as_deref(), expected);
    }

    #[test]
    fn test_default_directive_parses() {
        for mode in [LoggingMode::Development, LoggingMode::Debug] {
            let directive = filter_directive(mode, None, None).unwrap();
            assert!(parse_filter(&directive).is_ok(), "{} should parse", directive);
        }
    }

    #[test]
    fn test_invalid_directive_rejected() {
        let err = parse_filter("elkoep_lara=notalevel").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidFilter { ref directive, .. } if directive == "elkoep_lara=notalevel"));
    }

    #[test]
    fn test_target_matches_crate() {
        assert_eq!(LOG_TARGET, module_path!().split("::").next().unwrap());
    }
}
