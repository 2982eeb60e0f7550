//! Logger initialization.
//!
//! Diagnostics go to standard error through `env_logger` so they never mix
//! with the report printed on standard output.

use std::io::Write;

use clap::ValueEnum;
use crossterm::style::Stylize;
use log::{LevelFilter, SetLoggerError};

/// Logging level selectable with `--log-level`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    #[default]
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Chatty dependency modules kept at `info` or below.
const HTTP_STACK_MODULES: [&str; 4] = ["reqwest", "hyper", "hyper_util", "rustls"];

fn http_stack_level(level: LevelFilter) -> LevelFilter {
    level.min(LevelFilter::Info)
}

/// Initializes `env_logger`, starting from `RUST_LOG` and then applying `level`.
///
/// `level`, when given, overrides `RUST_LOG`. HTTP stack modules then log
/// at `level` or `info`, whichever is quieter. Without `level`, `RUST_LOG`
/// is used as-is, or `warn` everywhere if it is unset.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger is already installed.
pub fn init_logger(level: Option<LogLevel>, color: bool) -> Result<(), SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();

    let level = match level {
        Some(level) => Some(LevelFilter::from(level)),
        None if std::env::var_os("RUST_LOG").is_none() => Some(LogLevel::default().into()),
        None => None,
    };
    if let Some(level) = level {
        builder.filter_level(level);
        for module in HTTP_STACK_MODULES {
            builder.filter_module(module, http_stack_level(level));
        }
    }

    builder.format(move |buf, record| {
        let level = record.level().to_string();
        let level = if color {
            match record.level() {
                log::Level::Error => level.red().to_string(),
                log::Level::Warn => level.yellow().to_string(),
                log::Level::Info => level.green().to_string(),
                log::Level::Debug => level.blue().to_string(),
                log::Level::Trace => level.magenta().to_string(),
            }
        } else {
            level
        };
        writeln!(buf, "[{level}] {}: {}", record.target(), record.args())
    });

    builder.try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::Error);
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::Warn);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }

    #[test]
    fn test_http_stack_never_louder_than_requested() {
        assert_eq!(http_stack_level(LevelFilter::Warn), LevelFilter::Warn);
        assert_eq!(http_stack_level(LevelFilter::Error), LevelFilter::Error);
        assert_eq!(http_stack_level(LevelFilter::Info), LevelFilter::Info);
        assert_eq!(http_stack_level(LevelFilter::Trace), LevelFilter::Info);
    }

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        // Only the first logger in a process can be installed
        let _ = init_logger(Some(LogLevel::Debug), false);
        assert!(init_logger(Some(LogLevel::Info), false).is_err());
    }
}
