//! Logger initialization.
//!
//! `env_logger` backs the `log` facade. Plain output is coloured for terminals;
//! JSON output emits one object per line for log shippers.

use std::io::Write;

use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependency modules that are chatty at the levels we care about.
const QUIET_MODULES: &[(&str, LevelFilter)] = &[
    // html5ever reports every tolerated markup error
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
];

/// Initializes the global logger with the specified level and format.
///
/// `RUST_LOG` is read first and the `level` argument then overrides it for
/// this crate, so `RUST_LOG=reqwest=debug` still works alongside
/// `--log-level info`.
///
/// ```bash
/// RUST_LOG=page_analyzer=debug,reqwest=info page_analyzer https://example.com
/// page_analyzer https://example.com --log-level debug --log-format json
/// ```
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a global logger is already set.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(matches!(format, LogFormat::Plain));
    build_logger(level, format).try_init()?;
    Ok(())
}

fn build_logger(level: LevelFilter, format: LogFormat) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (module, filter) in QUIET_MODULES {
        builder.filter_module(module, (*filter).min(level));
    }
    builder.filter_module("page_analyzer", level);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };
    builder
}

fn write_json(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    writeln!(buf, "{}", json_line(chrono::Utc::now().timestamp_millis(), record))
}

fn json_line(ts: i64, record: &Record<'_>) -> String {
    let msg = serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into());
    format!(
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        ts,
        record.level(),
        record.target(),
        msg
    )
}

fn write_plain(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    let level = record.level();
    let (emoji, label) = match level {
        Level::Error => ("❌", level.to_string().red()),
        Level::Warn => ("⚠️", level.to_string().yellow()),
        Level::Info => ("✔️", level.to_string().green()),
        Level::Debug => ("🔍", level.to_string().blue()),
        Level::Trace => ("🔬", level.to_string().purple()),
    };
    writeln!(
        buf,
        "{} {} [{}] {}",
        emoji,
        record.target().cyan(),
        label,
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_line_escapes_message() {
        let line = json_line(
            1_700_000_000_000,
            &Record::builder()
                .args(format_args!("fetched \"page\"\n"))
                .level(Level::Warn)
                .target("page_analyzer::fetch")
                .build(),
        );

        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");
        assert_eq!(parsed["ts"], 1_700_000_000_000_i64);
        assert_eq!(parsed["level"], "WARN");
        assert_eq!(parsed["target"], "page_analyzer::fetch");
        assert_eq!(parsed["msg"], "fetched \"page\"\n");
    }

    #[test]
    fn test_init_logger_twice_reports_error() {
        // Only one global logger per process; the second call must fail cleanly
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(first.is_ok() || second.is_err());
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
