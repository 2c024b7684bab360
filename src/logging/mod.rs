use crate::config::settings::RewriterConfig;
use crate::models::RewriteLog;
use anyhow::Result;
use log::{debug, error, info};
use serde_json;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_log::{AsLog, LogTracer};

static INIT: Once = Once::new();

/// Build an EnvFilter from a level directive, falling back to "info"
fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("Warning: invalid log level '{}' ({}), using info", level, e);
        EnvFilter::new("info")
    })
}

/// Most verbose level the filter can let through, for the log crate's max level
///
/// Per-target directives such as `mailto_webmail=debug` count too.
fn log_max_level(filter: &EnvFilter) -> log::LevelFilter {
    filter
        .max_level_hint()
        .map(|hint| hint.as_log())
        .unwrap_or(log::LevelFilter::Trace)
}

/// Bridge log events to tracing (after the subscriber is set up)
fn init_log_tracer() {
    // The fmt subscriber may already have installed one
    if let Err(e) = LogTracer::init() {
        tracing::debug!("LogTracer not installed: {}", e);
    }
}

/// Non-rotating appender writing to `<log_dir>/<file_name>`
fn file_appender(config: &RewriterConfig) -> Result<RollingFileAppender> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&config.logging.file_name)
        .build(&config.logging.log_dir)?;
    Ok(appender)
}

/// File appender when file logging is enabled, `None` to log to stderr
fn open_log_file(config: &RewriterConfig) -> Option<RollingFileAppender> {
    if !config.logging.enable_file_logging {
        return None;
    }
    match file_appender(config) {
        Ok(appender) => Some(appender),
        Err(e) => {
            eprintln!("Warning: Failed to open log file, logging to stderr: {:#}", e);
            None
        }
    }
}

/// Initialize logger from the rewriter configuration
///
/// With file logging enabled, output goes to `<log_dir>/<file_name>` instead of stderr.
/// Host browsers usually launch URL handlers without a terminal attached.
pub fn init_logger_with_config(config: &RewriterConfig) {
    INIT.call_once(|| {
        let filter = filter_for(&config.log_level);
        let max_level = log_max_level(&filter);

        // Stdout carries the rewritten URL, so logs never go there
        let result = match open_log_file(config) {
            Some(appender) => FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_level(true)
                .with_ansi(false)
                .with_writer(appender)
                .try_init(),
            None => FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_target(false)
                .with_level(true)
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        if let Err(e) = result {
            eprintln!("Warning: Failed to initialize tracing subscriber: {}", e);
        }

        init_log_tracer();
        log::set_max_level(max_level);
    });
}

/// Log a rewrite record using log (bridged to tracing via tracing-log)
pub fn log_rewrite(entry: &RewriteLog) -> Result<()> {
    let log_message = serde_json::to_string_pretty(entry)?;

    // Debug level so it only appears in debug mode
    debug!("REWRITE:\n{}", log_message);

    Ok(())
}

/// Log an error message
pub fn log_error(message: &str) {
    error!("{}", message);
}

/// Log an info message
pub fn log_info(message: &str) {
    info!("{}", message);
}

/// Log a debug message
pub fn log_debug(message: &str) {
    debug!("{}", message);
}

/// Convenience macro for logging rewrite records
#[macro_export]
macro_rules! log_rewrite_record {
    ($entry:expr) => {
        if let Err(e) = $crate::logging::log_rewrite($entry) {
            eprintln!("Failed to log rewrite: {}", e);
        }
    };
}

/// Convenience macro for logging errors
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log_error(&format!($($arg)*));
    };
}

/// Convenience macro for logging info messages
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::log_info(&format!($($arg)*));
    };
}

/// Convenience macro for logging debug messages
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log_debug(&format!($($arg)*));
    };
}
