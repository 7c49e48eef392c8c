//! Logging system initialization
//!
//! Uses the tracing ecosystem for structured logging with support for:
//! - Environment variable override (CALCPAD_LOG)
//! - Console output on stderr (stdout belongs to the display)
//! - Optional file output with daily rotation

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::LoggingConfig;

/// Initialize the logging system.
///
/// Returns the file-writer guard when file output is enabled; the caller
/// holds it for the process lifetime so buffered lines are flushed on exit.
///
/// # Environment Variables
/// - `CALCPAD_LOG`: Override log level (e.g., "calcpad=debug")
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_env("CALCPAD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("calcpad={}", config.level)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);

    let console_layer = if config.timestamps {
        console_layer.boxed()
    } else {
        console_layer.without_time().boxed()
    };

    let (file_layer, guard) = if config.file_output {
        let log_dir = config.file_path.clone().unwrap_or_else(default_log_dir);
        let appender = rolling::daily(log_dir, "calcpad.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false).boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

/// Get the default log directory path
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("calcpad")
        .join("logs")
}
