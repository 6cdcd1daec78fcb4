//! Logging setup.
//!
//! The console writes one log file per session under `<data_dir>/logs/` so
//! the terminal stays clean; CLI subcommands log to stderr instead.

use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

pub struct LoggingHandle {
    /// Keeps the background log writer alive; dropping it flushes buffered
    /// lines
    pub _guard: Option<WorkerGuard>,

    /// Where this session's log file lives, when file logging is active
    pub log_file_path: Option<PathBuf>,
}

/// Per-session log file name, stamped so concurrent sessions never collide
fn session_log_filename() -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ");
    format!("menuza-{timestamp}.log")
}

/// Initialize the global subscriber.
///
/// `RUST_LOG` overrides the configured level, and `--debug` overrides both.
/// Must be called once, before anything logs.
pub fn init_logging(
    config: &Config,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let level = if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or(level));

    if is_tui_mode && config.logging.to_file {
        init_file_logging(config, filter)
    } else {
        init_stderr_logging(filter)
    }
}

fn init_file_logging(config: &Config, filter: EnvFilter) -> Result<LoggingHandle> {
    let logs_dir = config.logs_path();
    std::fs::create_dir_all(&logs_dir)?;

    let log_filename = session_log_filename();
    let log_file_path = logs_dir.join(&log_filename);

    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false) // No ANSI codes in log files
                .with_writer(non_blocking),
        )
        .init();

    Ok(LoggingHandle {
        _guard: Some(guard),
        log_file_path: Some(log_file_path),
    })
}

fn init_stderr_logging(filter: EnvFilter) -> Result<LoggingHandle> {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(LoggingHandle {
        _guard: None,
        log_file_path: None,
    })
}
