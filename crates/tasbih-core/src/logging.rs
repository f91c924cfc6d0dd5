//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable controlling the log filter.
pub const LOG_ENV_VAR: &str = "TASBIH_LOG";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/tasbih/logs/`, never to stdout,
/// which carries the headless event stream.
/// Log level is controlled by the `TASBIH_LOG` environment variable.
///
/// # Examples
/// ```bash
/// TASBIH_LOG=debug tasbih
/// TASBIH_LOG=tasbih_app=trace tasbih
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "tasbih.log");

    // Default to info for our crates, allow override via TASBIH_LOG
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new("tasbih=info,tasbih_app=info,tasbih_drivers=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::LoggingInit {
            message: e.to_string(),
        })?;

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("tasbih starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("tasbih").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("tasbih.log"))
}
