//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to %APPDATA%\QuickLaunch\app.log.
//! Each startup rotates the previous session's log, keeping nine old sessions.

use crate::config::ConfigManager;
use crate::error::{QuickLaunchError, Result, StringError};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Maximum number of historical log files to keep (app.log.1 through app.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via `RUST_LOG`.
pub fn init_logging() -> Result<()> {
    let log_dir = ConfigManager::ensure_data_dir()?;

    let log_path = log_dir.join("app.log");
    let archived_previous = rotate_logs_on_startup(&log_path)?;

    // Rotation happens above, once per session, so the appender never rolls
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| QuickLaunchError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| QuickLaunchError::ConfigError(Box::new(e)))?;

    tracing::info!("QuickLaunch v{} started", env!("CARGO_PKG_VERSION"));
    if archived_previous {
        tracing::debug!("Previous session log archived as app.log.1");
    }

    Ok(())
}

/// Path of the `n`th archived session next to `log_path` (`app.log.n`)
fn archived_log(log_path: &Path, n: u8) -> Result<PathBuf> {
    let file_name = log_path
        .file_name()
        .ok_or_else(|| QuickLaunchError::ConfigError(StringError::new("Invalid log filename")))?;
    let mut archived = file_name.to_os_string();
    archived.push(format!(".{n}"));
    Ok(log_path.with_file_name(archived))
}

/// Archive the previous session's log before this session starts writing
///
/// `app.log` becomes `app.log.1` and older sessions move up one slot; the
/// session in slot [`MAX_LOG_FILES`] is dropped. A log that is empty (the
/// last start failed before logging anything) is deleted instead of
/// archived, so it does not push a useful session out of the history.
///
/// Returns whether a session was archived.
fn rotate_logs_on_startup(log_path: &Path) -> Result<bool> {
    let previous_len = match std::fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };
    if previous_len == 0 {
        std::fs::remove_file(log_path)?;
        return Ok(false);
    }

    let oldest = archived_log(log_path, MAX_LOG_FILES)?;
    if oldest.exists() {
        std::fs::remove_file(&oldest)?;
    }
    for slot in (1..MAX_LOG_FILES).rev() {
        let archived = archived_log(log_path, slot)?;
        if archived.exists() {
            std::fs::rename(&archived, archived_log(log_path, slot + 1)?)?;
        }
    }
    std::fs::rename(log_path, archived_log(log_path, 1)?)?;

    Ok(true)
}
