//! Logging subscriber setup.

use super::file_writer::FileWriter;
use crate::config::LogSettings;
use crate::domain::{PhoenixError, Result};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Events at or above `settings.level` are formatted by `tracing-subscriber`'s
/// `fmt` layer and written to stderr, or to `settings.file` (rotated at 10 MB,
/// three backups kept) when one is configured. Stdout is never used: it carries
/// the drop output.
///
/// # Errors
///
/// Returns [`PhoenixError::Logging`] if the log file cannot be opened or a
/// global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use phoenix::config::LogSettings;
/// use phoenix::observability::{init_logging, LogLevel};
///
/// init_logging(&LogSettings { level: LogLevel::Debug, file: None })?;
/// tracing::debug!("logging is now active");
/// # Ok::<(), phoenix::PhoenixError>(())
/// ```
pub fn init_logging(settings: &LogSettings) -> Result<()> {
    let filter = EnvFilter::default().add_directive(settings.level.filter().into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match &settings.file {
        Some(path) => {
            let writer = FileWriter::open(path.clone()).map_err(|e| {
                PhoenixError::Logging(format!("cannot open log file {}: {e}", path.display()))
            })?;
            builder
                .with_ansi(false)
                .with_writer(Arc::new(writer))
                .try_init()
        }
        None => builder
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| PhoenixError::Logging(e.to_string()))?;

    tracing::debug!(level = ?settings.level, file = ?settings.file, "logging initialized");
    Ok(())
}
