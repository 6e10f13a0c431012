//! Application logging functionality
//!
//! Sets up the tracing subscriber and handles log file management

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::config::ConfigFile;

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    ConfigFile::config_dir().join("logs")
}

/// Name of today's log file
pub fn current_log_file_name() -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    format!("spritefont-bridge-{}.log", timestamp)
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(current_log_file_name())
}

/// Install the global subscriber.
///
/// `level` is the default filter directive; `RUST_LOG` takes precedence.
/// With `to_file`, logs are also appended to [`current_log_file`]. The
/// returned guard must stay alive until the run ends so buffered lines
/// are flushed.
pub fn init(level: &str, to_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let (file_layer, guard) = if to_file {
        let dir = logs_dir();
        fs::create_dir_all(&dir)?;
        let appender = tracing_appender::rolling::never(&dir, current_log_file_name());
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    if guard.is_some() {
        tracing::debug!("Logging to {:?}", current_log_file());
    }

    Ok(guard)
}
