//! Structured logging: human-readable stderr plus optional JSONL file output.
//!
//! # Usage
//!
//! ```rust,ignore
//! use purr_shortcuts::logging;
//!
//! // Keep the guard alive for the duration of the program
//! let _guard = logging::init(&config);
//!
//! tracing::info!(event_type = "startup", "Shortcut tables ready");
//! ```

use std::fs::{self, OpenOptions};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, DEFAULT_LOG_FILTER};

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging.
///
/// The filter comes from `RUST_LOG`, then the config's `logFilter`, then
/// `info`. When the config names a log file, every event is also written
/// there as one JSON object per line.
pub fn init(config: &Config) -> LoggingGuard {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });

    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let mut file_guard = None;
    let json_layer = config.log_file.as_ref().and_then(|log_path| {
        if let Some(parent) = log_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("[LOGGING] Failed to create log directory: {}", e);
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| eprintln!("[LOGGING] Failed to open log file: {}", e))
            .ok()?;

        let (non_blocking_file, guard) = tracing_appender::non_blocking(file);
        file_guard = Some(guard);
        Some(
            fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_file(false)
                .with_line_number(false),
        )
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    if let Some(path) = &config.log_file {
        tracing::debug!(
            event_type = "app_lifecycle",
            log_path = %path.display(),
            "JSONL logging enabled"
        );
    }

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Run `f` with a temporary warn-level stderr subscriber.
///
/// For work that happens before [`init`] can run, such as loading the config
/// that configures logging itself.
pub fn with_bootstrap<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .compact()
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

/// Log a keyboard event with structured fields.
///
/// Trace level: this fires on every unbound key press.
pub fn log_key_event(key: &str, chord: &str, action: &str) {
    tracing::trace!(
        event_type = "key_event",
        key = key,
        chord = chord,
        action = action,
        "Key {} {}", action, chord
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, Config};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn bootstrap_returns_the_closure_value() {
        assert_eq!(with_bootstrap(|| 7), 7);
    }

    #[test]
    fn bootstrap_config_load_falls_back_on_bad_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shortcuts.json");
        fs::write(&path, "{ not json").unwrap();

        let config = with_bootstrap(|| load_config(&path));
        assert_eq!(config.variant, Config::default().variant);
        assert_eq!(config.platform, None);
    }
}
