//! Tracing initialization.
//!
//! Sets up the `tracing` subscriber with an `EnvFilter` and a file writer
//! under the data directory. The terminal owns stdout, so logs must go to a
//! file; a UI frame with log lines mixed in would be corrupted.

use crate::infrastructure::paths;
use crate::Config;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file output.
///
/// The filter directive comes from `config.log_level` (already merged with
/// the `TUNEDEX_LOG` environment override), defaulting to `info`. Log lines
/// go to `tunedex.log` in the data directory.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it does not exist
/// - Silently does nothing if the directory or file cannot be created,
///   observability is optional
/// - Idempotent: only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("tunedex.log"))
    else {
        return;
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(true);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(file_layer);

    let _ = subscriber.try_init();
}
