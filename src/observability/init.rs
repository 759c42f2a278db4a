//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber for the marketplace core:
//! an environment-driven filter in front of a fmt layer writing either to
//! stderr or to a size-rotated log file.

use super::file_writer::{LogWriter, RotatingLogFile};
use crate::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable, when set
/// 2. `config.trace_level`, when set
/// 3. Default: `"info"`
///
/// # Output
///
/// Events go to stderr, or to `config.log_file` with size-based rotation
/// (10 MB, three backups) when one is configured. Hosts embedding the core in
/// a UI process typically set a log file so stderr stays quiet.
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match &config.log_file {
        Some(path) => {
            let sink = Arc::new(RotatingLogFile::new(PathBuf::from(path)));
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(move || LogWriter(Arc::clone(&sink))),
                )
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init();
        }
    }
}
