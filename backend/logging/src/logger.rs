//! Tracing initialization.
//!
//! Console output for humans, daily-rolling NDJSON files for the record.
//! Level control comes from `RUST_LOG` when set, otherwise the configured
//! default.

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init_logger(log_dir: impl AsRef<Path>, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // `<log_dir>/pantryforge.log.YYYY-MM-DD`, one JSON object per line.
    let file_writer = tracing_appender::rolling::daily(log_dir, "pantryforge.log");

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(fmt::layer().json().with_writer(file_writer).with_ansi(false))
        .try_init();
}
