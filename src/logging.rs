//! File logging
//!
//! The TUI owns stdout and stderr, so logs go to `folioterm.log` through a
//! non-blocking appender. Filtering follows `RUST_LOG`, defaulting to
//! `folioterm=info`.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE: &str = "folioterm.log";

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the program or buffered lines are lost.
pub fn init(log_dir: &Path) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "folioterm=info".into()))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    guard
}
