//! Tracing initialization for the bulk feed importer.
//!
//! Logs go both to standard output and to a daily-rotating file under the
//! configured log directory. Per-worker identity is carried as a structured
//! field on the events rather than as separate sink files.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Initializes the global subscriber with a stdout layer and a daily-rotating
/// file layer under `log_dir`.
///
/// The returned guard must be kept alive for the lifetime of the process so
/// buffered file output is flushed on shutdown.
pub fn init_tracing(app_name: &str, log_dir: &Path) -> WorkerGuard {
    let file_appender = rolling::daily(log_dir, format!("{app_name}.log"));
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = fmt::layer().with_target(false);
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    guard
}
