//! Tracing setup shared by devlink binaries.
//!
//! Events go to a daily rolling file under `$DEVLINK_HOME/logs`, filtered at
//! `warn`. Setting `DEVLINK_LOG` (for example `DEVLINK_LOG=devlink_core=debug`)
//! replaces the filter and also mirrors events to stderr.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::paths;

pub const LOG_ENV: &str = "DEVLINK_LOG";
const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_PREFIX: &str = "devlink.log";

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop; hold it until exit.
/// It is `None` when the log directory cannot be written, in which case
/// file logging is skipped and commands still run.
pub fn init() -> Result<Option<WorkerGuard>> {
    let verbose = std::env::var_os(LOG_ENV).is_some();
    let stderr_layer =
        verbose.then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    let (file_layer, guard) = match file_writer() {
        Some((writer, guard)) => (
            Some(fmt::layer().with_writer(writer).with_ansi(false)),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter())
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_writer() -> Option<(NonBlocking, WorkerGuard)> {
    let logs_dir = paths::logs_dir();
    fs::create_dir_all(&logs_dir).ok()?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(&logs_dir)
        .ok()?;
    Some(tracing_appender::non_blocking(appender))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
