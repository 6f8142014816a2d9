//! Logging setup.
//!
//! Human-readable events go to stderr (stdout belongs to command output and,
//! under `serve`, to the MCP transport). When a log location is available,
//! JSONL events are also appended to a file through a non-blocking writer.
//!
//! Log file resolution, first match wins:
//! 1. `INKGAUGE_LOG_PATH` (exact file, never rotated)
//! 2. `INKGAUGE_LOG_DIR` (daily rotation)
//! 3. `log_dir` from config (daily rotation)
//! 4. `<platform data dir>/inkgauge/logs` (daily rotation)

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "INKGAUGE_LOG_PATH";
const LOG_DIR_ENV: &str = "INKGAUGE_LOG_DIR";
const LOG_FILE_PREFIX: &str = "inkgauge.jsonl";

/// Where log files go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file, from `INKGAUGE_LOG_PATH`.
    pub log_path: Option<PathBuf>,
    /// Directory for rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve log locations from the environment, falling back to the
    /// configured directory and then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from);
        let log_dir = std::env::var_os(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                inkgauge_core::config::user_data_local_dir()
                    .map(|dir| dir.join("logs").into_std_path_buf())
            });
        Self { log_path, log_dir }
    }

    fn appender(&self) -> Option<RollingFileAppender> {
        let (dir, rotation, prefix) = if let Some(ref path) = self.log_path {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            (dir, Rotation::NEVER, path.file_name()?.to_str()?)
        } else {
            (self.log_dir.as_deref()?, Rotation::DAILY, LOG_FILE_PREFIX)
        };
        std::fs::create_dir_all(dir).ok()?;
        RollingFileAppender::builder()
            .rotation(rotation)
            .filename_prefix(prefix)
            .build(dir)
            .ok()
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` forces `error`, each `-v`
/// raises the level (`debug`, then `trace`), and with neither the configured
/// level applies.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Returns the file writer's guard; keep it alive until exit so buffered
/// events are flushed. File logging is skipped when no writable location
/// resolves.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match config.appender() {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    if guard.is_none() {
        tracing::debug!("file logging disabled: no writable log location");
    }
    Ok(guard)
}
