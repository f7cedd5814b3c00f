//! Tracing setup for the server binary.
//!
//! Two formatting layers (stderr and a plain log file) sit behind one
//! reloadable `EnvFilter`, so the `logLevel` setting can re-level the whole
//! subscriber while the server runs.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use crate::server::settings::LogLevel;

const LOG_FILE_NAME: &str = "nav-lens.log";

/// Handle for changing the active log level after initialisation.
#[derive(Clone)]
pub struct LogControl {
    handle: reload::Handle<EnvFilter, Registry>,
    verbose: bool,
}

impl LogControl {
    /// Re-level the subscriber. `--verbose` pins the level to debug.
    pub fn set_level(
        &self,
        level: LogLevel,
    ) {
        let effective = if self.verbose { LogLevel::Debug } else { level };
        match self.handle.reload(filter_for(effective)) {
            Ok(()) => info!("Log level updated to {}", effective.as_str()),
            Err(err) => warn!("Failed to update log level: {err}"),
        }
    }
}

/// `EnvFilter` for our crate at `level`; the transport stays at warn unless
/// we are debugging.
pub fn filter_for(level: LogLevel) -> EnvFilter {
    let transport = if level == LogLevel::Debug { "info" } else { "warn" };
    EnvFilter::new(format!("nav_lens={},tower_lsp={transport}", level.as_str()))
}

/// Install the global subscriber and return its level control.
pub fn init(
    log_path: &Path,
    verbose: bool,
) -> LogControl {
    let initial = if verbose { LogLevel::Debug } else { LogLevel::Info };
    let (filter, handle) = reload::Layer::new(filter_for(initial));

    let file_appender = tracing_appender::rolling::never(
        log_path.parent().unwrap_or(Path::new(".")),
        log_path.file_name().unwrap_or(std::ffi::OsStr::new(LOG_FILE_NAME)),
    );

    let file_layer = fmt::layer().with_writer(file_appender).with_ansi(false).with_target(false);

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_ansi(false).with_target(false);

    tracing_subscriber::registry().with(filter).with(file_layer).with(stderr_layer).init();

    LogControl { handle, verbose }
}

pub fn default_log_path() -> PathBuf {
    dirs_or_tmp().join(LOG_FILE_NAME)
}

fn dirs_or_tmp() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        let dir = PathBuf::from(home).join(".nav-lens");
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    std::env::temp_dir()
}
