//! logger.rs
//! Severity-routed logger: one-time initialisation, per-tier routing and
//! release of the open file handles.
//!
//! A [`SeverityLogger`] is an explicit context object. Hosts that prefer a
//! single process-wide instance can use [`global`] and the `*_global` helpers.

use chrono::Utc;
use lazy_static::lazy_static;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use tracing::{debug, error, info, warn};

use crate::config::LoggerConfig;
use crate::errors::{LogError, LogResult, SafeLock};
use crate::log_event::{LineFormat, LogEvent};
use crate::log_paths::LogPaths;
use crate::log_sink::FileSink;
use crate::taxonomy::Severity;

pub const BOOTSTRAP_MESSAGE: &str = "Logger initialised successfully";

struct LoggerState {
    paths: LogPaths,
    line_format: LineFormat,
    standard: Arc<FileSink>,
    // Same Arc as `standard` when both tiers share one file.
    error: Arc<FileSink>,
}

pub struct SeverityLogger {
    default_format: LineFormat,
    init_lock: Mutex<()>,
    state: OnceLock<LoggerState>,
    shut_down: AtomicBool,
}

/// Outcome of [`SeverityLogger::shutdown`].
#[derive(Debug, Default)]
pub struct ShutdownReport {
    pub closed: Vec<PathBuf>,
    pub failures: Vec<String>,
}

impl ShutdownReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Default for SeverityLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl SeverityLogger {
    pub fn new() -> Self {
        Self {
            default_format: LineFormat::Raw,
            init_lock: Mutex::new(()),
            state: OnceLock::new(),
            shut_down: AtomicBool::new(false),
        }
    }

    /// Line format used by `initialize`. Ignored once initialised.
    pub fn with_line_format(mut self, format: LineFormat) -> Self {
        self.default_format = format;
        self
    }

    /// Create the directory and both files, emit the bootstrap trace line and
    /// store the resolved paths. Runs once; every later or concurrent call
    /// waits for the first to finish and returns the same paths.
    pub fn initialize(
        &self,
        directory: impl AsRef<Path>,
        log_name: &str,
        error_name: &str,
    ) -> LogResult<&LogPaths> {
        self.init_once(directory.as_ref(), log_name, error_name, self.default_format)
    }

    pub fn initialize_from_config(&self, config: &LoggerConfig) -> LogResult<&LogPaths> {
        if let Some(state) = self.state.get() {
            return Ok(&state.paths);
        }
        config.validate()?;
        self.init_once(
            Path::new(&config.directory),
            &config.log_name,
            &config.error_name,
            config.line_format,
        )
    }

    /// Like `initialize`, but a failure terminates the process: without a
    /// log sink nothing after startup can report errors.
    pub fn initialize_or_exit(
        &self,
        directory: impl AsRef<Path>,
        log_name: &str,
        error_name: &str,
    ) -> &LogPaths {
        match self.initialize(directory, log_name, error_name) {
            Ok(paths) => paths,
            Err(e) => {
                error!("Logger initialisation failed: {}", e);
                eprintln!("Failed to initialise logger: {e}");
                std::process::exit(1);
            }
        }
    }

    fn init_once(
        &self,
        directory: &Path,
        log_name: &str,
        error_name: &str,
        line_format: LineFormat,
    ) -> LogResult<&LogPaths> {
        if let Some(state) = self.state.get() {
            debug!("Logger already initialised, skipping setup");
            return Ok(&state.paths);
        }

        let _guard = self.init_lock.safe_lock("logger_init")?;
        if let Some(state) = self.state.get() {
            return Ok(&state.paths);
        }

        let paths = LogPaths::for_today(directory, log_name, error_name)?;
        create_log_dir(directory)?;

        let standard = Arc::new(FileSink::open(&paths.standard)?);
        let error = if paths.is_shared() {
            Arc::clone(&standard)
        } else {
            Arc::new(FileSink::open(&paths.error)?)
        };

        // Written before the state is published so no caller can observe an
        // initialised logger whose bootstrap line is missing.
        let bootstrap = LogEvent::os(std::process::id().to_string(), BOOTSTRAP_MESSAGE);
        standard.append_line(&bootstrap.to_csv_line(Severity::Trace, Utc::now(), line_format))?;

        let state = self.state.get_or_init(|| LoggerState {
            paths,
            line_format,
            standard,
            error,
        });
        info!(
            "Logger initialised: standard={}, error={}",
            state.paths.standard.display(),
            state.paths.error.display()
        );

        Ok(&state.paths)
    }

    /// Append one line for `event` to the file its severity routes to.
    pub fn log(&self, severity: Severity, event: &LogEvent) -> LogResult<()> {
        let state = self.state.get().ok_or(LogError::NotInitialized)?;
        let sink = if severity.is_error_tier() {
            &state.error
        } else {
            &state.standard
        };

        let line = event.to_csv_line(severity, Utc::now(), state.line_format);
        sink.append_line(&line).map_err(|e| {
            warn!("Dropped {} log line: {}", severity, e);
            e
        })
    }

    pub fn paths(&self) -> Option<&LogPaths> {
        self.state.get().map(|s| &s.paths)
    }

    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    pub fn line_format(&self) -> LineFormat {
        self.state
            .get()
            .map(|s| s.line_format)
            .unwrap_or(self.default_format)
    }

    /// Close both files. Failures are reported, never raised. Only the first
    /// call does any work; logging afterwards returns `LogError::Closed`.
    pub fn shutdown(&self) -> ShutdownReport {
        let mut report = ShutdownReport::default();
        let Some(state) = self.state.get() else {
            return report;
        };
        if self.shut_down.swap(true, Ordering::SeqCst) {
            return report;
        }

        let mut sinks = vec![&state.standard];
        if !Arc::ptr_eq(&state.standard, &state.error) {
            sinks.push(&state.error);
        }

        for sink in sinks {
            match sink.close() {
                Ok(()) => report.closed.push(sink.path().to_path_buf()),
                Err(e) => {
                    error!("Error while closing {}: {}", sink.path().display(), e);
                    report.failures.push(e.to_string());
                }
            }
        }

        report
    }
}

fn create_log_dir(directory: &Path) -> LogResult<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
        .create(directory)
        .map_err(|e| LogError::io("creating log directory", directory, e))
}

lazy_static! {
    static ref GLOBAL_LOGGER: SeverityLogger = SeverityLogger::new();
}

/// The process-wide logger instance.
pub fn global() -> &'static SeverityLogger {
    &GLOBAL_LOGGER
}

pub fn init_global(
    directory: impl AsRef<Path>,
    log_name: &str,
    error_name: &str,
) -> LogResult<&'static LogPaths> {
    global().initialize(directory, log_name, error_name)
}

pub fn log_global(severity: Severity, event: &LogEvent) -> LogResult<()> {
    global().log(severity, event)
}

pub fn shutdown_global() -> ShutdownReport {
    global().shutdown()
}
