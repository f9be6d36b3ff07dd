//! Library root for the `sevlog` crate
//! Severity-routed CSV logging into date-partitioned standard and error files

// Core error handling
pub mod errors;

// Event model
pub mod log_event;
pub mod taxonomy;

// File naming & writing
pub mod log_paths;
pub mod log_sink;

// Logger lifecycle
pub mod logger;

// Configuration & CLI
pub mod cli;
pub mod config;


pub use errors::{LogError, LogResult};
pub use log_event::{LineFormat, LogEvent};
pub use log_paths::LogPaths;
pub use logger::{global, init_global, log_global, shutdown_global, SeverityLogger, ShutdownReport};
pub use taxonomy::{process_kind_display_string, severity_display_string, ProcessKind, Severity};
