//! Error handling for the severity logger
//!
//! Every fallible operation in the crate returns [`LogResult`]. Initialisation
//! failures are still plain values here; the fatal policy lives in
//! [`crate::logger::SeverityLogger::initialize_or_exit`].

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the logger
#[derive(Error, Debug)]
pub enum LogError {
    #[error("I/O operation failed: {operation} ({})", .path.display())]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger has not been initialised")]
    NotInitialized,

    #[error("Log file already closed: {}", .path.display())]
    Closed { path: PathBuf },

    #[error("Mutex lock failed: {resource}")]
    MutexPoisoned { resource: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result alias used across the crate
pub type LogResult<T> = Result<T, LogError>;

impl LogError {
    /// Create an I/O error tied to the file or directory it concerns
    pub fn io(operation: impl Into<String>, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a closed-sink error
    pub fn closed(path: &Path) -> Self {
        Self::Closed {
            path: path.to_path_buf(),
        }
    }

    /// Create a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Helper trait for mutex locking that reports poisoning instead of panicking
pub trait SafeLock<T: ?Sized> {
    fn safe_lock(&self, resource: &str) -> LogResult<std::sync::MutexGuard<'_, T>>;
}

impl<T: ?Sized> SafeLock<T> for std::sync::Mutex<T> {
    fn safe_lock(&self, resource: &str) -> LogResult<std::sync::MutexGuard<'_, T>> {
        self.lock().map_err(|_| LogError::MutexPoisoned {
            resource: resource.to_string(),
        })
    }
}

impl From<figment::Error> for LogError {
    fn from(err: figment::Error) -> Self {
        LogError::config(err.to_string())
    }
}
