// log_paths.rs
// Date-partitioned file naming for the standard and error logs

use chrono::{NaiveDate, Utc};
use std::path::{Path, PathBuf};

use crate::errors::{LogError, LogResult};

/// The two destination files resolved for one UTC day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    pub standard: PathBuf,
    pub error: PathBuf,
}

impl LogPaths {
    /// Resolve `<dir>/<YYYY-MM-DD>-<name>.csv` for both tiers. Names are used
    /// exactly as given. An empty error name reuses the standard name, so both
    /// tiers share one file.
    pub fn resolve(
        directory: &Path,
        log_name: &str,
        error_name: &str,
        date: NaiveDate,
    ) -> LogResult<Self> {
        if log_name.trim().is_empty() {
            return Err(LogError::validation("log_name", "standard log name cannot be empty"));
        }

        let error_name = if error_name.is_empty() {
            log_name
        } else {
            error_name
        };

        Ok(Self {
            standard: directory.join(file_name(date, log_name)),
            error: directory.join(file_name(date, error_name)),
        })
    }

    /// Resolve against the current UTC date.
    pub fn for_today(directory: &Path, log_name: &str, error_name: &str) -> LogResult<Self> {
        Self::resolve(directory, log_name, error_name, Utc::now().date_naive())
    }

    pub fn is_shared(&self) -> bool {
        self.standard == self.error
    }
}

pub fn file_name(date: NaiveDate, base_name: &str) -> String {
    format!("{}-{}.csv", date.format("%Y-%m-%d"), base_name)
}
