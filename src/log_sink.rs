// log_sink.rs
// Append-only destination file guarded by its own lock

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

use crate::errors::{LogError, LogResult, SafeLock};

/// FileSink owns one open log file. Each append takes the lock, writes the
/// whole line in one call and flushes before releasing it.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Open (creating if needed) the file in append mode. Existing content is
    /// never truncated. New files get mode 0644 on unix.
    pub fn open(path: &Path) -> LogResult<Self> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let file = options
            .open(path)
            .map_err(|e| LogError::io("opening log file", path, e))?;
        debug!("Opened log file {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(Some(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `line` plus a newline and flush it to the file.
    pub fn append_line(&self, line: &str) -> LogResult<()> {
        let mut record = String::with_capacity(line.len() + 1);
        record.push_str(line);
        record.push('\n');

        let mut guard = self.file.safe_lock("log_file")?;
        let file = guard.as_mut().ok_or_else(|| LogError::closed(&self.path))?;

        file.write_all(record.as_bytes())
            .map_err(|e| LogError::io("appending log line", &self.path, e))?;
        file.flush()
            .map_err(|e| LogError::io("flushing log file", &self.path, e))
    }

    pub fn is_open(&self) -> bool {
        self.file.lock().map(|f| f.is_some()).unwrap_or(false)
    }

    /// Sync and release the handle. Closing an already closed sink is Ok.
    pub fn close(&self) -> LogResult<()> {
        let taken = self.file.safe_lock("log_file")?.take();
        match taken {
            Some(file) => file
                .sync_all()
                .map_err(|e| LogError::io("syncing log file on close", &self.path, e)),
            None => Ok(()),
        }
    }
}
