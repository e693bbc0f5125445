//! Single-writer lock around appends, held as an exclusively created file.

use crate::errors::{AppError, AppResult};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

const RETRY_INTERVAL: Duration = Duration::from_millis(50);

/// Removes the lock file when dropped.
#[derive(Debug)]
pub struct WriterLock {
    path: PathBuf,
}

impl WriterLock {
    /// Wait up to `timeout` for the lock file to be free, then create it.
    ///
    /// Failing to create the lock file is a write failure of the data file.
    pub fn acquire(path: &Path, timeout: Duration) -> AppResult<Self> {
        let started = Instant::now();
        let write_err = |source: io::Error| AppError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        loop {
            match OpenOptions::new().write(true).create_new(true).open(path) {
                Ok(mut f) => {
                    let lock = Self {
                        path: path.to_path_buf(),
                    };
                    // Owner pid, to help diagnose a stale lock by hand.
                    // On failure `lock` drops and removes the file.
                    let written = writeln!(f, "{}", std::process::id());
                    drop(f);
                    written.map_err(write_err)?;
                    return Ok(lock);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    if started.elapsed() >= timeout {
                        return Err(AppError::Locked(path.to_path_buf()));
                    }
                    thread::sleep(RETRY_INTERVAL);
                }
                Err(e) => return Err(write_err(e)),
            }
        }
    }
}

impl Drop for WriterLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
