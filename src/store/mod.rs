//! Maintenance record store: the only owner of the in-memory log and of the
//! data file.

pub mod csv_file;
pub mod journal;
pub mod lock;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{MaintenanceLog, MaintenanceRecord};
use crate::utils::path::sibling_with_suffix;
use journal::Journal;
use lock::WriterLock;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use csv_file::read_log as load;

const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_millis(2000);

pub struct RecordStore {
    path: PathBuf,
    lock_timeout: Duration,
    log: MaintenanceLog,
}

impl RecordStore {
    /// Open the store and load the whole log into memory.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let log = load(&path)?;
        Ok(Self {
            path,
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
            log,
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self::open(cfg.data_path())?
            .with_lock_timeout(Duration::from_millis(cfg.lock_timeout_ms)))
    }

    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn log(&self) -> &MaintenanceLog {
        &self.log
    }

    pub fn lock_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, "lock")
    }

    pub fn journal(&self) -> Journal {
        Journal::beside(&self.path)
    }

    /// Take the writer lock, waiting up to the configured timeout.
    pub fn lock(&self) -> AppResult<WriterLock> {
        WriterLock::acquire(&self.lock_path(), self.lock_timeout)
    }

    /// Append one record and persist the full log.
    ///
    /// Runs as a single transaction under the writer lock: the persisted
    /// state is re-read, the record is appended, and the file is replaced
    /// atomically. The in-memory log only changes once the file is durable,
    /// so a failed write leaves both untouched.
    pub fn append(&mut self, record: MaintenanceRecord) -> AppResult<()> {
        let _lock = self.lock()?;

        let mut next = load(&self.path)?;
        next.push(record);

        csv_file::write_log_atomic(&self.path, &next)?;
        self.log = next;
        Ok(())
    }
}
