//! Internal journal of state-changing operations, kept beside the data file.

use crate::errors::AppResult;
use crate::utils::path::sibling_with_suffix;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Journal kept beside `data_file`: `<stem>.journal.csv`.
    pub fn beside(data_file: &Path) -> Self {
        Self::new(sibling_with_suffix(data_file, "journal.csv"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line; the timestamp is local time in RFC 3339.
    pub fn write(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        let needs_header = fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);

        wtr.serialize(JournalEntry {
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        })?;
        wtr.flush()?;
        Ok(())
    }

    /// All entries, oldest first. A missing journal is empty.
    pub fn entries(&self) -> AppResult<Vec<JournalEntry>> {
        let file = match fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut rdr = csv::Reader::from_reader(file);
        let mut out = Vec::new();
        for entry in rdr.deserialize() {
            out.push(entry?);
        }
        Ok(out)
    }
}
