//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The data file could not be rewritten; nothing was persisted.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Data file is locked by another writer: {}", .0.display())]
    Locked(PathBuf),

    // ---------------------------
    // Schema / parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid category: {0} (expected Mechanical, Electrical, Hydraulics, Logistics or Other)")]
    InvalidCategory(String),

    #[error("Invalid status: {0} (expected Pending, In Progress or Completed)")]
    InvalidStatus(String),

    #[error("Invalid priority: {0} (expected High, Medium or Low)")]
    InvalidPriority(String),

    #[error("Schema mismatch in {}: {reason}", path.display())]
    Schema { path: PathBuf, reason: String },

    #[error("Row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
