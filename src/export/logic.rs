// src/export/logic.rs

use crate::core::query::{RecordFilter, filter};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::models::MaintenanceLog;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the (filtered) maintenance log.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the records of `log` accepted by `record_filter` to `path`.
    ///
    /// Nothing is written when no record matches.
    pub fn export(
        log: &MaintenanceLog,
        record_filter: &RecordFilter,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        let selected = filter(log, record_filter);

        if selected.is_empty() {
            warning("No records match the selected filters. Nothing to export.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(selected.records(), path)?,
            ExportFormat::Json => export_json(selected.records(), path)?,
        }

        Ok(())
    }
}
