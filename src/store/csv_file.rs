//! Flat-file persistence of the maintenance log.
//!
//! The file is a CSV with a header row and one row per record. Columns are
//! matched by name, so a reordered header still loads; missing, unknown or
//! duplicated columns are rejected.

use crate::errors::{AppError, AppResult};
use crate::models::{Field, MaintenanceLog, MaintenanceRecord};
use crate::utils::date::parse_calendar_date;
use csv::StringRecord;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Position of each canonical field inside the file's header.
type ColumnMap = [usize; Field::COUNT];

/// Read the whole log. A missing (or zero-byte) file is an empty log.
pub fn read_log(path: &Path) -> AppResult<MaintenanceLog> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(MaintenanceLog::new()),
        Err(e) => return Err(e.into()),
    };

    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(MaintenanceLog::new());
    }
    let columns = map_columns(path, &headers)?;

    let mut log = MaintenanceLog::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        log.push(parse_row(&row, &columns, i + 1)?);
    }

    Ok(log)
}

fn map_columns(path: &Path, headers: &StringRecord) -> AppResult<ColumnMap> {
    let schema_err = |reason: String| AppError::Schema {
        path: path.to_path_buf(),
        reason,
    };

    let mut found: [Option<usize>; Field::COUNT] = [None; Field::COUNT];

    for (pos, name) in headers.iter().enumerate() {
        let field = Field::from_header(name)
            .ok_or_else(|| schema_err(format!("unknown column '{name}'")))?;
        let slot = &mut found[field as usize];
        if slot.is_some() {
            return Err(schema_err(format!("duplicated column '{name}'")));
        }
        *slot = Some(pos);
    }

    let missing: Vec<&str> = Field::ALL
        .iter()
        .filter(|f| found[**f as usize].is_none())
        .map(Field::header)
        .collect();
    if !missing.is_empty() {
        return Err(schema_err(format!(
            "missing column(s): {}",
            missing.join(", ")
        )));
    }

    let mut map: ColumnMap = [0; Field::COUNT];
    for (slot, pos) in map.iter_mut().zip(found) {
        *slot = pos.unwrap_or_default();
    }
    Ok(map)
}

fn parse_row(row: &StringRecord, columns: &ColumnMap, n: usize) -> AppResult<MaintenanceRecord> {
    let cell = |f: Field| row.get(columns[f as usize]).unwrap_or("");
    let invalid = |e: AppError| AppError::InvalidRow {
        row: n,
        reason: e.to_string(),
    };

    let raw_date = cell(Field::Date);
    let date = parse_calendar_date(raw_date).ok_or_else(|| AppError::InvalidRow {
        row: n,
        reason: format!("invalid date '{raw_date}'"),
    })?;

    Ok(MaintenanceRecord {
        date,
        category: cell(Field::Category).parse().map_err(invalid)?,
        equipment: cell(Field::Equipment).to_string(),
        task: cell(Field::Task).to_string(),
        technician: cell(Field::Technician).to_string(),
        status: cell(Field::Status).parse().map_err(invalid)?,
        priority: cell(Field::Priority).parse().map_err(invalid)?,
        notes: cell(Field::Notes).to_string(),
    })
}

/// Temporary file used while rewriting `path`; lives in the same directory
/// so the final rename stays on one filesystem.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "maintenance_log.csv".to_string());
    path.with_file_name(format!(".{name}.tmp.{}", std::process::id()))
}

/// Replace the file at `path` with the full log in canonical column order.
///
/// On error the previous file content is left in place.
pub fn write_log_atomic(path: &Path, log: &MaintenanceLog) -> AppResult<()> {
    let write_err = |source: io::Error| AppError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp = temp_path_for(path);
    if let Err(e) = write_snapshot(&tmp, log) {
        // Leave no half-written snapshot behind; a directory in the way is not ours.
        if tmp.is_file() {
            let _ = fs::remove_file(&tmp);
        }
        return Err(write_err(e));
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

fn write_snapshot(tmp: &Path, log: &MaintenanceLog) -> io::Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(tmp)?;

    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(Field::headers()).map_err(io::Error::other)?;
    for record in log {
        wtr.write_record(record.to_row()).map_err(io::Error::other)?;
    }
    wtr.flush()?;

    let file = wtr.into_inner().map_err(|e| io::Error::other(e.to_string()))?;
    file.sync_all()
}

/// Write a header-only data file if none exists yet.
pub fn ensure_exists(path: &Path) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    write_log_atomic(path, &MaintenanceLog::new())?;
    Ok(true)
}
