#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rmaintlog::models::{Category, MaintenanceRecord, Priority, Status};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with HOME pointed at a scratch dir so no real config is read.
pub fn rmi() -> Command {
    let home = env::temp_dir().join("rmaintlog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rmaintlog");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Unique data file path inside the system temp dir, with any leftovers
/// (data, journal, lock) removed.
pub fn setup_data_file(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("rmaintlog_{name}"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create test dir");
    dir.join("maintenance_log.csv")
}

/// Temporary output file path next to the data file
pub fn temp_out(data_file: &PathBuf, name: &str) -> PathBuf {
    let p = data_file.with_file_name(name);
    fs::remove_file(&p).ok();
    p
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Record used across the store and CLI scenarios.
pub fn lathe_belt() -> MaintenanceRecord {
    MaintenanceRecord::new(
        Some(day(2025, 1, 10)),
        Category::Mechanical,
        "Lathe #2",
        "Replace belt",
        "Ana",
        Status::Pending,
        Priority::High,
        "",
    )
}

pub fn record(
    date: NaiveDate,
    category: Category,
    technician: &str,
    status: Status,
    priority: Priority,
) -> MaintenanceRecord {
    MaintenanceRecord::new(
        Some(date),
        category,
        "Press",
        "Inspect",
        technician,
        status,
        priority,
        "checked",
    )
}

/// Add a record through the CLI.
pub fn cli_add(data_file: &str, args: &[&str]) {
    rmi()
        .args(["--file", data_file, "add"])
        .args(args)
        .assert()
        .success();
}
