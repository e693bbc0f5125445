use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{cli_add, rmi, setup_data_file, temp_out};

const LATHE: [&str; 14] = [
    "--date",
    "2025-01-10",
    "--category",
    "Mechanical",
    "--equipment",
    "Lathe #2",
    "--task",
    "Replace belt",
    "--technician",
    "Ana",
    "--status",
    "Pending",
    "--priority",
    "High",
];

fn seed(data: &str) {
    cli_add(data, &LATHE);
    cli_add(
        data,
        &[
            "--date",
            "2025-01-12",
            "--category",
            "electrical",
            "--equipment",
            "Panel A",
            "--technician",
            "Luis",
            "--status",
            "completed",
            "--priority",
            "low",
            "--notes",
            "fuse swapped",
        ],
    );
    cli_add(
        data,
        &[
            "--date",
            "2025-01-10",
            "--category",
            "Hydraulics",
            "--equipment",
            "Press 3",
            "--technician",
            "Eva",
            "--status",
            "in progress",
            "--priority",
            "Medium",
        ],
    );
}

#[test]
fn test_init_creates_header_only_file() {
    let data = setup_data_file("cli_init");
    let data_s = data.to_string_lossy().to_string();

    rmi()
        .args(["--file", &data_s, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Data file created"));

    let content = fs::read_to_string(&data).unwrap();
    assert_eq!(
        content.trim_end(),
        "Date,Category,Equipment,Task,Technician,Status,Priority,Notes"
    );

    // second init keeps existing data
    cli_add(&data_s, &LATHE);
    rmi()
        .args(["--file", &data_s, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("left untouched"));
    assert!(fs::read_to_string(&data).unwrap().contains("Lathe #2"));
}

#[test]
fn test_add_then_list() {
    let data = setup_data_file("cli_add_list");
    let data_s = data.to_string_lossy().to_string();

    rmi()
        .args(["--file", &data_s, "add"])
        .args(LATHE)
        .assert()
        .success()
        .stdout(contains("Record saved (1 total)"));

    rmi()
        .args(["--file", &data_s, "list"])
        .assert()
        .success()
        .stdout(contains("Lathe #2"))
        .stdout(contains("Replace belt"))
        .stdout(contains("Pending"))
        .stdout(contains("1 of 1 record(s) shown."));
}

#[test]
fn test_add_defaults_date_to_today() {
    let data = setup_data_file("cli_add_today");
    let data_s = data.to_string_lossy().to_string();

    cli_add(
        &data_s,
        &["--category", "Other", "--status", "Pending", "--priority", "Low"],
    );

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let content = fs::read_to_string(&data).unwrap();
    assert!(content.contains(&format!("{today},Other,,,,Pending,Low,")));
}

#[test]
fn test_add_rejects_out_of_enum_values() {
    let data = setup_data_file("cli_add_invalid");
    let data_s = data.to_string_lossy().to_string();

    rmi()
        .args([
            "--file",
            &data_s,
            "add",
            "--category",
            "Mechanical",
            "--status",
            "Done",
            "--priority",
            "High",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid status"));

    rmi()
        .args([
            "--file",
            &data_s,
            "add",
            "--date",
            "10/01/2025",
            "--category",
            "Mechanical",
            "--status",
            "Pending",
            "--priority",
            "High",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    assert!(!data.exists());
}

#[test]
fn test_list_filters() {
    let data = setup_data_file("cli_list_filter");
    let data_s = data.to_string_lossy().to_string();
    seed(&data_s);

    rmi()
        .args(["--file", &data_s, "list", "--status", "pending", "-s", "In Progress"])
        .assert()
        .success()
        .stdout(contains("Lathe #2"))
        .stdout(contains("Press 3"))
        .stdout(contains("Panel A").not())
        .stdout(contains("2 of 3 record(s) shown."));

    rmi()
        .args(["--file", &data_s, "list", "--technician", "Nobody"])
        .assert()
        .success()
        .stdout(contains("No records match"))
        .stdout(contains("Technician: Ana, Luis, Eva"));

    rmi()
        .args(["--file", &data_s, "list", "--priority", "Urgent"])
        .assert()
        .failure()
        .stderr(contains("Invalid priority"));
}

#[test]
fn test_dashboard_empty_and_seeded() {
    let data = setup_data_file("cli_dashboard");
    let data_s = data.to_string_lossy().to_string();

    rmi()
        .args(["--file", &data_s, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Total Tasks"))
        .stdout(contains("No data available yet."));

    seed(&data_s);

    rmi()
        .args(["--file", &data_s, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Status Distribution"))
        .stdout(contains("Tasks per Category"))
        .stdout(contains("Tasks per Technician"))
        .stdout(contains("Hydraulics"))
        .stdout(contains("Luis"));
}

#[test]
fn test_analytics() {
    let data = setup_data_file("cli_analytics");
    let data_s = data.to_string_lossy().to_string();

    rmi()
        .args(["--file", &data_s, "analytics"])
        .assert()
        .success()
        .stdout(contains("No data available for analytics."));

    seed(&data_s);

    rmi()
        .args(["--file", &data_s, "analytics"])
        .assert()
        .success()
        .stdout(contains("Task Completion Over Time"))
        .stdout(contains("2025-01-10"))
        .stdout(contains("2025-01-12"))
        .stdout(contains("Pending Tasks by Priority"))
        .stdout(contains("Press 3"))
        .stdout(contains("fuse swapped").not());
}

#[test]
fn test_export_csv_and_json() {
    let data = setup_data_file("cli_export");
    let data_s = data.to_string_lossy().to_string();
    seed(&data_s);

    let csv_out = temp_out(&data, "export.csv");
    rmi()
        .args([
            "--file",
            &data_s,
            "export",
            "--format",
            "csv",
            "--out",
            &csv_out.to_string_lossy(),
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed: 3 record(s)"));

    let content = fs::read_to_string(&csv_out).unwrap();
    assert!(content.starts_with("Date,Category,Equipment,Task,Technician,Status,Priority,Notes"));
    assert!(content.contains("2025-01-10,Hydraulics,Press 3,,Eva,In Progress,Medium,"));

    let json_out = temp_out(&data, "export.json");
    rmi()
        .args([
            "--file",
            &data_s,
            "export",
            "--format",
            "json",
            "--out",
            &json_out.to_string_lossy(),
            "--status",
            "Completed",
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Equipment"], "Panel A");
    assert_eq!(rows[0]["Date"], "2025-01-12");
}

#[test]
fn test_backup_plain_and_compressed() {
    let data = setup_data_file("cli_backup");
    let data_s = data.to_string_lossy().to_string();
    seed(&data_s);

    let plain = temp_out(&data, "backup.csv");
    rmi()
        .args(["--file", &data_s, "backup", "--out", &plain.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert_eq!(
        fs::read_to_string(&plain).unwrap(),
        fs::read_to_string(&data).unwrap()
    );

    let packed = temp_out(&data, "packed.csv");
    rmi()
        .args([
            "--file",
            &data_s,
            "backup",
            "--out",
            &packed.to_string_lossy(),
            "--compress",
        ])
        .assert()
        .success();
    assert!(packed.with_extension("zip").exists());
    assert!(!packed.exists());
}

#[test]
fn test_backup_compress_to_zip_name_keeps_archive() {
    let data = setup_data_file("cli_backup_zip");
    let data_s = data.to_string_lossy().to_string();
    seed(&data_s);

    let zipped = temp_out(&data, "backup.zip");
    rmi()
        .args([
            "--file",
            &data_s,
            "backup",
            "--out",
            &zipped.to_string_lossy(),
            "--compress",
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let bytes = fs::read(&zipped).expect("zip kept");
    assert!(bytes.starts_with(b"PK"));
    assert!(bytes.len() > 100, "archive holds the data file");
    assert!(!data.with_file_name("backup.csv").exists());
}

#[test]
fn test_relative_file_is_the_same_for_init_and_add() {
    let data = setup_data_file("cli_relative");
    let dir = data.parent().unwrap().to_path_buf();

    rmi()
        .current_dir(&dir)
        .args(["--file", "shop.csv", "--test", "init"])
        .assert()
        .success();
    assert!(dir.join("shop.csv").exists());

    rmi()
        .current_dir(&dir)
        .args(["--file", "shop.csv", "add"])
        .args(LATHE)
        .assert()
        .success();

    let content = fs::read_to_string(dir.join("shop.csv")).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("Lathe #2"));
}

#[test]
fn test_log_print_lists_operations() {
    let data = setup_data_file("cli_log");
    let data_s = data.to_string_lossy().to_string();

    rmi()
        .args(["--file", &data_s, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log is empty"));

    rmi()
        .args(["--file", &data_s, "--test", "init"])
        .assert()
        .success();
    cli_add(&data_s, &LATHE);

    rmi()
        .args(["--file", &data_s, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("Lathe #2"))
        .stdout(contains("Mechanical / Pending / High (Ana)"));
}
