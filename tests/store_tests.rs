mod common;
use common::{day, lathe_belt, record, setup_data_file};
use rmaintlog::core::backup::BackupLogic;
use rmaintlog::errors::AppError;
use rmaintlog::models::{Category, Field, MaintenanceRecord, Priority, Status};
use rmaintlog::store::csv_file::temp_path_for;
use rmaintlog::store::journal::Journal;
use rmaintlog::store::{self, RecordStore};
use std::fs;
use std::time::Duration;

const HEADER: &str = "Date,Category,Equipment,Task,Technician,Status,Priority,Notes";

#[test]
fn test_load_missing_file_is_empty_with_schema() {
    let path = setup_data_file("load_missing");

    let log = store::load(&path).expect("load missing file");

    assert!(log.is_empty());
    assert_eq!(
        log.columns()
            .iter()
            .map(Field::header)
            .collect::<Vec<_>>(),
        vec![
            "Date",
            "Category",
            "Equipment",
            "Task",
            "Technician",
            "Status",
            "Priority",
            "Notes"
        ]
    );
    assert!(!path.exists(), "load must not create the file");
}

#[test]
fn test_zero_byte_file_is_empty_log() {
    let path = setup_data_file("zero_byte");
    fs::write(&path, "").unwrap();

    assert!(store::load(&path).unwrap().is_empty());
}

#[test]
fn test_first_append_scenario() {
    let path = setup_data_file("first_append");
    let mut st = RecordStore::open(&path).unwrap();
    assert!(st.log().is_empty());

    st.append(lathe_belt()).expect("append");

    let reloaded = store::load(&path).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.records()[0], lathe_belt());
    assert_eq!(st.log(), &reloaded);

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some(HEADER));
    assert_eq!(
        lines.next(),
        Some("2025-01-10,Mechanical,Lathe #2,Replace belt,Ana,Pending,High,")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn test_append_preserves_order_and_round_trips() {
    let path = setup_data_file("append_order");
    let mut st = RecordStore::open(&path).unwrap();

    let r1 = record(day(2025, 3, 2), Category::Electrical, "Luis", Status::Completed, Priority::Low);
    let r2 = record(day(2025, 2, 1), Category::Hydraulics, "Ana", Status::InProgress, Priority::Medium);

    st.append(lathe_belt()).unwrap();
    st.append(r1.clone()).unwrap();
    st.append(r2.clone()).unwrap();
    // duplicates are allowed
    st.append(r2.clone()).unwrap();

    let records = st.log().records();
    assert_eq!(records.len(), 4);
    assert_eq!(&records[1..3], &[r1, r2.clone()]);
    assert_eq!(records[3], r2);

    let reloaded = store::load(&path).unwrap();
    assert_eq!(&reloaded, st.log());
}

#[test]
fn test_in_progress_and_quoted_text_survive_round_trip() {
    let path = setup_data_file("quoting");
    let mut st = RecordStore::open(&path).unwrap();

    let r = MaintenanceRecord::new(
        Some(day(2025, 5, 5)),
        Category::Other,
        "Forklift, yard",
        "Check \"mast\" chain",
        "",
        Status::InProgress,
        Priority::Medium,
        "line one\nline two",
    );
    st.append(r.clone()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("In Progress"));

    assert_eq!(store::load(&path).unwrap().records(), &[r]);
}

#[test]
fn test_append_rereads_persisted_state() {
    let path = setup_data_file("reread");
    let mut first = RecordStore::open(&path).unwrap();
    let mut second = RecordStore::open(&path).unwrap();

    first.append(lathe_belt()).unwrap();
    let other = record(day(2025, 1, 11), Category::Logistics, "Eva", Status::Pending, Priority::Low);
    second.append(other.clone()).unwrap();

    // the second writer kept the first writer's row
    assert_eq!(second.log().records(), &[lathe_belt(), other]);

    let reopened = RecordStore::open(&path).unwrap();
    assert_eq!(reopened.log(), second.log());
}

#[test]
fn test_failed_write_leaves_log_and_file_untouched() {
    let path = setup_data_file("failed_write");
    let mut st = RecordStore::open(&path).unwrap();
    st.append(lathe_belt()).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    // a directory where the temp snapshot should go makes the write fail
    let tmp = temp_path_for(&path);
    fs::create_dir_all(&tmp).unwrap();

    let err = st
        .append(record(day(2025, 1, 12), Category::Other, "Ana", Status::Pending, Priority::Low))
        .unwrap_err();
    fs::remove_dir_all(&tmp).unwrap();

    assert!(matches!(err, AppError::Write { .. }), "got {err:?}");
    assert_eq!(st.log().len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    assert!(!st.lock_path().exists(), "lock must be released");
}

#[test]
fn test_lock_creation_failure_is_a_write_error() {
    let path = setup_data_file("lock_failure");
    let mut st = RecordStore::open(&path).unwrap();

    // the data directory turns into a regular file
    let dir = path.parent().unwrap();
    fs::remove_dir_all(dir).unwrap();
    fs::write(dir, "not a directory").unwrap();

    let err = st.append(lathe_belt()).unwrap_err();
    fs::remove_file(dir).unwrap();

    assert!(matches!(err, AppError::Write { .. }), "got {err:?}");
    assert!(st.log().is_empty());
}

#[test]
fn test_backup_waits_for_the_writer_lock() {
    let path = setup_data_file("backup_lock");
    let mut st = RecordStore::open(&path)
        .unwrap()
        .with_lock_timeout(Duration::from_millis(120));
    st.append(lathe_belt()).unwrap();

    fs::write(st.lock_path(), "4242\n").unwrap();
    let dest = path.with_file_name("copy.csv");
    let err = BackupLogic::backup(&st, &dest, false, true).unwrap_err();
    assert!(matches!(err, AppError::Locked(_)), "got {err:?}");
    assert!(!dest.exists());

    fs::remove_file(st.lock_path()).unwrap();
    let written = BackupLogic::backup(&st, &dest, false, true).unwrap();
    assert_eq!(written.as_deref(), Some(dest.as_path()));
    assert_eq!(fs::read(&dest).unwrap(), fs::read(&path).unwrap());
}

#[test]
fn test_held_lock_times_out() {
    let path = setup_data_file("held_lock");
    let mut st = RecordStore::open(&path)
        .unwrap()
        .with_lock_timeout(Duration::from_millis(120));

    fs::write(st.lock_path(), "4242\n").unwrap();

    let err = st.append(lathe_belt()).unwrap_err();
    assert!(matches!(err, AppError::Locked(_)), "got {err:?}");
    assert!(st.log().is_empty());
    assert!(!path.exists());

    fs::remove_file(st.lock_path()).unwrap();
    st.append(lathe_belt()).unwrap();
    assert_eq!(st.log().len(), 1);
}

#[test]
fn test_reordered_header_loads_and_is_rewritten_canonically() {
    let path = setup_data_file("reordered");
    fs::write(
        &path,
        "Status,Date,Priority,Category,Notes,Technician,Task,Equipment\n\
         Completed,2025-01-10,Low,Electrical,ok,Luis,Swap fuse,Panel A\n",
    )
    .unwrap();

    let mut st = RecordStore::open(&path).unwrap();
    let r = &st.log().records()[0];
    assert_eq!(r.status, Status::Completed);
    assert_eq!(r.category, Category::Electrical);
    assert_eq!(r.equipment, "Panel A");
    assert_eq!(r.task, "Swap fuse");

    st.append(lathe_belt()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(HEADER));
    assert!(content.contains("2025-01-10,Electrical,Panel A,Swap fuse,Luis,Completed,Low,ok"));
}

#[test]
fn test_missing_column_fails_fast() {
    let path = setup_data_file("missing_column");
    fs::write(
        &path,
        "Date,Category,Equipment,Task,Technician,Status,Priority\n\
         2025-01-10,Mechanical,Lathe,Belt,Ana,Pending,High\n",
    )
    .unwrap();

    match store::load(&path) {
        Err(AppError::Schema { reason, .. }) => assert!(reason.contains("Notes"), "{reason}"),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_unknown_column_fails_fast() {
    let path = setup_data_file("unknown_column");
    fs::write(&path, format!("{HEADER},Cost\n")).unwrap();

    assert!(matches!(store::load(&path), Err(AppError::Schema { .. })));
}

#[test]
fn test_out_of_enum_value_is_rejected_with_row() {
    let path = setup_data_file("bad_status");
    fs::write(
        &path,
        format!(
            "{HEADER}\n\
             2025-01-10,Mechanical,Lathe,Belt,Ana,Pending,High,\n\
             2025-01-11,Mechanical,Lathe,Belt,Ana,Done,High,\n"
        ),
    )
    .unwrap();

    match store::load(&path) {
        Err(AppError::InvalidRow { row, reason }) => {
            assert_eq!(row, 2);
            assert!(reason.contains("Done"), "{reason}");
        }
        other => panic!("expected invalid row, got {other:?}"),
    }
}

#[test]
fn test_timestamp_dates_are_normalized() {
    let path = setup_data_file("timestamps");
    fs::write(
        &path,
        format!(
            "{HEADER}\n\
             2025-01-10 00:00:00,Mechanical,Lathe,Belt,Ana,Pending,High,\n\
             2025-01-12T14:30:00,Other,,,,Completed,Low,\n"
        ),
    )
    .unwrap();

    let log = store::load(&path).unwrap();
    assert_eq!(log.records()[0].date, day(2025, 1, 10));
    assert_eq!(log.records()[1].date, day(2025, 1, 12));
}

#[test]
fn test_journal_appends_entries_in_order() {
    let path = setup_data_file("journal");
    let journal = Journal::beside(&path);
    assert!(journal.entries().unwrap().is_empty());

    journal.write("init", "a", "first").unwrap();
    journal.write("add", "b", "second").unwrap();

    let entries = journal.entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operation, "init");
    assert_eq!(entries[1].message, "second");
    assert!(journal.path().ends_with("maintenance_log.journal.csv"));
}
