use rreading::db::Recorder;
use rreading::errors::AppError;
use rreading::models::LogEntry;

mod common;
use common::test_store;

#[test]
fn test_committed_records_survive_reopen() {
    let path = test_store("recorder_commit", ".log");

    let mut rec: Recorder<LogEntry> = Recorder::open(&path).expect("open");
    let entry = LogEntry::completed("Book", 1000, 2000, 1, 20);
    rec.set("1000", &entry).expect("set");
    assert_eq!(rec.get("1000").expect("read own write"), Some(entry.clone()));
    rec.commit().expect("commit");
    assert_eq!(rec.get("1000").expect("read after commit"), Some(entry.clone()));
    rec.close().expect("close");

    let mut rec: Recorder<LogEntry> = Recorder::open(&path).expect("reopen");
    assert_eq!(rec.get("1000").expect("get"), Some(entry));
    assert!(rec.contains("1000").expect("contains"));
    rec.close().expect("close");
}

#[test]
fn test_close_without_commit_discards_changes() {
    let path = test_store("recorder_rollback", ".log");

    let mut rec: Recorder<LogEntry> = Recorder::open(&path).expect("open");
    rec.set("1000", &LogEntry::temporary("Book", 1000, 1))
        .expect("set");
    assert!(rec.contains("1000").expect("visible before commit"));
    rec.close().expect("close");

    let mut rec: Recorder<LogEntry> = Recorder::open(&path).expect("reopen");
    assert_eq!(rec.get("1000").expect("get"), None);
    rec.close().expect("close");
}

#[test]
fn test_drop_without_commit_discards_changes() {
    let path = test_store("recorder_drop", ".log");

    {
        let mut rec: Recorder<LogEntry> = Recorder::open(&path).expect("open");
        rec.set("1", &LogEntry::temporary("Book", 1, 1)).expect("set");
    }

    let rec: Recorder<LogEntry> = Recorder::open(&path).expect("reopen");
    assert!(rec.keys().expect("keys").is_empty());
}

#[test]
fn test_set_overwrites_and_keys_are_sorted() {
    let path = test_store("recorder_keys", ".log");

    let mut rec: Recorder<LogEntry> = Recorder::open(&path).expect("open");
    rec.set("b", &LogEntry::temporary("Book", 2, 1)).expect("set");
    rec.set("a", &LogEntry::temporary("Book", 1, 1)).expect("set");
    rec.set("b", &LogEntry::temporary("Book", 2, 5)).expect("overwrite");

    assert_eq!(rec.keys().expect("keys"), vec!["a", "b"]);
    assert_eq!(rec.get("b").expect("get").map(|e| e.start_page), Some(5));

    let temporary = rec.list_all(|_, e| e.start_page > 1).expect("list");
    assert_eq!(temporary.len(), 1);
    assert_eq!(temporary[0].0, "b");
}

#[test]
fn test_delete_missing_key_is_not_found() {
    let path = test_store("recorder_delete", ".log");

    let mut rec: Recorder<LogEntry> = Recorder::open(&path).expect("open");
    rec.set("1", &LogEntry::temporary("Book", 1, 1)).expect("set");
    rec.delete("1").expect("delete existing");

    match rec.delete("1") {
        Err(AppError::NotFound(_)) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_closed_store_rejects_operations() {
    let path = test_store("recorder_closed", ".log");

    let mut rec: Recorder<LogEntry> = Recorder::open(&path).expect("open");
    rec.close().expect("close");
    rec.close().expect("second close is a no-op");

    assert!(!rec.is_open());
    assert!(matches!(rec.get("1"), Err(AppError::StoreClosed(_))));
    assert!(matches!(rec.commit(), Err(AppError::StoreClosed(_))));
}

#[test]
fn test_audit_rows_follow_commits() {
    let path = test_store("recorder_audit", ".log");

    let mut rec: Recorder<LogEntry> = Recorder::open(&path).expect("open");
    rec.audit("add", "1", "first");
    rec.commit().expect("commit");
    rec.audit("add", "2", "discarded");
    rec.close().expect("close");

    let rec: Recorder<LogEntry> = Recorder::open(&path).expect("reopen");
    let trail = rec.audit_trail().expect("trail");
    let ours: Vec<_> = trail.iter().filter(|r| r.operation == "add").collect();
    assert_eq!(ours.len(), 1);
    assert_eq!(ours[0].message, "first");
    assert!(trail.iter().any(|r| r.operation == "migration_applied"));
}

#[test]
fn test_open_under_missing_directory_is_io_error() {
    let path = test_store("recorder_no_parent", ".log")
        .parent()
        .expect("parent")
        .join("missing")
        .join(".log");

    match Recorder::<LogEntry>::open(&path) {
        Err(AppError::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other.map(|_| ())),
    }
    assert!(!path.exists());
}

#[test]
fn test_raw_values_are_stored_verbatim() {
    let path = test_store("recorder_raw", ".log");

    let mut rec: Recorder<LogEntry> = Recorder::open(&path).expect("open");
    let json = r#"{"book_name":"Book","start_time":7,"start_page":1,"shelf":"left"}"#;
    rec.set_raw("7", json).expect("set_raw");

    assert_eq!(rec.get_raw("7").expect("get_raw").as_deref(), Some(json));
    // unknown fields are ignored when decoding
    assert_eq!(
        rec.get("7").expect("get"),
        Some(LogEntry::temporary("Book", 7, 1))
    );
}
