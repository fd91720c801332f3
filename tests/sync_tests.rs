use rreading::config::Config;
use rreading::core::sync::{Synchronizer, sync_store};
use rreading::core::{Logger, Notebook};
use rreading::db::Recorder;
use rreading::errors::AppError;
use rreading::models::{ErrataEntry, LogEntry, NoteEntry};

mod common;
use common::setup_test_dir;

fn seeded_config(name: &str) -> Config {
    let base = setup_test_dir(name);
    let cfg = Config::new(&base, "Book", "book.pdf", 100);

    let mut logger = Logger::open(cfg.log_path()).expect("open log");
    logger.add_complete("Book", 1000, 2000, 1, 10).expect("add");
    logger.start_session("Book", 3000, 10).expect("start");
    logger.close().expect("close");

    let mut notes: Notebook<NoteEntry> = Notebook::open(cfg.note_path()).expect("open notes");
    notes
        .add_at(
            500,
            &NoteEntry {
                book: "Book".into(),
                chapter: 1,
                subject: "intro".into(),
                content: "short".into(),
            },
        )
        .expect("add note");
    notes.close().expect("close");

    Notebook::<ErrataEntry>::open(cfg.errata_path())
        .expect("open errata")
        .close()
        .expect("close");

    cfg
}

#[test]
fn test_sync_copies_only_missing_keys() {
    let base = setup_test_dir("sync_store_src");
    let dst_dir = setup_test_dir("sync_store_dst");

    let mut src: Recorder<LogEntry> = Recorder::open(base.join(".log")).expect("src");
    src.set("1", &LogEntry::temporary("Book", 1, 1)).expect("set");
    src.set("2", &LogEntry::temporary("Book", 2, 1)).expect("set");
    src.commit().expect("commit");

    let mut dst: Recorder<LogEntry> = Recorder::open(dst_dir.join(".log")).expect("dst");
    // an existing destination record is never overwritten
    dst.set("2", &LogEntry::temporary("Book", 2, 7)).expect("set");
    dst.commit().expect("commit");

    let moved = sync_store(&src, &mut dst).expect("sync");
    assert_eq!(moved, vec!["1"]);
    assert_eq!(dst.get("2").expect("get").map(|e| e.start_page), Some(7));

    let again = sync_store(&src, &mut dst).expect("sync again");
    assert!(again.is_empty());
}

#[test]
fn test_synchronizer_is_idempotent() {
    let cfg = seeded_config("sync_idem_src");
    let dst = setup_test_dir("sync_idem_dst");

    let sync = Synchronizer::new(&cfg, &dst).expect("new");
    assert_eq!(sync.missing_files().len(), 3);

    let first = sync.run(|_| true).expect("first run");
    let counts: Vec<usize> = first.iter().map(|r| r.transferred.len()).collect();
    assert_eq!(counts, vec![2, 1, 0]);

    let second = sync.run(|_| panic!("nothing is missing now")).expect("second run");
    assert!(second.iter().all(|r| r.transferred.is_empty()));

    let logger = Logger::open(dst.join(".log")).expect("open copy");
    assert_eq!(logger.list_complete().expect("complete").len(), 1);
    assert_eq!(logger.list_temporary().expect("temporary").len(), 1);
}

#[test]
fn test_refusing_to_create_files_aborts() {
    let cfg = seeded_config("sync_abort_src");
    let dst = setup_test_dir("sync_abort_dst");

    let sync = Synchronizer::new(&cfg, &dst).expect("new");
    assert!(matches!(sync.run(|_| false), Err(AppError::Aborted(_))));
    assert!(!dst.join(".log").exists());
}

#[test]
fn test_destination_must_be_another_directory() {
    let cfg = seeded_config("sync_bad_dst");

    assert!(matches!(
        Synchronizer::new(&cfg, &cfg.base_dir.join("missing")),
        Err(AppError::NotADirectory(_))
    ));
    assert!(matches!(
        Synchronizer::new(&cfg, &cfg.base_dir),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_sync_copies_stored_text_verbatim() {
    let base = setup_test_dir("sync_raw_src");
    let dst_dir = setup_test_dir("sync_raw_dst");

    let extra = r#"{"book_name":"Book","start_time":5,"start_page":1,"shelf":"left"}"#;
    let broken = r#"{"not":"a log entry"}"#;

    let mut src: Recorder<LogEntry> = Recorder::open(base.join(".log")).expect("src");
    src.set_raw("5", extra).expect("set_raw");
    src.set_raw("6", broken).expect("set_raw");
    src.commit().expect("commit");

    let mut dst: Recorder<LogEntry> = Recorder::open(dst_dir.join(".log")).expect("dst");
    let moved = sync_store(&src, &mut dst).expect("sync");

    assert_eq!(moved, vec!["5", "6"]);
    assert_eq!(dst.get_raw("5").expect("get_raw").as_deref(), Some(extra));
    assert_eq!(dst.get_raw("6").expect("get_raw").as_deref(), Some(broken));
}
