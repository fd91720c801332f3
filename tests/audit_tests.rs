use rreading::core::audit::render_audit;
use rreading::db::log::AuditRow;

fn row(id: i64, operation: &str, target: &str) -> AuditRow {
    AuditRow {
        id,
        date: "2024-01-10T10:00:00+01:00".into(),
        operation: operation.into(),
        target: target.into(),
        message: format!("{} done", operation),
    }
}

#[test]
fn test_init_rows_are_orange() {
    let lines = render_audit(&[row(1, "init", "Test Book")]);

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("\x1b[38;2;255;153;51minit"));
    assert!(lines[0].contains("(Test Book)"));
}

#[test]
fn test_ids_are_right_aligned() {
    let lines = render_audit(&[row(1, "add", "1000"), row(12, "migration_applied", "")]);

    assert!(lines[0].starts_with(" 1: "));
    assert!(lines[1].starts_with("12: "));
    assert!(lines[0].ends_with("=> add done"));
    assert!(lines[1].ends_with("=> migration_applied done"));
}
