use chrono::NaiveDate;
use rreading::cli::commands::read::parse_read_args;
use rreading::core::plan::build_plan;
use rreading::core::viewer::{end_page_from_log, find_page};
use rreading::errors::AppError;
use rreading::utils::formatting::preview;
use std::fs;
use std::path::Path;

mod common;
use common::setup_test_dir;

#[test]
fn test_plan_splits_pages_per_day() {
    let day = NaiveDate::from_ymd_opt(2024, 1, 30).expect("date");
    let plan = build_plan(day, 1, 40, 18).expect("plan");

    let lines: Vec<String> = plan.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "2024-01-30 1 - 18",
            "2024-01-31 19 - 36",
            "2024-02-01 37 - 40",
        ]
    );
}

#[test]
fn test_plan_edge_cases() {
    let day = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");

    assert!(build_plan(day, 41, 40, 18).expect("plan").is_empty());
    assert_eq!(build_plan(day, 40, 40, 18).expect("plan").len(), 1);
    assert!(matches!(
        build_plan(day, 1, 40, 0),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_plan_with_extreme_page_numbers() {
    let day = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");

    let plan = build_plan(day, 1, 40, i64::MAX).expect("huge per day");
    assert_eq!(plan.len(), 1);
    assert_eq!((plan[0].first_page, plan[0].last_page), (1, 40));

    let plan = build_plan(day, i64::MAX - 1, i64::MAX, 18).expect("last pages");
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].last_page, i64::MAX);

    assert!(matches!(
        build_plan(day, 1, i64::MAX, 1),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        build_plan(day, i64::MIN, i64::MAX, 18),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_find_page_handles_spaces_in_paths() {
    let content = "/books/other.pdf 3\n/books/my book.pdf 57\n";

    assert_eq!(find_page(content, Path::new("/books/my book.pdf")), Some(57));
    assert_eq!(find_page(content, Path::new("/books/other.pdf")), Some(3));
    assert_eq!(find_page(content, Path::new("/books/none.pdf")), None);
}

#[test]
fn test_end_page_from_log_applies_page_offset() {
    let dir = setup_test_dir("viewer_offset");
    let book = dir.join("book.pdf");
    fs::write(&book, b"%PDF").expect("book");
    let book = fs::canonicalize(&book).expect("canonical");

    let log = dir.join("viewer.log");
    fs::write(&log, format!("{} 30\n", book.display())).expect("log");

    assert_eq!(end_page_from_log(&log, &book, 0), Some(31));
    assert_eq!(end_page_from_log(&log, &book, 10), Some(21));
    assert_eq!(end_page_from_log(&dir.join("absent.log"), &book, 0), None);
}

#[test]
fn test_read_args_in_any_order() {
    let args = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    assert_eq!(parse_read_args(&args(&[])).expect("empty"), (None, true));
    assert_eq!(parse_read_args(&args(&["12"])).expect("page"), (Some(12), true));
    assert_eq!(
        parse_read_args(&args(&["nolog", "7"])).expect("both"),
        (Some(7), false)
    );
    assert!(parse_read_args(&args(&["abc"])).is_err());
    assert!(parse_read_args(&args(&["1", "2"])).is_err());
}

#[test]
fn test_preview_cuts_by_display_width() {
    assert_eq!(preview("short line", 80), "short line");
    assert_eq!(preview("first\nsecond", 80), "first …");
    assert_eq!(preview("日本語テキスト", 6), "日本語…");
}
